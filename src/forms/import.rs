use actix_multipart::form::{MultipartForm, MultipartFormConfig, bytes::Bytes};
use actix_web::error::InternalError;
use actix_web_flash_messages::FlashMessage;

use crate::domain::import::ImportFile;
use crate::forms::FormError;
use crate::routes::redirect;

/// Largest spreadsheet accepted for relay.
pub const MAX_IMPORT_BYTES: usize = 10 * 1024 * 1024;

pub const FILE_TOO_LARGE: &str = "Arquivo excede o limite de 10 MB.";

#[derive(MultipartForm)]
pub struct ImportUploadForm {
    #[multipart(limit = "10MiB")]
    pub file: Option<Bytes>,
}

impl ImportUploadForm {
    /// The selected file; an empty file input counts as no selection.
    pub fn into_file(self) -> Result<ImportFile, FormError> {
        let file = self.file.ok_or(FormError::MissingFile)?;
        let file_name = file
            .file_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(FormError::MissingFile)?;
        if file.data.is_empty() {
            return Err(FormError::MissingFile);
        }

        Ok(ImportFile {
            file_name,
            content_type: file.content_type.map(|mime| mime.to_string()),
            bytes: file.data.to_vec(),
        })
    }
}

/// Keeps a whole spreadsheet in memory and sends rejected uploads back to
/// the import page with a warning instead of a bare 400.
pub fn upload_config() -> MultipartFormConfig {
    MultipartFormConfig::default()
        .memory_limit(MAX_IMPORT_BYTES)
        .total_limit(MAX_IMPORT_BYTES + 64 * 1024)
        .error_handler(|err, _req| {
            log::warn!("Rejected import upload: {err}");
            FlashMessage::warning(FILE_TOO_LARGE).send();
            InternalError::from_response(err, redirect("/importacao")).into()
        })
}
