use crate::backend::ImportRelay;
use crate::domain::import::{ImportFile, ImportKind};
use crate::services::{ServiceError, ServiceResult};
use crate::session::SessionContext;
use crate::view::import::ImportOutcome;

/// Relays one spreadsheet to the import endpoint of `kind`.
///
/// Backend failures other than an expired session become a failed outcome
/// rather than an error, so the page can report them next to the form.
pub async fn import_file<R>(
    backend: &R,
    session: &SessionContext<'_>,
    kind: ImportKind,
    file: ImportFile,
) -> ServiceResult<ImportOutcome>
where
    R: ImportRelay + ?Sized,
{
    let token = session.token()?;

    log::info!(
        "Relaying {} ({} bytes) to the {kind} import",
        file.file_name,
        file.bytes.len()
    );

    match session.guard(backend.import_file(&token, kind, file).await) {
        Ok(summary) => Ok(ImportOutcome::from(summary)),
        Err(ServiceError::Unauthorized) => Err(ServiceError::Unauthorized),
        Err(err) => {
            log::error!("Failed to import {kind}: {err}");
            Ok(ImportOutcome::failed())
        }
    }
}
