use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Spreadsheet kinds accepted by the `importacao/*` endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ImportKind {
    Companies,
    Proposals,
    Schedules,
}

impl ImportKind {
    pub const ALL: [ImportKind; 3] = [
        ImportKind::Companies,
        ImportKind::Proposals,
        ImportKind::Schedules,
    ];

    /// Path segment shared by the page route and the backend endpoint.
    pub const fn slug(self) -> &'static str {
        match self {
            ImportKind::Companies => "empresas",
            ImportKind::Proposals => "propostas",
            ImportKind::Schedules => "cronogramas",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            ImportKind::Companies => "Empresas",
            ImportKind::Proposals => "Propostas",
            ImportKind::Schedules => "Cronogramas",
        }
    }
}

impl Display for ImportKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl TryFrom<&str> for ImportKind {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == value)
            .ok_or_else(|| TypeConstraintError::InvalidValue(value.to_string()))
    }
}

/// A selected file relayed as-is to the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Response body of the import endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ImportSummary {
    #[serde(rename = "sucesso")]
    pub success: bool,
    #[serde(rename = "registros_importados", default)]
    pub imported: u64,
    #[serde(rename = "erros", default)]
    pub errors: Vec<String>,
}
