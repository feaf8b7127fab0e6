use serde::Serialize;

use crate::domain::import::ImportSummary;

/// Row-level warnings shown after a successful import; the rest are dropped.
pub const MAX_IMPORT_WARNINGS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    pub success: bool,
    pub message: String,
    pub warnings: Vec<String>,
}

impl ImportOutcome {
    pub fn failed() -> Self {
        Self {
            success: false,
            message: "Erro ao processar arquivo".to_string(),
            warnings: Vec::new(),
        }
    }
}

impl From<ImportSummary> for ImportOutcome {
    fn from(summary: ImportSummary) -> Self {
        if !summary.success {
            return Self {
                success: false,
                message: "Erro na importação".to_string(),
                warnings: summary
                    .errors
                    .into_iter()
                    .take(MAX_IMPORT_WARNINGS)
                    .collect(),
            };
        }

        Self {
            success: true,
            message: format!(
                "Sucesso! {} registro(s) importado(s).",
                summary.imported
            ),
            warnings: summary
                .errors
                .into_iter()
                .take(MAX_IMPORT_WARNINGS)
                .collect(),
        }
    }
}
