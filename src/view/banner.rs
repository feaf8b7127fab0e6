use serde::Serialize;

/// Warning shown above a list when the alerts endpoint returned entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlertBanner {
    pub count: usize,
    pub message: String,
}

impl AlertBanner {
    /// `None` when nothing is due, which hides the banner.
    pub fn contracts(count: usize) -> Option<Self> {
        (count > 0).then(|| Self {
            count,
            message: format!("{count} contrato(s) com vencimento próximo ou vencido."),
        })
    }

    pub fn schedules(count: usize) -> Option<Self> {
        (count > 0).then(|| Self {
            count,
            message: format!("{count} cronograma(s) com vencimento próximo ou atrasado."),
        })
    }
}
