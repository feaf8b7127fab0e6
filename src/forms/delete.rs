use serde::Deserialize;

/// Posted by the delete buttons. The page script sets `confirmed` only when
/// the user accepts the confirmation dialog.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirmed: String,
}

impl DeleteForm {
    pub fn is_confirmed(&self) -> bool {
        matches!(self.confirmed.trim(), "true" | "on" | "1")
    }
}
