//! Form definitions backing the page routes, with the coercion rules shared
//! by the create forms.

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;
use validator::ValidationErrors;

pub mod auth;
pub mod chatbot;
pub mod contracts;
pub mod delete;
pub mod import;
pub mod proposals;
pub mod schedules;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data. Messages are shown to
/// the user as flash messages.
pub enum FormError {
    #[error("Preencha os campos obrigatórios.")]
    Validation(#[from] ValidationErrors),

    #[error("Valor inválido no campo {0}.")]
    InvalidNumber(&'static str),

    #[error("Identificador inválido no campo {0}.")]
    InvalidId(&'static str),

    #[error("Status inválido: {0}.")]
    InvalidStatus(String),

    #[error("Selecione um arquivo")]
    MissingFile,
}

/// Required integer: must be present and parse.
pub fn required_int(value: &str, field: &'static str) -> Result<i32, FormError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| FormError::InvalidNumber(field))
}

/// Nullable integer: blank or unparsable input becomes `None`.
pub fn nullable_int(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

/// Nullable float: blank or unparsable input becomes `None`. A decimal comma
/// is accepted.
pub fn nullable_float(value: &str) -> Option<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Nullable ISO date as sent by `<input type="date">`.
pub fn nullable_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Free text stripped of markup; blank becomes `None`. The result is plain
/// text, not HTML: entities written by the cleaner are decoded again.
pub fn sanitized(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let clean = ammonia::Builder::empty()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(trimmed)
        .to_string();
    let text = clean
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Picks the submitted status when it is one of `known`, otherwise `default`.
/// An unknown non-blank value is rejected.
pub fn status_or_default(
    value: &str,
    known: &[&'static str],
    default: &'static str,
) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(default.to_string());
    }
    known
        .iter()
        .find(|label| **label == value)
        .map(|label| (*label).to_string())
        .ok_or_else(|| FormError::InvalidStatus(value.to_string()))
}
