//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers and the bearer credential are wrapped so that handlers and
//! services cannot mix up a contract id with a proposal id, or log a raw
//! token by accident.
use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ContractId, "Unique identifier for a contract.");
id_newtype!(ScheduleId, "Unique identifier for a schedule.");
id_newtype!(ProposalId, "Unique identifier for a proposal.");
id_newtype!(CompanyId, "Unique identifier for a company.");
id_newtype!(ConsultantId, "Unique identifier for a consultant.");
id_newtype!(UserId, "Unique identifier for an application user.");

/// Access token issued by the backend and replayed as `Authorization: Bearer`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BearerToken(String);

impl BearerToken {
    /// Trims the token and rejects empty values.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned token.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Keep the credential out of logs.
impl Debug for BearerToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl TryFrom<String> for BearerToken {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Decoding for the backend's decimal columns.
///
/// Monetary values, hours and percentages are `Numeric` columns that reach
/// the wire either as JSON numbers or as strings such as `"1500.00"`.
pub mod decimal {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    /// Deserializes an optional decimal from a number, a numeric string or null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<NumberOrText>::deserialize(deserializer)? {
            None => Ok(None),
            Some(NumberOrText::Number(value)) => Ok(Some(value)),
            Some(NumberOrText::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse::<f64>()
                    .map(Some)
                    .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {text}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Amount {
        #[serde(default, deserialize_with = "decimal::deserialize")]
        value: Option<f64>,
    }

    #[test]
    fn id_rejects_non_positive_values() {
        assert_eq!(ContractId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ProposalId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ScheduleId::new(7).map(ScheduleId::get), Ok(7));
    }

    #[test]
    fn bearer_token_is_trimmed_and_hidden_from_debug() {
        let token = BearerToken::new("  abc.def  ").unwrap();
        assert_eq!(token.as_str(), "abc.def");
        assert_eq!(format!("{token:?}"), "BearerToken(***)");
        assert!(BearerToken::new("   ").is_err());
    }

    #[test]
    fn decimal_accepts_numbers_strings_and_null() {
        let parsed: Amount = serde_json::from_str(r#"{"value": "1500.50"}"#).unwrap();
        assert_eq!(parsed.value, Some(1500.5));

        let parsed: Amount = serde_json::from_str(r#"{"value": 42}"#).unwrap();
        assert_eq!(parsed.value, Some(42.0));

        let parsed: Amount = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(parsed.value, None);

        let parsed: Amount = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.value, None);

        assert!(serde_json::from_str::<Amount>(r#"{"value": "abc"}"#).is_err());
    }
}
