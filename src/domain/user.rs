use serde::{Deserialize, Serialize};

use crate::domain::types::{BearerToken, ConsultantId, UserId};

/// Profile of the signed-in user, cached in the session next to the token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    /// Backend role: `Admin`, `Consultor` or `Financeiro`.
    #[serde(rename = "funcao")]
    pub role: String,
    #[serde(rename = "consultor_id", default)]
    pub consultant_id: Option<ConsultantId>,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Email/password pair relayed to the backend login endpoint.
#[derive(Clone, PartialEq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// OAuth2 token response of the backend login endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessToken {
    pub access_token: BearerToken,
    #[serde(default)]
    pub token_type: Option<String>,
}
