use serde::Deserialize;
use validator::Validate;

use crate::domain::user::LoginCredentials;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(rename = "senha", default)]
    #[validate(length(min = 1))]
    pub password: String,
}

impl TryFrom<LoginForm> for LoginCredentials {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(LoginCredentials {
            email: form.email.trim().to_string(),
            password: form.password,
        })
    }
}
