//! Login boundary: relays credentials and keeps the issued token.

use crate::backend::{AuthGateway, BackendError};
use crate::domain::user::{LoginCredentials, UserProfile};
use crate::forms::auth::LoginForm;
use crate::services::{ServiceError, ServiceResult};
use crate::session::SessionContext;

pub const INVALID_CREDENTIALS: &str = "Email ou senha incorretos.";

/// Exchanges the credentials for a token, loads the profile and stores both.
pub async fn login<R>(
    backend: &R,
    session: &SessionContext<'_>,
    form: LoginForm,
) -> ServiceResult<UserProfile>
where
    R: AuthGateway + ?Sized,
{
    let credentials = LoginCredentials::try_from(form)?;

    let access = backend
        .login(&credentials)
        .await
        .map_err(|err| match err {
            BackendError::Unauthorized => ServiceError::Form(INVALID_CREDENTIALS.to_string()),
            other => ServiceError::Backend(other),
        })?;

    let profile = backend
        .current_user(&access.access_token)
        .await
        .map_err(|err| match err {
            BackendError::Unauthorized => ServiceError::Form(INVALID_CREDENTIALS.to_string()),
            other => ServiceError::Backend(other),
        })?;

    session.establish(&access.access_token, &profile)?;

    log::info!("User {} signed in", profile.email);

    Ok(profile)
}

/// Clears the token and the cached profile together.
pub fn logout(session: &SessionContext<'_>) {
    session.end();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use crate::domain::types::BearerToken;
    use crate::domain::user::AccessToken;
    use crate::services::fixtures::profile;
    use crate::session::MockCredentialStore;

    fn form() -> LoginForm {
        LoginForm {
            email: "ana@empresa.com".to_string(),
            password: "segredo".to_string(),
        }
    }

    #[actix_web::test]
    async fn successful_login_stores_token_and_profile() {
        let mut store = MockCredentialStore::new();
        store
            .expect_store()
            .withf(|token, profile| token.as_str() == "fresh" && profile.name == "Ana Souza")
            .times(1)
            .returning(|_, _| Ok(()));
        let session = SessionContext::new(&store);

        let mut backend = MockBackend::new();
        backend
            .expect_login()
            .withf(|c| c.email == "ana@empresa.com" && c.password == "segredo")
            .returning(|_| {
                Ok(AccessToken {
                    access_token: BearerToken::new("fresh").unwrap(),
                    token_type: Some("bearer".to_string()),
                })
            });
        backend
            .expect_current_user()
            .withf(|token| token.as_str() == "fresh")
            .returning(|_| Ok(profile()));

        let profile = login(&backend, &session, form()).await.unwrap();

        assert_eq!(profile.role, "Admin");
    }

    #[actix_web::test]
    async fn rejected_credentials_store_nothing() {
        let mut store = MockCredentialStore::new();
        store.expect_store().never();
        let session = SessionContext::new(&store);

        let mut backend = MockBackend::new();
        backend
            .expect_login()
            .returning(|_| Err(BackendError::Unauthorized));
        backend.expect_current_user().never();

        let err = login(&backend, &session, form()).await.unwrap_err();

        assert_eq!(err.user_message(), INVALID_CREDENTIALS);
    }

    #[test]
    fn logout_clears_both_keys() {
        let mut store = MockCredentialStore::new();
        store.expect_clear().times(1).return_const(());
        let session = SessionContext::new(&store);

        logout(&session);
    }
}
