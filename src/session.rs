//! Credential handling shared by every page.
//!
//! The bearer token and the cached user profile live in the signed cookie
//! session under [`TOKEN_KEY`] and [`USER_KEY`]. Services never touch the
//! session directly: they receive a [`SessionContext`] built over a
//! [`CredentialStore`], which is the only place the pair is written or
//! cleared.

use std::cell::Cell;

use actix_session::Session;
use thiserror::Error;

use crate::backend::{BackendError, BackendResult};
use crate::domain::types::BearerToken;
use crate::domain::user::UserProfile;
use crate::services::{ServiceError, ServiceResult};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, Error)]
#[error("session storage error: {0}")]
pub struct SessionError(pub String);

/// Persisted client state: the token and the profile, always cleared together.
#[cfg_attr(any(test, feature = "test-mocks"), mockall::automock)]
pub trait CredentialStore {
    fn token(&self) -> Result<Option<BearerToken>, SessionError>;
    fn profile(&self) -> Result<Option<UserProfile>, SessionError>;
    fn store(&self, token: &BearerToken, profile: &UserProfile) -> Result<(), SessionError>;
    fn clear(&self);
}

impl CredentialStore for Session {
    fn token(&self) -> Result<Option<BearerToken>, SessionError> {
        let raw = self
            .get::<String>(TOKEN_KEY)
            .map_err(|e| SessionError(e.to_string()))?;
        // A blank token is the same as no token.
        Ok(raw.and_then(|raw| BearerToken::new(raw).ok()))
    }

    fn profile(&self) -> Result<Option<UserProfile>, SessionError> {
        self.get::<UserProfile>(USER_KEY)
            .map_err(|e| SessionError(e.to_string()))
    }

    fn store(&self, token: &BearerToken, profile: &UserProfile) -> Result<(), SessionError> {
        self.insert(TOKEN_KEY, token.as_str())
            .map_err(|e| SessionError(e.to_string()))?;
        self.insert(USER_KEY, profile)
            .map_err(|e| SessionError(e.to_string()))?;
        self.renew();
        Ok(())
    }

    fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
    }
}

/// Per-request view of the credential.
pub struct SessionContext<'a> {
    store: &'a dyn CredentialStore,
    expired: Cell<bool>,
}

impl<'a> SessionContext<'a> {
    pub fn new(store: &'a dyn CredentialStore) -> Self {
        Self {
            store,
            expired: Cell::new(false),
        }
    }

    /// The stored token, or [`ServiceError::Unauthenticated`].
    pub fn token(&self) -> ServiceResult<BearerToken> {
        self.store.token()?.ok_or(ServiceError::Unauthenticated)
    }

    /// The cached profile; storage errors are logged and read as absent.
    pub fn profile(&self) -> Option<UserProfile> {
        match self.store.profile() {
            Ok(profile) => profile,
            Err(err) => {
                log::warn!("Failed to read the cached user profile: {err}");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.store.token(), Ok(Some(_)))
    }

    /// Converts a backend result, expiring the session on a 401.
    pub fn guard<T>(&self, result: BackendResult<T>) -> ServiceResult<T> {
        match result {
            Ok(value) => Ok(value),
            Err(BackendError::Unauthorized) => {
                self.expire();
                Err(ServiceError::Unauthorized)
            }
            Err(err) => Err(ServiceError::Backend(err)),
        }
    }

    /// Clears the credential. Repeated calls within a request clear once.
    pub fn expire(&self) {
        if !self.expired.replace(true) {
            log::info!("Backend rejected the stored credential; clearing the session");
            self.store.clear();
        }
    }

    pub fn establish(&self, token: &BearerToken, profile: &UserProfile) -> ServiceResult<()> {
        self.store.store(token, profile)?;
        self.expired.set(false);
        Ok(())
    }

    pub fn end(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> BearerToken {
        BearerToken::new("abc").unwrap()
    }

    #[test]
    fn missing_token_is_unauthenticated() {
        let mut store = MockCredentialStore::new();
        store.expect_token().returning(|| Ok(None));
        store.expect_clear().never();

        let ctx = SessionContext::new(&store);

        assert!(matches!(ctx.token(), Err(ServiceError::Unauthenticated)));
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn repeated_unauthorized_clears_once() {
        let mut store = MockCredentialStore::new();
        store.expect_clear().times(1).return_const(());

        let ctx = SessionContext::new(&store);

        let first: ServiceResult<()> = ctx.guard(Err(BackendError::Unauthorized));
        let second: ServiceResult<()> = ctx.guard(Err(BackendError::Unauthorized));

        assert!(matches!(first, Err(ServiceError::Unauthorized)));
        assert!(matches!(second, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn other_failures_keep_the_session() {
        let mut store = MockCredentialStore::new();
        store.expect_clear().never();

        let ctx = SessionContext::new(&store);
        let result: ServiceResult<()> = ctx.guard(Err(BackendError::Status {
            status: 500,
            detail: None,
        }));

        assert!(matches!(result, Err(ServiceError::Backend(_))));
    }

    #[test]
    fn stored_token_is_returned() {
        let mut store = MockCredentialStore::new();
        store.expect_token().returning(|| Ok(Some(token())));

        let ctx = SessionContext::new(&store);

        assert_eq!(ctx.token().unwrap(), token());
    }
}
