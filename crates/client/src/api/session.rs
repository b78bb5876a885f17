//! Session coordinators: login, signup, logout, resume.

use serde::Serialize;
use tracing::instrument;

use crate::cache::Intent;
use crate::error::ApiError;
use crate::models::SessionUser;

use super::{ApiClient, unwrap_entity};

/// Login / signup credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl ApiClient {
    /// Log in and populate the session slice.
    ///
    /// # Errors
    ///
    /// Invalid credentials come back as [`ApiError::Validation`] with the
    /// server's field messages; the cache is untouched on failure.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionUser, ApiError> {
        let value = self
            .execute(self.http().post(self.url("/api/session")).json(credentials))
            .await?;
        let user: SessionUser = unwrap_entity(&value, "user")?;
        self.dispatch(Intent::SetSession(user.clone()));
        Ok(user)
    }

    /// Create an account. The server logs the new user in, so the session
    /// slice is populated on success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for rejected signups (taken email,
    /// weak password).
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn signup(&self, credentials: &Credentials) -> Result<SessionUser, ApiError> {
        let value = self
            .execute(self.http().post(self.url("/api/users")).json(credentials))
            .await?;
        let user: SessionUser = unwrap_entity(&value, "user")?;
        self.dispatch(Intent::SetSession(user.clone()));
        Ok(user)
    }

    /// Log out.
    ///
    /// The session and every authenticated-scoped slice are cleared even if
    /// the request fails: no state may leak across identities, and callers
    /// are free to ignore the result (fire-and-forget).
    ///
    /// # Errors
    ///
    /// Returns the transport or server error, after the cache is cleared.
    #[instrument(skip_all)]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self
            .execute(self.http().delete(self.url("/api/session")))
            .await;
        self.dispatch(Intent::ClearAuthenticated);
        result.map(|_| ())
    }

    /// Silently re-authenticate from the session cookie.
    ///
    /// Run once per client lifetime at startup (the guard owns this).
    /// `Ok(None)` means the server does not recognize the cookie - that is a
    /// resolved, unauthenticated state, not an error.
    ///
    /// # Errors
    ///
    /// Only server (5xx) and network failures are errors; the guard stays in
    /// its loading state when resume cannot complete.
    #[instrument(skip_all)]
    pub async fn restore_session(&self) -> Result<Option<SessionUser>, ApiError> {
        match self.execute(self.http().get(self.url("/api/session"))).await {
            Ok(value) => {
                let user: SessionUser = unwrap_entity(&value, "user")?;
                self.dispatch(Intent::SetSession(user.clone()));
                Ok(Some(user))
            }
            Err(ApiError::Validation(_) | ApiError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
