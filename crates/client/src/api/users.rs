//! User directory coordinators. Read-only: this client never mutates users.

use shopfront_core::UserId;
use tracing::instrument;

use crate::cache::Intent;
use crate::error::ApiError;
use crate::models::User;

use super::{ApiClient, unwrap_entity};

impl ApiClient {
    /// Fetch the user directory into the users slice.
    ///
    /// # Errors
    ///
    /// Server and network failures.
    #[instrument(skip_all)]
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let value = self.execute(self.http().get(self.url("/api/users"))).await?;
        let users: Vec<User> = unwrap_entity(&value, "users")?;
        self.dispatch(Intent::SetUsers(users.clone()));
        Ok(users)
    }

    /// Fetch one user by id and upsert it into the users slice.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    #[instrument(skip_all, fields(user = %id))]
    pub async fn fetch_user(&self, id: UserId) -> Result<User, ApiError> {
        let value = self
            .execute(self.http().get(self.url(&format!("/api/users/{id}"))))
            .await?;
        let user: User = unwrap_entity(&value, "user")?;
        self.dispatch(Intent::SetUser(user.clone()));
        Ok(user)
    }
}
