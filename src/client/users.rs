//! Client helpers for the user endpoints. Endpoint paths live here so the
//! view controller never builds URLs itself.

use super::{ApiClient, ApiError};
use crate::model::{DataEnvelope, User, UserId};
use tracing::instrument;

impl ApiClient {
    /// Fetches the user list. A `null` or missing `data` field is an empty list.
    ///
    /// # Errors
    /// Propagates any [`ApiError`] from the request.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let envelope: DataEnvelope<Option<Vec<User>>> = self.fetch_json("/users").await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Fetches one user by an already validated id.
    ///
    /// # Errors
    /// Propagates any [`ApiError`] from the request.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn get_user(&self, id: &UserId) -> Result<User, ApiError> {
        let envelope: DataEnvelope<User> = self.fetch_json(&format!("/users/{id}")).await?;
        Ok(envelope.data)
    }
}
