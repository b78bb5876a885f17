//! Image upload coordinator.

use reqwest::multipart::{Form, Part};
use tracing::instrument;

use crate::cache::Intent;
use crate::error::ApiError;

use super::ApiClient;

impl ApiClient {
    /// Upload an image and record its URL in the uploaded-image slice.
    ///
    /// The returned URL is meant to be embedded in a store or product draft
    /// (`logo_url` / `image_url`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the server rejects the file
    /// (missing, empty, or disallowed extension).
    #[instrument(skip_all, fields(file = %file_name))]
    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
        let part = Part::bytes(bytes).file_name(file_name.to_owned());
        let form = Form::new().part("image", part);
        let value = self
            .execute(
                self.http()
                    .post(self.url("/api/images/upload"))
                    .multipart(form),
            )
            .await?;
        let Some(url) = value.get("url").and_then(serde_json::Value::as_str) else {
            tracing::error!("upload response missing url");
            return Err(ApiError::generic_server());
        };
        self.dispatch(Intent::SetUploadedImage(url.to_owned()));
        Ok(url.to_owned())
    }
}
