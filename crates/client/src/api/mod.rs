//! Entity coordinators: the bridge between callers and the REST API.
//!
//! One [`ApiClient`] method per operation. Every method issues exactly one
//! HTTP request, classifies the outcome into `Result<_, ApiError>`, and on
//! success performs at most one cache dispatch. Nothing here retries, and no
//! error escapes un-normalized.
//!
//! Two underlying HTTP clients are held: a credentialed one whose cookie jar
//! carries the session, and a public one with no cookie store at all, used
//! for the public storefront and public order operations so credentials are
//! never sent where none are required.

mod images;
mod orders;
mod products;
mod reviews;
mod session;
mod store;
mod users;

pub use orders::PublicOrderDraft;
pub use products::ProductDraft;
pub use reviews::ReviewDraft;
pub use session::Credentials;
pub use store::StoreDraft;

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cache::CacheStore;
use crate::config::ClientConfig;
use crate::error::{ApiError, FieldErrors, GENERIC_FAILURE};

/// Client for the Shopfront REST API.
///
/// Cheap to clone; clones share the cookie jar and the cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    /// Credentialed client: cookie jar carries the session.
    http: reqwest::Client,
    /// Public client: no cookie store.
    public: reqwest::Client,
    base: String,
    cache: CacheStore,
}

impl ApiClient {
    /// Create a new API client around the given cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP clients fail to build.
    pub fn new(config: &ClientConfig, cache: CacheStore) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        let public = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                public,
                base: config.base(),
                cache,
            }),
        })
    }

    /// The cache this client dispatches into.
    #[must_use]
    pub fn cache(&self) -> &CacheStore {
        &self.inner.cache
    }

    pub(crate) fn dispatch(&self, intent: crate::cache::Intent) {
        self.inner.cache.dispatch(intent);
    }

    /// The credentialed HTTP client.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// The credential-free HTTP client for public endpoints.
    pub(crate) fn public(&self) -> &reqwest::Client {
        &self.inner.public
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base)
    }

    /// Send a request and classify the response.
    pub(crate) async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        classify(status, &body)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.inner.base)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Response classification
// =============================================================================

/// Turn a raw HTTP outcome into the normalized success/error split.
///
/// - 2xx with no `errors` payload: the parsed body.
/// - 2xx carrying an `errors` payload: a validation failure (the server
///   sometimes reports form errors with a success status).
/// - 404: [`ApiError::NotFound`] with the server's message.
/// - other 4xx: [`ApiError::Validation`] with the field map.
/// - 5xx or an unparseable body: [`ApiError::Server`] with the generic
///   retry-later message.
pub(crate) fn classify(status: StatusCode, body: &str) -> Result<Value, ApiError> {
    let value: Option<Value> = if body.trim().is_empty() {
        Some(Value::Null)
    } else {
        serde_json::from_str(body).ok()
    };

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(error_message(value.as_ref())));
    }
    if status.is_client_error() {
        return Err(ApiError::Validation(error_fields(value.as_ref())));
    }
    if status.is_server_error() {
        return Err(ApiError::generic_server());
    }

    let Some(value) = value else {
        tracing::error!(
            %status,
            body = %body.chars().take(500).collect::<String>(),
            "API returned an unparseable success body"
        );
        return Err(ApiError::generic_server());
    };

    if value.get("errors").is_some() {
        tracing::debug!(%status, "success status carrying an errors payload");
        return Err(ApiError::Validation(error_fields(Some(&value))));
    }

    Ok(value)
}

/// Extract `{"<key>": entity}` from a classified success body.
pub(crate) fn unwrap_entity<T: DeserializeOwned>(value: &Value, key: &str) -> Result<T, ApiError> {
    let Some(field) = value.get(key) else {
        tracing::error!(key, "API response missing expected envelope key");
        return Err(ApiError::generic_server());
    };
    serde_json::from_value(field.clone()).map_err(|e| {
        tracing::error!(key, error = %e, "failed to decode API entity");
        ApiError::generic_server()
    })
}

/// The single message in an error body, or a generic fallback.
fn error_message(value: Option<&Value>) -> String {
    value
        .and_then(|v| v.get("errors"))
        .and_then(|errors| errors.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("Not found.")
        .to_owned()
}

/// Normalize the `errors` payload into one field-keyed map.
///
/// The server is not consistent here: it may send a map of strings, a map of
/// message lists (form validation), or a bare list. Each shape collapses to
/// `field -> joined message`.
fn error_fields(value: Option<&Value>) -> FieldErrors {
    let mut fields = FieldErrors::new();
    let Some(errors) = value.and_then(|v| v.get("errors")) else {
        fields.insert("message".to_owned(), GENERIC_FAILURE.to_owned());
        return fields;
    };
    match errors {
        Value::Object(map) => {
            for (field, messages) in map {
                fields.insert(field.clone(), join_messages(messages));
            }
        }
        Value::Array(_) => {
            fields.insert("message".to_owned(), join_messages(errors));
        }
        other => {
            fields.insert("message".to_owned(), join_messages(other));
        }
    }
    fields
}

fn join_messages(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}
