//! Authenticated ARM HTTP client.
//!
//! One [`ArmClient`] is built per run and cloned into the plan and metric
//! clients. Clones share the connection pool and the credential.

use crate::config;
use crate::error::AppError;
use azure_core::auth::TokenCredential;
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Build the default credential chain (environment, managed identity, az cli).
///
/// Building never fails; a chain with no usable source surfaces as
/// [`AppError::Auth`] on the first token request.
pub fn default_credential() -> Arc<dyn TokenCredential> {
    Arc::new(azure_identity::DefaultAzureCredentialBuilder::new().build())
}

#[derive(Clone)]
pub struct ArmClient {
    http: reqwest::Client,
    credential: Arc<dyn TokenCredential>,
    endpoint: String,
}

impl ArmClient {
    /// Client for the public ARM endpoint.
    pub fn new(credential: Arc<dyn TokenCredential>) -> Result<Self, AppError> {
        Self::with_endpoint(credential, config::ARM_ENDPOINT)
    }

    pub fn with_endpoint(
        credential: Arc<dyn TokenCredential>,
        endpoint: &str,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ClientConstruction(e.to_string()))?;

        Ok(Self {
            http,
            credential,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint without trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET `url` with a bearer token and decode the JSON body.
    ///
    /// # Arguments
    /// * `operation` - Short description used in error messages
    /// * `url` - Absolute URL, may already carry a query string (nextLink)
    /// * `query` - Extra query pairs to append
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let token = self
            .credential
            .get_token(&[config::ARM_SCOPE])
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        log::debug!("GET {url}", url = url.on_blue());
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(token.token.secret())
            .send()
            .await
            .map_err(|e| AppError::request(operation, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::request(operation, e))?;

        if !status.is_success() {
            log::warn!(
                "{failed} to {operation} status={status}",
                failed = "failed".on_red()
            );
            log::trace!("body=\n{body}");
            return Err(AppError::request(operation, format!("HTTP {status}: {body}")));
        }
        log::debug!("{operation} ok, body.len()={}", body.len());

        decode_json(operation, &body)
    }
}

/// Decode a JSON body, reporting the path of the first field that failed.
pub fn decode_json<T: DeserializeOwned>(operation: &'static str, body: &str) -> Result<T, AppError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("BODY START:\n\n{body}\n\nBODY END\n");
        AppError::Decode {
            operation,
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    })
}
