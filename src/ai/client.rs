//! Request dispatcher: one HTTP call per task, routed through the registry.

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::ai::normalize::normalize;
use crate::ai::prompt::PromptTask;
use crate::ai::provider::{AuthScheme, ProviderDescriptor, lookup};
use crate::config::HttpSettings;
use crate::error::AiError;

/// Maximum number of body characters kept in a status error.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// AI client shared by both commit-message tasks.
pub struct AiClient {
    http: Client,
    base_url_override: Option<String>,
}

impl AiClient {
    /// Build a client from runtime settings.
    ///
    /// Falls back to a default `reqwest::Client` if the configured one
    /// cannot be built.
    pub fn new(settings: &HttpSettings) -> Self {
        let mut builder = Client::builder().user_agent(concat!("gitai/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().unwrap_or_else(|e| {
            error!("Failed to build HTTP client: {}. Using default client.", e);
            Client::new()
        });

        Self {
            http,
            base_url_override: settings.base_url_override.clone(),
        }
    }

    /// Draft a commit message from a staged diff.
    ///
    /// Returns `Ok(None)` when the provider call fails or yields no text;
    /// only an unknown model id is returned as an error.
    pub async fn generate_commit_message(
        &self,
        model_id: &str,
        api_key: &str,
        diff: &str,
    ) -> Result<Option<String>, AiError> {
        let task = PromptTask::GenerateCommitMessage { diff };
        match self.complete(model_id, api_key, &task).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                warn!("AI error while generating commit message: {}", e);
                Ok(None)
            }
        }
    }

    /// Polish a user-written commit message.
    ///
    /// Returns the original message unchanged when the provider call fails
    /// or yields no text; only an unknown model id is returned as an error.
    pub async fn improve_commit_message(
        &self,
        model_id: &str,
        api_key: &str,
        message: &str,
    ) -> Result<String, AiError> {
        let task = PromptTask::ImproveCommitMessage { message };
        match self.complete(model_id, api_key, &task).await {
            Ok(text) => Ok(text),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                warn!("AI error while improving commit message: {}", e);
                Ok(message.to_string())
            }
        }
    }

    /// Run one task end to end and report every failure distinctly.
    ///
    /// Exactly one request is sent, unless the model id is unknown, in which
    /// case none is.
    pub async fn complete(
        &self,
        model_id: &str,
        api_key: &str,
        task: &PromptTask<'_>,
    ) -> Result<String, AiError> {
        let provider = lookup(model_id)?;
        let prompt = task.render();
        let url = provider.endpoint(self.base_url_override.as_deref());

        debug!(
            "Sending {} task to {} ({} prompt chars)",
            task.name(),
            url,
            prompt.len()
        );

        let body = self.send(provider, &url, api_key, &prompt).await?;
        let raw = provider.extract_text(body)?;
        let text = normalize(&raw);

        if text.is_empty() {
            return Err(AiError::EmptyResponse {
                provider: provider.id,
            });
        }

        debug!("{} returned {} chars", provider.id, text.len());
        Ok(text)
    }

    /// POST the payload and decode a successful JSON response.
    async fn send(
        &self,
        provider: &'static ProviderDescriptor,
        url: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<Value, AiError> {
        let mut request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&provider.build_payload(prompt));

        request = match provider.auth {
            AuthScheme::Bearer => request.header(AUTHORIZATION, format!("Bearer {}", api_key)),
            AuthScheme::Header(name) => request.header(name, api_key),
        };

        let transport = |source: reqwest::Error| AiError::Transport {
            provider: provider.id,
            source,
        };

        let response = request.send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Status {
                provider: provider.id,
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let bytes = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&bytes).map_err(|source| AiError::InvalidResponseBody {
            provider: provider.id,
            source,
        })
    }
}
