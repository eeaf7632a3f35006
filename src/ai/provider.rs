//! Provider registry: one static descriptor per supported model id.
//!
//! The dispatcher only ever talks to a provider through its descriptor, so
//! adding a provider means adding one entry to [`PROVIDERS`].

use std::fmt;

use serde_json::Value;

use crate::ai::schema::{
    CHAT_TEMPERATURE, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    GenerateContentRequest, GenerateContentResponse, RequestContent, RequestPart,
};
use crate::error::AiError;

/// Model selected when the user accepts the setup default.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// How the API key is attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// A named header carrying the raw key.
    Header(&'static str),
}

/// Request/response family spoken by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiShape {
    /// OpenAI-style `messages` array; answer at `choices[0].message.content`.
    ChatCompletion { model: &'static str },
    /// Gemini-style `contents[].parts[]`; answer at
    /// `candidates[0].content.parts[0].text`.
    GenerateContent,
}

/// Static description of how to talk to one provider.
#[derive(Debug, PartialEq, Eq)]
pub struct ProviderDescriptor {
    /// Model id as stored in the user's configuration.
    pub id: &'static str,
    pub display_name: &'static str,
    pub base_url: &'static str,
    pub path: &'static str,
    pub auth: AuthScheme,
    pub api: ApiShape,
}

/// Every supported provider, in the order shown during setup.
pub static PROVIDERS: &[ProviderDescriptor] = &[
    ProviderDescriptor {
        id: "gpt-3.5-turbo",
        display_name: "GPT-3.5 Turbo",
        base_url: "https://api.openai.com",
        path: "/v1/chat/completions",
        auth: AuthScheme::Bearer,
        api: ApiShape::ChatCompletion {
            model: "gpt-3.5-turbo",
        },
    },
    ProviderDescriptor {
        id: "gpt-4o",
        display_name: "GPT-4o",
        base_url: "https://api.openai.com",
        path: "/v1/chat/completions",
        auth: AuthScheme::Bearer,
        api: ApiShape::ChatCompletion { model: "gpt-4" },
    },
    ProviderDescriptor {
        id: "gemini-2.0-flash",
        display_name: "gemini-2.0-flash",
        base_url: "https://generativelanguage.googleapis.com",
        path: "/v1beta/models/gemini-2.0-flash:generateContent",
        auth: AuthScheme::Header("x-goog-api-key"),
        api: ApiShape::GenerateContent,
    },
];

/// Resolve a model id to its descriptor.
pub fn lookup(model_id: &str) -> Result<&'static ProviderDescriptor, AiError> {
    PROVIDERS
        .iter()
        .find(|p| p.id == model_id)
        .ok_or_else(|| AiError::UnsupportedModel(model_id.to_string()))
}

/// All descriptors in registry order.
pub fn supported_models() -> &'static [ProviderDescriptor] {
    PROVIDERS
}

impl ProviderDescriptor {
    /// Full endpoint URL, optionally against a different base URL.
    pub fn endpoint(&self, base_url_override: Option<&str>) -> String {
        let base = base_url_override.unwrap_or(self.base_url);
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }

    /// Build the JSON request body for a rendered prompt.
    pub fn build_payload(&self, prompt: &str) -> Value {
        let body = match self.api {
            ApiShape::ChatCompletion { model } => serde_json::to_value(ChatCompletionRequest {
                model,
                messages: vec![ChatMessage {
                    role: "user",
                    content: prompt,
                }],
                temperature: CHAT_TEMPERATURE,
            }),
            ApiShape::GenerateContent => serde_json::to_value(GenerateContentRequest {
                contents: vec![RequestContent {
                    parts: vec![RequestPart { text: prompt }],
                }],
            }),
        };

        // Both request types are plain structs of strings and numbers.
        body.unwrap_or(Value::Null)
    }

    /// Pull the answer text out of a decoded response body.
    pub fn extract_text(&self, body: Value) -> Result<String, AiError> {
        let text = match self.api {
            ApiShape::ChatCompletion { .. } => {
                let response: ChatCompletionResponse =
                    serde_json::from_value(body).map_err(|e| self.shape_error(e.to_string()))?;
                response
                    .choices
                    .into_iter()
                    .next()
                    .ok_or_else(|| self.shape_error("no choices in response"))?
                    .message
                    .content
                    .ok_or_else(|| self.shape_error("choices[0].message.content is null"))?
            }
            ApiShape::GenerateContent => {
                let response: GenerateContentResponse =
                    serde_json::from_value(body).map_err(|e| self.shape_error(e.to_string()))?;
                response
                    .candidates
                    .into_iter()
                    .next()
                    .ok_or_else(|| self.shape_error("no candidates in response"))?
                    .content
                    .ok_or_else(|| self.shape_error("candidates[0].content is missing"))?
                    .parts
                    .into_iter()
                    .next()
                    .ok_or_else(|| self.shape_error("candidates[0].content.parts is empty"))?
                    .text
                    .ok_or_else(|| self.shape_error("candidates[0].content.parts[0].text is missing"))?
            }
        };

        Ok(text)
    }

    fn shape_error(&self, detail: impl Into<String>) -> AiError {
        AiError::UnexpectedShape {
            provider: self.id,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name)
    }
}
