//! Wire types for the supported provider families.
//!
//! Request bodies serialize to exactly the documented JSON shape of each
//! provider. Response types only declare the fields on the extraction path.

use serde::{Deserialize, Serialize};

/// Sampling temperature sent to chat-completion providers.
pub const CHAT_TEMPERATURE: f64 = 0.7;

/// `POST /v1/chat/completions` request body.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f64,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Chat-completion response; text lives at `choices[0].message.content`.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    /// Null when the model refuses or returns only tool calls.
    pub content: Option<String>,
}

/// `:generateContent` request body.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent<'a> {
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

/// Generate-content response; text lives at
/// `candidates[0].content.parts[0].text`.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}
