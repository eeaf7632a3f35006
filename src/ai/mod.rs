//! AI provider registry, prompt rendering and request dispatch.

pub mod client;
pub mod normalize;
pub mod prompt;
pub mod provider;
pub mod schema;

pub use client::AiClient;
pub use normalize::normalize;
pub use prompt::PromptTask;
pub use provider::{
    ApiShape, AuthScheme, DEFAULT_MODEL, PROVIDERS, ProviderDescriptor, lookup, supported_models,
};
