//! Credential storage and runtime settings.

pub mod credentials;
pub mod settings;

pub use credentials::{CredentialStore, Credentials};
pub use settings::HttpSettings;
