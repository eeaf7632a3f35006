//! File-backed credential store.
//!
//! The selected model lives in `.gitai_config` as JSON; the API key lives
//! alone in `.gitai_key`, readable only by the owner on Unix.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::CredentialsError;

/// File holding `{"model": "<id>"}`.
pub const CONFIG_FILE_NAME: &str = ".gitai_config";

/// File holding the raw API key.
pub const KEY_FILE_NAME: &str = ".gitai_key";

/// Model selection plus the key used to authenticate with its provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub model: String,
    pub api_key: String,
}

// Keep the key out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ModelConfig {
    model: Option<String>,
}

/// Reads and writes [`Credentials`] under one directory.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    config_path: PathBuf,
    key_path: PathBuf,
}

impl CredentialStore {
    /// Store rooted at `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            config_path: dir.join(CONFIG_FILE_NAME),
            key_path: dir.join(KEY_FILE_NAME),
        }
    }

    /// Store rooted at the user's home directory.
    pub fn default_location() -> Result<Self, CredentialsError> {
        dirs::home_dir()
            .map(Self::new)
            .ok_or(CredentialsError::HomeDirUnavailable)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Load saved credentials.
    ///
    /// Returns `Ok(None)` if either file is missing or either value is empty.
    pub fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        let Some(config_raw) = read_optional(&self.config_path)? else {
            debug!("No config file at {}", self.config_path.display());
            return Ok(None);
        };
        let Some(key_raw) = read_optional(&self.key_path)? else {
            debug!("No key file at {}", self.key_path.display());
            return Ok(None);
        };

        let config: ModelConfig =
            serde_json::from_str(&config_raw).map_err(|source| CredentialsError::Parse {
                path: self.config_path.clone(),
                source,
            })?;

        let model = config.model.map(|m| m.trim().to_string()).unwrap_or_default();
        let api_key = key_raw.trim().to_string();

        if model.is_empty() || api_key.is_empty() {
            return Ok(None);
        }

        Ok(Some(Credentials { model, api_key }))
    }

    /// Persist credentials, replacing both files atomically.
    pub fn save(&self, credentials: &Credentials) -> Result<(), CredentialsError> {
        let config = ModelConfig {
            model: Some(credentials.model.clone()),
        };
        let config_json =
            serde_json::to_string_pretty(&config).map_err(CredentialsError::Serialize)?;

        write_atomic(&self.config_path, config_json.as_bytes(), false)?;
        write_atomic(&self.key_path, credentials.api_key.as_bytes(), true)?;

        debug!(
            "Saved credentials for model {} to {}",
            credentials.model,
            self.config_path.display()
        );
        Ok(())
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, CredentialsError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CredentialsError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write via a temp file in the same directory, then rename into place.
fn write_atomic(path: &Path, contents: &[u8], private: bool) -> Result<(), CredentialsError> {
    let write_err = |source: std::io::Error| CredentialsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = if private { 0o600 } else { 0o644 };
        fs::set_permissions(file.path(), fs::Permissions::from_mode(mode)).map_err(write_err)?;
    }
    #[cfg(not(unix))]
    let _ = private;

    file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
