//! Merchant configuration stored in the samples config directory
//!
//! Layout:
//! ```text
//! <config-path>/content/merchant-info.json
//! <config-path>/content/service-account.json   (optional)
//! <config-path>/content/client-secrets.json    (optional)
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ConfigError;
use crate::auth::TokenResponse;

/// Name of the merchant configuration file
pub const CONFIG_FILE_NAME: &str = "merchant-info.json";

/// Directory name used under the home directory when no config path is given
pub const DEFAULT_CONFIG_DIR: &str = "shopping-samples";

const CONTENT_SUBDIR: &str = "content";

/// Contents of `merchant-info.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantInfo {
    pub merchant_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    /// OAuth token cached by the installed-app flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenResponse>,
    /// Keys used by other samples, preserved on rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MerchantInfo {
    pub fn new(merchant_id: u64) -> Self {
        Self {
            merchant_id,
            application_name: None,
            website_url: None,
            token: None,
            extra: Map::new(),
        }
    }

    /// Refresh token cached from an earlier authorization, if any
    pub fn refresh_token(&self) -> Option<&str> {
        self.token
            .as_ref()
            .and_then(|t| t.refresh_token.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// The `content` directory inside the samples config path
#[derive(Debug, Clone)]
pub struct ConfigDir {
    path: PathBuf,
}

impl ConfigDir {
    /// Create from an explicit config path (the parent of `content/`)
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            path: config_path.into().join(CONTENT_SUBDIR),
        }
    }

    /// `$HOME/shopping-samples/content`
    pub fn from_home() -> Result<Self, ConfigError> {
        Ok(Self::new(home_dir()?.join(DEFAULT_CONFIG_DIR)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of a file inside the directory
    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    pub fn merchant_info_path(&self) -> PathBuf {
        self.file(CONFIG_FILE_NAME)
    }

    /// Load `merchant-info.json`
    pub fn load_merchant_info(&self) -> Result<MerchantInfo, ConfigError> {
        let path = self.merchant_info_path();
        let json = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConfigError::MissingFile {
                path: path.clone(),
                source,
            },
            _ => ConfigError::Io {
                path: path.clone(),
                source,
            },
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::InvalidJson { path, source })
    }

    /// Write `merchant-info.json`, keeping keys this crate does not model
    pub fn save_merchant_info(&self, info: &MerchantInfo) -> Result<(), ConfigError> {
        let path = self.merchant_info_path();
        let json = serde_json::to_string_pretty(info).map_err(|source| ConfigError::Encode {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| ConfigError::Io { path, source })
    }
}

/// Home directory of the current user.
///
/// Checks `HOME` first, then `HOMEDRIVE` + `HOMEPATH` for Windows shells.
pub fn home_dir() -> Result<PathBuf, ConfigError> {
    let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());

    let home = non_empty("HOME").or_else(|| {
        let drive = non_empty("HOMEDRIVE")?;
        let path = non_empty("HOMEPATH")?;
        Some(format!("{drive}{path}"))
    });

    home.map(|h| PathBuf::from(h.trim_end_matches(['/', '\\'])))
        .ok_or(ConfigError::NoHomeDirectory)
}
