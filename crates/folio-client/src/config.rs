//! Client configuration from the environment.
//!
//! | Variable              | Default                      |
//! |-----------------------|------------------------------|
//! | `FOLIO_API_URL`       | `http://localhost:8000`      |
//! | `FOLIO_MEDIA_URL`     | `https://api.cloudinary.com` |
//! | `FOLIO_MEDIA_CLOUD`   | unset (uploads disabled)     |
//! | `FOLIO_MEDIA_PRESET`  | unset (uploads disabled)     |
//! | `FOLIO_TIMEOUT_SECS`  | `30`                         |

use crate::{Error, Result};
use std::time::Duration;

/// Default relay base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default media CDN API base URL.
pub const DEFAULT_MEDIA_URL: &str = "https://api.cloudinary.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Media CDN upload settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    /// API base URL.
    pub base_url: String,
    /// Cloud (account) name.
    pub cloud: String,
    /// Unsigned upload preset.
    pub upload_preset: String,
}

/// Endpoints and limits of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Relay base URL.
    pub api_url: String,
    /// Media settings; `None` disables uploads.
    pub media: Option<MediaConfig>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            media: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `api_url`, without uploads.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Enable uploads.
    pub fn with_media(mut self, media: MediaConfig) -> Self {
        self.media = Some(media);
        self
    }

    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = var("FOLIO_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "FOLIO_API_URL must be an http(s) URL, got '{api_url}'"
            )));
        }

        let timeout = match var("FOLIO_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    Error::Config(format!("FOLIO_TIMEOUT_SECS must be an integer, got '{raw}'"))
                })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        let media = match (var("FOLIO_MEDIA_CLOUD"), var("FOLIO_MEDIA_PRESET")) {
            (Some(cloud), Some(upload_preset)) => Some(MediaConfig {
                base_url: var("FOLIO_MEDIA_URL").unwrap_or_else(|| DEFAULT_MEDIA_URL.to_string()),
                cloud,
                upload_preset,
            }),
            (None, None) => None,
            _ => {
                log::warn!("Only one of FOLIO_MEDIA_CLOUD / FOLIO_MEDIA_PRESET is set; uploads disabled");
                None
            }
        };

        Ok(Self {
            api_url,
            media,
            timeout,
        })
    }
}
