//! Relay configuration from flags and environment variables.

use crate::{Error, Result};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};

/// Default request body limit (5 MiB), large enough for inline images.
pub const DEFAULT_BODY_LIMIT: usize = 5 * 1024 * 1024;

/// Contact form mail relay
#[derive(Parser, Debug, Clone)]
#[command(name = "folio-relay", author, version, about, long_about = None)]
pub struct RelayConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Origin allowed to call the relay from a browser (with credentials)
    #[arg(long, env = "CLIENT_URI")]
    pub client_uri: Option<String>,

    /// Mail account the relay sends from
    #[arg(long, env = "MAIL_ID")]
    pub mail_id: String,

    /// Credential of the mail account
    #[arg(long, env = "APP_PASSWORD", hide_env_values = true)]
    pub app_password: String,

    /// Mail provider send endpoint
    #[arg(long, env = "MAIL_API_URL")]
    pub mail_api_url: String,

    /// Where contact messages are delivered (defaults to the sending account)
    #[arg(long, env = "MAIL_TO")]
    pub mail_to: Option<String>,

    /// Maximum request body size in bytes
    #[arg(long, env = "BODY_LIMIT", default_value_t = DEFAULT_BODY_LIMIT)]
    pub body_limit: usize,
}

impl RelayConfig {
    /// Address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Delivery address.
    pub fn recipient(&self) -> &str {
        self.mail_to.as_deref().unwrap_or(&self.mail_id)
    }

    /// Check values clap cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if !self.mail_id.contains('@') {
            return Err(Error::Config(format!(
                "MAIL_ID must be an email address, got '{}'",
                self.mail_id
            )));
        }
        if self.app_password.is_empty() {
            return Err(Error::Config("APP_PASSWORD must not be empty".into()));
        }
        if !self.mail_api_url.starts_with("http://") && !self.mail_api_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "MAIL_API_URL must be an http(s) URL, got '{}'",
                self.mail_api_url
            )));
        }
        if let Some(origin) = &self.client_uri {
            http::HeaderValue::from_str(origin).map_err(|_| {
                Error::Config(format!("CLIENT_URI is not a valid origin: '{origin}'"))
            })?;
        }
        if self.body_limit == 0 {
            return Err(Error::Config("BODY_LIMIT must be positive".into()));
        }
        Ok(())
    }
}
