//! folio-relay binary.

use clap::Parser;
use folio_relay::{HttpMailer, RelayConfig, Server};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,folio_relay=debug")),
        )
        .init();

    let config = RelayConfig::parse();
    config.validate()?;

    let mailer = HttpMailer::new(&config)?;
    Server::new(config, Arc::new(mailer)).serve().await?;
    Ok(())
}
