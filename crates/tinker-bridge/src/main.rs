//! tinker-bridge: WebSocket display bridge for Tinker chat sessions.
//!
//! Each connected view gets its own session and transcript. User
//! messages are forwarded to the configured Claude backend with the
//! credential the view supplied, and replies (or `Error:` messages) are
//! sent back on the same socket.

mod backend;
mod cli;
mod connection;
mod protocol;
mod server;

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use tinker_ai::ClaudeClient;
use tinker_common::{ConfigError, TinkerError};
use tinker_config::TinkerConfig;

use crate::connection::ConnectionLimits;

fn load_config(path: Option<&str>) -> Result<TinkerConfig, ConfigError> {
    match path {
        Some(path) => tinker_config::load_from_path(Path::new(path)),
        None => tinker_config::load_config(),
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Config picks the default log level, so load it before logging is up
    // and report the outcome afterwards.
    let loaded = load_config(args.config.as_deref());
    let log_directive = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => config.logging.level.directive(),
        Err(_) => "tinker=info".to_string(),
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| log_directive.into()),
        )
        .init();

    tracing::info!("tinker-bridge v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        TinkerConfig::default()
    });

    if let Err(e) = run(args, config).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

async fn run(args: cli::Args, mut config: TinkerConfig) -> tinker_common::Result<()> {
    if let Some(bind) = args.bind {
        config.bridge.bind = bind;
    }
    if let Some(port) = args.port {
        config.bridge.port = u32::from(port);
    }

    let claude = backend::claude_config(&config.backend);
    tracing::info!(
        model = %claude.model,
        max_tokens = claude.max_tokens,
        max_retries = claude.max_retries,
        "Backend configured"
    );
    let gateway = ClaudeClient::new(claude).map_err(|e| TinkerError::Ai(e.to_string()))?;

    let addr = config.bridge.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("tinker-bridge listening on {}", addr);

    let limits = ConnectionLimits {
        max_input_len: config.bridge.max_input_len as usize,
    };

    tokio::select! {
        _ = server::serve(listener, Arc::new(gateway), limits) => {}
        result = tokio::signal::ctrl_c() => {
            result.map_err(|e| TinkerError::Bridge(format!("signal handler failed: {e}")))?;
            tracing::info!("Interrupt received, shutting down");
        }
    }
    Ok(())
}
