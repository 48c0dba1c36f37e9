//! Accept loop: every WebSocket connection becomes its own view.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_tungstenite::accept_async;

use tinker_ai::LlmGateway;

use crate::connection::{handle_connection, ConnectionLimits};

/// Accept connections forever, spawning one task per view.
pub async fn serve(listener: TcpListener, gateway: Arc<dyn LlmGateway>, limits: ConnectionLimits) {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let gateway = gateway.clone();
                tokio::spawn(async move {
                    match accept_async(stream).await {
                        Ok(ws) => handle_connection(ws, addr, gateway, limits).await,
                        Err(e) => {
                            tracing::warn!(peer = %addr, error = %e, "WS handshake failed");
                        }
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "TCP accept error");
            }
        }
    }
}
