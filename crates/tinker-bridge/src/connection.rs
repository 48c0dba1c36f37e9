//! Per-connection handler: one WebSocket view, one chat session.

use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::WebSocketStream;

use tinker_ai::{Credential, LlmGateway, Session};

use crate::protocol::{BridgeRequest, BridgeResponse};

/// Per-view input limits.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionLimits {
    /// Longest accepted message, in characters.
    pub max_input_len: usize,
}

/// Handle a single WebSocket view until it closes.
///
/// Frames are processed in order, so a view never has two round trips
/// in flight. The session (and its transcript) is dropped on disconnect.
pub async fn handle_connection(
    ws: WebSocketStream<TcpStream>,
    addr: SocketAddr,
    gateway: Arc<dyn LlmGateway>,
    limits: ConnectionLimits,
) {
    let (mut sink, mut stream) = ws.split();
    let session = Session::new(gateway);

    tracing::info!(peer = %addr, "View connected");

    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => {
                if let Some(response) = process_frame(&session, &text, limits).await {
                    if send_response(&mut sink, &response).await.is_err() {
                        break;
                    }
                }
            }
            Ok(Message::Ping(data)) => {
                let _ = sink.send(Message::Pong(data)).await;
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {
                tracing::debug!(peer = %addr, "Ignoring non-text frame");
            }
            Err(e) => {
                tracing::debug!(peer = %addr, error = %e, "WS error");
                break;
            }
        }
    }

    tracing::info!(
        peer = %addr,
        turns = session.turn_count(),
        tokens = session.usage().total_tokens(),
        "View disconnected"
    );
}

/// Turn one inbound frame into at most one outbound response.
pub(crate) async fn process_frame(
    session: &Session,
    raw: &str,
    limits: ConnectionLimits,
) -> Option<BridgeResponse> {
    let Some(request) = BridgeRequest::from_json(raw) else {
        tracing::debug!(len = raw.len(), "Ignoring unrecognized frame");
        return None;
    };

    match request {
        BridgeRequest::Send { text, credential } => {
            // Blank input never produces a response, whatever its length.
            if text.trim().is_empty() {
                tracing::debug!("Ignoring blank input");
                return None;
            }

            let len = text.chars().count();
            if len > limits.max_input_len {
                tracing::warn!(len, max = limits.max_input_len, "Input too long");
                return Some(BridgeResponse::error(format!(
                    "message exceeds {} characters",
                    limits.max_input_len
                )));
            }

            let credential = Credential::from(credential);
            let outcome = session.handle(&text, &credential).await?;
            if outcome.is_failure() {
                tracing::debug!(turns = session.turn_count(), "Round trip reported failure");
            }
            Some(BridgeResponse::from_outcome(outcome))
        }
    }
}

/// Send a BridgeResponse as a JSON text frame.
async fn send_response(
    sink: &mut SplitSink<WebSocketStream<TcpStream>, Message>,
    response: &BridgeResponse,
) -> Result<(), tokio_tungstenite::tungstenite::Error> {
    sink.send(Message::Text(response.to_json().into())).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinker_ai::testing::ScriptedGateway;
    use tinker_ai::{AiError, Turn};

    const LIMITS: ConnectionLimits = ConnectionLimits { max_input_len: 16 };

    #[tokio::test]
    async fn send_produces_reply_response() {
        let gateway = ScriptedGateway::replying(&["Hi there"]);
        let session = Session::new(gateway.clone());

        let resp = process_frame(
            &session,
            r#"{"command":"send","text":"Hello","credential":"k1"}"#,
            LIMITS,
        )
        .await;

        assert_eq!(resp, Some(BridgeResponse::reply("Hi there")));
        assert_eq!(gateway.credentials(), vec!["k1".to_string()]);
        assert_eq!(
            session.history(),
            vec![Turn::user("Hello"), Turn::assistant("Hi there")]
        );
    }

    #[tokio::test]
    async fn backend_failure_produces_error_response() {
        let gateway = ScriptedGateway::new(vec![Err(AiError::Status {
            status: 401,
            body: "invalid api key".into(),
        })]);
        let session = Session::new(gateway);

        let resp = process_frame(
            &session,
            r#"{"command":"send","text":"Hello","apiKey":"bad"}"#,
            LIMITS,
        )
        .await;

        assert_eq!(resp, Some(BridgeResponse::reply("Error: invalid api key")));
        assert_eq!(session.history(), vec![Turn::user("Hello")]);
    }

    #[tokio::test]
    async fn blank_text_produces_nothing() {
        let gateway = ScriptedGateway::replying(&["unused"]);
        let session = Session::new(gateway.clone());

        let resp = process_frame(
            &session,
            r#"{"command":"send","text":"  ","credential":"k"}"#,
            LIMITS,
        )
        .await;

        assert_eq!(resp, None);
        assert_eq!(session.turn_count(), 0);
        assert!(gateway.credentials().is_empty());
    }

    #[tokio::test]
    async fn oversized_text_is_rejected_before_the_session() {
        let gateway = ScriptedGateway::replying(&["unused"]);
        let session = Session::new(gateway.clone());
        let frame = serde_json::json!({
            "command": "send",
            "text": "x".repeat(17),
            "credential": "k",
        })
        .to_string();

        let resp = process_frame(&session, &frame, LIMITS).await;

        assert_eq!(
            resp,
            Some(BridgeResponse::reply("Error: message exceeds 16 characters"))
        );
        assert_eq!(session.turn_count(), 0);
    }

    #[tokio::test]
    async fn oversized_blank_text_is_ignored_silently() {
        let gateway = ScriptedGateway::replying(&["unused"]);
        let session = Session::new(gateway.clone());
        let frame = serde_json::json!({
            "command": "send",
            "text": " ".repeat(17),
            "credential": "k",
        })
        .to_string();

        let resp = process_frame(&session, &frame, LIMITS).await;

        assert_eq!(resp, None);
        assert_eq!(session.turn_count(), 0);
        assert!(gateway.credentials().is_empty());
    }

    #[tokio::test]
    async fn unknown_frames_are_ignored() {
        let gateway = ScriptedGateway::replying(&["unused"]);
        let session = Session::new(gateway);

        assert_eq!(process_frame(&session, "garbage", LIMITS).await, None);
        assert_eq!(
            process_frame(&session, r#"{"command":"reset"}"#, LIMITS).await,
            None
        );
        assert_eq!(session.turn_count(), 0);
    }
}
