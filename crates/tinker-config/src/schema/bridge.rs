use serde::{Deserialize, Serialize};

/// Display bridge (WebSocket host) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Address to bind the listener on.
    pub bind: String,
    pub port: u32,
    /// Longest accepted user message, in characters.
    pub max_input_len: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 19850,
            max_input_len: 16384,
        }
    }
}

impl BridgeConfig {
    /// `bind:port` string suitable for `TcpListener::bind`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
