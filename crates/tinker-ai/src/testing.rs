//! Scripted `LlmGateway` for exercising sessions without a backend.
//!
//! Available to this crate's tests and, through the `test-support`
//! feature, to downstream crates' tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{AiError, Completion, Credential, LlmGateway, TokenUsage, Turn};

/// Replays scripted results in order and records every call.
///
/// Once the script runs out, calls fail with a network error.
#[derive(Default)]
pub struct ScriptedGateway {
    results: Mutex<VecDeque<Result<Completion, AiError>>>,
    calls: Mutex<Vec<(Vec<Turn>, String)>>,
    /// When set, each call waits for a notification before answering.
    hold: Option<Arc<Notify>>,
}

impl ScriptedGateway {
    pub fn new(results: Vec<Result<Completion, AiError>>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results.into()),
            ..Default::default()
        })
    }

    /// Like `new`, but every call blocks until `hold` is notified.
    pub fn held(results: Vec<Result<Completion, AiError>>, hold: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results.into()),
            hold: Some(hold),
            ..Default::default()
        })
    }

    /// Gateway answering each call with the next text, without usage.
    pub fn replying(replies: &[&str]) -> Arc<Self> {
        Self::new(
            replies
                .iter()
                .map(|text| {
                    Ok(Completion {
                        text: text.to_string(),
                        usage: TokenUsage::default(),
                    })
                })
                .collect(),
        )
    }

    /// History and exposed credential of every call, in call order.
    pub fn calls(&self) -> Vec<(Vec<Turn>, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn histories(&self) -> Vec<Vec<Turn>> {
        self.calls().into_iter().map(|(history, _)| history).collect()
    }

    pub fn credentials(&self) -> Vec<String> {
        self.calls().into_iter().map(|(_, cred)| cred).collect()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(
        &self,
        history: &[Turn],
        credential: &Credential,
    ) -> Result<Completion, AiError> {
        self.calls
            .lock()
            .unwrap()
            .push((history.to_vec(), credential.expose().to_string()));
        if let Some(ref hold) = self.hold {
            hold.notified().await;
        }
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::Network("script exhausted".into())))
    }
}
