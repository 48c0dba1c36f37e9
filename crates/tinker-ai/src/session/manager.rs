//! Session struct and transcript access.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::conversation::ConversationStore;
use crate::{LlmGateway, TokenUsage, Turn};

use super::types::SessionState;

/// One chat session: a transcript plus the gateway it talks through.
///
/// The transcript lock is never held across the gateway call, so
/// `handle` can take `&self`; the busy flag keeps round trips one at a
/// time.
pub struct Session {
    pub(super) gateway: Arc<dyn LlmGateway>,
    /// Conversation transcript, the only mutable copy.
    pub(super) store: Mutex<ConversationStore>,
    /// Cumulative token usage reported by the backend.
    pub(super) usage: Mutex<TokenUsage>,
    /// Set while a round trip is awaiting its reply.
    pub(super) busy: AtomicBool,
}

impl Session {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            store: Mutex::new(ConversationStore::new()),
            usage: Mutex::new(TokenUsage::default()),
            busy: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.busy.load(Ordering::Acquire) {
            SessionState::AwaitingReply
        } else {
            SessionState::Idle
        }
    }

    /// Copy of the transcript, oldest first.
    pub fn history(&self) -> Vec<Turn> {
        self.store().snapshot().to_vec()
    }

    pub fn turn_count(&self) -> usize {
        self.store().len()
    }

    pub fn usage(&self) -> TokenUsage {
        *self.usage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn store(&self) -> MutexGuard<'_, ConversationStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn record_usage(&self, usage: &TokenUsage) {
        self.usage
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add(usage);
    }
}
