//! The user-message round trip.

use tracing::{debug, warn};

use crate::{Credential, Turn};

use super::manager::Session;
use super::types::{BusyGuard, Outcome};

impl Session {
    /// Run one round trip for `user_text`.
    ///
    /// Returns `None` for blank input, which leaves the transcript
    /// untouched. On success the reply is appended after the user turn;
    /// on failure only the user turn remains.
    pub async fn handle(&self, user_text: &str, credential: &Credential) -> Option<Outcome> {
        if user_text.trim().is_empty() {
            debug!("Ignoring blank input");
            return None;
        }

        let _guard = match BusyGuard::acquire(&self.busy) {
            Ok(guard) => guard,
            Err(e) => {
                warn!("Rejecting input while a reply is pending");
                return Some(Outcome::Failure(e.to_string()));
            }
        };

        let history = {
            let mut store = self.store();
            store.append(Turn::user(user_text));
            store.snapshot().to_vec()
        };

        debug!(turns = history.len(), "Sending conversation to gateway");

        match self.gateway.complete(&history, credential).await {
            Ok(completion) => {
                self.record_usage(&completion.usage);
                self.store().append(Turn::assistant(completion.text.clone()));
                debug!(reply_len = completion.text.len(), "Reply recorded");
                Some(Outcome::Reply(completion.text))
            }
            Err(e) => {
                debug!(error = %e, "Round trip failed; user turn kept without reply");
                Some(Outcome::Failure(e.to_string()))
            }
        }
    }
}
