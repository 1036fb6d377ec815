// In memory implementation of the Notifier port.
//
// Keeps every message it is asked to send. Used by tests, and by the binary when
// no SMTP relay is configured.

use crate::shared::infrastructure::notifier::{Notifier, NotifierError, OutboundEmail};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryNotifier {
    pub sent: Mutex<Vec<OutboundEmail>>,
    offline: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotifierError> {
        if self.offline {
            return Err(NotifierError::Backend("Notifier offline".into()));
        }
        tracing::debug!(to = %email.to, subject = %email.subject, "recorded outbound email");
        self.sent.lock().await.push(email);
        Ok(())
    }
}
