use std::sync::Arc;

use watch_core::{ChatId, MessageFormat};
use watch_logging::{watch_error, watch_info};

use crate::{ChatApi, SubscriberStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    All,
    One(ChatId),
}

/// Per-recipient outcome of one [`Messenger::send`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendReport {
    pub delivered: Vec<ChatId>,
    pub failed: Vec<(ChatId, String)>,
}

impl SendReport {
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }
}

/// Sends texts through the chat API, one independent request per recipient.
#[derive(Clone)]
pub struct Messenger {
    api: Arc<dyn ChatApi>,
    store: SubscriberStore,
}

impl Messenger {
    pub fn new(api: Arc<dyn ChatApi>, store: SubscriberStore) -> Self {
        Self { api, store }
    }

    /// Never fails: every problem is logged and recorded in the report.
    pub async fn send(&self, text: &str, format: MessageFormat, to: Recipients) -> SendReport {
        let recipients = match to {
            Recipients::One(id) => vec![id],
            Recipients::All => match self.store.list_all() {
                Ok(ids) => ids,
                Err(err) => {
                    watch_error!("Could not read subscribers: {err}");
                    return SendReport::default();
                }
            },
        };

        let mut report = SendReport::default();
        for chat_id in recipients {
            match self.api.send_message(&chat_id, text, format).await {
                Ok(outcome) if outcome.is_delivered() => {
                    watch_info!("Message sent to {chat_id}");
                    report.delivered.push(chat_id);
                }
                Ok(outcome) => {
                    watch_error!(
                        "Error sending to {chat_id}: status {} {}",
                        outcome.status,
                        outcome.body
                    );
                    report.failed.push((chat_id, outcome.body));
                }
                Err(err) => {
                    watch_error!("Error sending to {chat_id}: {err}");
                    report.failed.push((chat_id, err.to_string()));
                }
            }
        }
        report
    }
}
