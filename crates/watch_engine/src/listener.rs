use std::sync::Arc;

use watch_core::{messages, ChatId, MessageFormat};
use watch_logging::{watch_error, watch_info};

use crate::{ChatApi, EngineError, Messenger, Recipients, SubscriberStore};

/// Turns `/start` messages seen by the bot into subscriptions.
pub struct SubscriptionListener {
    api: Arc<dyn ChatApi>,
    store: SubscriberStore,
    messenger: Messenger,
}

impl SubscriptionListener {
    pub fn new(api: Arc<dyn ChatApi>, store: SubscriberStore, messenger: Messenger) -> Self {
        Self {
            api,
            store,
            messenger,
        }
    }

    /// One listener cycle. Returns the newly registered chat ids; any
    /// failure is logged and yields an empty list.
    pub async fn poll_new_subscribers(&self) -> Vec<ChatId> {
        match self.register_new().await {
            Ok(added) => added,
            Err(err) => {
                watch_error!("Error listening for /start: {err}");
                Vec::new()
            }
        }
    }

    async fn register_new(&self) -> Result<Vec<ChatId>, EngineError> {
        let updates = self.api.get_updates().await?;
        let requested: Vec<ChatId> = updates.iter().filter_map(|u| u.start_request()).collect();
        if requested.is_empty() {
            return Ok(Vec::new());
        }

        let added = self.store.add(requested)?;
        for chat_id in &added {
            self.messenger
                .send(
                    messages::SUBSCRIBED,
                    MessageFormat::Markdown,
                    Recipients::One(chat_id.clone()),
                )
                .await;
            watch_info!("New subscriber chat_id: {chat_id}");
        }
        Ok(added)
    }
}
