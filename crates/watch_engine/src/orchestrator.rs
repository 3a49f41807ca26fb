use std::sync::Arc;

use watch_core::{update, Effect, Msg, WatchState};
use watch_logging::{set_poll_cycle, watch_error, watch_info, watch_warn};

use crate::persist::ensure_storage_dir;
use crate::{
    ChatApi, EngineError, Fetcher, Messenger, Recipients, ReqwestFetcher, StateClassifier,
    StateFile, SubscriberStore, SubscriptionListener, TelegramClient, WatchConfig,
};

/// Owns the poll loop and the last known availability.
pub struct Orchestrator {
    config: WatchConfig,
    classifier: StateClassifier,
    listener: SubscriptionListener,
    messenger: Messenger,
    state_file: StateFile,
    state: WatchState,
    cycle: u64,
}

impl Orchestrator {
    /// Wires the HTTP-backed fetcher and Telegram client.
    pub fn new(config: WatchConfig) -> Result<Self, EngineError> {
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.clone())?);
        let api = Arc::new(TelegramClient::new(
            &config.api_base,
            &config.bot_token,
            &config.fetch,
        )?);
        Self::with_parts(config, fetcher, api)
    }

    pub fn with_parts(
        config: WatchConfig,
        fetcher: Arc<dyn Fetcher>,
        api: Arc<dyn ChatApi>,
    ) -> Result<Self, EngineError> {
        ensure_storage_dir(&config.storage_dir)?;

        let store = SubscriberStore::new(config.subscribers_path());
        store.ensure_exists()?;
        if let Some(chat_id) = config.default_chat_id.clone() {
            for added in store.add([chat_id])? {
                watch_info!("Default chat_id subscribed: {added}");
            }
        }

        let state_file = StateFile::new(config.state_path());
        let last_known = match state_file.load() {
            Ok(last_known) => last_known,
            Err(err) => {
                watch_warn!(
                    "Could not read {:?}, starting without a known state: {err}",
                    state_file.path()
                );
                None
            }
        };
        match last_known {
            Some(availability) => watch_info!("Restored state: {availability}"),
            None => watch_info!("No persisted state yet"),
        }

        let messenger = Messenger::new(api.clone(), store.clone());
        let listener = SubscriptionListener::new(api, store, messenger.clone());
        let classifier =
            StateClassifier::new(fetcher, config.target_url.clone(), config.rules.clone());

        Ok(Self {
            config,
            classifier,
            listener,
            messenger,
            state_file,
            state: WatchState::restored(last_known),
            cycle: 0,
        })
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    pub async fn announce_start(&mut self) {
        self.dispatch(Msg::Started).await;
    }

    /// Listen for subscribers, classify the page, notify on change.
    pub async fn run_cycle(&mut self) {
        self.cycle += 1;
        set_poll_cycle(self.cycle);

        self.listener.poll_new_subscribers().await;

        match self.classifier.classify().await {
            Ok(classification) => self.dispatch(Msg::PageClassified(classification)).await,
            Err(err) => watch_error!("Error checking {}: {err}", self.config.target_url),
        }
    }

    /// Runs until the process is killed.
    pub async fn run(mut self) {
        self.announce_start().await;
        watch_info!(
            "Watching {} every {}s",
            self.config.target_url,
            self.config.poll_interval.as_secs()
        );
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    async fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.apply(effect).await;
        }
    }

    async fn apply(&self, effect: Effect) {
        match effect {
            Effect::Broadcast { text, format } => {
                let report = self.messenger.send(&text, format, Recipients::All).await;
                if !report.failed.is_empty() {
                    watch_warn!(
                        "Broadcast reached {} of {} subscriber(s)",
                        report.delivered.len(),
                        report.attempted()
                    );
                }
            }
            Effect::PersistAvailability(availability) => {
                match self.state_file.save(availability) {
                    Ok(()) => watch_info!("State saved: {availability}"),
                    Err(err) => watch_error!("Error saving state: {err}"),
                }
            }
            Effect::Note(message) => watch_info!("{message}"),
        }
    }
}
