//! Watch engine: page fetching, chat API, file stores and effect execution.
mod classify;
mod config;
mod fetch;
mod listener;
mod messenger;
mod orchestrator;
mod persist;
mod subscribers;
mod telegram;
mod types;

pub use classify::{find_signup_links, ClassifierRules, StateClassifier};
pub use config::{
    WatchConfig, DEFAULT_POLL_INTERVAL, DEFAULT_STORAGE_DIR, DEFAULT_TARGET_URL, LOG_FILENAME,
    STATE_FILENAME, SUBSCRIBERS_FILENAME,
};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use listener::SubscriptionListener;
pub use messenger::{Messenger, Recipients, SendReport};
pub use orchestrator::Orchestrator;
pub use persist::{ensure_storage_dir, PersistError, StateFile};
pub use subscribers::SubscriberStore;
pub use telegram::{
    parse_updates, Chat, ChatApi, IncomingMessage, RawChatId, SendOutcome, TelegramClient,
    Update, DEFAULT_API_BASE,
};
pub use types::{ChatError, EngineError, FailureKind, FetchError, FetchMetadata, FetchOutput};
