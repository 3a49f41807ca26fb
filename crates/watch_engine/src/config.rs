use std::path::PathBuf;
use std::time::Duration;

use watch_core::ChatId;

use crate::{ClassifierRules, FetchSettings, DEFAULT_API_BASE};

pub const DEFAULT_TARGET_URL: &str = "https://www.nike.com.ar/experiences";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(300);
pub const DEFAULT_STORAGE_DIR: &str = "storage";

pub const SUBSCRIBERS_FILENAME: &str = "subscribers.txt";
pub const STATE_FILENAME: &str = "last_state.txt";
pub const LOG_FILENAME: &str = "bot.log";

/// Everything the orchestrator needs, fixed at construction.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub bot_token: String,
    /// Always subscribed, even if it never sent `/start`.
    pub default_chat_id: Option<ChatId>,
    pub target_url: String,
    pub poll_interval: Duration,
    pub storage_dir: PathBuf,
    pub api_base: String,
    pub rules: ClassifierRules,
    pub fetch: FetchSettings,
}

impl WatchConfig {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            default_chat_id: None,
            target_url: DEFAULT_TARGET_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            api_base: DEFAULT_API_BASE.to_string(),
            rules: ClassifierRules::default(),
            fetch: FetchSettings::default(),
        }
    }

    pub fn subscribers_path(&self) -> PathBuf {
        self.storage_dir.join(SUBSCRIBERS_FILENAME)
    }

    pub fn state_path(&self) -> PathBuf {
        self.storage_dir.join(STATE_FILENAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.storage_dir.join(LOG_FILENAME)
    }
}
