use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use watch_engine::WatchConfig;

pub const TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";
pub const URL_VAR: &str = "WATCH_URL";
pub const INTERVAL_VAR: &str = "WATCH_INTERVAL_SECS";
pub const STORAGE_VAR: &str = "WATCH_STORAGE_DIR";

/// Reads `.env` (if present) and then the process environment.
pub fn load() -> anyhow::Result<WatchConfig> {
    // A missing .env is normal in production; real env vars still apply.
    let _ = dotenvy::dotenv();
    from_lookup(|key| std::env::var(key).ok())
}

fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<WatchConfig> {
    let get = |key: &str| {
        lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    let Some(token) = get(TOKEN_VAR) else {
        bail!("{TOKEN_VAR} is not set");
    };
    let mut config = WatchConfig::new(token);
    config.default_chat_id = get(CHAT_ID_VAR);

    if let Some(url) = get(URL_VAR) {
        config.target_url = url;
    }
    if let Some(raw) = get(INTERVAL_VAR) {
        let secs: u64 = raw
            .parse()
            .with_context(|| format!("{INTERVAL_VAR} must be a whole number of seconds, got {raw:?}"))?;
        if secs == 0 {
            bail!("{INTERVAL_VAR} must be greater than zero");
        }
        config.poll_interval = Duration::from_secs(secs);
    }
    if let Some(dir) = get(STORAGE_VAR) {
        config.storage_dir = PathBuf::from(dir);
    }
    Ok(config)
}
