//! Minimal Telegram Bot API client.
//!
//! Only the two calls the watcher needs: `sendMessage` (form encoded) and
//! `getUpdates` (no offset, every call sees whatever Telegram still holds).

use serde::Deserialize;
use watch_core::{ChatId, MessageFormat};

use crate::{ChatError, FetchSettings};

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Raw result of one `sendMessage` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub status: u16,
    pub body: String,
}

impl SendOutcome {
    pub fn is_delivered(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IncomingMessage {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub chat: Option<Chat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Chat {
    pub id: RawChatId,
}

/// Telegram sends numeric ids; channel usernames arrive as strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawChatId {
    Number(i64),
    Text(String),
}

impl RawChatId {
    pub fn to_chat_id(&self) -> ChatId {
        match self {
            RawChatId::Number(id) => id.to_string(),
            RawChatId::Text(id) => id.clone(),
        }
    }
}

impl Update {
    /// Chat that sent exactly `/start`, if this update is such a message.
    pub fn start_request(&self) -> Option<ChatId> {
        let message = self.message.as_ref()?;
        if message.text.as_deref() != Some("/start") {
            return None;
        }
        message.chat.as_ref().map(|chat| chat.id.to_chat_id())
    }
}

#[derive(Debug, Deserialize)]
struct UpdatesEnvelope {
    #[serde(default)]
    result: Vec<Update>,
}

/// Parses a `getUpdates` response body.
pub fn parse_updates(body: &str) -> Result<Vec<Update>, ChatError> {
    let envelope: UpdatesEnvelope = serde_json::from_str(body)?;
    Ok(envelope.result)
}

#[async_trait::async_trait]
pub trait ChatApi: Send + Sync {
    /// Sends one message. Non-200 answers are returned, not raised.
    async fn send_message(
        &self,
        chat_id: &str,
        text: &str,
        format: MessageFormat,
    ) -> Result<SendOutcome, ChatError>;

    async fn get_updates(&self) -> Result<Vec<Update>, ChatError>;
}

/// No `Debug`: the endpoint embeds the bot token.
#[derive(Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    endpoint: String,
}

impl TelegramClient {
    pub fn new(api_base: &str, token: &str, settings: &FetchSettings) -> Result<Self, ChatError> {
        let client = settings.client()?;
        let endpoint = format!("{}/bot{}", api_base.trim_end_matches('/'), token);
        Ok(Self { client, endpoint })
    }
}

#[async_trait::async_trait]
impl ChatApi for TelegramClient {
    async fn send_message(
        &self,
        chat_id: &str,
        text: &str,
        format: MessageFormat,
    ) -> Result<SendOutcome, ChatError> {
        let mut form = vec![("chat_id", chat_id), ("text", text)];
        if let Some(mode) = format.parse_mode() {
            form.push(("parse_mode", mode));
        }

        let response = self
            .client
            .post(format!("{}/sendMessage", self.endpoint))
            .form(&form)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(SendOutcome { status, body })
    }

    async fn get_updates(&self) -> Result<Vec<Update>, ChatError> {
        let response = self
            .client
            .get(format!("{}/getUpdates", self.endpoint))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_updates(&body)
    }
}
