#![allow(dead_code)]

use std::path::Path;

use watch_engine::{FetchSettings, TelegramClient, WatchConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TOKEN: &str = "TEST:token";

/// One `sendMessage` call as the mock server saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: Option<String>,
}

pub fn init_logging() {
    watch_logging::initialize_for_tests();
}

pub fn telegram_client(server: &MockServer) -> TelegramClient {
    TelegramClient::new(&server.uri(), TOKEN, &FetchSettings::default()).expect("client")
}

pub fn config_for(server: &MockServer, storage: &Path) -> WatchConfig {
    let mut config = WatchConfig::new(TOKEN);
    config.api_base = server.uri();
    config.target_url = format!("{}/page", server.uri());
    config.storage_dir = storage.to_path_buf();
    config
}

pub async fn mount_send_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .mount(server)
        .await;
}

pub async fn mount_updates(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/bot{TOKEN}/getUpdates")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

pub async fn mount_page(server: &MockServer, html: &str) {
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(html.to_string(), "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

pub async fn sent_messages(server: &MockServer) -> Vec<SentMessage> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path().ends_with("/sendMessage"))
        .map(decode_send)
        .collect()
}

fn decode_send(request: &Request) -> SentMessage {
    let mut message = SentMessage {
        chat_id: String::new(),
        text: String::new(),
        parse_mode: None,
    };
    for (key, value) in url::form_urlencoded::parse(&request.body) {
        match key.as_ref() {
            "chat_id" => message.chat_id = value.into_owned(),
            "text" => message.text = value.into_owned(),
            "parse_mode" => message.parse_mode = Some(value.into_owned()),
            _ => {}
        }
    }
    message
}
