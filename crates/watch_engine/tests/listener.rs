mod common;

use std::fs;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use watch_core::messages;
use watch_engine::{ChatApi, Messenger, SubscriberStore, SubscriptionListener};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{init_logging, mount_send_ok, mount_updates, sent_messages, telegram_client, TOKEN};

const UPDATES: &str = r#"{
    "ok": true,
    "result": [
        {"update_id": 10, "message": {"text": "/start", "chat": {"id": 123}}},
        {"update_id": 11, "message": {"text": "/start", "chat": {"id": 123}}},
        {"update_id": 12, "message": {"text": "hola", "chat": {"id": 456}}},
        {"update_id": 13, "message": {"text": "/start", "chat": {"id": 789}}}
    ]
}"#;

fn listener_for(server: &MockServer, store: SubscriberStore) -> SubscriptionListener {
    let api: Arc<dyn ChatApi> = Arc::new(telegram_client(server));
    let messenger = Messenger::new(api.clone(), store.clone());
    SubscriptionListener::new(api, store, messenger)
}

#[tokio::test]
async fn start_commands_register_and_welcome_new_chats() {
    init_logging();
    let server = MockServer::start().await;
    mount_updates(&server, UPDATES).await;
    mount_send_ok(&server).await;

    let temp = TempDir::new().unwrap();
    let store_path = temp.path().join("subscribers.txt");
    fs::write(&store_path, "789\n").unwrap();
    let store = SubscriberStore::new(store_path.clone());
    let listener = listener_for(&server, store);

    let added = listener.poll_new_subscribers().await;

    assert_eq!(added, vec!["123".to_string()]);
    assert_eq!(fs::read_to_string(&store_path).unwrap(), "789\n123\n");
    let sent = sent_messages(&server).await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].chat_id, "123");
    assert_eq!(sent[0].text, messages::SUBSCRIBED);
}

#[tokio::test]
async fn already_known_chats_get_no_second_welcome() {
    init_logging();
    let server = MockServer::start().await;
    mount_updates(&server, UPDATES).await;
    mount_send_ok(&server).await;

    let temp = TempDir::new().unwrap();
    let store = SubscriberStore::new(temp.path().join("subscribers.txt"));
    store.ensure_exists().unwrap();
    let listener = listener_for(&server, store.clone());

    let first = listener.poll_new_subscribers().await;
    let size_after_first = fs::metadata(store.path()).unwrap().len();
    let second = listener.poll_new_subscribers().await;

    assert_eq!(first, vec!["123".to_string(), "789".to_string()]);
    assert!(second.is_empty());
    assert_eq!(fs::metadata(store.path()).unwrap().len(), size_after_first);
    assert_eq!(sent_messages(&server).await.len(), 2);
}

#[tokio::test]
async fn api_errors_end_the_cycle_quietly() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/bot{TOKEN}/getUpdates")))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"ok":false,"description":"Unauthorized"}"#),
        )
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let store = SubscriberStore::new(temp.path().join("subscribers.txt"));
    let listener = listener_for(&server, store.clone());

    assert!(listener.poll_new_subscribers().await.is_empty());
    assert!(store.list_all().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_updates_are_tolerated() {
    init_logging();
    let server = MockServer::start().await;
    mount_updates(&server, "not json").await;

    let temp = TempDir::new().unwrap();
    let store = SubscriberStore::new(temp.path().join("subscribers.txt"));
    let listener = listener_for(&server, store);

    assert!(listener.poll_new_subscribers().await.is_empty());
}
