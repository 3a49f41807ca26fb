use std::sync::Arc;

use pretty_assertions::assert_eq;
use watch_core::Availability;
use watch_engine::{
    find_signup_links, ClassifierRules, FailureKind, FetchSettings, ReqwestFetcher,
    StateClassifier,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UPCOMING_PAGE: &str = r#"
<html><body>
  <h1>Nike Run Buenos Aires</h1>
  <a href="/experiences/run-ba">Próximamente</a>
  <a href="/calzado">Inscribite al newsletter</a>
  <a>Inscribite</a>
</body></html>
"#;

const OPEN_PAGE: &str = r#"
<html><body>
  <a href="/experiences/run-ba-10k"><span>¡Inscríbite!</span></a>
  <a href="/experiences/run-ba-5k">INSCRIBITE ACÁ</a>
  <a href="/experiences/run-ba-21k">Agotado</a>
</body></html>
"#;

#[test]
fn page_without_matching_anchors_has_no_links() {
    assert!(find_signup_links(UPCOMING_PAGE, &ClassifierRules::default()).is_empty());
}

#[test]
fn matching_anchors_resolve_against_site_origin() {
    let links = find_signup_links(OPEN_PAGE, &ClassifierRules::default());
    assert_eq!(
        links,
        vec![
            "https://www.nike.com.ar/experiences/run-ba-10k".to_string(),
            "https://www.nike.com.ar/experiences/run-ba-5k".to_string(),
        ]
    );
}

#[test]
fn absolute_hrefs_are_kept() {
    let html = r#"<a href="https://events.example/experiences/x">Inscribite</a>"#;
    let links = find_signup_links(html, &ClassifierRules::default());
    assert_eq!(links, vec!["https://events.example/experiences/x".to_string()]);
}

#[test]
fn custom_rules_are_honoured() {
    let rules = ClassifierRules {
        path_marker: "/race/".to_string(),
        keyword: "Regístrate".to_string(),
        site_origin: "https://run.example".to_string(),
    };
    let html = r#"<a href="/race/1">registrate ya</a><a href="/experiences/2">Inscribite</a>"#;
    assert_eq!(
        find_signup_links(html, &rules),
        vec!["https://run.example/race/1".to_string()]
    );
}

async fn classifier_for(server: &MockServer, body: &str, status: u16) -> StateClassifier {
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(status).set_body_raw(body.to_string(), "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()).unwrap());
    StateClassifier::new(
        fetcher,
        format!("{}/page", server.uri()),
        ClassifierRules::default(),
    )
}

#[tokio::test]
async fn classify_reports_upcoming() {
    let server = MockServer::start().await;
    let classifier = classifier_for(&server, UPCOMING_PAGE, 200).await;

    let classification = classifier.classify().await.unwrap();
    assert_eq!(classification.availability, Availability::Upcoming);
    assert!(classification.signup_links.is_empty());
}

#[tokio::test]
async fn classify_reports_open_for_signup() {
    let server = MockServer::start().await;
    let classifier = classifier_for(&server, OPEN_PAGE, 200).await;

    let classification = classifier.classify().await.unwrap();
    assert_eq!(classification.availability, Availability::OpenForSignup);
    assert_eq!(classification.signup_links.len(), 2);
}

#[tokio::test]
async fn classify_reads_server_error_pages() {
    let server = MockServer::start().await;
    let classifier = classifier_for(&server, "<html><body>Error 500</body></html>", 500).await;

    let classification = classifier.classify().await.unwrap();
    assert_eq!(classification.availability, Availability::Upcoming);
    assert!(classification.signup_links.is_empty());
}

#[tokio::test]
async fn classify_surfaces_fetch_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0u8; 4], "image/png"))
        .mount(&server)
        .await;
    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()).unwrap());
    let classifier = StateClassifier::new(
        fetcher,
        format!("{}/page", server.uri()),
        ClassifierRules::default(),
    );

    let err = classifier.classify().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "image/png".to_string()
        }
    );
}
