use std::net::TcpListener;
use std::time::Duration;

use recipe_engine::{FaultKind, FetchSettings, Fetcher, ReqwestFetcher};
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn url_for(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), route)).unwrap()
}

#[tokio::test]
async fn fetcher_returns_body_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"recipes":[]}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let output = fetcher
        .fetch(&url_for(&server, "/recipes.json"))
        .await
        .expect("fetch ok");

    assert_eq!(&output.body[..], br#"{"recipes":[]}"#);
    assert!(output
        .content_type
        .unwrap()
        .starts_with("application/json"));
}

#[tokio::test]
async fn fetcher_disables_caching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes.json"))
        .and(header("cache-control", "no-cache"))
        .and(header("pragma", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(2)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::default();
    let url = url_for(&server, "/recipes.json");

    // Both calls must reach the origin.
    fetcher.fetch(&url).await.expect("first fetch");
    fetcher.fetch(&url).await.expect("second fetch");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::default();
    let err = fetcher
        .fetch(&url_for(&server, "/missing"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FaultKind::HttpStatus(404));
    assert_eq!(err.to_string(), "The server responded with HTTP 404 Not Found.");
}

#[tokio::test]
async fn fetcher_fails_on_redirect_class_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let err = ReqwestFetcher::default()
        .fetch(&url_for(&server, "/moved"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FaultKind::HttpStatus(304));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher.fetch(&url_for(&server, "/slow")).await.unwrap_err();
    assert_eq!(err.kind, FaultKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(ResponseTemplate::new(200).set_body_string("01234567890"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher.fetch(&url_for(&server, "/large")).await.unwrap_err();
    assert_eq!(
        err.kind,
        FaultKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn fetcher_reports_connection_failure() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let url = Url::parse(&format!("http://127.0.0.1:{port}/recipes.json")).unwrap();

    let err = ReqwestFetcher::default().fetch(&url).await.unwrap_err();

    assert_eq!(err.kind, FaultKind::Connect);
    assert!(err.message.starts_with("Could not connect to the server"));
}
