//! Integration test: CurlFetcher against a local HTML server.

mod common;

use common::html_server::{self, Page, NOT_FOUND_BODY};
use urlfeat_core::config::FetchConfig;
use urlfeat_core::error::FetchError;
use urlfeat_core::fetch::{CurlFetcher, PageFetcher};

const PAGE: &str = "<html><head><title>t</title></head><body><a href=\"/x\">x</a></body></html>";

#[test]
fn fetch_ok_page() {
    let base = html_server::start(vec![("/", Page::ok(PAGE))]);
    let fetcher = CurlFetcher::default();
    let result = fetcher.fetch(&format!("{}/", base)).expect("fetch");
    assert_eq!(result.status, 200);
    assert!(result.is_success());
    assert_eq!(result.body, PAGE);
}

#[test]
fn fetch_error_status_is_still_a_result() {
    let base = html_server::start(vec![]);
    let fetcher = CurlFetcher::default();
    let result = fetcher.fetch(&format!("{}/nope", base)).expect("fetch");
    assert_eq!(result.status, 404);
    assert!(!result.is_success());
    assert_eq!(result.body, NOT_FOUND_BODY);
}

#[test]
fn fetch_follows_redirects() {
    let base = html_server::start(vec![("/", Page::ok(PAGE))]);
    let fetcher = CurlFetcher::default();
    let result = fetcher.fetch(&format!("{}/redirect", base)).expect("fetch");
    assert_eq!(result.status, 200);
    assert_eq!(result.body, PAGE);
    assert_eq!(result.effective_url.as_deref(), Some(format!("{}/", base).as_str()));
}

#[test]
fn fetch_rejects_relative_url() {
    let fetcher = CurlFetcher::default();
    match fetcher.fetch("example.com/login") {
        Err(FetchError::InvalidUrl { url, .. }) => assert_eq!(url, "example.com/login"),
        other => panic!("expected InvalidUrl, got {:?}", other),
    }
}

#[test]
fn fetch_aborts_oversized_body() {
    let big = "x".repeat(64 * 1024);
    let base = html_server::start(vec![("/big", Page::ok(&big))]);
    let fetcher = CurlFetcher::new(FetchConfig {
        max_body_bytes: 1024,
        ..FetchConfig::default()
    });
    match fetcher.fetch(&format!("{}/big", base)) {
        Err(FetchError::TooLarge { limit }) => assert_eq!(limit, 1024),
        other => panic!("expected TooLarge, got {:?}", other),
    }
}

#[test]
fn fetch_connection_refused_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let fetcher = CurlFetcher::new(FetchConfig {
        connect_timeout_secs: 2,
        timeout_secs: 2,
        ..FetchConfig::default()
    });
    let err = fetcher
        .fetch(&format!("http://127.0.0.1:{}/", port))
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "{:?}", err);
}
