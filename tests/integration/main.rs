//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and drive full crawls
//! end-to-end.

mod crawl_tests;
mod robots_tests;

use sumi_sweep::config::Config;
use sumi_sweep::crawler::Coordinator;
use sumi_sweep::CrawlResult;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a robots.txt with the given body
pub async fn mount_robots(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mounts an HTML page that must be fetched exactly `times` times
pub async fn mount_page(server: &MockServer, page_path: &str, html: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .expect(times)
        .mount(server)
        .await;
}

/// Seed URL for the root of the mock server
pub fn seed(server: &MockServer) -> Url {
    Url::parse(&format!("{}/", server.uri())).expect("Failed to parse mock server URI")
}

/// Absolute URL for a path on the mock server
pub fn url_for(server: &MockServer, page_path: &str) -> String {
    format!("{}{}", server.uri(), page_path)
}

/// Runs a full crawl from the mock server root
pub async fn crawl_server(server: &MockServer) -> CrawlResult {
    let coordinator =
        Coordinator::new(&Config::default(), seed(server)).expect("Failed to create coordinator");
    coordinator.run().await
}
