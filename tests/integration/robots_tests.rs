use crate::{crawl_server, mount_page, seed};
use sumi_sweep::config::UserAgentConfig;
use sumi_sweep::crawler::build_http_client;
use sumi_sweep::robots::{load_robots, RobotsError, WILDCARD_AGENT};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_robots_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_load_robots_rules() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /admin"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&UserAgentConfig::default()).unwrap();
    let policy = load_robots(&client, &seed(&mock_server)).await.unwrap();

    let base = mock_server.uri();
    assert!(policy.is_allowed(WILDCARD_AGENT, &format!("{}/", base)));
    assert!(!policy.is_allowed(WILDCARD_AGENT, &format!("{}/admin/users", base)));
}

#[tokio::test]
async fn test_missing_robots_allows_everything() {
    let mock_server = MockServer::start().await;
    mount_robots_status(&mock_server, 404).await;
    mount_page(&mock_server, "/", "<title>Home</title>", 1).await;

    let result = crawl_server(&mock_server).await;

    assert_eq!(result.len(), 1);
    assert_eq!(result.pages[0].title, "Home");
}

#[tokio::test]
async fn test_forbidden_robots_disallows_everything() {
    let mock_server = MockServer::start().await;
    mount_robots_status(&mock_server, 403).await;
    mount_page(&mock_server, "/", "<title>Home</title>", 0).await;

    let result = crawl_server(&mock_server).await;

    assert!(result.is_empty());
    assert_eq!(result.stats.disallowed, 1);
}

#[tokio::test]
async fn test_robots_server_error_aborts_crawl() {
    let mock_server = MockServer::start().await;
    mount_robots_status(&mock_server, 500).await;
    mount_page(&mock_server, "/", "<title>Home</title>", 0).await;

    let result = crawl_server(&mock_server).await;

    assert!(result.is_empty());
    assert_eq!(result.stats.urls_dequeued, 0);
}

#[tokio::test]
async fn test_robots_server_error_reported() {
    let mock_server = MockServer::start().await;
    mount_robots_status(&mock_server, 503).await;

    let client = build_http_client(&UserAgentConfig::default()).unwrap();
    let err = load_robots(&client, &seed(&mock_server)).await.unwrap_err();

    assert!(matches!(err, RobotsError::UnexpectedStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_robots_fetched_from_origin_root() {
    let mock_server = MockServer::start().await;
    mount_robots_status(&mock_server, 404).await;

    let client = build_http_client(&UserAgentConfig::default()).unwrap();
    let deep_seed = url::Url::parse(&format!("{}/docs/guide/intro.html", mock_server.uri())).unwrap();

    assert!(load_robots(&client, &deep_seed).await.is_ok());
}
