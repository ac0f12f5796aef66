use crate::{crawl_server, mount_page, mount_robots, url_for};
use sumi_sweep::crawler::NO_TITLE;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_two_page_site() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body><a href="/about">About</a></body></html>"#,
        1,
    )
    .await;

    mount_page(
        &mock_server,
        "/about",
        r#"<html><head><title>About</title></head><body><a href="https://other.com/x">Elsewhere</a></body></html>"#,
        1,
    )
    .await;

    let result = crawl_server(&mock_server).await;

    assert_eq!(result.len(), 2);
    assert_eq!(
        result.urls(),
        vec![url_for(&mock_server, "/"), url_for(&mock_server, "/about")]
    );
    assert_eq!(result.pages[0].title, "Home");
    assert_eq!(result.pages[1].title, "About");
    assert_eq!(result.pages[1].status_code, 200);

    // Off-domain links are recorded but never followed
    assert_eq!(result.pages[1].internal_links, vec!["https://other.com/x"]);
    assert_eq!(result.stats.links_enqueued, 1);
}

#[tokio::test]
async fn test_breadth_first_order() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/b">B</a>"#,
        1,
    )
    .await;
    mount_page(&mock_server, "/a", r#"<a href="/a/deep">Deep</a>"#, 1).await;
    mount_page(&mock_server, "/b", r#"<title>B</title>"#, 1).await;
    mount_page(&mock_server, "/a/deep", r#"<title>Deep</title>"#, 1).await;

    let result = crawl_server(&mock_server).await;

    assert_eq!(
        result.urls(),
        vec![
            url_for(&mock_server, "/"),
            url_for(&mock_server, "/a"),
            url_for(&mock_server, "/b"),
            url_for(&mock_server, "/a/deep"),
        ]
    );
}

#[tokio::test]
async fn test_each_url_fetched_once() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    // Every page links to every other page, including itself
    let links = r#"<a href="/">Home</a><a href="/a">A</a><a href="/b">B</a>"#;
    mount_page(&mock_server, "/", links, 1).await;
    mount_page(&mock_server, "/a", links, 1).await;
    mount_page(&mock_server, "/b", links, 1).await;

    let result = crawl_server(&mock_server).await;

    assert_eq!(result.len(), 3);
    assert_eq!(result.stats.fetches_attempted(), 3);
    // /b is queued twice (from / and from /a) before it is first dequeued
    assert!(result.stats.duplicates_skipped >= 1);
}

#[tokio::test]
async fn test_robots_disallowed_page_never_fetched() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nDisallow: /private").await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <a href="/public">Public</a>
        <a href="/private">Private</a>
        </body></html>"#,
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/public",
        r#"<title>Public</title><a href="/private">Private again</a>"#,
        1,
    )
    .await;
    mount_page(&mock_server, "/private", "<title>Private</title>", 0).await;

    let result = crawl_server(&mock_server).await;

    assert_eq!(
        result.urls(),
        vec![url_for(&mock_server, "/"), url_for(&mock_server, "/public")]
    );
    // Disallowed URLs are not marked visited, so each queued copy is checked
    assert_eq!(result.stats.disallowed, 2);
}

#[tokio::test]
async fn test_fetch_failure_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    mount_page(
        &mock_server,
        "/",
        r#"<title>Home</title><a href="/broken">Broken</a><a href="/ok">OK</a>"#,
        1,
    )
    .await;

    // Redirects to a closed port, so the request fails at the transport level
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", "http://127.0.0.1:9/gone"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/ok", "<title>OK</title>", 1).await;

    let result = crawl_server(&mock_server).await;

    assert_eq!(
        result.urls(),
        vec![url_for(&mock_server, "/"), url_for(&mock_server, "/ok")]
    );
    assert_eq!(result.stats.fetch_failures, 1);
}

#[tokio::test]
async fn test_empty_body_is_skipped() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    mount_page(&mock_server, "/", r#"<a href="/empty">Empty</a>"#, 1).await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = crawl_server(&mock_server).await;

    assert_eq!(result.urls(), vec![url_for(&mock_server, "/")]);
    assert_eq!(result.stats.fetch_failures, 1);
}

#[tokio::test]
async fn test_error_status_with_body_is_recorded() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    mount_page(&mock_server, "/", r#"<a href="/missing">Missing</a>"#, 1).await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("<html><title>Not Found</title></html>"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = crawl_server(&mock_server).await;

    assert_eq!(result.len(), 2);
    assert_eq!(result.pages[1].status_code, 404);
    assert_eq!(result.pages[1].title, "Not Found");
}

#[tokio::test]
async fn test_different_host_same_server_not_followed() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    // Same socket, different network location string
    let port = mock_server.address().port();
    let html = format!(
        r#"<a href="http://localhost:{}/elsewhere">Elsewhere</a><a href="/here">Here</a>"#,
        port
    );
    mount_page(&mock_server, "/", &html, 1).await;
    mount_page(&mock_server, "/here", "<title>Here</title>", 1).await;
    mount_page(&mock_server, "/elsewhere", "<title>Elsewhere</title>", 0).await;

    let result = crawl_server(&mock_server).await;

    assert_eq!(result.len(), 2);
    assert_eq!(result.stats.links_discovered, 2);
    assert_eq!(result.stats.links_enqueued, 1);
}

#[tokio::test]
async fn test_metadata_defaults() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    mount_page(&mock_server, "/", "<html><body><p>bare</p></body></html>", 1).await;

    let result = crawl_server(&mock_server).await;

    let page = &result.pages[0];
    assert_eq!(page.title, NO_TITLE);
    assert_eq!(page.canonical, "");
    assert_eq!(page.description, "");
    assert!(page.internal_links.is_empty());
}

#[tokio::test]
async fn test_redirect_recorded_under_requested_url() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    mount_page(&mock_server, "/", r#"<a href="/old">Old</a>"#, 1).await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/new", "<title>New</title>", 1).await;

    let result = crawl_server(&mock_server).await;

    assert_eq!(result.len(), 2);
    assert_eq!(result.pages[1].url, url_for(&mock_server, "/old"));
    assert_eq!(result.pages[1].title, "New");
}

#[tokio::test]
async fn test_fragment_links_are_distinct_urls() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    // "#top" resolves to "<root>/#top", which is not the visited "<root>/"
    mount_page(&mock_server, "/", r##"<title>Home</title><a href="#top">Top</a>"##, 2).await;

    let result = crawl_server(&mock_server).await;

    assert_eq!(
        result.urls(),
        vec![url_for(&mock_server, "/"), url_for(&mock_server, "/#top")]
    );
}
