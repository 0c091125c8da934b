use std::time::Duration;

use console_client::{
    ApiSettings, ApiStats, FailureKind, ReqwestSearchApi, SearchApi, SearchHit,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ReqwestSearchApi {
    ReqwestSearchApi::new(ApiSettings {
        base_url: format!("{}/api", server.uri()),
        ..ApiSettings::default()
    })
    .expect("valid settings")
}

#[tokio::test]
async fn search_encodes_query_and_sends_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "rust & <tokio>"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "rust & <tokio>",
            "results": [
                {
                    "title": "Tokio",
                    "url": "https://tokio.rs",
                    "description": null,
                    "content": "An async runtime",
                    "domain": "tokio.rs",
                    "last_updated": "2024-03-05T10:20:30"
                },
                { "url": "https://docs.rs" }
            ],
            "total": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let hits = api_for(&server)
        .search("rust & <tokio>", 20)
        .await
        .expect("search ok");

    assert_eq!(
        hits,
        vec![
            SearchHit {
                title: Some("Tokio".to_string()),
                url: Some("https://tokio.rs".to_string()),
                description: None,
                content: Some("An async runtime".to_string()),
                domain: Some("tokio.rs".to_string()),
                last_updated: Some("2024-03-05T10:20:30".to_string()),
            },
            SearchHit {
                url: Some("https://docs.rs".to_string()),
                ..SearchHit::default()
            },
        ]
    );
}

#[tokio::test]
async fn search_failure_carries_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
        .mount(&server)
        .await;

    let err = api_for(&server).search("q", 20).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "boom");
    assert_eq!(err.to_string(), "boom");
}

#[tokio::test]
async fn non_json_error_body_uses_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).stats().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert_eq!(err.message, "Failed to load stats");
}

#[tokio::test]
async fn error_status_with_success_shaped_body_is_still_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/domains"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "domains": ["a.com"] })))
        .mount(&server)
        .await;

    let err = api_for(&server).domains().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert_eq!(err.message, "Failed to load domains");
}

#[tokio::test]
async fn add_domain_posts_single_field_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/domains"))
        .and(body_json(json!({ "domain": "example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Domain example.com added successfully",
            "domain": "example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let message = api_for(&server)
        .add_domain("example.com")
        .await
        .expect("add ok");

    assert_eq!(message, "Domain example.com added successfully");
}

#[tokio::test]
async fn add_domain_rejection_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/domains"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Domain cannot be empty" })),
        )
        .mount(&server)
        .await;

    let err = api_for(&server).add_domain(" ").await.unwrap_err();
    assert_eq!(err.message, "Domain cannot be empty");
}

#[tokio::test]
async fn crawl_posts_url_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .and(body_json(json!({ "urls": ["http://a.com", "http://b.com"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Successfully indexed 2/2 pages",
            "indexed_count": 2,
            "total_urls": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let urls = vec!["http://a.com".to_string(), "http://b.com".to_string()];
    let message = api_for(&server).crawl(&urls).await.expect("crawl ok");

    assert_eq!(message, "Successfully indexed 2/2 pages");
}

#[tokio::test]
async fn domains_and_stats_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/domains"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "domains": ["a.com", "b.com"], "total": 2 })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_pages": 12,
            "total_domains": 2,
            "pages_per_domain": { "a.com": 10, "b.com": 2 }
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert_eq!(
        api.domains().await.unwrap(),
        vec!["a.com".to_string(), "b.com".to_string()]
    );

    let stats = api.stats().await.unwrap();
    assert_eq!(stats.total_pages, 12);
    assert_eq!(stats.total_domains, 2);
    assert_eq!(stats.pages_per_domain.get("a.com"), Some(&10));
}

#[tokio::test]
async fn missing_stats_counters_default_to_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let stats = api_for(&server).stats().await.unwrap();
    assert_eq!(stats, ApiStats::default());
}

#[tokio::test]
async fn malformed_success_body_is_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = api_for(&server).domains().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidBody);
}

#[tokio::test]
async fn slow_backend_times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "total_pages": 1, "total_domains": 1 })),
        )
        .mount(&server)
        .await;

    let api = ReqwestSearchApi::new(ApiSettings {
        base_url: format!("{}/api/", server.uri()),
        request_timeout: Some(Duration::from_millis(50)),
        ..ApiSettings::default()
    })
    .unwrap();

    let err = api.stats().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = ReqwestSearchApi::new(ApiSettings {
        base_url: "not a url".to_string(),
        ..ApiSettings::default()
    })
    .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
