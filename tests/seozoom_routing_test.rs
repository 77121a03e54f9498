//! End-to-end tests for the SEOZoom tool against a mock API.

mod common;

use common::{RecordingSink, context_with, init_tracing};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;
use toolbelt_core::{SeoZoomSettings, Status, Tool};
use toolbelt_seozoom::{NOT_RECOGNIZED, SeoZoomClient, SeoZoomTool, operation_tools};

fn tool_for(base_url: String, api_key: &str) -> SeoZoomTool {
    let client = SeoZoomClient::new(SeoZoomSettings {
        api_key: api_key.to_string(),
        base_url,
        history_date: "2025-06-01".to_string(),
    })
    .unwrap();
    SeoZoomTool::new(Arc::new(client))
}

#[tokio::test]
async fn test_prompt_reaches_expected_endpoint() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/domains/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "global-key".into()),
            Matcher::UrlEncoded("action".into(), "metricshistory".into()),
            Matcher::UrlEncoded("db".into(), "fr".into()),
            Matcher::UrlEncoded("domain".into(), "example.com".into()),
            Matcher::UrlEncoded("date".into(), "2025-06-01".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"visibility": 42}"#)
        .create_async()
        .await;

    let tool = tool_for(server.url(), "global-key");
    let sink = Arc::new(RecordingSink::default());
    let response = tool
        .execute(
            context_with(json!({}), sink.clone()),
            json!({"prompt": "Mostrami lo storico metriche per il dominio example.com per il database francia"}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.text(), Some(r#"{"visibility":42}"#));
    assert_eq!(response.result["operation"], "domain_metrics_history");
    assert_eq!(response.result["database"], "fr");
    assert_eq!(sink.statuses().await, vec![Status::InProgress, Status::Success]);
}

#[tokio::test]
async fn test_user_key_overrides_global_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/projects/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "user-key".into()),
            Matcher::UrlEncoded("action".into(), "list".into()),
            Matcher::UrlEncoded("db".into(), "uk".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"id": 7}]"#)
        .create_async()
        .await;

    let tool = tool_for(server.url(), "global-key");
    let sink = Arc::new(RecordingSink::default());
    let response = tool
        .execute(
            context_with(json!({"SEOZOOM_API_KEY": "user-key"}), sink),
            json!({"prompt": "lista dei progetti in regno unito"}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.text(), Some(r#"[{"id":7}]"#));
}

#[tokio::test]
async fn test_upstream_error_is_reported_not_raised() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/keywords/")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let tool = tool_for(server.url(), "global-key");
    let sink = Arc::new(RecordingSink::default());
    let response = tool
        .execute(
            context_with(json!({}), sink.clone()),
            json!({"prompt": "metriche per la parola chiave seo"}),
        )
        .await
        .unwrap();

    let payload: serde_json::Value = serde_json::from_str(response.text().unwrap()).unwrap();
    assert!(payload["error"].as_str().unwrap().contains("500"));

    let events = sink.events().await;
    let last = events.last().unwrap();
    assert_eq!(last.status, Status::Error);
    assert!(last.done);
}

#[tokio::test]
async fn test_unrecognized_prompt_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let tool = tool_for(server.url(), "global-key");
    let sink = Arc::new(RecordingSink::default());
    let response = tool
        .execute(
            context_with(json!({}), sink.clone()),
            json!({"prompt": "tell me a joke"}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.text(), Some(NOT_RECOGNIZED));
    assert!(sink.events().await.is_empty());
}

#[tokio::test]
async fn test_operation_tool_calls_endpoint_directly() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/urls/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "intentgap".into()),
            Matcher::UrlEncoded("url".into(), "https://example.com/article/".into()),
            Matcher::UrlEncoded("db".into(), "it".into()),
            Matcher::UrlEncoded("limit".into(), "100".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = Arc::new(
        SeoZoomClient::new(SeoZoomSettings {
            api_key: "global-key".to_string(),
            base_url: server.url(),
            ..SeoZoomSettings::default()
        })
        .unwrap(),
    );
    let tools = operation_tools(client);
    let tool = tools
        .iter()
        .find(|t| t.name() == "get_url_intent_gap")
        .unwrap();

    let response = tool
        .execute(
            context_with(json!({}), Arc::new(RecordingSink::default())),
            json!({"subject": "https://example.com/article/", "db": "xx"}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.text(), Some("{}"));
}
