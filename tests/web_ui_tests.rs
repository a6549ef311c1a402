mod common;

use std::sync::Arc;

use sql_explainer::MockCompletion;

use common::spawn_web_ui;

async fn post_analyze(base_url: &str, query: &str, api_key: &str) -> String {
    let response = reqwest::Client::new()
        .post(format!("{base_url}/analyze"))
        .form(&[("query", query), ("api_key", api_key)])
        .send()
        .await
        .expect("POST /analyze");
    assert!(response.status().is_success());
    response.text().await.expect("page body")
}

#[tokio::test]
async fn health_answers_ok() {
    let base_url = spawn_web_ui(Arc::new(MockCompletion::new())).await;
    let body = reqwest::get(format!("{base_url}/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn index_renders_form_and_idle_hint() {
    let base_url = spawn_web_ui(Arc::new(MockCompletion::new())).await;
    let page = reqwest::get(format!("{base_url}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(page.contains("AI-Powered SQL Query Explainer"));
    assert!(page.contains("name=\"query\""));
    assert!(page.contains("type=\"password\""));
    assert!(page.contains("Analyze Query"));
    assert!(page.contains("get started!"));
}

#[tokio::test]
async fn empty_query_shows_warning_without_dispatch() {
    let mock = Arc::new(MockCompletion::replying("unused"));
    let base_url = spawn_web_ui(mock.clone()).await;

    let page = post_analyze(&base_url, "   ", "gsk_key").await;

    assert!(page.contains("⚠️ Please enter a SQL query to analyze!"));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn missing_key_shows_warning_without_dispatch() {
    let mock = Arc::new(MockCompletion::replying("unused"));
    let base_url = spawn_web_ui(mock.clone()).await;

    let page = post_analyze(&base_url, "SELECT 1", "").await;

    assert!(page.contains("⚠️ Please enter your Groq API key!"));
    assert!(page.contains(">\nSELECT 1</textarea>"), "query is kept in the form");
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn successful_analysis_is_rendered_as_markdown() {
    let reply = "1. **This selects active customers...**\n<b>not markup</b>";
    let mock = Arc::new(MockCompletion::replying(reply));
    let base_url = spawn_web_ui(mock.clone()).await;

    let page = post_analyze(
        &base_url,
        "SELECT name FROM customers WHERE status = 'active'",
        "gsk_secret_value",
    )
    .await;

    assert!(page.contains("✅ Analysis Complete!"));
    assert!(page.contains("<strong>This selects active customers...</strong>"));
    assert!(page.contains("&lt;b&gt;not markup&lt;/b&gt;"));
    assert!(!page.contains("<b>not markup"));
    assert!(!page.contains("gsk_secret_value"), "API key must not be echoed");
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn service_failure_is_shown_and_server_keeps_serving() {
    let mock = Arc::new(MockCompletion::failing(
        "API returned 401 Unauthorized: Invalid API Key",
    ));
    let base_url = spawn_web_ui(mock.clone()).await;

    let page = post_analyze(&base_url, "SELECT 1", "gsk_wrong").await;
    assert!(page.contains("❌ Error: API returned 401 Unauthorized: Invalid API Key"));

    let page = post_analyze(&base_url, "SELECT 2", "gsk_wrong").await;
    assert!(page.contains("❌ Error:"));
    assert_eq!(mock.calls(), 2);
}
