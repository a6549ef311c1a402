//! Axum router and handlers.
//!
//! `GET /` renders the idle page, `POST /analyze` runs one submission and
//! renders the page with its outcome, `GET /health` answers `ok`.

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::debug;

use crate::connector::api::Container;
use crate::domain::Submission;

use super::page::{render_page, PageState};

/// Form fields posted by the page.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub api_key: String,
}

pub fn router(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze))
        .route("/health", get(|| async { "ok" }))
        .with_state(container)
}

async fn index(State(container): State<Arc<Container>>) -> Html<String> {
    Html(render_page("", &PageState::Idle, container.model()))
}

/// Runs the submission and renders the page around its outcome. All state for
/// the render lives in this call; nothing is kept once the response is sent.
async fn analyze(
    State(container): State<Arc<Container>>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    debug!("POST /analyze ({} byte query)", form.query.len());

    let AnalyzeForm { query, api_key } = form;
    let use_case = container.explain_use_case();
    let state = match use_case.execute(Submission::new(query.clone(), api_key)).await {
        Ok(result) => PageState::Done(result),
        Err(e) => PageState::Invalid(e),
    };

    Html(render_page(&query, &state, container.model()))
}
