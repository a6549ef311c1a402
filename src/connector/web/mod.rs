//! Web UI: a single page with the query form and the analysis output.
//!
//! **Public API**: [`run_server`], [`run_server_on_listener`], [`router`].

mod app;
mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use crate::connector::api::Container;

pub use app::{router, AnalyzeForm};
pub use page::{render_page, PageState};

/// Serve the UI on an existing listener. Tests bind `127.0.0.1:0` and pass it in.
pub async fn run_server_on_listener(listener: TcpListener, container: Arc<Container>) -> Result<()> {
    let addr = listener.local_addr()?;
    info!(
        model = container.model(),
        mock = container.mock_completions(),
        "SQL Explainer listening on http://{}",
        addr
    );

    axum::serve(listener, router(container)).await?;
    Ok(())
}

pub async fn run_server(addr: SocketAddr, container: Arc<Container>) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    run_server_on_listener(listener, container).await
}
