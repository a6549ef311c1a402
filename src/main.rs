use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sql_explainer::connector::api::{Container, ContainerConfig, Router};
use sql_explainer::connector::web::run_server;
use sql_explainer::connector::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use sql_explainer::Commands;

#[derive(Parser)]
#[command(name = "sql-explainer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer with a canned reply instead of calling the completion API
    #[arg(long, global = true)]
    mock_completions: bool,

    /// Base URL of the OpenAI-compatible completion API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Model identifier sent with each request
    #[arg(long, global = true, default_value = DEFAULT_MODEL)]
    model: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Arc::new(Container::new(ContainerConfig {
        mock_completions: cli.mock_completions,
        base_url: cli.base_url,
        model: cli.model,
    }));

    if let Commands::Serve { port, public } = cli.command {
        let host = if public { [0, 0, 0, 0] } else { [127, 0, 0, 1] };
        let addr = SocketAddr::from((host, port));
        info!("Starting web UI on http://{}", addr);
        return run_server(addr, container).await;
    }

    let router = Router::new(&container);
    match router.route(cli.command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
