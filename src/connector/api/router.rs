use std::io::Read;

use anyhow::{Context, Result};

use crate::Commands;

use super::container::Container;
use super::controller::ExplainController;

pub struct Router<'a> {
    explain_controller: ExplainController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            explain_controller: ExplainController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Explain { query, api_key } => {
                let query = match query {
                    Some(query) => query,
                    None => read_stdin()?,
                };
                self.explain_controller
                    .explain(query, api_key.unwrap_or_default())
                    .await
            }
            Commands::Serve { .. } => unreachable!("serve command is handled separately in main"),
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut query = String::new();
    std::io::stdin()
        .read_to_string(&mut query)
        .context("failed to read query from stdin")?;
    Ok(query)
}
