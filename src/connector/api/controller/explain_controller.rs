use std::time::Duration;

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::connector::render::{render_text, render_validation_text, PENDING_MESSAGE};
use crate::{AnalysisResult, Submission};

use super::super::Container;

pub struct ExplainController<'a> {
    container: &'a Container,
    show_spinner: bool,
}

impl<'a> ExplainController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            container,
            show_spinner: true,
        }
    }

    pub fn without_spinner(mut self) -> Self {
        self.show_spinner = false;
        self
    }

    /// Run one submission and return the rendered success text.
    ///
    /// Validation and service failures come back as `Err` carrying the
    /// rendered message, so the caller can print it and exit non-zero.
    pub async fn explain(&self, query: String, api_key: String) -> Result<String> {
        let use_case = self.container.explain_use_case();
        let submission = Submission::new(query, api_key);

        let spinner = self.show_spinner.then(Self::spinner);
        let outcome = use_case.execute(submission).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match outcome {
            Err(e) => bail!(render_validation_text(&e)),
            Ok(result @ AnalysisResult::Failure { .. }) => bail!(render_text(&result)),
            Ok(result) => Ok(render_text(&result)),
        }
    }

    fn spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(PENDING_MESSAGE);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}
