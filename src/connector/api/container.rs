use std::sync::Arc;

use tracing::debug;

use crate::application::{CompletionService, ExplainQueryUseCase};
use crate::connector::adapter::{GroqCompletion, MockCompletion, DEFAULT_BASE_URL, DEFAULT_MODEL};

pub struct ContainerConfig {
    /// Answer every submission with a canned reply instead of calling the API.
    pub mock_completions: bool,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    pub model: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            mock_completions: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Wires the completion service into the use cases. Shared read-only by every
/// request; holds no per-session data.
pub struct Container {
    completion_service: Arc<dyn CompletionService>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let completion_service: Arc<dyn CompletionService> = if config.mock_completions {
            debug!("Using mock completion service");
            Arc::new(MockCompletion::new())
        } else {
            debug!(
                "Using Groq completion service at {} with model {}",
                config.base_url, config.model
            );
            Arc::new(GroqCompletion::new(&config.model, &config.base_url))
        };

        Self {
            completion_service,
            config,
        }
    }

    /// Build a container around an existing service, e.g. a scripted mock in tests.
    pub fn with_completion_service(
        completion_service: Arc<dyn CompletionService>,
        config: ContainerConfig,
    ) -> Self {
        Self {
            completion_service,
            config,
        }
    }

    pub fn explain_use_case(&self) -> ExplainQueryUseCase {
        ExplainQueryUseCase::new(self.completion_service.clone())
    }

    pub fn model(&self) -> &str {
        self.completion_service.model_name()
    }

    pub fn mock_completions(&self) -> bool {
        self.config.mock_completions
    }
}
