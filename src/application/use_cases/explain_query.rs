use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::CompletionService;
use crate::domain::{build_prompt, AnalysisResult, Credential, DomainError, Submission};

/// Runs one submission through validate → build prompt → dispatch.
///
/// Holds no per-request state: every call to [`execute`](Self::execute) is
/// independent, so one instance can serve any number of sessions.
pub struct ExplainQueryUseCase {
    completion_service: Arc<dyn CompletionService>,
}

impl ExplainQueryUseCase {
    pub fn new(completion_service: Arc<dyn CompletionService>) -> Self {
        Self { completion_service }
    }

    /// Validate the submission and, if it passes, dispatch it.
    ///
    /// Returns `Err` only for local validation failures, in which case the
    /// completion service is never called. Service failures come back as
    /// [`AnalysisResult::Failure`].
    pub async fn execute(&self, submission: Submission) -> Result<AnalysisResult, DomainError> {
        let submission_id = Uuid::new_v4();

        let submission = submission.validate().inspect_err(|e| {
            info!(%submission_id, "Rejected submission: {}", e);
        })?;

        let prompt = build_prompt(submission.query_text());
        debug!(
            %submission_id,
            query_len = submission.query_text().len(),
            prompt_len = prompt.len(),
            "Built analysis prompt"
        );

        info!(
            %submission_id,
            model = self.completion_service.model_name(),
            "Dispatching analysis"
        );
        let start_time = Instant::now();
        let result = self.dispatch(submission.credential(), &prompt).await;
        let duration = start_time.elapsed();

        match &result {
            AnalysisResult::Success { text } => info!(
                %submission_id,
                response_len = text.len(),
                "Analysis complete in {:.2}s",
                duration.as_secs_f64()
            ),
            AnalysisResult::Failure { message } => warn!(
                %submission_id,
                "Analysis failed after {:.2}s: {}",
                duration.as_secs_f64(),
                message
            ),
        }

        Ok(result)
    }

    /// Issue exactly one completion call and fold its outcome into an
    /// [`AnalysisResult`]. No retries.
    pub async fn dispatch(&self, credential: &Credential, prompt: &str) -> AnalysisResult {
        match self.completion_service.complete(credential, prompt).await {
            Ok(text) => AnalysisResult::success(text),
            Err(e) => AnalysisResult::failure(e.to_string()),
        }
    }
}
