use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::CompletionService;
use crate::domain::{Credential, DomainError};

const MOCK_MODEL: &str = "mock-completion";

/// Canned reply used by `--mock-completions`.
pub const DEMO_REPLY: &str = "\
1. **Plain English Explanation**\n\
This is an offline demo reply. No request was sent to the completion service.\n\n\
2. **Key Operations**\n\
- None: the query was not analyzed.\n\n\
3. **Performance Analysis**\n\
- Not available in mock mode.\n\n\
4. **Optimization Suggestions**\n\
- Restart without --mock-completions to analyze real queries.";

/// Scripted [`CompletionService`] that never touches the network.
///
/// Replies with a fixed text or fails with a fixed message, counts calls, and
/// remembers the last prompt it was given.
pub struct MockCompletion {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::replying(DEMO_REPLY)
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    fn model_name(&self) -> &str {
        MOCK_MODEL
    }

    async fn complete(&self, _credential: &Credential, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_prompt.lock() {
            *guard = Some(prompt.to_string());
        }
        debug!("MockCompletion: answering prompt of {} bytes", prompt.len());

        self.reply.clone().map_err(DomainError::service)
    }
}
