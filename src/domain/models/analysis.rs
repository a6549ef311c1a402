/// Outcome of a single dispatch to the completion endpoint.
///
/// Lives for one render pass; nothing is cached between submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    Success { text: String },
    Failure { message: String },
}

impl AnalysisResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success { text } => Some(text),
            Self::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}
