pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{CompletionService, ExplainQueryUseCase};

pub use cli::Commands;

pub use connector::{GroqCompletion, MockCompletion};

pub use domain::{build_prompt, AnalysisResult, Credential, DomainError, Submission};
