use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing query: enter a SQL query to analyze")]
    MissingQuery,

    #[error("Missing credential: enter an API key")]
    MissingCredential,

    #[error("{0}")]
    ServiceError(String),
}

impl DomainError {
    pub fn service(msg: impl Into<String>) -> Self {
        Self::ServiceError(msg.into())
    }

    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::ServiceError(_))
    }
}
