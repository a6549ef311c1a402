use std::fmt;

use crate::domain::DomainError;

/// Secret that authorizes calls to the completion endpoint.
///
/// Supplied per request by the user and never persisted. `Debug` is redacted
/// so a credential cannot leak through log fields or error reports.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Raw secret, for building the authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl From<String> for Credential {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

impl From<&str> for Credential {
    fn from(secret: &str) -> Self {
        Self(secret.to_string())
    }
}

/// One analysis attempt: the query text and the credential to call the service with.
#[derive(Debug, Clone)]
pub struct Submission {
    query_text: String,
    credential: Credential,
}

impl Submission {
    pub fn new(query_text: impl Into<String>, credential: impl Into<Credential>) -> Self {
        Self {
            query_text: query_text.into(),
            credential: credential.into(),
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Check that both fields are present before anything is dispatched.
    ///
    /// A query made only of whitespace counts as missing. The credential is
    /// only checked for emptiness. The query is checked first, so a submission
    /// missing both reports [`DomainError::MissingQuery`].
    pub fn validate(self) -> Result<Self, DomainError> {
        if self.query_text.trim().is_empty() {
            return Err(DomainError::MissingQuery);
        }
        if self.credential.is_empty() {
            return Err(DomainError::MissingCredential);
        }
        Ok(self)
    }
}
