use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single lookup attempt.
///
/// `Display` yields the exact message shown to the user; the underlying
/// cause of a failed lookup is kept as the error source for logging only.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Por favor, digite um CEP válido com 8 dígitos.")]
    InvalidInput { len: usize },
    #[error("CEP não encontrado ou inválido.")]
    LookupFailed(#[source] FailureCause),
}

/// why the address lookup service could not produce an address
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl From<FailureCause> for LookupError {
    fn from(cause: FailureCause) -> Self {
        LookupError::LookupFailed(cause)
    }
}
