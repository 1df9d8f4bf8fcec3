use thiserror::Error;

/// Failures fetching picture metadata. Callers leave the display empty
/// on any of these; there is no retry.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("picture host answered with status {status}")]
    BadStatus { status: u16 },
}
