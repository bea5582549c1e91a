use thiserror::Error;

/// Everything that can go wrong talking to the hosted store.
///
/// The caller decides how loudly to fail: entity views log and fall back
/// to an empty list, the lead form shows a generic banner.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store endpoint is not configured")]
    Unconfigured,
    #[error("store request failed: {message}")]
    Request { message: String },
    #[error("store responded {status}: {message}")]
    Response { status: u16, message: String },
    #[error("expected {expected} response, got {got:?}")]
    WrongContentType {
        expected: String,
        got: Option<String>,
    },
}

#[cfg(feature = "wasm")]
impl From<gloo::net::Error> for StoreError {
    fn from(err: gloo::net::Error) -> Self {
        StoreError::Request {
            message: err.to_string(),
        }
    }
}
