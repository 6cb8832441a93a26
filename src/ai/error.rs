use reqwest::StatusCode;

/// Failure to get any answer out of the chat-completion endpoint.
///
/// Never retried; callers decide how to report it.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("couldn't decode chat completion: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            TransportError::Api { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}
