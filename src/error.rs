use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlackError {
    /// The request never produced a usable response (connection refused,
    /// timeout, body read failure).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-200 status code.
    #[error("Slack API didn't return a 200 status code (got {status})")]
    Transport { status: u16 },

    /// The endpoint answered 200 but flagged the call as failed.
    #[error("Slack API errored with: {message}")]
    Api { message: String },

    /// The endpoint answered 200 but the body was not the expected JSON.
    #[error("failed to decode {method} response: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The cutoff lands outside the representable calendar.
    #[error("cutoff of {days} days is out of range")]
    CutoffOutOfRange { days: u32 },
}

pub type Result<T> = std::result::Result<T, SlackError>;
