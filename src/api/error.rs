//! API error taxonomy.
//!
//! Every failure is either the request never completing (transport) or the
//! server answering with a non-2xx status and, usually, a detail string.

use hms_model::ErrorBody;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("{}", server_message(*status, detail.as_deref()))]
    Server { status: u16, detail: Option<String> },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("could not encode request body: {0}")]
    Encode(String),

    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
}

fn server_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("server returned {}: {}", status, d),
        None => format!("server returned {}", status),
    }
}

impl ApiError {
    /// Build a server error from a non-2xx response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message());
        Self::Server { status, detail }
    }

    /// Server-provided detail, if the server sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text for an inline form message: the server detail, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}
