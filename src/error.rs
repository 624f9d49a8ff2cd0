// src/error.rs
//
// One error type for the library. Frontends turn it into a status line (GUI)
// or an eyre report (CLI). Missing profile data is never an error.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    /// Could not reach the backend at all (DNS, refused, TLS, ...)
    #[error("request failed: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status
    #[error("backend returned HTTP {code} for {url}")]
    Status { code: u16, url: String },

    /// Body was not the JSON shape we expect
    #[error("could not decode response: {0}")]
    Decode(String),

    /// User input rejected before anything was sent
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl DashError {
    /// True for failures on the wire (the user can simply retry the fetch).
    pub fn is_network(&self) -> bool {
        matches!(self, DashError::Transport(_) | DashError::Status { .. })
    }
}

impl From<ureq::Error> for DashError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, resp) => DashError::Status {
                code,
                url: resp.get_url().to_string(),
            },
            ureq::Error::Transport(t) => DashError::Transport(t.to_string()),
        }
    }
}

impl From<serde_json::Error> for DashError {
    fn from(e: serde_json::Error) -> Self {
        DashError::Decode(e.to_string())
    }
}

impl From<figment::Error> for DashError {
    fn from(e: figment::Error) -> Self {
        DashError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
