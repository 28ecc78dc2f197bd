// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeniusError>;

#[derive(Debug, Error)]
pub enum GeniusError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A status line was received but the response body could not be read.
    #[error("API response error")]
    ResponseError,

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(#[from] reqwest::Error),

    #[error("Bad status ({0})")]
    BadStatus(u16),

    #[error("Unexpected status ({0})")]
    UnexpectedStatus(u16),

    #[error("No data")]
    NoData,

    #[error("No Genius access token configured")]
    MissingApiKey,
}
