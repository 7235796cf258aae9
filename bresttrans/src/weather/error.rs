//! Weather client error types.

use std::fmt;

/// Errors from the weather HTTP client.
#[derive(Debug)]
pub enum WeatherError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Response body was not the expected JSON shape
    Json { message: String },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Invalid or missing API key
    Unauthorized,
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::Http(e) => write!(f, "HTTP error: {e}"),
            WeatherError::Json { message } => write!(f, "JSON parse error: {message}"),
            WeatherError::Api { status, message } => {
                write!(f, "weather API error {status}: {message}")
            }
            WeatherError::Unauthorized => write!(f, "unauthorized (invalid weather API key)"),
        }
    }
}

impl std::error::Error for WeatherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WeatherError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Http(err)
    }
}
