//! Drive client error types.

/// Errors that can occur when uploading to Drive.
#[derive(Debug, thiserror::Error)]
pub enum DriveError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Scratch file could not be written
    #[error("failed to write scratch file: {0}")]
    Io(#[from] std::io::Error),

    /// Credential was rejected
    #[error("unauthorized: Drive token rejected")]
    Unauthorized,

    /// API returned an error status (quota, bad folder id, ...)
    #[error("Drive API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response was not the expected JSON shape
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DriveError::Api {
            status: 403,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "Drive API error 403: quota exceeded");
    }
}
