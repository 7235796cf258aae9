//! Google Drive upload sink.
//!
//! A single authenticated file-create call per upload, targeting the
//! surveyor's own folder. Credential acquisition (the sign-in flow) is
//! out of scope: an access token scoped to app-created files arrives
//! here as an opaque string.

mod client;
mod error;

pub use client::{DriveClient, DriveConfig};
pub use error::DriveError;

use std::fmt;

/// Opaque bearer credential for the Drive API.
///
/// Scoped to files this application created. Debug output hides the
/// token so it cannot end up in logs.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the Authorization header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Id of a file created on Drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileId(pub String);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that can create a CSV file on the remote drive.
///
/// The history flow talks to this seam so tests can run the full
/// upload path without the network.
pub trait DriveUploader {
    /// Create `filename` with `csv` as content inside `folder_id`.
    fn upload_csv(
        &self,
        csv: &str,
        folder_id: &str,
        filename: &str,
        token: &AccessToken,
    ) -> impl Future<Output = Result<FileId, DriveError>> + Send;
}

/// Extract the folder id from a Drive folder link.
///
/// The id is the substring between `folders/` and an optional `?`.
/// Returns `None` when the link carries no `folders/` segment or the
/// segment is empty.
pub fn extract_folder_id(link: &str) -> Option<String> {
    let rest = link.split_once("folders/")?.1;
    let id = rest.split('?').next().unwrap_or(rest);
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_id_between_marker_and_query() {
        assert_eq!(
            extract_folder_id("https://drive.google.com/drive/folders/1AbC_dEf?usp=sharing"),
            Some("1AbC_dEf".to_string())
        );
    }

    #[test]
    fn folder_id_without_query() {
        assert_eq!(
            extract_folder_id("https://drive.google.com/drive/folders/1AbC_dEf"),
            Some("1AbC_dEf".to_string())
        );
    }

    #[test]
    fn missing_or_empty_segment_is_none() {
        assert_eq!(extract_folder_id("https://drive.google.com/"), None);
        assert_eq!(
            extract_folder_id("https://drive.google.com/drive/folders/"),
            None
        );
        assert_eq!(
            extract_folder_id("https://drive.google.com/drive/folders/?usp=sharing"),
            None
        );
        assert_eq!(extract_folder_id(""), None);
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = AccessToken::new("ya29.secret");
        assert_eq!(format!("{token:?}"), "AccessToken(..)");
        assert_eq!(token.as_str(), "ya29.secret");
    }
}
