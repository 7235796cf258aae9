//! Drive HTTP client.

use std::path::PathBuf;

use chrono::Local;
use serde::Deserialize;
use tracing::debug;

use super::error::DriveError;
use super::{AccessToken, DriveUploader, FileId};

/// Default upload endpoint for the Drive v3 API.
const DEFAULT_UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3/files";

/// Configuration for the Drive client.
#[derive(Debug, Clone)]
pub struct DriveConfig {
    /// Upload endpoint (defaults to production Drive)
    pub upload_url: String,
    /// Directory for the scratch CSV written before upload
    pub scratch_dir: PathBuf,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DriveConfig {
    /// Create a new config writing scratch files to `scratch_dir`.
    pub fn new(scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            scratch_dir: scratch_dir.into(),
            timeout_secs: 60,
        }
    }

    /// Set a custom upload URL (for testing).
    pub fn with_upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Minimal response of the file-create call.
#[derive(Debug, Deserialize)]
struct CreatedFile {
    id: String,
}

/// Drive API client.
#[derive(Debug, Clone)]
pub struct DriveClient {
    http: reqwest::Client,
    upload_url: String,
    scratch_dir: PathBuf,
}

impl DriveClient {
    /// Create a new Drive client with the given configuration.
    pub fn new(config: DriveConfig) -> Result<Self, DriveError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            upload_url: config.upload_url,
            scratch_dir: config.scratch_dir,
        })
    }

    /// Create `filename` inside `folder_id` with `csv` as its content.
    ///
    /// The CSV is first written to a scratch file in the configured
    /// cache directory, then sent in a single multipart create call
    /// carrying the metadata (name, parent folder) and the `text/csv`
    /// media. Only a fully successful acknowledgment with a file id
    /// counts as success.
    pub async fn upload_csv(
        &self,
        csv: &str,
        folder_id: &str,
        filename: &str,
        token: &AccessToken,
    ) -> Result<FileId, DriveError> {
        let scratch = self
            .scratch_dir
            .join(format!("records_{}.csv", Local::now().timestamp_millis()));
        tokio::fs::write(&scratch, csv.as_bytes()).await?;
        let bytes = tokio::fs::read(&scratch).await?;

        let metadata = serde_json::json!({
            "name": filename,
            "parents": [folder_id],
        });

        let metadata_part = reqwest::multipart::Part::text(metadata.to_string())
            .mime_str("application/json; charset=UTF-8")?;
        let media_part = reqwest::multipart::Part::bytes(bytes)
            .mime_str("text/csv")?
            .file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .part("metadata", metadata_part)
            .part("media", media_part);

        let response = self
            .http
            .post(&self.upload_url)
            .query(&[("uploadType", "multipart"), ("fields", "id")])
            .bearer_auth(token.as_str())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DriveError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DriveError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;
        let created: CreatedFile = serde_json::from_str(&body).map_err(|e| DriveError::Json {
            message: e.to_string(),
        })?;

        debug!("uploaded {filename} as Drive file {}", created.id);
        Ok(FileId(created.id))
    }
}

impl DriveUploader for DriveClient {
    async fn upload_csv(
        &self,
        csv: &str,
        folder_id: &str,
        filename: &str,
        token: &AccessToken,
    ) -> Result<FileId, DriveError> {
        DriveClient::upload_csv(self, csv, folder_id, filename, token).await
    }
}
