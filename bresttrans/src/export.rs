//! Local file export sink.

use std::path::{Path, PathBuf};

use chrono::Local;

/// Error writing an export file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Filesystem write failed
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Write CSV text to a timestamped file in `dir`.
///
/// The filename is `bresttrans_data_<yyyyMMdd_HHmmss>.csv`. Timestamp
/// resolution is one second; two exports within the same second would
/// collide, which is acceptable for manual, infrequent use.
pub async fn export_to_file(csv: &str, dir: &Path) -> Result<PathBuf, ExportError> {
    let filename = format!(
        "bresttrans_data_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(filename);
    tokio::fs::write(&path, csv.as_bytes()).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_utf8_csv_with_timestamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let text = "Время,Погода\n2024-05-01 10:00:00,Ясно\n";

        let path = export_to_file(text, dir.path()).await.unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("bresttrans_data_"));
        assert!(name.ends_with(".csv"));
        // bresttrans_data_ + yyyyMMdd_HHmmss + .csv
        assert_eq!(name.len(), "bresttrans_data_".len() + 15 + 4);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, text);
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert!(export_to_file("x\n", &gone).await.is_err());
    }
}
