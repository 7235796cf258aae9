//! History flow: review, export, upload.
//!
//! Operations over the session store and the two sinks. Deleting a
//! single record or the whole list goes straight through the store;
//! this module adds the rendering of a record for the list view and
//! the export/upload pipelines with their shared emptiness policy:
//! both refuse an empty store with a notice, so neither sink ever
//! receives a header-only file.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::warn;

use crate::csv;
use crate::domain::TransportRecord;
use crate::drive::{AccessToken, DriveUploader, extract_folder_id};
use crate::export::export_to_file;
use crate::notice::Notices;
use crate::profile::UserProfile;
use crate::store::SessionStore;

/// Render one record for the history list.
pub fn format_record(record: &TransportRecord) -> String {
    format!(
        "{} — {} ({}, {})\n{} → {}\nЗаполненность остановки: {}, заполненность транспорта: {}\nВошло: {}, вышло: {}\nКоординаты: {}, {}\nПогода: {}",
        record.time,
        record.vehicle_number,
        record.route_number,
        record.transport_type,
        record.current_stop,
        record.next_stop,
        record.people_at_stop,
        record.people_in_transport,
        record.entered,
        record.exited,
        record.latitude,
        record.longitude,
        record.weather,
    )
}

/// Export the session's records to a local CSV file.
///
/// Refuses an empty store with a notice instead of writing a
/// header-only file. Returns the written path on success.
pub async fn export_records(
    store: &SessionStore,
    dir: &Path,
    notices: &Notices,
) -> Option<PathBuf> {
    if store.is_empty() {
        notices.error("Нет данных для экспорта");
        return None;
    }

    let text = csv::encode(store.records());
    match export_to_file(&text, dir).await {
        Ok(path) => {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            notices.info(format!("Файл сохранён: {name}"));
            Some(path)
        }
        Err(e) => {
            warn!("CSV export failed: {e}");
            notices.error("Ошибка при сохранении файла");
            None
        }
    }
}

/// Upload the session's records to the surveyor's Drive folder.
///
/// Preconditions are checked here, not in the sink: a non-empty store,
/// a folder id resolvable from the profile link, and a credential.
/// On a successful remote acknowledgment the store is cleared; on any
/// failure the records are kept for a retry by hand. Returns whether
/// the upload succeeded.
pub async fn upload_records<U: DriveUploader>(
    store: &mut SessionStore,
    profile: &UserProfile,
    token: Option<&AccessToken>,
    uploader: &U,
    notices: &Notices,
) -> bool {
    if store.is_empty() {
        notices.error("Нет данных для экспорта");
        return false;
    }

    let folder_id = extract_folder_id(&profile.drive_link);
    let (Some(folder_id), Some(token)) = (folder_id, token) else {
        notices.error("Ошибка: нет учётной записи или ссылки на папку");
        return false;
    };

    let filename = format!("История_{}.csv", Local::now().format("%Y%m%d_%H%M%S"));
    let text = csv::encode(store.records());

    match uploader.upload_csv(&text, &folder_id, &filename, token).await {
        Ok(_) => {
            store.clear();
            notices.info("Файл успешно отправлен в Google Drive");
            true
        }
        Err(e) => {
            warn!("Drive upload failed: {e}");
            notices.error("Ошибка при загрузке файла");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::TransportType;
    use crate::drive::{DriveError, FileId};
    use crate::notice::{NoticeLevel, Notices};

    fn record(vehicle: &str) -> TransportRecord {
        TransportRecord {
            time: "2024-05-01 10:00:00".to_string(),
            vehicle_number: vehicle.to_string(),
            route_number: "16".to_string(),
            transport_type: TransportType::Bus,
            current_stop: "Вокзал".to_string(),
            next_stop: "Ковалёво".to_string(),
            people_at_stop: "5".to_string(),
            people_in_transport: "10".to_string(),
            entered: "2".to_string(),
            exited: "3".to_string(),
            latitude: "52.08".to_string(),
            longitude: "23.68".to_string(),
            weather: "Ясно, 20°C".to_string(),
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            is_registered: true,
            first_name: "Анна".to_string(),
            last_name: "Иванова".to_string(),
            email: "anna@example.com".to_string(),
            drive_link: "https://drive.google.com/drive/folders/1AbC?usp=sharing".to_string(),
        }
    }

    /// Uploader that records what it was asked to create.
    struct MockUploader {
        fail: bool,
        calls: Mutex<Vec<(String, String, String)>>,
    }

    impl MockUploader {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl DriveUploader for MockUploader {
        async fn upload_csv(
            &self,
            csv: &str,
            folder_id: &str,
            filename: &str,
            _token: &AccessToken,
        ) -> Result<FileId, DriveError> {
            self.calls.lock().unwrap().push((
                csv.to_string(),
                folder_id.to_string(),
                filename.to_string(),
            ));
            if self.fail {
                Err(DriveError::Api {
                    status: 500,
                    message: "mock failure".to_string(),
                })
            } else {
                Ok(FileId("file-1".to_string()))
            }
        }
    }

    #[test]
    fn record_rendering_for_the_list_view() {
        let text = format_record(&record("AB 1234-1"));
        assert_eq!(
            text,
            "2024-05-01 10:00:00 — AB 1234-1 (16, Автобус)\n\
             Вокзал → Ковалёво\n\
             Заполненность остановки: 5, заполненность транспорта: 10\n\
             Вошло: 2, вышло: 3\n\
             Координаты: 52.08, 23.68\n\
             Погода: Ясно, 20°C"
        );
    }

    #[tokio::test]
    async fn export_refuses_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new();
        let (notices, mut rx) = Notices::channel();

        assert!(export_records(&store, dir.path(), &notices).await.is_none());

        let notice = rx.try_recv().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "Нет данных для экспорта");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn export_writes_encoded_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::new();
        store.append(record("AB 1234-1"));
        let (notices, mut rx) = Notices::channel();

        let path = export_records(&store, dir.path(), &notices).await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, csv::encode(store.records()));

        let notice = rx.try_recv().unwrap();
        assert!(notice.text.starts_with("Файл сохранён: bresttrans_data_"));
    }

    #[tokio::test]
    async fn upload_success_clears_the_store() {
        let mut store = SessionStore::new();
        store.append(record("AB 1234-1"));
        store.append(record("AB 5678-1"));
        let uploader = MockUploader::new(false);
        let token = AccessToken::new("t");
        let (notices, mut rx) = Notices::channel();

        let ok = upload_records(&mut store, &profile(), Some(&token), &uploader, &notices).await;

        assert!(ok);
        assert!(store.is_empty());
        assert_eq!(
            rx.try_recv().unwrap().text,
            "Файл успешно отправлен в Google Drive"
        );

        let calls = uploader.calls.lock().unwrap();
        let (csv_text, folder_id, filename) = &calls[0];
        assert_eq!(folder_id, "1AbC");
        assert!(filename.starts_with("История_"));
        assert!(filename.ends_with(".csv"));
        assert_eq!(csv_text.lines().count(), 3);
    }

    #[tokio::test]
    async fn upload_failure_keeps_the_records() {
        let mut store = SessionStore::new();
        store.append(record("AB 1234-1"));
        let uploader = MockUploader::new(true);
        let token = AccessToken::new("t");
        let (notices, mut rx) = Notices::channel();

        let ok = upload_records(&mut store, &profile(), Some(&token), &uploader, &notices).await;

        assert!(!ok);
        assert_eq!(store.len(), 1);
        assert_eq!(rx.try_recv().unwrap().text, "Ошибка при загрузке файла");
    }

    #[tokio::test]
    async fn upload_refuses_without_folder_or_credential() {
        let mut store = SessionStore::new();
        store.append(record("AB 1234-1"));
        let uploader = MockUploader::new(false);
        let token = AccessToken::new("t");
        let (notices, mut rx) = Notices::channel();

        // No resolvable folder id
        let mut no_link = profile();
        no_link.drive_link = "https://example.com/".to_string();
        assert!(!upload_records(&mut store, &no_link, Some(&token), &uploader, &notices).await);
        assert_eq!(
            rx.try_recv().unwrap().text,
            "Ошибка: нет учётной записи или ссылки на папку"
        );

        // No credential
        assert!(!upload_records(&mut store, &profile(), None, &uploader, &notices).await);
        assert_eq!(
            rx.try_recv().unwrap().text,
            "Ошибка: нет учётной записи или ссылки на папку"
        );

        assert!(uploader.calls.lock().unwrap().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn upload_refuses_empty_store() {
        let mut store = SessionStore::new();
        let uploader = MockUploader::new(false);
        let token = AccessToken::new("t");
        let (notices, mut rx) = Notices::channel();

        assert!(!upload_records(&mut store, &profile(), Some(&token), &uploader, &notices).await);
        assert_eq!(rx.try_recv().unwrap().text, "Нет данных для экспорта");
        assert!(uploader.calls.lock().unwrap().is_empty());
    }
}
