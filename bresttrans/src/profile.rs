//! Surveyor profile: registration and profile editing.
//!
//! The profile is the explicit session context that replaces the
//! ambient key-value store of the mobile build: read once at startup,
//! written only at registration completion and profile save. The
//! persisted JSON keeps the historical key names, `driveLink`
//! included, so an existing profile file keeps working.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{is_valid_email, is_valid_folder_link};
use crate::notice::Notices;

/// Name of the profile file inside the data directory.
const PROFILE_FILE: &str = "profile.json";

/// Persisted surveyor profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Set once registration completes; gates the collect flows.
    #[serde(default)]
    pub is_registered: bool,

    /// First name.
    #[serde(default)]
    pub first_name: String,

    /// Last name (optional at registration).
    #[serde(default)]
    pub last_name: String,

    /// Contact email.
    #[serde(default)]
    pub email: String,

    /// Link to the surveyor's Drive upload folder.
    #[serde(default, rename = "driveLink")]
    pub drive_link: String,
}

/// Error persisting the profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Filesystem read/write failed
    #[error("failed to write profile: {0}")]
    Io(#[from] std::io::Error),

    /// Profile could not be serialized
    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Profile file handle.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store the profile under `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(PROFILE_FILE),
        }
    }

    /// Load the profile; a missing or unreadable file yields the
    /// default (unregistered) profile.
    pub fn load(&self) -> UserProfile {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(profile) => profile,
                Err(e) => {
                    debug!("corrupt profile file, starting unregistered: {e}");
                    UserProfile::default()
                }
            },
            Err(e) => {
                debug!("no profile file, starting unregistered: {e}");
                UserProfile::default()
            }
        }
    }

    /// Persist the profile.
    pub fn save(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let text = serde_json::to_string_pretty(profile)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Fields collected by the registration form.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    /// Required.
    pub first_name: String,
    /// Optional.
    pub last_name: String,
    /// Required, must be a structurally valid address.
    pub email: String,
    /// Required, must be a Drive folder link.
    pub drive_link: String,
}

impl Registration {
    /// True when every required field passes its format check.
    pub fn is_valid(&self) -> bool {
        !self.first_name.trim().is_empty()
            && is_valid_email(&self.email)
            && is_valid_folder_link(&self.drive_link)
    }
}

/// Complete registration: validate, persist, return the new profile.
///
/// Nothing is persisted until every required field passes; a failed
/// validation only posts a notice and leaves the caller on the form.
pub fn register(
    store: &ProfileStore,
    registration: Registration,
    notices: &Notices,
) -> Option<UserProfile> {
    if !registration.is_valid() {
        notices.error("Введите корректную почту и ссылку на папку Google Drive");
        return None;
    }

    let profile = UserProfile {
        is_registered: true,
        first_name: registration.first_name,
        last_name: registration.last_name,
        email: registration.email,
        drive_link: registration.drive_link,
    };

    match store.save(&profile) {
        Ok(()) => Some(profile),
        Err(e) => {
            notices.error(format!("Не удалось сохранить профиль: {e}"));
            None
        }
    }
}

/// Edited profile fields, staged before save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Drive folder link.
    pub drive_link: String,
}

impl ProfileUpdate {
    /// Start an edit from the current profile.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            drive_link: profile.drive_link.clone(),
        }
    }

    /// True when saving would change the stored profile. Gates the
    /// save action the way the profile screen disables its button.
    pub fn differs_from(&self, profile: &UserProfile) -> bool {
        self.first_name != profile.first_name
            || self.last_name != profile.last_name
            || self.email != profile.email
            || self.drive_link != profile.drive_link
    }
}

/// Apply an edit to the profile and persist it.
///
/// A no-change update is ignored without a notice. Returns true when
/// the profile was written.
pub fn apply_update(
    store: &ProfileStore,
    profile: &mut UserProfile,
    update: ProfileUpdate,
    notices: &Notices,
) -> bool {
    if !update.differs_from(profile) {
        return false;
    }

    let updated = UserProfile {
        is_registered: profile.is_registered,
        first_name: update.first_name,
        last_name: update.last_name,
        email: update.email,
        drive_link: update.drive_link,
    };

    match store.save(&updated) {
        Ok(()) => {
            *profile = updated;
            notices.info("Изменения сохранены");
            true
        }
        Err(e) => {
            notices.error(format!("Не удалось сохранить профиль: {e}"));
            false
        }
    }
}
