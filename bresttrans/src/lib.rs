//! Transit ridership survey.
//!
//! A field surveyor registers once, then repeatedly records
//! observations (vehicle, route, stop, passenger counts, weather,
//! coordinates), reviews them, exports them as CSV, and uploads the
//! CSV to their Google Drive folder.

pub mod csv;
pub mod domain;
pub mod drive;
pub mod entry;
pub mod export;
pub mod history;
pub mod notice;
pub mod profile;
pub mod stops;
pub mod store;
pub mod weather;
