//! Domain types for the ridership survey.
//!
//! The record type and the validation predicates the flows share.
//! Counts and coordinates stay strings end to end; the only parsed
//! value type is the transport kind, which is a closed set.

mod record;
mod transport_type;
mod validate;

pub use record::TransportRecord;
pub use transport_type::{InvalidTransportType, TransportType};
pub use validate::{is_digits, is_valid_email, is_valid_folder_link};
