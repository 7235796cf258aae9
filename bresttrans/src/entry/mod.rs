//! Record entry flow.
//!
//! The data-entry screen re-expressed as an explicitly owned form
//! struct plus pure validation, a debounced suggestion helper for the
//! stop fields, and the save pipeline that turns a completed form into
//! a stored record.

mod flow;
mod form;
mod suggest;


pub use flow::save_record;
pub use form::{CollectForm, FormPhase};
pub use suggest::{Debouncer, SUGGESTION_DEBOUNCE, filter_suggestions};
