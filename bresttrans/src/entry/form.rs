//! The data-entry form.

use crate::domain::{TransportType, is_digits};
use crate::stops::StopDirectory;

/// Where the form is in its save cycle.
///
/// `Editing → Validating → Saving → Saved`, falling back to `Editing`
/// when validation rejects the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Fields are being edited.
    #[default]
    Editing,
    /// A save was requested; the gate is being checked.
    Validating,
    /// Coordinates and weather are being resolved.
    Saving,
    /// The record was appended to the store.
    Saved,
}

/// Mutable state of the data-entry screen.
///
/// Plain data, owned by whoever drives the screen. Field values
/// survive a save so the surveyor can record the next observation of
/// the same vehicle by only adjusting the counts.
#[derive(Debug, Clone, Default)]
pub struct CollectForm {
    /// Vehicle registration number.
    pub vehicle_number: String,
    /// Route number.
    pub route_number: String,
    /// Vehicle kind, defaulted to the first picker choice.
    pub transport_type: TransportType,
    /// Current stop name (free text with suggestions).
    pub current_stop: String,
    /// Next stop name (free text with suggestions).
    pub next_stop: String,
    /// People waiting at the stop.
    pub people_at_stop: String,
    /// People on board.
    pub people_in_transport: String,
    /// People who boarded.
    pub entered: String,
    /// People who alighted.
    pub exited: String,
    /// Save-cycle phase.
    pub phase: FormPhase,
}

impl CollectForm {
    /// A fresh form: empty fields, default transport type, editing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The validation gate for saving.
    ///
    /// Every count field must be a non-empty digit string; every text
    /// field must be non-blank. No upper bounds and no cross-field
    /// checks: entered/exited are not compared against the occupancy
    /// counts.
    pub fn all_fields_filled(&self) -> bool {
        let counts = [
            &self.people_at_stop,
            &self.people_in_transport,
            &self.entered,
            &self.exited,
        ];
        let texts = [
            &self.vehicle_number,
            &self.route_number,
            &self.current_stop,
            &self.next_stop,
        ];
        counts.iter().all(|f| is_digits(f)) && texts.iter().all(|f| !f.trim().is_empty())
    }

    /// Successor choices for the currently entered stop.
    pub fn next_stop_options(&self, directory: &StopDirectory) -> Vec<String> {
        directory.next_stops_for(&self.current_stop)
    }
}
