//! The ridership observation record.

use super::TransportType;

/// One completed ridership observation.
///
/// A record is fully formed before it is ever stored: every field is
/// fixed at construction and the type offers no mutation. Counts and
/// coordinates are kept as the strings the surveyor entered or the
/// stop directory supplied; this code never interprets them as
/// numbers, it only carries them through to the CSV layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRecord {
    /// Local timestamp at save time, `yyyy-MM-dd HH:mm:ss`.
    pub time: String,

    /// Vehicle registration number.
    pub vehicle_number: String,

    /// Route number.
    pub route_number: String,

    /// Vehicle kind.
    pub transport_type: TransportType,

    /// Stop the vehicle is at.
    pub current_stop: String,

    /// Stop the vehicle is headed to.
    pub next_stop: String,

    /// People waiting at the stop (decimal-digit string).
    pub people_at_stop: String,

    /// People on board (decimal-digit string).
    pub people_in_transport: String,

    /// People who boarded (decimal-digit string).
    pub entered: String,

    /// People who alighted (decimal-digit string).
    pub exited: String,

    /// Latitude of the matched stop, or `"0.0"` when unmatched.
    pub latitude: String,

    /// Longitude of the matched stop, or `"0.0"` when unmatched.
    pub longitude: String,

    /// Human-readable weather, or the failure sentinel.
    pub weather: String,
}
