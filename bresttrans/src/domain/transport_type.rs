//! Transport type enumeration.

use std::fmt;

/// Error returned when parsing an unknown transport type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport type: {input}")]
pub struct InvalidTransportType {
    input: String,
}

/// The kind of vehicle being surveyed.
///
/// The set is fixed; survey forms offer exactly these choices and the
/// CSV layout carries the Russian display name verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransportType {
    /// Автобус
    #[default]
    Bus,
    /// Троллейбус
    Trolleybus,
    /// Маршрутка
    Marshrutka,
    /// Сочленённый автобус
    ArticulatedBus,
    /// Заказной автобус
    CharterBus,
}

impl TransportType {
    /// All types, in the order the entry form presents them.
    pub const ALL: [TransportType; 5] = [
        TransportType::Bus,
        TransportType::Trolleybus,
        TransportType::Marshrutka,
        TransportType::ArticulatedBus,
        TransportType::CharterBus,
    ];

    /// The display name, as it appears in the form and the CSV.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Bus => "Автобус",
            TransportType::Trolleybus => "Троллейбус",
            TransportType::Marshrutka => "Маршрутка",
            TransportType::ArticulatedBus => "Сочленённый автобус",
            TransportType::CharterBus => "Заказной автобус",
        }
    }

    /// Parse a display name back into a type.
    pub fn parse(s: &str) -> Result<Self, InvalidTransportType> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InvalidTransportType {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
