//! Wire types for the current-weather endpoint.

use serde::Deserialize;

/// Response body of `GET /weather`.
///
/// Only the fields the survey consumes are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    /// Current conditions; the first entry is the headline one.
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    /// Temperature readings.
    pub main: MainReadings,
}

/// One weather condition.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    /// Condition group (e.g. "Clouds").
    pub main: String,
    /// Localised description (e.g. "пасмурно").
    pub description: String,
}

/// Temperature block of the response.
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// Temperature in the requested units (metric here).
    pub temp: f32,
}

/// A weather observation reduced to what the record stores.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Localised condition description.
    pub description: String,
    /// Temperature in °C.
    pub temp: f32,
}

impl WeatherReport {
    /// The one-line form stored in a record: capitalised description,
    /// then the temperature (e.g. `"Пасмурно, 14.3°C"`).
    pub fn summary(&self) -> String {
        format!("{}, {}°C", capitalize_first(&self.description), self.temp)
    }
}

impl From<WeatherResponse> for WeatherReport {
    fn from(response: WeatherResponse) -> Self {
        let description = response
            .weather
            .first()
            .map(|c| c.description.clone())
            .unwrap_or_else(|| "Неизвестно".to_string());
        Self {
            description,
            temp: response.main.temp,
        }
    }
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{
            "weather": [{"main": "Clouds", "description": "пасмурно"}],
            "main": {"temp": 14.3}
        }"#;
        let response: WeatherResponse = serde_json::from_str(json).unwrap();
        let report = WeatherReport::from(response);
        assert_eq!(report.description, "пасмурно");
        assert_eq!(report.summary(), "Пасмурно, 14.3°C");
    }

    #[test]
    fn missing_conditions_degrade_to_unknown() {
        let json = r#"{"main": {"temp": -5.0}}"#;
        let response: WeatherResponse = serde_json::from_str(json).unwrap();
        let report = WeatherReport::from(response);
        assert_eq!(report.description, "Неизвестно");
        assert_eq!(report.summary(), "Неизвестно, -5°C");
    }

    #[test]
    fn capitalization_handles_cyrillic_and_ascii() {
        assert_eq!(capitalize_first("ясно"), "Ясно");
        assert_eq!(capitalize_first("light rain"), "Light rain");
        assert_eq!(capitalize_first(""), "");
    }
}
