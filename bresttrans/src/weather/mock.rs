//! Mock weather source for running and testing without an API key.

use super::WeatherProvider;
use super::error::WeatherError;
use super::types::WeatherReport;

/// Weather provider that serves a canned report, or always fails.
///
/// Useful for development without OpenWeatherMap credentials, and for
/// exercising the failure path of the entry flow in tests.
#[derive(Debug, Clone)]
pub struct MockWeatherClient {
    report: Option<WeatherReport>,
}

impl MockWeatherClient {
    /// A mock that always returns the given report.
    pub fn with_report(description: impl Into<String>, temp: f32) -> Self {
        Self {
            report: Some(WeatherReport {
                description: description.into(),
                temp,
            }),
        }
    }

    /// A mock that fails every lookup, like a device with no network.
    pub fn failing() -> Self {
        Self { report: None }
    }
}

impl Default for MockWeatherClient {
    fn default() -> Self {
        Self::with_report("ясно", 20.0)
    }
}

impl WeatherProvider for MockWeatherClient {
    async fn current(
        &self,
        _latitude: &str,
        _longitude: &str,
    ) -> Result<WeatherReport, WeatherError> {
        match &self.report {
            Some(report) => Ok(report.clone()),
            None => Err(WeatherError::Api {
                status: 0,
                message: "mock network failure".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn canned_report_is_served() {
        let mock = MockWeatherClient::with_report("пасмурно", 3.5);
        let report = mock.current("52.08", "23.68").await.unwrap();
        assert_eq!(report.summary(), "Пасмурно, 3.5°C");
    }

    #[tokio::test]
    async fn failing_mock_fails() {
        assert!(MockWeatherClient::failing().current("0", "0").await.is_err());
    }
}
