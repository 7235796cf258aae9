//! The save pipeline.

use chrono::Local;
use tracing::warn;

use crate::domain::TransportRecord;
use crate::notice::Notices;
use crate::stops::StopDirectory;
use crate::store::SessionStore;
use crate::weather::{WEATHER_UNAVAILABLE, WeatherProvider};

use super::form::{CollectForm, FormPhase};

/// Coordinates stored when the stop directory has no match.
const UNKNOWN_COORDINATE: &str = "0.0";

/// Turn a completed form into a stored record.
///
/// The pipeline: validation gate, local timestamp, coordinate
/// resolution against the stop directory, best-effort weather lookup,
/// then an append to the session store. Weather never blocks the
/// save: any lookup failure stores the sentinel and moves on. Taking
/// the store by `&mut` serialises saves; a second save cannot start
/// until this one has appended.
///
/// Returns true when a record was appended. On validation failure the
/// form drops back to editing, a notice is posted, and no record is
/// created.
pub async fn save_record<W: WeatherProvider>(
    form: &mut CollectForm,
    directory: &StopDirectory,
    weather: &W,
    store: &mut SessionStore,
    notices: &Notices,
) -> bool {
    form.phase = FormPhase::Validating;
    if !form.all_fields_filled() {
        notices.error("Пожалуйста, заполните все поля корректно");
        form.phase = FormPhase::Editing;
        return false;
    }

    form.phase = FormPhase::Saving;
    let time = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let matched = directory.lookup(&form.current_stop, &form.next_stop);
    if matched.is_none() {
        notices.error("Не найдены координаты для остановки");
    }
    let (latitude, longitude) = match matched {
        Some(entry) => (entry.y.clone(), entry.x.clone()),
        None => (
            UNKNOWN_COORDINATE.to_string(),
            UNKNOWN_COORDINATE.to_string(),
        ),
    };

    let weather = match weather.current(&latitude, &longitude).await {
        Ok(report) => report.summary(),
        Err(e) => {
            warn!("weather lookup failed: {e}");
            notices.error("Ошибка загрузки погоды");
            WEATHER_UNAVAILABLE.to_string()
        }
    };

    store.append(TransportRecord {
        time,
        vehicle_number: form.vehicle_number.clone(),
        route_number: form.route_number.clone(),
        transport_type: form.transport_type,
        current_stop: form.current_stop.clone(),
        next_stop: form.next_stop.clone(),
        people_at_stop: form.people_at_stop.clone(),
        people_in_transport: form.people_in_transport.clone(),
        entered: form.entered.clone(),
        exited: form.exited.clone(),
        latitude,
        longitude,
        weather,
    });

    form.phase = FormPhase::Saved;
    notices.info("Сохранено");
    true
}
