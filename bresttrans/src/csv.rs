//! CSV encoding of session records.
//!
//! The layout is the one bit-exact artifact in the system: downstream
//! consumers of exported and uploaded files read exactly this header
//! and column order. Fields are written raw, with no quoting or
//! escaping of embedded commas; that fidelity limitation is inherited
//! from the files already in circulation.

use crate::domain::TransportRecord;

/// Header row of every exported file, in the fixed column order.
pub const CSV_HEADER: &str = "Время,Регистрационный номер,Маршрут,Тип,Текущая,Следующая,Заполненность остановки,Заполненность транспорта,Вошло,Вышло,Широта,Долгота,Погода";

/// Encode records into CSV text, one row per record in store order.
///
/// An empty slice encodes to the header line alone. Whether an empty
/// export is allowed at all is the caller's decision; both sinks in
/// this crate refuse an empty store before ever calling this.
pub fn encode(records: &[TransportRecord]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 96);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        encode_row(&mut out, record);
    }
    out
}

/// Append one record as a CSV row, `\n` terminated.
fn encode_row(out: &mut String, record: &TransportRecord) {
    let fields = [
        record.time.as_str(),
        record.vehicle_number.as_str(),
        record.route_number.as_str(),
        record.transport_type.as_str(),
        record.current_stop.as_str(),
        record.next_stop.as_str(),
        record.people_at_stop.as_str(),
        record.people_in_transport.as_str(),
        record.entered.as_str(),
        record.exited.as_str(),
        record.latitude.as_str(),
        record.longitude.as_str(),
        record.weather.as_str(),
    ];
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(field);
    }
    out.push('\n');
}
