//! Projection of the raw JMA forecast feed onto the card view model.
//!
//! Every lookup is optional: a missing section, block or area record degrades
//! to an empty list and never to an error.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::models::{RawForecastDocument, ViewModel};
use crate::region::Region;

/// Derives the view model for `region` from a raw forecast document
pub fn extract(doc: &RawForecastDocument, region: Region) -> ViewModel {
    let daily = time_series(doc, 0, 0);
    let current = time_series(doc, 0, 2);
    let future = find_area(time_series(doc, 1, 1), region.temp_area_name());

    let weather = find_area(daily, region.area_name())
        .map(|record| string_list(record, "weathers"))
        .unwrap_or_default();
    let temps = find_area(current, region.temp_area_name())
        .map(|record| string_list(record, "temps"))
        .unwrap_or_default();
    let temps_max = future
        .map(|record| string_list(record, "tempsMax"))
        .unwrap_or_default();
    let temps_min = future
        .map(|record| string_list(record, "tempsMin"))
        .unwrap_or_default();

    let date = daily
        .and_then(|block| block.get("timeDefines"))
        .and_then(Value::as_array)
        .map(|defines| {
            defines
                .iter()
                .map(|define| define.as_str().map(format_date_label).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    ViewModel {
        date,
        weather,
        temps,
        temps_future: [temps_max, temps_min],
        error: None,
    }
}

/// Formats a feed timestamp as `M月D日`.
///
/// The calendar date is taken as written: an RFC 3339 offset is honoured and
/// no conversion to the host time zone happens. Unparseable input gives "".
pub fn format_date_label(input: &str) -> String {
    calendar_date(input)
        .map(|date| format!("{}月{}日", date.month(), date.day()))
        .unwrap_or_default()
}

fn calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// `doc[section].timeSeries[block]`
fn time_series(doc: &Value, section: usize, block: usize) -> Option<&Value> {
    doc.get(section)?.get("timeSeries")?.get(block)
}

/// First area record in `block` whose `area.name` equals `name`
pub fn find_area<'a>(block: Option<&'a Value>, name: &str) -> Option<&'a Value> {
    block?
        .get("areas")?
        .as_array()?
        .iter()
        .find(|record| record.pointer("/area/name").and_then(Value::as_str) == Some(name))
}

fn string_list(record: &Value, key: &str) -> Vec<String> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(entry_text).collect())
        .unwrap_or_default()
}

// Non-string entries keep their slot so indices still line up with `timeDefines`.
fn entry_text(entry: &Value) -> String {
    match entry {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    }
}
