use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: NaiveDateTime) -> f64 {
    time.and_utc().timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`datetime_to_unix_seconds`], rounded to whole milliseconds.
pub fn unix_seconds_to_datetime(seconds: f64) -> ChartResult<NaiveDateTime> {
    if !seconds.is_finite() {
        return Err(ChartError::InvalidData(
            "timestamp seconds must be finite".to_owned(),
        ));
    }
    let millis = (seconds * 1000.0).round();
    if millis > i64::MAX as f64 || millis < i64::MIN as f64 {
        return Err(ChartError::InvalidData(
            "timestamp is outside the representable range".to_owned(),
        ));
    }
    DateTime::from_timestamp_millis(millis as i64)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| {
            ChartError::InvalidData("timestamp is outside the representable range".to_owned())
        })
}
