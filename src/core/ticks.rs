use chrono::{Datelike, Months, NaiveDate};

use crate::error::{ChartError, ChartResult};

/// Round-number ticks covering `[start, stop]`, roughly `count` of them.
///
/// Step sizes are 1, 2 or 5 times a power of ten. Ticks never fall outside
/// the requested interval.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> ChartResult<Vec<f64>> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(ChartError::InvalidData(
            "tick interval must be finite".to_owned(),
        ));
    }
    if count == 0 {
        return Ok(Vec::new());
    }
    if start == stop {
        return Ok(vec![start]);
    }

    let (low, high) = (start.min(stop), start.max(stop));
    let raw_step = (high - low) / count as f64;
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let mut ticks = Vec::new();
    if power < 0.0 {
        // Divide by an integral inverse step to keep fractional ticks exact.
        let inverse = 10f64.powf(-power) / factor;
        let mut first = (low * inverse).round();
        let mut last = (high * inverse).round();
        if first / inverse < low {
            first += 1.0;
        }
        if last / inverse > high {
            last -= 1.0;
        }
        let mut i = first;
        while i <= last {
            ticks.push(i / inverse);
            i += 1.0;
        }
    } else {
        let step = 10f64.powf(power) * factor;
        let mut first = (low / step).round();
        let mut last = (high / step).round();
        if first * step < low {
            first += 1.0;
        }
        if last * step > high {
            last -= 1.0;
        }
        let mut i = first;
        while i <= last {
            ticks.push(i * step);
            i += 1.0;
        }
    }

    if start > stop {
        ticks.reverse();
    }
    Ok(ticks)
}

/// First-of-month dates in `[start, end]` whose zero-based month index is a
/// multiple of `every_months` (Jan/Apr/Jul/Oct for a quarterly cadence).
pub fn month_ticks(
    start: NaiveDate,
    end: NaiveDate,
    every_months: u32,
) -> ChartResult<Vec<NaiveDate>> {
    if every_months == 0 || every_months > 12 {
        return Err(ChartError::InvalidData(
            "month tick cadence must be in 1..=12".to_owned(),
        ));
    }
    if start > end {
        return Ok(Vec::new());
    }

    let Some(mut cursor) = start.with_day(1) else {
        return Ok(Vec::new());
    };
    if cursor < start {
        cursor = match cursor.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => return Ok(Vec::new()),
        };
    }

    let mut ticks = Vec::new();
    while cursor <= end {
        if cursor.month0() % every_months == 0 {
            ticks.push(cursor);
        }
        cursor = match cursor.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(ticks)
}
