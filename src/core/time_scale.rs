use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};
use crate::core::{LinearScale, ObservationSeries, midnight};
use crate::error::{ChartError, ChartResult};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Calendar time axis mapped onto `[0, plot_width]`.
///
/// Time is carried internally as unix seconds so the mapping is a plain
/// linear scale; the public API speaks `chrono` dates and timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    /// Creates a scale whose domain runs from `start` to `end` (inclusive dates).
    ///
    /// A single-day domain is widened by half a day on each side so its one
    /// date lands in the middle of the plot.
    pub fn new(start: NaiveDate, end: NaiveDate, plot_width: f64) -> ChartResult<Self> {
        if start > end {
            return Err(ChartError::InvalidData(format!(
                "time scale start {start} is after end {end}"
            )));
        }
        if !plot_width.is_finite() || plot_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale width must be finite and > 0".to_owned(),
            ));
        }

        let mut domain_start = datetime_to_unix_seconds(midnight(start));
        let mut domain_end = datetime_to_unix_seconds(midnight(end));
        if start == end {
            domain_start -= SECONDS_PER_DAY / 2.0;
            domain_end += SECONDS_PER_DAY / 2.0;
        }

        Ok(Self {
            start,
            end,
            linear: LinearScale::new(domain_start, domain_end, 0.0, plot_width)?,
        })
    }

    /// Fits the domain to the extent of the series dates.
    pub fn from_series(series: &ObservationSeries, plot_width: f64) -> ChartResult<Self> {
        let (start, end) = series.date_extent().ok_or_else(|| {
            ChartError::InvalidData("time scale cannot be built from empty data".to_owned())
        })?;
        Self::new(start, end, plot_width)
    }

    /// First and last dates of the fitted domain.
    #[must_use]
    pub fn date_range(self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.linear.range().1
    }

    pub fn date_to_pixel(self, date: NaiveDate) -> ChartResult<f64> {
        self.time_to_pixel(midnight(date))
    }

    pub fn time_to_pixel(self, time: NaiveDateTime) -> ChartResult<f64> {
        self.linear.domain_to_pixel(datetime_to_unix_seconds(time))
    }

    /// Inverse mapping used to turn a pointer position into a query timestamp.
    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<NaiveDateTime> {
        unix_seconds_to_datetime(self.linear.pixel_to_domain(pixel)?)
    }
}
