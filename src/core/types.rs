use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Outer chart size in pixels, margins included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 650,
            height: 580,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 0.0,
            bottom: 30.0,
            left: 50.0,
        }
    }
}

impl Margins {
    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Drawable region inside the margins. Plot coordinates start at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        let margins = margins.validate()?;
        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if !viewport.is_valid() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// One population sample at day resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: u64,
}

impl Observation {
    #[must_use]
    pub fn new(date: NaiveDate, value: u64) -> Self {
        Self { date, value }
    }

    /// The observation's timestamp, taken at midnight of its date.
    #[must_use]
    pub fn timestamp(self) -> NaiveDateTime {
        midnight(self.date)
    }
}

#[must_use]
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Immutable observation sequence with strictly increasing dates.
///
/// The invariant is checked once at construction; there is no mutation API,
/// so every consumer may rely on sorted, duplicate-free input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObservationSeries {
    observations: Vec<Observation>,
}

impl ObservationSeries {
    pub fn new(observations: Vec<Observation>) -> ChartResult<Self> {
        if let Some(pair) = observations
            .windows(2)
            .find(|pair| pair[0].date >= pair[1].date)
        {
            return Err(ChartError::InvalidData(format!(
                "observation dates must be strictly increasing: {} is followed by {}",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { observations })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Earliest and latest dates, or `None` for an empty series.
    #[must_use]
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first()?.date, self.last()?.date))
    }

    #[must_use]
    pub fn max_value(&self) -> Option<u64> {
        self.observations.iter().map(|item| item.value).max()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }
}

impl<'a> IntoIterator for &'a ObservationSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

/// One labelled bar of the shelter distribution.
///
/// Percentages are kept as exact decimals and are never normalized: a set of
/// shares need not sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelterShare {
    pub label: String,
    pub percentage: Decimal,
}

impl ShelterShare {
    pub fn new(label: impl Into<String>, percentage: Decimal) -> ChartResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "shelter label must not be empty".to_owned(),
            ));
        }
        if percentage.is_sign_negative() {
            return Err(ChartError::InvalidData(format!(
                "shelter percentage for `{label}` must be >= 0"
            )));
        }
        Ok(Self { label, percentage })
    }
}
