use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Categorical scale dividing `[0, width]` into evenly spaced bands.
///
/// `padding` is applied both between bands and at the outer edges, as a
/// fraction of one step; leftover space is split evenly on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    categories: IndexSet<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new<I, S>(categories: I, width: f64, padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "band scale width must be finite and > 0".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }

        let mut set = IndexSet::new();
        for category in categories {
            let category = category.into();
            if !set.insert(category.clone()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate band category `{category}`"
                )));
            }
        }

        let n = set.len() as f64;
        let step = width / (n - padding + 2.0 * padding).max(1.0);
        let start = (width - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Ok(Self {
            categories: set,
            start,
            step,
            bandwidth,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Left edge of the band for `category`, or `None` for an unknown label.
    #[must_use]
    pub fn band_start(&self, category: &str) -> Option<f64> {
        self.categories
            .get_index_of(category)
            .map(|index| self.start + index as f64 * self.step)
    }

    #[must_use]
    pub fn band_center(&self, category: &str) -> Option<f64> {
        self.band_start(category)
            .map(|start| start + self.bandwidth * 0.5)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }
}
