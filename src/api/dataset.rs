use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::{Observation, ObservationSeries, ShelterShare};
use crate::error::{ChartError, ChartResult};

/// One CSV row. Columns other than `date` and `population` are ignored.
#[derive(Debug, Deserialize)]
struct PopulationRecord {
    date: NaiveDate,
    population: u64,
}

/// Loads the population series from a `date,population` CSV file.
///
/// Dates use `%Y-%m-%d`; populations are non-negative integers. Any malformed
/// row fails the whole load, as does a file whose dates are not strictly
/// increasing.
pub fn load_population_csv(path: impl AsRef<Path>) -> ChartResult<ObservationSeries> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| ChartError::DatasetLoad {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    read_population_csv(file, path)
}

/// Reads the population series from any CSV source; `source` names it in errors.
pub fn read_population_csv<R: Read>(
    reader: R,
    source: impl Into<PathBuf>,
) -> ChartResult<ObservationSeries> {
    let source = source.into();
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut observations = Vec::new();
    for record in csv_reader.deserialize::<PopulationRecord>() {
        let record = record.map_err(|err| {
            let reason = match err.position() {
                Some(position) => format!("line {}: {err}", position.line()),
                None => err.to_string(),
            };
            warn!(source = %source.display(), %reason, "rejecting population csv");
            ChartError::DatasetLoad {
                path: source.clone(),
                reason,
            }
        })?;
        observations.push(Observation::new(record.date, record.population));
    }

    let series = ObservationSeries::new(observations).map_err(|err| ChartError::DatasetLoad {
        path: source.clone(),
        reason: err.to_string(),
    })?;
    debug!(
        source = %source.display(),
        count = series.len(),
        "loaded population series"
    );
    Ok(series)
}

/// Shelter-type distribution drawn by the bar chart.
#[must_use]
pub fn shelter_shares() -> Vec<ShelterShare> {
    [
        ("Caravans", Decimal::new(7968, 2)),
        ("Combination", Decimal::new(1081, 2)),
        ("Tents", Decimal::new(951, 2)),
    ]
    .into_iter()
    .map(|(label, percentage)| ShelterShare {
        label: label.to_owned(),
        percentage,
    })
    .collect()
}
