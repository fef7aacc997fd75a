use chrono::{NaiveDateTime, TimeDelta};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Observation, ObservationSeries};
use crate::error::{ChartError, ChartResult};

/// Returns the index of the observation closest in time to `query`.
///
/// `sequence` must be sorted ascending by date. Queries outside the data
/// clamp to the first or last observation. When the query sits exactly
/// halfway between two observations the earlier one wins.
pub fn locate_index(sequence: &[Observation], query: NaiveDateTime) -> ChartResult<usize> {
    if sequence.is_empty() {
        return Err(ChartError::EmptySequence);
    }

    // Lower bound: first observation not earlier than the query.
    let insertion = sequence.partition_point(|item| item.timestamp() < query);

    // Pushed before-then-after so `min_by_key` keeps the earlier one on ties.
    let mut candidates: SmallVec<[(TimeDelta, usize); 2]> = SmallVec::new();
    if insertion > 0 {
        let before = insertion - 1;
        candidates.push(((query - sequence[before].timestamp()).abs(), before));
    }
    if insertion < sequence.len() {
        candidates.push(((sequence[insertion].timestamp() - query).abs(), insertion));
    }

    let index = candidates
        .into_iter()
        .min_by_key(|candidate| candidate.0)
        .map(|(_, index)| index)
        .ok_or(ChartError::EmptySequence)?;
    trace!(%query, insertion, index, "located nearest observation");
    Ok(index)
}

/// Returns the observation closest in time to `query`. See [`locate_index`].
pub fn locate(sequence: &[Observation], query: NaiveDateTime) -> ChartResult<&Observation> {
    let index = locate_index(sequence, query)?;
    Ok(&sequence[index])
}

impl ObservationSeries {
    pub fn locate(&self, query: NaiveDateTime) -> ChartResult<&Observation> {
        locate(self.as_slice(), query)
    }

    pub fn locate_index(&self, query: NaiveDateTime) -> ChartResult<usize> {
        locate_index(self.as_slice(), query)
    }
}
