use camp_charts::core::{Observation, ObservationSeries, midnight};
use camp_charts::error::ChartError;
use camp_charts::interaction::locate;
use chrono::{NaiveDate, NaiveDateTime};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}

fn sample_series() -> ObservationSeries {
    ObservationSeries::new(vec![
        Observation::new(date(2012, 7, 1), 100),
        Observation::new(date(2012, 8, 1), 400),
        Observation::new(date(2012, 9, 1), 250),
    ])
    .expect("sorted series")
}

#[test]
fn exact_match_returns_that_observation() {
    let series = sample_series();
    for (index, observation) in series.iter().enumerate() {
        let found = series
            .locate(midnight(observation.date))
            .expect("non-empty series");
        assert_eq!(found, observation);
        assert_eq!(
            series.locate_index(midnight(observation.date)).expect("index"),
            index
        );
    }
}

#[test]
fn query_before_first_clamps_to_first() {
    let series = sample_series();
    let found = series.locate(at(2011, 1, 1, 0)).expect("locate");
    assert_eq!(found.date, date(2012, 7, 1));
}

#[test]
fn query_after_last_clamps_to_last() {
    let series = sample_series();
    let found = series.locate(at(2030, 1, 1, 0)).expect("locate");
    assert_eq!(found.date, date(2012, 9, 1));
}

#[test]
fn mid_july_query_resolves_to_july_first() {
    let series = ObservationSeries::new(vec![
        Observation::new(date(2012, 7, 1), 100),
        Observation::new(date(2012, 8, 1), 400),
    ])
    .expect("sorted series");

    let found = series.locate(midnight(date(2012, 7, 16))).expect("locate");
    assert_eq!(*found, Observation::new(date(2012, 7, 1), 100));
}

#[test]
fn exact_tie_prefers_earlier_observation() {
    let series = ObservationSeries::new(vec![
        Observation::new(date(2012, 7, 1), 100),
        Observation::new(date(2012, 8, 1), 400),
    ])
    .expect("sorted series");

    // 15.5 days from each neighbour.
    let halfway = at(2012, 7, 16, 12);
    for _ in 0..8 {
        assert_eq!(series.locate(halfway).expect("locate").value, 100);
    }

    let tight = ObservationSeries::new(vec![
        Observation::new(date(2012, 7, 1), 1),
        Observation::new(date(2012, 7, 3), 2),
    ])
    .expect("sorted series");
    assert_eq!(tight.locate(midnight(date(2012, 7, 2))).expect("locate").value, 1);
}

#[test]
fn slightly_past_halfway_prefers_later_observation() {
    let series = ObservationSeries::new(vec![
        Observation::new(date(2012, 7, 1), 100),
        Observation::new(date(2012, 8, 1), 400),
    ])
    .expect("sorted series");

    let found = series.locate(at(2012, 7, 16, 13)).expect("locate");
    assert_eq!(found.value, 400);
}

#[test]
fn single_observation_is_returned_for_any_query() {
    let only = [Observation::new(date(2013, 3, 1), 121_305)];
    for query in [at(2000, 1, 1, 0), at(2013, 3, 1, 0), at(2099, 12, 31, 23)] {
        assert_eq!(locate(&only, query).expect("locate").value, 121_305);
    }
}

#[test]
fn empty_sequence_is_rejected() {
    let result = locate(&[], at(2012, 7, 1, 0));
    assert!(matches!(result, Err(ChartError::EmptySequence)));

    let series = ObservationSeries::default();
    assert!(matches!(
        series.locate(at(2012, 7, 1, 0)),
        Err(ChartError::EmptySequence)
    ));
}

#[test]
fn unsorted_or_duplicate_dates_are_rejected() {
    let unsorted = ObservationSeries::new(vec![
        Observation::new(date(2012, 8, 1), 1),
        Observation::new(date(2012, 7, 1), 2),
    ]);
    assert!(matches!(unsorted, Err(ChartError::InvalidData(_))));

    let duplicate = ObservationSeries::new(vec![
        Observation::new(date(2012, 7, 1), 1),
        Observation::new(date(2012, 7, 1), 2),
    ]);
    assert!(matches!(duplicate, Err(ChartError::InvalidData(_))));
}
