use camp_charts::api::{
    format_axis_number, format_grouped_integer, format_month_tick, format_percentage,
    format_percentage_tick, format_population_label, format_tooltip_date,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[test]
fn integers_are_grouped_by_thousands() {
    assert_eq!(format_grouped_integer(0), "0");
    assert_eq!(format_grouped_integer(999), "999");
    assert_eq!(format_grouped_integer(1_000), "1,000");
    assert_eq!(format_grouped_integer(1_234_567), "1,234,567");
}

#[test]
fn population_label_uses_grouped_value() {
    assert_eq!(format_population_label(81_000), "Pop: 81,000");
    assert_eq!(format_population_label(7), "Pop: 7");
}

#[test]
fn axis_numbers_drop_trailing_zeros() {
    assert_eq!(format_axis_number(0.0), "0");
    assert_eq!(format_axis_number(-0.0), "0");
    assert_eq!(format_axis_number(50_000.0), "50,000");
    assert_eq!(format_axis_number(2.5), "2.5");
    assert_eq!(format_axis_number(0.6000000000000001), "0.6");
    assert_eq!(format_axis_number(2.9999999999), "3");
    assert_eq!(format_axis_number(-1_500.25), "-1,500.25");
}

#[test]
fn percentages_keep_given_precision() {
    assert_eq!(format_percentage(Decimal::new(7968, 2)), "79.68%");
    assert_eq!(format_percentage(Decimal::new(1000, 2)), "10%");
    assert_eq!(format_percentage_tick(40.0), "40%");
}

#[test]
fn dates_use_tooltip_and_tick_patterns() {
    let date = NaiveDate::from_ymd_opt(2012, 7, 1).expect("valid date");
    assert_eq!(format_tooltip_date(date), "2012-07-01");
    assert_eq!(format_month_tick(date), "Jul 2012");
}
