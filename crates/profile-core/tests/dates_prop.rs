//! Property tests for the date engine.

use chrono::NaiveDate;
use profile_core::{elapsed_years, format_display, format_iso, parse_display_date, parse_iso_date};
use proptest::prelude::*;

prop_compose! {
    fn arb_date()(year in 1900i32..2100, ordinal in 1u32..=365) -> NaiveDate {
        NaiveDate::from_yo_opt(year, ordinal).expect("ordinal within a non-leap bound")
    }
}

proptest! {
    #[test]
    fn display_form_round_trips(date in arb_date()) {
        prop_assert_eq!(parse_display_date(&format_display(date)), Ok(date));
    }

    #[test]
    fn iso_form_round_trips(date in arb_date()) {
        prop_assert_eq!(parse_iso_date(&format_iso(date)), Ok(date));
    }

    #[test]
    fn elapsed_is_zero_on_the_same_day(date in arb_date()) {
        prop_assert_eq!(elapsed_years(date, date), 0);
    }

    #[test]
    fn elapsed_is_antisymmetric_in_sign(a in arb_date(), b in arb_date()) {
        let forward = elapsed_years(a, b);
        let backward = elapsed_years(b, a);
        // Only one direction can claim a positive number of whole years.
        prop_assert!(!(forward > 0 && backward > 0));
    }

    #[test]
    fn elapsed_differs_from_year_gap_by_at_most_one(a in arb_date(), b in arb_date()) {
        use chrono::Datelike;
        let gap = b.year() - a.year();
        let elapsed = elapsed_years(a, b);
        prop_assert!(elapsed == gap || elapsed == gap - 1);
    }
}
