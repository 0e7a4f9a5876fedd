//! Property-based tests for the inclusive date range.
//!
//! Bounds are drawn as day offsets from 1900-01-01 so every generated date is
//! valid and fits the 8-digit format.

use chrono::{Duration, NaiveDate};
use daterange_core::{daterange, format_date, parse_date};
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // Roughly 1900..2100.
    (0i64..73_000).prop_map(|offset| epoch() + Duration::days(offset))
}

/// A start date and an end date no more than ~3 years after it.
fn arb_ordered_pair() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (arb_date(), 0i64..1_200).prop_map(|(start, span)| (start, start + Duration::days(span)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn length_is_inclusive_day_count((start, end) in arb_ordered_pair()) {
        let range = daterange(format_date(start), format_date(end)).unwrap();
        let expected = (end - start).num_days() as usize + 1;
        prop_assert_eq!(range.len(), expected);
        prop_assert_eq!(range.count(), expected);
    }

    #[test]
    fn first_and_last_match_bounds((start, end) in arb_ordered_pair()) {
        let days: Vec<String> = daterange(format_date(start), format_date(end))
            .unwrap()
            .collect();
        prop_assert_eq!(days.first(), Some(&format_date(start)));
        prop_assert_eq!(days.last(), Some(&format_date(end)));
    }

    #[test]
    fn consecutive_elements_are_one_day_apart((start, end) in arb_ordered_pair()) {
        let days: Vec<NaiveDate> = daterange(format_date(start), format_date(end))
            .unwrap()
            .map(|s| parse_date(&s).unwrap())
            .collect();
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn produced_strings_round_trip((start, end) in arb_ordered_pair()) {
        let range = daterange(format_date(start), format_date(end)).unwrap();
        for (i, s) in range.enumerate() {
            prop_assert_eq!(s.len(), 8);
            prop_assert_eq!(parse_date(&s).unwrap(), start + Duration::days(i as i64));
        }
    }

    #[test]
    fn start_after_end_is_empty(a in arb_date(), b in arb_date()) {
        prop_assume!(a != b);
        let (start, end) = if a > b { (a, b) } else { (b, a) };
        let range = daterange(format_date(start), format_date(end)).unwrap();
        prop_assert!(range.is_empty());
        prop_assert_eq!(range.count(), 0);
    }

    #[test]
    fn integer_and_string_inputs_agree((start, end) in arb_ordered_pair()) {
        let as_int = |d: NaiveDate| format_date(d).parse::<u32>().unwrap();
        let from_ints: Vec<String> = daterange(as_int(start), as_int(end)).unwrap().collect();
        let from_strs: Vec<String> = daterange(format_date(start), format_date(end))
            .unwrap()
            .collect();
        prop_assert_eq!(from_ints, from_strs);
    }

    #[test]
    fn reversed_iteration_mirrors_forward((start, end) in arb_ordered_pair()) {
        let forward: Vec<String> = daterange(start, end).unwrap().collect();
        let mut backward: Vec<String> = daterange(start, end).unwrap().rev().collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn non_digit_input_is_rejected(s in "[0-9]{0,3}[^0-9][0-9]{0,4}") {
        prop_assert!(daterange(s.as_str(), 20210101).is_err());
    }
}
