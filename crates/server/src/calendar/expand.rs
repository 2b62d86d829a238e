use std::iter::successors;

use chrono::{Days, NaiveDate};
use shared::types::RecurringDay;

/// Expands one plan's recurrence into its concrete calendar dates: the
/// first date on or after `start_date` falling on `recurring_day`, then
/// every 7 days up to and including the effective end.
///
/// Open ended plans (`end_date` = None) are bounded by `horizon` so the
/// result is always finite. A window that contains no matching day, or an
/// inverted window, yields an empty iterator. Pure function of its inputs,
/// so the iterator can be recreated at will
pub fn occurrences(
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    recurring_day: RecurringDay,
    horizon: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
    let effective_end = end_date.unwrap_or(horizon);
    let first = recurring_day.first_on_or_after(start_date);

    successors(Some(first), |date| date.checked_add_days(Days::new(7)))
        .take_while(move |date| *date <= effective_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(d: u8) -> RecurringDay {
        RecurringDay::new(d).unwrap()
    }

    #[test]
    fn expands_weekly_between_matching_bounds() {
        // 2025-01-06 is a Monday; Mondays up to the 20th inclusive
        let dates: Vec<_> =
            occurrences(date(2025, 1, 6), Some(date(2025, 1, 20)), day(0), date(2025, 6, 1))
                .collect();
        assert_eq!(dates, vec![date(2025, 1, 6), date(2025, 1, 13), date(2025, 1, 20)]);
    }

    #[test]
    fn single_day_window_yields_one_occurrence() {
        // The imported-plan shape: start == end on the matching weekday
        let tuesday = date(2025, 1, 7);
        let dates: Vec<_> =
            occurrences(tuesday, Some(tuesday), day(1), date(2025, 6, 1)).collect();
        assert_eq!(dates, vec![tuesday]);
    }

    #[test]
    fn first_occurrence_advances_to_the_recurring_day() {
        // Wednesday start, Monday recurrence: first hit is the next Monday
        let dates: Vec<_> =
            occurrences(date(2025, 1, 8), Some(date(2025, 1, 31)), day(0), date(2025, 6, 1))
                .collect();
        assert_eq!(dates, vec![date(2025, 1, 13), date(2025, 1, 20), date(2025, 1, 27)]);
    }

    #[test]
    fn window_without_matching_day_is_empty() {
        // Wed 8th to Fri 10th contains no Monday
        let dates: Vec<_> =
            occurrences(date(2025, 1, 8), Some(date(2025, 1, 10)), day(0), date(2025, 6, 1))
                .collect();
        assert!(dates.is_empty());
    }

    #[test]
    fn inverted_window_is_empty_not_an_error() {
        let dates: Vec<_> =
            occurrences(date(2025, 1, 20), Some(date(2025, 1, 6)), day(0), date(2025, 6, 1))
                .collect();
        assert!(dates.is_empty());
    }

    #[test]
    fn open_ended_plan_is_bounded_by_the_horizon() {
        let dates: Vec<_> = occurrences(date(2025, 1, 6), None, day(0), date(2025, 1, 27)).collect();
        assert_eq!(
            dates,
            vec![date(2025, 1, 6), date(2025, 1, 13), date(2025, 1, 20), date(2025, 1, 27)]
        );
    }

    #[test]
    fn every_occurrence_is_a_whole_number_of_weeks_from_the_first() {
        for start_day in 0..7u8 {
            let start = date(2025, 3, 1) + Days::new(start_day as u64);
            let dates: Vec<_> =
                occurrences(start, Some(date(2025, 5, 31)), day(3), date(2025, 6, 1)).collect();

            assert!(!dates.is_empty());
            assert!(dates[0] >= start);
            assert!(dates[0] - start <= chrono::Duration::days(6));
            for window in dates.windows(2) {
                assert_eq!(window[1] - window[0], chrono::Duration::days(7));
            }
        }
    }

    #[test]
    fn expansion_is_restartable() {
        let make = || occurrences(date(2025, 1, 6), Some(date(2025, 2, 28)), day(2), date(2025, 6, 1));
        assert_eq!(make().collect::<Vec<_>>(), make().collect::<Vec<_>>());
    }
}
