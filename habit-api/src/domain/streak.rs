//! Combo (streak) computation over a habit's completion history.

use time::Date;

use super::models::{HabitEntry, RecordedEntry};

/// Running state of the scan: the date that would extend the current streak
/// and the combo reached so far.
#[derive(Debug, Default, Clone, Copy)]
struct Streak {
    expected: Option<Date>,
    combo: u32,
}

impl Streak {
    fn advance(&mut self, date: Date) -> u32 {
        self.combo = match self.expected {
            Some(expected) if expected == date => self.combo + 1,
            _ => 1,
        };
        // `next_day` is `None` only for `Date::MAX`, which no later entry can extend.
        self.expected = date.next_day();
        self.combo
    }
}

/// Derives the combo of every entry in a single left-to-right pass.
///
/// `entries` must already be in ascending date order; nothing is sorted or
/// deduplicated here. An entry extends the streak only when it falls exactly
/// one day after the previous entry, so a second entry on the same day
/// resets the combo to 1. The day after a duplicate still extends from it.
pub fn compute_streaks(entries: Vec<RecordedEntry>) -> Vec<HabitEntry> {
    entries
        .into_iter()
        .scan(Streak::default(), |streak, entry| {
            Some(HabitEntry {
                id: entry.id,
                habit_id: entry.habit_id,
                date: entry.date,
                combo: streak.advance(entry.date),
            })
        })
        .collect()
}

/// Whether `entries` satisfies the ordering [`compute_streaks`] relies on.
pub fn is_chronological(entries: &[RecordedEntry]) -> bool {
    entries.windows(2).all(|pair| pair[0].date <= pair[1].date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{macros::date, Duration};

    fn entries(dates: &[Date]) -> Vec<RecordedEntry> {
        dates
            .iter()
            .enumerate()
            .map(|(i, date)| RecordedEntry::new(i as i32 + 1, 7, *date))
            .collect()
    }

    fn combos(dates: &[Date]) -> Vec<u32> {
        compute_streaks(entries(dates))
            .into_iter()
            .map(|entry| entry.combo)
            .collect()
    }

    #[test]
    fn empty_history_has_no_combos() {
        assert!(compute_streaks(Vec::new()).is_empty());
    }

    #[test]
    fn single_entry_starts_a_streak() {
        assert_eq!(combos(&[date!(2024 - 01 - 01)]), vec![1]);
    }

    #[test]
    fn consecutive_days_accumulate() {
        assert_eq!(
            combos(&[date!(2024 - 01 - 01), date!(2024 - 01 - 02), date!(2024 - 01 - 03)]),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn gap_resets_the_streak() {
        assert_eq!(combos(&[date!(2024 - 01 - 01), date!(2024 - 01 - 03)]), vec![1, 1]);
    }

    #[test]
    fn duplicate_day_resets_and_the_following_day_extends_it() {
        assert_eq!(
            combos(&[
                date!(2024 - 01 - 01),
                date!(2024 - 01 - 02),
                date!(2024 - 01 - 02),
                date!(2024 - 01 - 03),
            ]),
            vec![1, 2, 1, 2]
        );
    }

    #[test]
    fn streak_resumes_after_a_gap() {
        assert_eq!(
            combos(&[
                date!(2024 - 03 - 01),
                date!(2024 - 03 - 02),
                date!(2024 - 03 - 05),
                date!(2024 - 03 - 06),
                date!(2024 - 03 - 07),
            ]),
            vec![1, 2, 1, 2, 3]
        );
    }

    #[test]
    fn streak_crosses_month_and_leap_day_boundaries() {
        assert_eq!(
            combos(&[
                date!(2024 - 02 - 28),
                date!(2024 - 02 - 29),
                date!(2024 - 03 - 01),
            ]),
            vec![1, 2, 3]
        );
        assert_eq!(
            combos(&[date!(2023 - 12 - 31), date!(2024 - 01 - 01)]),
            vec![1, 2]
        );
    }

    #[test]
    fn long_unbroken_run_counts_every_day() {
        let start = date!(2023 - 11 - 20);
        let dates: Vec<Date> = (0..100).map(|i| start + Duration::days(i)).collect();

        let result = combos(&dates);

        assert_eq!(result.len(), 100);
        for (i, combo) in result.iter().enumerate() {
            assert_eq!(*combo, i as u32 + 1);
        }
    }

    #[test]
    fn every_gap_longer_than_a_day_resets() {
        let start = date!(2024 - 06 - 01);
        for gap in 2..10 {
            let dates = [start, start + Duration::days(1), start + Duration::days(1 + gap)];
            assert_eq!(combos(&dates)[2], 1, "gap of {gap} days");
        }
    }

    #[test]
    fn last_representable_date_does_not_panic() {
        assert_eq!(combos(&[Date::MAX.previous_day().unwrap(), Date::MAX]), vec![1, 2]);
    }

    #[test]
    fn identifiers_and_dates_are_preserved() {
        let input = entries(&[date!(2024 - 01 - 01), date!(2024 - 01 - 02)]);

        let output = compute_streaks(input.clone());

        for (raw, derived) in input.iter().zip(&output) {
            assert_eq!(raw.id, derived.id);
            assert_eq!(raw.habit_id, derived.habit_id);
            assert_eq!(raw.date, derived.date);
        }
    }

    #[test]
    fn repeated_runs_give_identical_output() {
        let input = entries(&[
            date!(2024 - 01 - 01),
            date!(2024 - 01 - 02),
            date!(2024 - 01 - 04),
        ]);

        assert_eq!(compute_streaks(input.clone()), compute_streaks(input));
    }

    #[test]
    fn chronological_check_allows_duplicates_but_not_regressions() {
        assert!(is_chronological(&entries(&[])));
        assert!(is_chronological(&entries(&[
            date!(2024 - 01 - 01),
            date!(2024 - 01 - 01),
            date!(2024 - 01 - 02),
        ])));
        assert!(!is_chronological(&entries(&[
            date!(2024 - 01 - 02),
            date!(2024 - 01 - 01),
        ])));
    }
}
