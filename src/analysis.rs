use crate::error::AnalysisError;
use crate::ordered_set::OrderedSet;

/// Calorie intake of a single day.
pub type Calories = u32;

/// 1-based position of a day in the sequence.
pub type Day = usize;

//------------------------------------------

/// Largest product of the calories of two consecutive days.
///
/// Products are computed in `u64`, which holds the square of any
/// `Calories` value.
pub fn max_adjacent_product(calories: &[Calories]) -> Result<u64, AnalysisError> {
    calories
        .windows(2)
        .map(|xs| xs[0] as u64 * xs[1] as u64)
        .max()
        .ok_or(AnalysisError::InsufficientData {
            len: calories.len(),
        })
}

//------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncreasingRuns {
    /// Calorie values taking part in an increase, in order of first
    /// appearance.
    pub values: OrderedSet<Calories>,

    /// Days taking part in an increase, in order of first appearance.
    pub days: OrderedSet<Day>,

    /// Starts from 1 and grows by one per increase found.
    pub day_count: usize,
}

/// Finds the days where intake went up from the day before.
///
/// Both days of every strictly increasing pair are recorded. Sequences
/// shorter than two days have no pairs and yield empty sets.
pub fn increasing_runs(calories: &[Calories]) -> IncreasingRuns {
    let mut values = OrderedSet::new();
    let mut days = OrderedSet::new();
    let mut day_count = 1;

    for (i, xs) in calories.windows(2).enumerate() {
        let last_x = xs[0];
        let curr_x = xs[1];

        if last_x < curr_x {
            values.insert(last_x);
            values.insert(curr_x);
            days.insert(i + 1);
            days.insert(i + 2);
            day_count += 1;
        }
    }

    IncreasingRuns {
        values,
        days,
        day_count,
    }
}

//------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn brute_force_max_product(calories: &[Calories]) -> Option<u64> {
        let mut best = None;
        for i in 0..calories.len().saturating_sub(1) {
            let p = calories[i] as u64 * calories[i + 1] as u64;
            best = Some(best.map_or(p, |b: u64| b.max(p)));
        }
        best
    }

    #[test]
    fn max_product_of_single_pair() {
        assert_eq!(max_adjacent_product(&[3, 4]), Ok(12));
    }

    #[test]
    fn max_product_picks_largest_pair() {
        assert_eq!(max_adjacent_product(&[5, 2, 8, 1]), Ok(16));
    }

    #[test]
    fn max_product_of_zeroes() {
        assert_eq!(max_adjacent_product(&[0, 0, 0]), Ok(0));
    }

    #[test]
    fn max_product_does_not_overflow() {
        assert_eq!(
            max_adjacent_product(&[Calories::MAX, Calories::MAX]),
            Ok(Calories::MAX as u64 * Calories::MAX as u64)
        );
    }

    #[test]
    fn max_product_needs_two_days() {
        assert_eq!(
            max_adjacent_product(&[1]),
            Err(AnalysisError::InsufficientData { len: 1 })
        );
        assert_eq!(
            max_adjacent_product(&[]),
            Err(AnalysisError::InsufficientData { len: 0 })
        );
    }

    #[quickcheck]
    fn prop_max_product_matches_brute_force(calories: Vec<Calories>) -> TestResult {
        if calories.len() < 2 {
            return TestResult::discard();
        }

        TestResult::from_bool(
            max_adjacent_product(&calories).ok() == brute_force_max_product(&calories),
        )
    }

    fn runs(values: &[Calories], days: &[Day], day_count: usize) -> IncreasingRuns {
        IncreasingRuns {
            values: values.iter().copied().collect(),
            days: days.iter().copied().collect(),
            day_count,
        }
    }

    #[test]
    fn increasing_runs_strictly_rising() {
        assert_eq!(increasing_runs(&[1, 2, 3]), runs(&[1, 2, 3], &[1, 2, 3], 3));
    }

    #[test]
    fn increasing_runs_strictly_falling() {
        assert_eq!(increasing_runs(&[5, 3, 1]), runs(&[], &[], 1));
    }

    #[test]
    fn increasing_runs_too_short() {
        assert_eq!(increasing_runs(&[]), runs(&[], &[], 1));
        assert_eq!(increasing_runs(&[7]), runs(&[], &[], 1));
    }

    #[test]
    fn increasing_runs_equal_days_are_not_an_increase() {
        assert_eq!(increasing_runs(&[4, 4, 4]), runs(&[], &[], 1));
    }

    #[test]
    fn increasing_runs_keeps_first_appearance_order() {
        // Increases at days (1,2), (3,4) and (5,6).
        assert_eq!(
            increasing_runs(&[2000, 2500, 1800, 2000, 1500, 2500]),
            runs(&[2000, 2500, 1800, 1500], &[1, 2, 3, 4, 5, 6], 4)
        );
    }

    #[test]
    fn increasing_runs_is_idempotent() {
        let calories = [3, 1, 4, 1, 5, 9, 2, 6];
        assert_eq!(increasing_runs(&calories), increasing_runs(&calories));
        assert_eq!(
            max_adjacent_product(&calories),
            max_adjacent_product(&calories)
        );
    }

    #[quickcheck]
    fn prop_day_count_is_one_plus_increases(calories: Vec<Calories>) -> bool {
        let increases = calories.windows(2).filter(|xs| xs[0] < xs[1]).count();
        increasing_runs(&calories).day_count == increases + 1
    }

    #[quickcheck]
    fn prop_days_are_in_range_and_values_present(calories: Vec<Calories>) -> bool {
        let r = increasing_runs(&calories);
        r.days.iter().all(|&d| d >= 1 && d <= calories.len())
            && r.values.iter().all(|v| calories.contains(v))
            && r.days.iter().all(|&d| r.values.contains(&calories[d - 1]))
    }
}
