use std::collections::HashSet;

use crate::models::{Draw, DrawTable, RepeatResult};

/// One step of the repeat fold: the accumulator holds the previous draw's
/// numbers and is replaced by the current draw's.
pub fn repeat_step(previous: &mut HashSet<u32>, draw: &Draw) -> usize {
    let current: HashSet<u32> = draw.numbers.iter().copied().collect();
    let repeated = current.intersection(previous).count();
    *previous = current;
    repeated
}

/// Numbers shared with the immediately preceding draw. Must run in table
/// order; the first draw has no predecessor and always yields 0.
pub fn count_repeats(table: &DrawTable) -> RepeatResult {
    let repeats = table
        .iter()
        .scan(HashSet::new(), |previous, draw| Some(repeat_step(previous, draw)))
        .collect();

    RepeatResult { repeats }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeats_two_draws() {
        let table: DrawTable = vec![
            Draw::from([1, 2, 3, 4, 5, 6]),
            Draw::from([4, 5, 6, 7, 8, 9]),
        ]
        .into_iter()
        .collect();
        assert_eq!(count_repeats(&table).repeats, vec![0, 3]);
    }

    #[test]
    fn test_repeats_only_previous_draw_counts() {
        let table: DrawTable = vec![
            Draw::from([1, 2, 3, 4, 5, 6]),
            Draw::from([11, 12, 13, 14, 15, 16]),
            Draw::from([1, 2, 3, 14, 15, 30]),
            Draw::from([1, 2, 3, 14, 15, 30]),
        ]
        .into_iter()
        .collect();
        assert_eq!(count_repeats(&table).repeats, vec![0, 0, 2, 6]);
    }

    #[test]
    fn test_repeats_duplicates_collapse() {
        let table: DrawTable = vec![
            Draw::new(vec![5, 5, 5, 5, 5, 5]),
            Draw::new(vec![5, 5, 1, 2, 3, 4]),
        ]
        .into_iter()
        .collect();
        assert_eq!(count_repeats(&table).repeats, vec![0, 1]);
    }

    #[test]
    fn test_repeats_first_entry_zero_even_if_identical() {
        let table: DrawTable = std::iter::once(Draw::from([1, 2, 3, 4, 5, 6])).collect();
        assert_eq!(count_repeats(&table).repeats, vec![0]);
        assert!(count_repeats(&DrawTable::default()).repeats.is_empty());
    }

    #[test]
    fn test_repeat_step_hands_set_forward() {
        let mut previous = HashSet::new();
        assert_eq!(repeat_step(&mut previous, &Draw::from([1, 2, 3, 4, 5, 6])), 0);
        assert_eq!(repeat_step(&mut previous, &Draw::from([6, 7, 8, 9, 10, 11])), 1);
        assert!(previous.contains(&11));
        assert!(!previous.contains(&1));
    }

    #[test]
    fn test_repeats_order_sensitive() {
        let a = Draw::from([1, 2, 3, 4, 5, 6]);
        let b = Draw::from([1, 2, 7, 8, 9, 10]);
        let c = Draw::from([20, 21, 22, 23, 24, 25]);
        let forward: DrawTable = vec![a.clone(), b.clone(), c.clone()].into_iter().collect();
        let shuffled: DrawTable = vec![a, c, b].into_iter().collect();
        assert_eq!(count_repeats(&forward).repeats, vec![0, 2, 0]);
        assert_eq!(count_repeats(&shuffled).repeats, vec![0, 0, 0]);
    }
}
