use crate::analysis::tally;
use crate::models::{DrawTable, FrequencyResult, NumberFrequency};

/// Occurrences of every number across all positions of all draws.
pub fn count_frequencies(table: &DrawTable) -> FrequencyResult {
    let all_numbers = table.iter().flat_map(|d| d.numbers.iter().copied());

    let entries = tally(all_numbers)
        .into_iter()
        .map(|(number, count)| NumberFrequency { number, count })
        .collect();

    FrequencyResult { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Draw;

    #[test]
    fn test_frequency_single_draw() {
        let table: DrawTable = std::iter::once(Draw::from([1, 2, 3, 4, 5, 6])).collect();
        let freq = count_frequencies(&table);
        assert_eq!(freq.entries.len(), 6);
        for n in 1..=6 {
            assert_eq!(freq.count_of(n), 1);
        }
        assert_eq!(freq.count_of(7), 0);
    }

    #[test]
    fn test_frequency_sorted_desc_ties_first_seen() {
        let table: DrawTable = vec![
            Draw::from([5, 1, 2, 3, 4, 6]),
            Draw::from([9, 8, 5, 2, 10, 11]),
        ]
        .into_iter()
        .collect();
        let freq = count_frequencies(&table);
        let order: Vec<u32> = freq.entries.iter().map(|e| e.number).collect();
        assert_eq!(order, vec![5, 2, 1, 3, 4, 6, 9, 8, 10, 11]);
        assert_eq!(freq.entries[0].count, 2);
        assert_eq!(freq.total(), 12);
    }

    #[test]
    fn test_frequency_lenient_on_short_draws() {
        let table: DrawTable = vec![
            Draw::new(vec![7, 7, 12]),
            Draw::new(vec![]),
            Draw::from([1, 2, 3, 4, 5, 7]),
        ]
        .into_iter()
        .collect();
        let freq = count_frequencies(&table);
        assert_eq!(freq.count_of(7), 3);
        assert_eq!(freq.total(), table.total_numbers());
    }

    #[test]
    fn test_frequency_top() {
        let table: DrawTable = vec![
            Draw::from([1, 2, 3, 4, 5, 6]),
            Draw::from([1, 2, 3, 40, 41, 42]),
        ]
        .into_iter()
        .collect();
        let freq = count_frequencies(&table);
        let top: Vec<u32> = freq.top(3).iter().map(|e| e.number).collect();
        assert_eq!(top, vec![1, 2, 3]);
        assert_eq!(freq.top(100).len(), 9);
    }
}
