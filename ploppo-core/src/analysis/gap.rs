use crate::models::{Draw, DrawTable, GapResult};

/// Mean difference between consecutive sorted numbers, `None` when the draw
/// holds fewer than two numbers.
pub fn average_gap(draw: &Draw) -> Option<f64> {
    let sorted = draw.sorted();
    if sorted.len() < 2 {
        return None;
    }
    let total: u64 = sorted.windows(2).map(|w| u64::from(w[1] - w[0])).sum();
    Some(total as f64 / (sorted.len() - 1) as f64)
}

pub fn average_gaps(table: &DrawTable) -> GapResult {
    GapResult {
        averages: table.iter().map(average_gap).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_gap_consecutive() {
        let gap = average_gap(&Draw::from([1, 2, 3, 4, 5, 6])).unwrap();
        assert!((gap - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_average_gap_unsorted_input() {
        // sorted: 3 10 12 25 33 48 -> span 45 over 5 gaps
        let gap = average_gap(&Draw::from([33, 3, 48, 12, 25, 10])).unwrap();
        assert!((gap - 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_average_gap_duplicates() {
        let gap = average_gap(&Draw::new(vec![7, 7, 7])).unwrap();
        assert_eq!(gap, 0.0);
    }

    #[test]
    fn test_average_gap_degenerate() {
        assert!(average_gap(&Draw::new(vec![42])).is_none());
        assert!(average_gap(&Draw::new(vec![])).is_none());
        assert!((average_gap(&Draw::new(vec![40, 10])).unwrap() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_average_gaps_aligned_with_table() {
        let table: DrawTable = vec![
            Draw::from([1, 2, 3, 4, 5, 6]),
            Draw::new(vec![9]),
            Draw::from([5, 10, 15, 20, 25, 30]),
        ]
        .into_iter()
        .collect();
        let gaps = average_gaps(&table);
        assert_eq!(gaps.averages.len(), 3);
        assert!(gaps.averages[1].is_none());
        assert!((gaps.averages[2].unwrap() - 5.0).abs() < 1e-10);
        assert_eq!(gaps.degenerate_rows(), 1);
    }

    #[test]
    fn test_average_gap_extreme_values() {
        let gap = average_gap(&Draw::new(vec![0, u32::MAX])).unwrap();
        assert!((gap - u32::MAX as f64).abs() < 1e-3);
    }
}
