pub mod frequency;
pub mod gap;
pub mod parity;
pub mod range;
pub mod repeat;

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::AnalysisConfig;
use crate::models::{AnalysisReport, DrawTable};

pub use frequency::count_frequencies;
pub use gap::average_gaps;
pub use parity::split_parity;
pub use range::bucket_ranges;
pub use repeat::count_repeats;

/// Runs the five transforms over the same table.
pub fn analyze_all(table: &DrawTable, config: &AnalysisConfig) -> AnalysisReport {
    log::debug!("Analyzing {} draws", table.len());

    let report = AnalysisReport {
        draw_count: table.len(),
        frequency: count_frequencies(table),
        parity: split_parity(table),
        ranges: bucket_ranges(table, &config.boundaries),
        repeats: count_repeats(table),
        gaps: average_gaps(table),
    };

    let degenerate = report.gaps.degenerate_rows();
    if degenerate > 0 {
        log::warn!("{degenerate} draw(s) with fewer than 2 numbers have no average gap");
    }
    report
}

/// Counts keys in first-seen order, then sorts by count descending. The sort
/// is stable so ties keep their first-seen order.
pub(crate) fn tally<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Draw;

    fn sample_table() -> DrawTable {
        vec![
            Draw::from([3, 14, 22, 35, 41, 7]),
            Draw::from([7, 14, 19, 28, 33, 45]),
            Draw::from([1, 7, 14, 20, 38, 49]),
            Draw::from([2, 9, 16, 27, 31, 44]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_tally_ties_keep_first_seen_order() {
        let counted = tally(vec!["b", "a", "c", "a", "b", "d"]);
        assert_eq!(counted, vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]);
    }

    #[test]
    fn test_tally_empty() {
        let counted: Vec<(u32, usize)> = tally(Vec::new());
        assert!(counted.is_empty());
    }

    #[test]
    fn test_analyze_all_single_draw() {
        let table: DrawTable = std::iter::once(Draw::from([1, 2, 3, 4, 5, 6])).collect();
        let report = analyze_all(&table, &AnalysisConfig::default());

        assert_eq!(report.draw_count, 1);
        assert_eq!(report.frequency.entries.len(), 6);
        assert!(report.frequency.entries.iter().all(|e| e.count == 1));
        assert_eq!(report.parity.draws_with(3, 3), 1);
        assert_eq!(report.ranges.draws_with(&[6, 0, 0, 0, 0]), 1);
        assert_eq!(report.repeats.repeats, vec![0]);
        assert_eq!(report.gaps.averages.len(), 1);
        assert!((report.gaps.averages[0].unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_analyze_all_invariants() {
        let table = sample_table();
        let report = analyze_all(&table, &AnalysisConfig::default());

        assert_eq!(report.frequency.total(), 6 * table.len());
        assert_eq!(report.parity.total_draws(), table.len());
        let bucket_draws: usize = report.ranges.patterns.iter().map(|p| p.draws).sum();
        assert_eq!(bucket_draws, table.len());
        for p in &report.ranges.patterns {
            assert_eq!(p.occupancy.iter().sum::<usize>(), 6);
        }
        assert_eq!(report.repeats.repeats.len(), table.len());
        assert_eq!(report.repeats.repeats[0], 0);
        assert!(report.repeats.repeats.iter().all(|&r| r <= 6));
        assert!(report.gaps.defined().all(|(_, g)| g >= 0.0));
    }

    #[test]
    fn test_analyze_all_idempotent() {
        let table = sample_table();
        let config = AnalysisConfig::default();
        assert_eq!(analyze_all(&table, &config), analyze_all(&table, &config));
    }

    #[test]
    fn test_analyze_all_empty_table() {
        let report = analyze_all(&DrawTable::default(), &AnalysisConfig::default());
        assert_eq!(report.draw_count, 0);
        assert!(report.frequency.entries.is_empty());
        assert!(report.parity.entries.is_empty());
        assert!(report.ranges.patterns.is_empty());
        assert!(report.repeats.repeats.is_empty());
        assert!(report.gaps.averages.is_empty());
    }
}
