use crate::analysis::tally;
use crate::config::BucketBoundaries;
use crate::models::{Draw, DrawTable, RangeBucketResult, RangePattern};

/// Occupancy of each bucket for one draw.
pub fn bucket_occupancy(draw: &Draw, boundaries: &BucketBoundaries) -> Vec<usize> {
    let mut buckets = vec![0usize; boundaries.bucket_count()];
    for &n in &draw.numbers {
        buckets[boundaries.bucket_of(n)] += 1;
    }
    buckets
}

pub fn bucket_ranges(table: &DrawTable, boundaries: &BucketBoundaries) -> RangeBucketResult {
    let occupancies = table.iter().map(|d| bucket_occupancy(d, boundaries));

    let patterns = tally(occupancies)
        .into_iter()
        .map(|(occupancy, draws)| RangePattern { occupancy, draws })
        .collect();

    RangeBucketResult {
        boundaries: boundaries.clone(),
        patterns,
    }
}
