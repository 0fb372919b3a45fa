use crate::analysis::tally;
use crate::models::{Draw, DrawTable, ParityCount, ParitySplit, ParitySplitResult};

/// Even count is the complement of the draw's actual width, so draws with
/// fewer or more than six numbers still add up.
pub fn classify_parity(draw: &Draw) -> ParitySplit {
    let odd = draw.numbers.iter().filter(|&&n| n % 2 != 0).count();
    ParitySplit {
        odd,
        even: draw.len() - odd,
    }
}

pub fn split_parity(table: &DrawTable) -> ParitySplitResult {
    let entries = tally(table.iter().map(classify_parity))
        .into_iter()
        .map(|(split, draws)| ParityCount { split, draws })
        .collect();

    ParitySplitResult { entries }
}
