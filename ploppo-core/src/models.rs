use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::BucketBoundaries;

/// Number of positions in a regular draw (`Num1..Num6`).
pub const DRAW_WIDTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draw {
    /// Source line (1-based, header included) or 0 when built in code.
    pub line: usize,
    pub numbers: Vec<u32>,
}

impl Draw {
    pub fn new(numbers: Vec<u32>) -> Self {
        Self { line: 0, numbers }
    }

    pub fn with_line(line: usize, numbers: Vec<u32>) -> Self {
        Self { line, numbers }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn sorted(&self) -> Vec<u32> {
        let mut sorted = self.numbers.clone();
        sorted.sort_unstable();
        sorted
    }
}

impl From<[u32; DRAW_WIDTH]> for Draw {
    fn from(numbers: [u32; DRAW_WIDTH]) -> Self {
        Draw::new(numbers.to_vec())
    }
}

/// Draws in chronological order: index 0 is the oldest draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DrawTable {
    draws: Vec<Draw>,
}

impl DrawTable {
    pub fn new(draws: Vec<Draw>) -> Self {
        Self { draws }
    }

    pub fn push(&mut self, draw: Draw) {
        self.draws.push(draw);
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Draw> {
        self.draws.iter()
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// The `n` most recent draws, most recent first.
    pub fn latest(&self, n: usize) -> Vec<&Draw> {
        self.draws.iter().rev().take(n).collect()
    }

    pub fn total_numbers(&self) -> usize {
        self.draws.iter().map(Draw::len).sum()
    }
}

impl FromIterator<Draw> for DrawTable {
    fn from_iter<I: IntoIterator<Item = Draw>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DrawTable {
    type Item = &'a Draw;
    type IntoIter = std::slice::Iter<'a, Draw>;

    fn into_iter(self) -> Self::IntoIter {
        self.draws.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberFrequency {
    pub number: u32,
    pub count: usize,
}

/// Occurrences per number, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyResult {
    pub entries: Vec<NumberFrequency>,
}

impl FrequencyResult {
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn top(&self, n: usize) -> &[NumberFrequency] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn count_of(&self, number: u32) -> usize {
        self.entries
            .iter()
            .find(|e| e.number == number)
            .map_or(0, |e| e.count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ParitySplit {
    pub odd: usize,
    pub even: usize,
}

impl std::fmt::Display for ParitySplit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Odd / {} Even", self.odd, self.even)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParityCount {
    pub split: ParitySplit,
    pub draws: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParitySplitResult {
    pub entries: Vec<ParityCount>,
}

impl ParitySplitResult {
    pub fn total_draws(&self) -> usize {
        self.entries.iter().map(|e| e.draws).sum()
    }

    /// Percentage of all draws showing this split.
    pub fn share(&self, entry: &ParityCount) -> f64 {
        let total = self.total_draws();
        if total == 0 {
            return 0.0;
        }
        entry.draws as f64 * 100.0 / total as f64
    }

    pub fn draws_with(&self, odd: usize, even: usize) -> usize {
        self.entries
            .iter()
            .find(|e| e.split == ParitySplit { odd, even })
            .map_or(0, |e| e.draws)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangePattern {
    /// One slot per bucket, in ascending bucket order.
    pub occupancy: Vec<usize>,
    pub draws: usize,
}

impl RangePattern {
    pub fn label(&self) -> String {
        let slots = self
            .occupancy
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{slots}]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeBucketResult {
    pub boundaries: BucketBoundaries,
    pub patterns: Vec<RangePattern>,
}

impl RangeBucketResult {
    pub fn draws_with(&self, occupancy: &[usize]) -> usize {
        self.patterns
            .iter()
            .find(|p| p.occupancy == occupancy)
            .map_or(0, |p| p.draws)
    }
}

/// Repeat count per draw, aligned with the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepeatResult {
    pub repeats: Vec<usize>,
}

impl RepeatResult {
    /// Number of draws per repeat value, ascending by repeat value.
    pub fn distribution(&self) -> BTreeMap<usize, usize> {
        let mut dist = BTreeMap::new();
        for &r in &self.repeats {
            *dist.entry(r).or_insert(0) += 1;
        }
        dist
    }
}

/// Average gap per draw, aligned with the table. `None` marks a draw with
/// fewer than two numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GapResult {
    pub averages: Vec<Option<f64>>,
}

impl GapResult {
    pub fn degenerate_rows(&self) -> usize {
        self.averages.iter().filter(|a| a.is_none()).count()
    }

    /// Defined averages with their position in the table.
    pub fn defined(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.averages
            .iter()
            .enumerate()
            .filter_map(|(i, a)| a.map(|v| (i, v)))
    }

    pub fn mean(&self) -> Option<f64> {
        let (sum, n) = self
            .defined()
            .fold((0.0, 0usize), |(sum, n), (_, v)| (sum + v, n + 1));
        (n > 0).then(|| sum / n as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub draw_count: usize,
    pub frequency: FrequencyResult,
    pub parity: ParitySplitResult,
    pub ranges: RangeBucketResult,
    pub repeats: RepeatResult,
    pub gaps: GapResult,
}
