use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper thresholds of the closed buckets, strictly ascending. A number goes
/// to the first bucket whose threshold it does not exceed; anything above the
/// last threshold lands in a final open-ended bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct BucketBoundaries {
    thresholds: Vec<u32>,
}

impl BucketBoundaries {
    pub fn new(thresholds: Vec<u32>) -> Result<Self, ConfigError> {
        if thresholds.is_empty() {
            return Err(ConfigError::InvalidBoundaries(
                "at least one threshold is required".into(),
            ));
        }
        if let Some(pair) = thresholds.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ConfigError::InvalidBoundaries(format!(
                "thresholds must be strictly ascending ({} then {})",
                pair[0], pair[1]
            )));
        }
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }

    /// Closed buckets plus the open-ended one.
    pub fn bucket_count(&self) -> usize {
        self.thresholds.len() + 1
    }

    pub fn bucket_of(&self, number: u32) -> usize {
        self.thresholds
            .iter()
            .position(|&t| number <= t)
            .unwrap_or(self.thresholds.len())
    }

    pub fn bucket_labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.bucket_count());
        let mut lower: Option<u32> = None;
        for &t in &self.thresholds {
            labels.push(match lower {
                None => format!("≤{t}"),
                Some(l) if l + 1 == t => t.to_string(),
                Some(l) => format!("{}-{}", l + 1, t),
            });
            lower = Some(t);
        }
        labels.push(format!(">{}", self.thresholds[self.thresholds.len() - 1]));
        labels
    }
}

impl Default for BucketBoundaries {
    fn default() -> Self {
        Self {
            thresholds: vec![10, 20, 30, 40],
        }
    }
}

impl TryFrom<Vec<u32>> for BucketBoundaries {
    type Error = ConfigError;

    fn try_from(thresholds: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(thresholds)
    }
}

impl From<BucketBoundaries> for Vec<u32> {
    fn from(boundaries: BucketBoundaries) -> Self {
        boundaries.thresholds
    }
}

/// Parses a comma-separated list such as `10,20,30,40`.
impl FromStr for BucketBoundaries {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let thresholds = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u32>().map_err(|_| {
                    ConfigError::InvalidBoundaries(format!("'{part}' is not a threshold"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(thresholds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub boundaries: BucketBoundaries,
    /// Rows in the "top numbers" table.
    pub top: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            boundaries: BucketBoundaries::default(),
            top: 10,
        }
    }
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
