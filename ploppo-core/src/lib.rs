pub mod analysis;
pub mod config;
pub mod error;
pub mod models;

pub use analysis::analyze_all;
pub use config::{AnalysisConfig, BucketBoundaries};
pub use error::ConfigError;
pub use models::{AnalysisReport, Draw, DrawTable};
