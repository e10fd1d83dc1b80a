//! labelgen: synthetic multi-label dataset generation
//!
//! This crate produces label files for testing systems that consume
//! per-point label assignments, such as filtered vector-search indices.
//! Each output line lists the labels of one point, assigned either
//! uniformly at random or following a Zipfian frequency distribution.

#![warn(missing_docs)]

/// Validated generation parameters
pub mod params;

/// Label distribution strategies and the output contract
pub mod distribution;

/// Command-line interface modules
pub mod cli;

/// CLI configuration structure
#[derive(Debug)]
pub struct Cli {
    /// Enable verbose output
    pub verbose: bool,
    /// Disable progress bars and use simple text output
    pub no_progress: bool,
}

// Re-export commonly used types
pub use distribution::{BernoulliSource, LabelAssigner, LabelLines, RngSource};
pub use params::{DistributionType, GenerationParameters, Label, MAX_LABELS};

/// Result type for labelgen operations
pub type Result<T> = anyhow::Result<T>;

/// Error types for labelgen operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
