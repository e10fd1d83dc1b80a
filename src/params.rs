//! Validated generation parameters
//!
//! The command line supplies raw counts; this module checks them against the
//! supported bounds and fixes the types the strategies work with.

use crate::Error;

/// Label type (32-bit for compatibility with downstream index consumers)
pub type Label = u32;

/// Upper bound on the number of unique labels
pub const MAX_LABELS: u32 = 5000;

/// Which frequency distribution drives label assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistributionType {
    /// Every (point, label) pair is an unbiased coin flip
    #[default]
    Random,
    /// Power-law assignment where low label ids occur far more often
    Zipf,
}

impl DistributionType {
    /// Resolve a distribution name from the command line.
    ///
    /// Returns `None` for names other than `random` and `zipf`; the caller
    /// decides what an unknown name means for the run.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" => Some(Self::Random),
            "zipf" => Some(Self::Zipf),
            _ => None,
        }
    }
}

/// Validated inputs for one generation run, immutable once constructed
#[derive(Debug, Clone)]
pub struct GenerationParameters {
    /// Number of points in the dataset
    pub num_points: u64,
    /// Number of unique labels available for assignment
    pub num_labels: u32,
    /// The assignment strategy to run
    pub distribution: DistributionType,
}

impl GenerationParameters {
    /// Check the raw counts and build the parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] when `num_points` is zero or
    /// `num_labels` exceeds [`MAX_LABELS`].
    pub fn new(num_points: u64, num_labels: u32, distribution: DistributionType) -> crate::Result<Self> {
        if num_points == 0 {
            return Err(Error::InvalidParameter("num_points must be greater than 0".to_string()).into());
        }
        if num_labels > MAX_LABELS {
            return Err(Error::InvalidParameter(format!("num_labels must be {MAX_LABELS} or less")).into());
        }

        Ok(Self {
            num_points,
            num_labels,
            distribution,
        })
    }
}
