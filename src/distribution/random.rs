//! Uniform-random label assignment

use super::{BernoulliSource, LabelAssigner};
use crate::params::Label;

/// Probability that any given label is assigned to any given point
const LABEL_PROBABILITY: f64 = 0.5;

/// Assigns each label to each point with an unbiased coin flip.
///
/// Trials are independent across points and labels, so every subset of the
/// label universe is equally likely for every point.
pub struct RandomAssigner {
    num_labels: u32,
}

impl RandomAssigner {
    /// Create an assigner over the label universe `1..=num_labels`.
    pub fn new(num_labels: u32) -> Self {
        Self { num_labels }
    }
}

impl LabelAssigner for RandomAssigner {
    fn assign(&mut self, trials: &mut dyn BernoulliSource) -> Vec<Label> {
        let mut labels = Vec::new();
        for id in 1..=self.num_labels {
            if trials.draw(LABEL_PROBABILITY) {
                labels.push(id);
            }
        }
        labels
    }
}
