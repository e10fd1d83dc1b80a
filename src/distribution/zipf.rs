//! Zipfian (power-law) label assignment

use hashbrown::HashMap;

use super::{BernoulliSource, LabelAssigner};
use crate::params::Label;

/// Skew constant; label `i` fires with probability `0.7 / i`
pub const DISTRIBUTION_FACTOR: f64 = 0.7;

/// Assigns labels following a Zipf-like frequency distribution.
///
/// Label 1 receives an occurrence budget of `ceil(num_points * 0.7)` and
/// label `i` roughly `1/i` of that. A label whose budget is exhausted is
/// retired for the remainder of the run, which further concentrates
/// assignments on the surviving low ids. Budgets commonly outlast the run;
/// a non-empty table at the end is expected.
pub struct ZipfAssigner {
    num_labels: u32,
    /// Remaining allowed occurrences per still-active label.
    budgets: HashMap<Label, u64>,
}

impl ZipfAssigner {
    /// Build the frequency table for a run over `num_points` points.
    ///
    /// Ceiling division throughout, so every label starts with a budget of
    /// at least 1 whenever the primary frequency is at least 1.
    pub fn new(num_points: u64, num_labels: u32) -> Self {
        let primary_freq = (num_points as f64 * DISTRIBUTION_FACTOR).ceil() as u64;
        let budgets = (1..=num_labels)
            .map(|id| (id, primary_freq.div_ceil(u64::from(id))))
            .collect();

        Self { num_labels, budgets }
    }

    /// Remaining budget for a label, or `None` once it has been retired.
    pub fn remaining_budget(&self, label: Label) -> Option<u64> {
        self.budgets.get(&label).copied()
    }
}

impl LabelAssigner for ZipfAssigner {
    fn assign(&mut self, trials: &mut dyn BernoulliSource) -> Vec<Label> {
        let mut labels = Vec::new();
        // Walking ids in order keeps the output ascending and sidesteps
        // removal-during-iteration on the table.
        for id in 1..=self.num_labels {
            if let Some(budget) = self.budgets.get_mut(&id) {
                if trials.draw(DISTRIBUTION_FACTOR / f64::from(id)) {
                    labels.push(id);
                    *budget -= 1;
                    if *budget == 0 {
                        self.budgets.remove(&id);
                    }
                }
            }
        }
        labels
    }
}
