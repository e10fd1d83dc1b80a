//! Label distribution strategies and the output contract
//!
//! Both strategies reduce to a stream of independent Bernoulli trials, one
//! per (point, label) pair. The trial source is injected behind a trait so
//! tests can script exact outcomes without a public seed parameter.

pub mod random;
pub mod zipf;

use std::io::Write;

use crate::params::Label;

/// Source of Bernoulli trial outcomes
pub trait BernoulliSource {
    /// Draw one trial that succeeds with the given probability.
    fn draw(&mut self, probability: f64) -> bool;
}

/// Bernoulli trials backed by a `rand` generator
pub struct RngSource<R> {
    rng: R,
}

impl<R: rand::Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RngSource<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl<R: rand::Rng> BernoulliSource for RngSource<R> {
    fn draw(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }
}

/// A label-assignment strategy, queried once per point
pub trait LabelAssigner {
    /// Produce the labels for the next point, in ascending id order.
    fn assign(&mut self, trials: &mut dyn BernoulliSource) -> Vec<Label>;
}

/// Iterator over formatted output lines, one per point
pub struct LabelLines<'a> {
    assigner: &'a mut dyn LabelAssigner,
    trials: &'a mut dyn BernoulliSource,
    remaining: u64,
}

impl<'a> LabelLines<'a> {
    /// Run `assigner` against `trials` for `num_points` points.
    pub fn new(
        assigner: &'a mut dyn LabelAssigner,
        trials: &'a mut dyn BernoulliSource,
        num_points: u64,
    ) -> Self {
        Self {
            assigner,
            trials,
            remaining: num_points,
        }
    }
}

impl Iterator for LabelLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(format_line(&self.assigner.assign(self.trials)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).ok();
        (n.unwrap_or(usize::MAX), n)
    }
}

/// Format one point's labels: comma-separated ids, or the `0` sentinel.
pub fn format_line(labels: &[Label]) -> String {
    if labels.is_empty() {
        "0".to_string()
    } else {
        labels
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Write lines to `out` joined by `\n`.
///
/// The final line carries no trailing newline; consumers count records as
/// separator-count plus one.
pub fn write_label_file<W: Write>(out: &mut W, lines: impl Iterator<Item = String>) -> crate::Result<()> {
    for (i, line) in lines.enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }
        out.write_all(line.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Trial source replaying a fixed script of outcomes, for deterministic tests
#[cfg(test)]
pub(crate) struct ScriptedTrials {
    outcomes: std::collections::VecDeque<bool>,
    exhausted: bool,
}

#[cfg(test)]
impl ScriptedTrials {
    pub(crate) fn new(outcomes: &[bool]) -> Self {
        Self {
            outcomes: outcomes.iter().copied().collect(),
            exhausted: false,
        }
    }

    /// A source that answers every trial with the same outcome.
    pub(crate) fn always(outcome: bool) -> Self {
        Self {
            outcomes: std::collections::VecDeque::new(),
            exhausted: outcome,
        }
    }
}

#[cfg(test)]
impl BernoulliSource for ScriptedTrials {
    fn draw(&mut self, _probability: f64) -> bool {
        self.outcomes.pop_front().unwrap_or(self.exhausted)
    }
}
