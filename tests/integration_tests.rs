//! Integration tests for the label file output contract

use std::fs;

use labelgen::cli::generate::{self, GenerateArgs};
use labelgen::distribution::random::RandomAssigner;
use labelgen::distribution::zipf::ZipfAssigner;
use labelgen::distribution::{self, BernoulliSource, LabelAssigner, LabelLines, RngSource};
use labelgen::GenerationParameters;

/// Trial source replaying a fixed script, then a constant outcome
struct Script {
    outcomes: Vec<bool>,
    next: usize,
    exhausted: bool,
}

impl Script {
    fn new(outcomes: &[bool]) -> Self {
        Self {
            outcomes: outcomes.to_vec(),
            next: 0,
            exhausted: false,
        }
    }

    fn always(outcome: bool) -> Self {
        Self {
            outcomes: Vec::new(),
            next: 0,
            exhausted: outcome,
        }
    }
}

impl BernoulliSource for Script {
    fn draw(&mut self, _probability: f64) -> bool {
        let outcome = self.outcomes.get(self.next).copied();
        self.next += 1;
        outcome.unwrap_or(self.exhausted)
    }
}

/// Run an assigner for `num_points` points and join the lines like the file writer does.
fn generate_to_string(assigner: &mut dyn LabelAssigner, trials: &mut dyn BernoulliSource, num_points: u64) -> String {
    let mut out = Vec::new();
    let lines = LabelLines::new(assigner, trials, num_points);
    distribution::write_label_file(&mut out, lines).expect("Write to memory failed");
    String::from_utf8(out).expect("Output is not UTF-8")
}

/// Parse one output line into its label ids, checking the sentinel rule.
fn parse_line(line: &str) -> Vec<u32> {
    let fields: Vec<u32> = line
        .split(',')
        .map(|f| f.parse().expect("Non-integer field in output"))
        .collect();
    if fields == [0] {
        Vec::new()
    } else {
        assert!(!fields.contains(&0), "Sentinel mixed with real labels: {line}");
        fields
    }
}

#[test]
fn test_line_count_matches_num_points() {
    for num_points in [1u64, 2, 17, 100] {
        let mut assigner = RandomAssigner::new(8);
        let mut trials = RngSource::default();
        let output = generate_to_string(&mut assigner, &mut trials, num_points);
        assert_eq!(output.split('\n').count() as u64, num_points);
    }
}

#[test]
fn test_no_trailing_newline() {
    let mut assigner = RandomAssigner::new(4);
    let mut trials = RngSource::default();
    let output = generate_to_string(&mut assigner, &mut trials, 10);
    assert!(!output.ends_with('\n'));
}

#[test]
fn test_random_zero_labels_emits_sentinel() {
    let mut assigner = RandomAssigner::new(0);
    let mut trials = RngSource::default();
    let output = generate_to_string(&mut assigner, &mut trials, 25);
    assert!(output.split('\n').all(|line| line == "0"));
}

#[test]
fn test_zipf_zero_labels_emits_sentinel() {
    let mut assigner = ZipfAssigner::new(25, 0);
    let mut trials = RngSource::default();
    let output = generate_to_string(&mut assigner, &mut trials, 25);
    assert!(output.split('\n').all(|line| line == "0"));
}

#[test]
fn test_lines_are_ascending_and_in_range() {
    let num_labels = 10u32;
    for output in [
        generate_to_string(&mut RandomAssigner::new(num_labels), &mut RngSource::default(), 50),
        generate_to_string(&mut ZipfAssigner::new(50, num_labels), &mut RngSource::default(), 50),
    ] {
        for line in output.split('\n') {
            let labels = parse_line(line);
            for pair in labels.windows(2) {
                assert!(pair[0] < pair[1], "Labels not strictly ascending: {line}");
            }
            for &label in &labels {
                assert!((1..=num_labels).contains(&label), "Label out of range: {label}");
            }
        }
    }
}

#[test]
fn test_zipf_respects_budgets() {
    // primary = ceil(20 * 0.7) = 14; an always-successful source drains each
    // label's budget exactly, never past it.
    let num_points = 20u64;
    let num_labels = 5u32;
    let output = generate_to_string(
        &mut ZipfAssigner::new(num_points, num_labels),
        &mut Script::always(true),
        num_points,
    );

    let mut occurrences = vec![0u64; num_labels as usize + 1];
    for line in output.split('\n') {
        for label in parse_line(line) {
            occurrences[label as usize] += 1;
        }
    }

    for id in 1..=num_labels as u64 {
        let budget = 14u64.div_ceil(id);
        assert!(occurrences[id as usize] <= budget, "Label {id} exceeded its budget");
        assert_eq!(occurrences[id as usize], budget.min(num_points));
    }
}

#[test]
fn test_output_format_reparses() {
    let output = generate_to_string(&mut ZipfAssigner::new(200, 30), &mut RngSource::default(), 200);
    for line in output.split('\n') {
        // parse_line panics on anything that is neither the sentinel nor a
        // clean comma-separated integer list.
        let _ = parse_line(line);
    }
}

#[test]
fn test_random_known_coin_flips() {
    // Points draw (label1, label2) trials (T,F), (F,F), (T,T).
    let mut assigner = RandomAssigner::new(2);
    let mut trials = Script::new(&[true, false, false, false, true, true]);
    let output = generate_to_string(&mut assigner, &mut trials, 3);
    assert_eq!(output, "1\n0\n1,2");
}

#[test]
fn test_zipf_single_point_single_label() {
    let success = generate_to_string(&mut ZipfAssigner::new(1, 1), &mut Script::always(true), 1);
    assert_eq!(success, "1");

    let failure = generate_to_string(&mut ZipfAssigner::new(1, 1), &mut Script::always(false), 1);
    assert_eq!(failure, "0");
}

#[test]
fn test_invalid_parameters_rejected() {
    use labelgen::{DistributionType, MAX_LABELS};

    assert!(GenerationParameters::new(0, 10, DistributionType::Random).is_err());
    assert!(GenerationParameters::new(10, MAX_LABELS + 1, DistributionType::Zipf).is_err());
}

fn quiet_cli() -> labelgen::Cli {
    labelgen::Cli {
        verbose: false,
        no_progress: true,
    }
}

#[test]
fn test_end_to_end_file_output() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("labels.txt");

    let args = GenerateArgs {
        output_file: path.clone(),
        num_points: 40,
        num_labels: 6,
        distribution_type: "zipf".to_string(),
    };
    generate::run(args, &quiet_cli()).expect("Generation failed");

    let contents = fs::read_to_string(&path).expect("Output file missing");
    assert!(!contents.ends_with('\n'));
    assert_eq!(contents.split('\n').count(), 40);
    for line in contents.split('\n') {
        let _ = parse_line(line);
    }
}

#[test]
fn test_unknown_distribution_writes_empty_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("labels.txt");

    let args = GenerateArgs {
        output_file: path.clone(),
        num_points: 10,
        num_labels: 6,
        distribution_type: "uniform".to_string(),
    };
    generate::run(args, &quiet_cli()).expect("Fall-through run should still succeed");

    let contents = fs::read_to_string(&path).expect("Output file missing");
    assert!(contents.is_empty());
}

#[test]
fn test_unwritable_output_path_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("no_such_dir").join("labels.txt");

    let args = GenerateArgs {
        output_file: path,
        num_points: 10,
        num_labels: 6,
        distribution_type: "random".to_string(),
    };
    let err = generate::run(args, &quiet_cli()).unwrap_err();
    assert!(err.to_string().contains("could not open output file"));
}

#[test]
fn test_constraint_violation_through_cli_layer() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("labels.txt");

    let args = GenerateArgs {
        output_file: path.clone(),
        num_points: 0,
        num_labels: 6,
        distribution_type: "random".to_string(),
    };
    assert!(generate::run(args, &quiet_cli()).is_err());
    assert!(!path.exists(), "No output should be produced on constraint violation");
}
