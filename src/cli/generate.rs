//! Label generation command
//!
//! Writes a synthetic label file: one line per point, each line holding the
//! point's label ids comma-separated in ascending order, or `0` when the
//! point receives no label.

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use crate::distribution::random::RandomAssigner;
use crate::distribution::zipf::ZipfAssigner;
use crate::distribution::{self, LabelAssigner, LabelLines, RngSource};
use crate::params::{DistributionType, GenerationParameters};
use crate::Error;

#[derive(Args)]
pub struct GenerateArgs {
    /// Filename for saving the label file
    #[arg(short = 'O', long = "output_file")]
    pub output_file: PathBuf,

    /// Number of points in dataset
    #[arg(short = 'N', long = "num_points")]
    pub num_points: u64,

    /// Number of unique labels, up to 5000
    #[arg(short = 'L', long = "num_labels")]
    pub num_labels: u32,

    /// Distribution function for labels <random/zipf> defaults to random
    #[arg(long = "distribution_type", default_value = "random")]
    pub distribution_type: String,
}

pub fn run(args: GenerateArgs, cli: &crate::Cli) -> crate::Result<()> {
    let start_time = Instant::now();

    let distribution = DistributionType::from_name(&args.distribution_type);

    // Bounds are checked before any output is produced, whatever the
    // distribution name turns out to be.
    let params = GenerationParameters::new(
        args.num_points,
        args.num_labels,
        distribution.unwrap_or_default(),
    )?;

    if !cli.no_progress {
        println!("{}", style("🏷️  Generating Synthetic Labels").bold().green());
        println!("  Output: {}", args.output_file.display());
        println!("  Points: {}", params.num_points);
        println!("  Labels: {}", params.num_labels);
        println!("  Distribution: {}", args.distribution_type);
        println!();
    }

    println!(
        "Generating synthetic labels for {} points with {} unique labels",
        params.num_points, params.num_labels
    );

    if cli.verbose {
        println!("Opening output file {}...", args.output_file.display());
    }

    let file = File::create(&args.output_file).map_err(|e| {
        Error::Io(format!(
            "could not open output file {}: {e}",
            args.output_file.display()
        ))
    })?;
    let mut out = BufWriter::new(file);

    let mut assigner: Box<dyn LabelAssigner> = match distribution {
        Some(DistributionType::Zipf) => {
            log::debug!("Building Zipf frequency table for {} labels", params.num_labels);
            Box::new(ZipfAssigner::new(params.num_points, params.num_labels))
        }
        Some(DistributionType::Random) => Box::new(RandomAssigner::new(params.num_labels)),
        None => {
            // Unknown names fall through both strategies: the file stays
            // empty and the run still exits successfully. Downstream scripts
            // rely on that, so only warn.
            log::warn!(
                "Unknown distribution type '{}'; writing an empty label file",
                args.distribution_type
            );
            return finish(&args, cli, start_time);
        }
    };

    let mut trials = RngSource::default();
    let lines = LabelLines::new(assigner.as_mut(), &mut trials, params.num_points);

    if cli.no_progress {
        distribution::write_label_file(&mut out, lines)?;
    } else {
        let pb = ProgressBar::new(params.num_points);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"));
        distribution::write_label_file(&mut out, pb.wrap_iter(lines))?;
        pb.finish_and_clear();
    }

    finish(&args, cli, start_time)
}

/// Print the success report common to all generation paths.
fn finish(args: &GenerateArgs, cli: &crate::Cli, start_time: Instant) -> crate::Result<()> {
    println!("Labels written to {}", args.output_file.display());

    if !cli.no_progress {
        let elapsed = start_time.elapsed();
        println!(
            "\n🎉 Done in {}",
            style(humantime::format_duration(elapsed)).bold().green()
        );
    }

    Ok(())
}
