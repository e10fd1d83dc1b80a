//! labelgen Command-Line Interface
//!
//! Generates synthetic label files for testing systems that consume
//! per-point label assignments, such as filtered vector-search indices.

use clap::Parser;
use console::style;

use labelgen::cli::generate::{self, GenerateArgs};

#[derive(Parser)]
#[command(name = "labelgen")]
#[command(about = "Synthetic multi-label dataset generator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(flatten)]
    pub args: GenerateArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable progress bars and use simple text output
    #[arg(long)]
    pub no_progress: bool,
}

fn main() -> labelgen::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    // Print banner
    if !cli.no_progress {
        println!("{}", style("🏷️  labelgen").bold().blue());
        println!("{}", style("Synthetic label files for filtered-search testing").dim());
        println!();
    }

    // Convert CLI to library format
    let lib_cli = labelgen::Cli {
        verbose: cli.verbose,
        no_progress: cli.no_progress,
    };

    generate::run(cli.args, &lib_cli)
}
