use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use energy_novelty::config::NoveltyConfig;
use energy_novelty::{pipeline, Result};

/// Computes the energy novelty curve of a WAV file and writes it as CSV.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input WAV file
    path_in: Option<PathBuf>,

    /// Output CSV file
    path_out: Option<PathBuf>,

    /// JSON file with run options, overridden by flags given here
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame size in samples
    #[arg(long)]
    frame_size: Option<usize>,

    /// Hop size in samples
    #[arg(long)]
    hop_size: Option<usize>,

    /// Logarithmic compression constant, 0 disables compression
    #[arg(long)]
    gamma: Option<f64>,

    /// Do not scale the curve to a maximum of 1
    #[arg(long)]
    no_normalize: bool,

    /// Replace the output file if it exists
    #[arg(long)]
    overwrite: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Result<NoveltyConfig> {
        let mut config = match &self.config {
            Some(path) => NoveltyConfig::from_json_file(path)?,
            None => NoveltyConfig::default(),
        };
        if let Some(path) = self.path_in {
            config.input_path = path;
        }
        if let Some(path) = self.path_out {
            config.output_path = path;
        }
        if let Some(frame_size) = self.frame_size {
            config.frame_size = frame_size;
        }
        if let Some(hop_size) = self.hop_size {
            config.hop_size = hop_size;
        }
        if let Some(gamma) = self.gamma {
            config.gamma = gamma;
        }
        if self.no_normalize {
            config.normalize = false;
        }
        if self.overwrite {
            config.overwrite = true;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let result = cli.into_config().and_then(|config| pipeline::run(&config));
    match result {
        Ok(summary) => {
            info!(
                "Done: {} samples at {} Hz -> {} frames",
                summary.sample_count, summary.sample_rate, summary.frame_count
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
