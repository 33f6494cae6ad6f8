//! Batch edge detection over a directory of images.
use anyhow::{Context, Result};
use clap::Parser;
use edge_vision::batch;
use edge_vision::config::{load_config, BatchConfig, OnError};
use edge_vision::registry::available_methods;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edge_vision", version, about = "Batch edge detection (Canny / Sobel / Laplacian)")]
struct Cli {
    /// JSON config file; command-line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input directory containing images [default: data/raw]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory for edge maps [default: data/edges]
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, help = method_help())]
    method: Option<String>,

    /// Recursively process subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Also write original/edges comparison images
    #[arg(long)]
    visualize: bool,

    /// Skip images that fail instead of aborting the run
    #[arg(long)]
    skip_errors: bool,

    /// Write a JSON run summary to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Override Canny lower threshold
    #[arg(long)]
    canny_low: Option<f64>,

    /// Override Canny upper threshold
    #[arg(long)]
    canny_high: Option<f64>,

    /// Override Canny aperture size (3, 5 or 7)
    #[arg(long)]
    canny_aperture: Option<usize>,

    /// Use the L1 gradient norm in Canny instead of L2
    #[arg(long)]
    canny_l1: bool,

    /// Override Sobel kernel size (1, 3, 5 or 7)
    #[arg(long)]
    sobel_ksize: Option<usize>,

    /// Override Laplacian kernel size (odd, up to 31)
    #[arg(long)]
    laplacian_ksize: Option<usize>,

    /// Override Laplacian scale
    #[arg(long)]
    laplacian_scale: Option<f64>,

    /// Override Laplacian delta
    #[arg(long, allow_hyphen_values = true)]
    laplacian_delta: Option<f64>,

    /// Verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn method_help() -> String {
    format!("Edge detection method: {} [default: canny]", available_methods().join(", "))
}

impl Cli {
    fn into_config(self) -> Result<BatchConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => BatchConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(method) = self.method {
            config.method = method;
        }
        config.recursive |= self.recursive;
        config.visualize |= self.visualize;
        if self.skip_errors {
            config.on_error = OnError::Skip;
        }
        if self.report.is_some() {
            config.report = self.report;
        }

        let canny = &mut config.overrides.canny;
        canny.low_threshold = self.canny_low.or(canny.low_threshold);
        canny.high_threshold = self.canny_high.or(canny.high_threshold);
        canny.aperture_size = self.canny_aperture.or(canny.aperture_size);
        if self.canny_l1 {
            canny.l2_gradient = Some(false);
        }
        let sobel = &mut config.overrides.sobel;
        sobel.ksize = self.sobel_ksize.or(sobel.ksize);
        let laplacian = &mut config.overrides.laplacian;
        laplacian.ksize = self.laplacian_ksize.or(laplacian.ksize);
        laplacian.scale = self.laplacian_scale.or(laplacian.scale);
        laplacian.delta = self.laplacian_delta.or(laplacian.delta);

        Ok(config)
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = cli.into_config()?;
    let summary = batch::run(&config)?;

    println!(
        "Saved {} edge map(s) to {} using {}",
        summary.processed.len(),
        summary.output.display(),
        summary.method
    );
    if !summary.failed.is_empty() {
        println!("Skipped {} image(s); see log for details", summary.failed.len());
    }
    Ok(())
}
