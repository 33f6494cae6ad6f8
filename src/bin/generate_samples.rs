use edge_vision::config::DEFAULT_INPUT_DIR;
use edge_vision::synthetic::generate_samples;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let output = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));

    log::info!("Generating synthetic dataset under: {}", output.display());
    let written = generate_samples(&output)?;
    for path in &written {
        println!("Saved {}", path.display());
    }
    Ok(())
}
