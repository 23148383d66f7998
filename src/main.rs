use std::io::{self, Write};
use std::path::PathBuf;

use cezar::{
    io_utils::{cezar_cli_error, io_cli_error},
    load_ciphertext, save_solution, write_report, CezarError, Config, LanguageDetector, Selector,
    Strategy,
};
use clap::{ArgAction, Parser};
use tracing::{info, Level};

/// Break a Caesar-shifted Polish message by trying every shift.
#[derive(Parser)]
struct Args {
    /// Ciphertext file, or the ciphertext itself. Defaults to the configured input file
    source: Option<String>,
    /// Where to save the decrypted message
    #[arg(long)]
    output: Option<PathBuf>,
    /// How candidates are judged
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,
    /// Print the solution as JSON
    #[arg(long)]
    json: bool,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn resolve_config(args: &Args) -> Result<Config, CezarError> {
    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(output) = &args.output {
        cfg.output = output.clone();
    }
    if let Some(strategy) = args.strategy {
        cfg.strategy = strategy;
    }
    cfg.json |= args.json;
    Ok(cfg)
}

fn build_detector(strategy: Strategy) -> Result<Option<Box<dyn LanguageDetector>>, CezarError> {
    match strategy {
        Strategy::Keywords => Ok(None),
        #[cfg(feature = "whatlang")]
        Strategy::Detector => Ok(Some(Box::new(cezar::WhatlangDetector::new()))),
        #[cfg(not(feature = "whatlang"))]
        Strategy::Detector => Err(CezarError::Config(
            "the detector strategy needs a build with the `whatlang` feature".to_string(),
        )),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let cfg = resolve_config(&args).map_err(|e| cezar_cli_error("loading config", e))?;
    let detector =
        build_detector(cfg.strategy).map_err(|e| cezar_cli_error("choosing strategy", e))?;
    let ciphertext = load_ciphertext(args.source.as_deref(), &cfg.default_input)
        .map_err(|e| cezar_cli_error("loading ciphertext", e))?;

    let selector = match detector.as_deref() {
        Some(detector) => Selector::with_detector(detector),
        None => Selector::keyword_only(),
    };
    let solution = selector.select(&ciphertext);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cfg.json {
        serde_json::to_writer_pretty(&mut out, &solution)?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &solution)?;
    }

    if save_solution(&cfg.output, &solution.best_text)
        .map_err(|e| io_cli_error("writing solution", &cfg.output, e))?
    {
        info!(path = %cfg.output.display(), "saved solution");
    }
    Ok(())
}
