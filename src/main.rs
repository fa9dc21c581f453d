//! classpredict - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use classpredict::{
    cli::{Args, Commands, Config, PredictArgs, Verbosity},
    wizard::{DisplayManager, WizardSession},
    PredictionSummary,
};
use tracing::{debug, info};

const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbosity())?;

    let config = Config::load(args.config.clone()).context("failed to load configuration")?;
    if !config.display.color_output {
        colored::control::set_override(false);
    }
    debug!(?config, "configuration loaded");

    match &args.command {
        Some(Commands::Start) | None => run_wizard(&config)?,
        Some(Commands::Predict(predict)) => run_predict(&config, predict)?,
        Some(Commands::Config) => show_config(&args, &config)?,
    }

    Ok(())
}

/// Route logs to stderr so they never interleave with the form
fn init_tracing(verbosity: Verbosity) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("CLASSPREDICT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn run_wizard(config: &Config) -> Result<()> {
    info!("starting interactive form");
    let mut session = WizardSession::new(config);
    session.run(VERSION)?;
    Ok(())
}

fn run_predict(config: &Config, predict: &PredictArgs) -> classpredict::Result<()> {
    let input = predict.input()?;
    let summary = PredictionSummary::compute(input, predict.model);
    info!(
        model = %predict.model,
        rounded_final = summary.rounded_final,
        capped = summary.is_capped(),
        "one-shot prediction"
    );

    if predict.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let chart = (config.display.show_chart && !predict.no_chart).then(|| config.chart_options());
    DisplayManager::new(chart).show_result(&summary);
    Ok(())
}

fn show_config(args: &Args, config: &Config) -> Result<()> {
    let source = match &args.config {
        Some(path) => path.display().to_string(),
        None => match Config::default_path() {
            Some(path) if path.exists() => path.display().to_string(),
            _ => "built-in defaults".to_string(),
        },
    };

    println!("# classpredict configuration ({})", source);
    println!("# verbosity: {}", args.verbosity().as_str());
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}
