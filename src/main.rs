use anyhow::Context;
use clap::Parser;
use ellipse_circumference::adapters::input::{CombinedReader, FixedAxes, PromptedReader};
use ellipse_circumference::domain::ports::ConfigProvider;
use ellipse_circumference::utils::{logger, validation::Validate};
use ellipse_circumference::{
    CliConfig, EllipseError, InputMode, ReportEngine, RunSettings, TomlConfig,
};
use std::io;
use std::path::Path;

fn main() {
    if let Err(e) = run() {
        tracing::error!("❌ Report failed: {:#}", e);
        match e.downcast_ref::<EllipseError>() {
            Some(err) => {
                eprintln!("❌ {}: {}", e, err.user_friendly_message());
                eprintln!("💡 Suggestion: {}", err.recovery_suggestion());
            }
            None => eprintln!("❌ {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting ellipse-circumference");
    tracing::debug!("CLI config: {:?}", cli);

    let file_config = cli.config.as_deref().map(load_config).transpose()?;

    // 命令列設定優先於設定檔
    let mut layers: Vec<&dyn ConfigProvider> = vec![&cli];
    if let Some(config) = &file_config {
        layers.push(config);
    }
    let settings = RunSettings::resolve(&layers);
    tracing::debug!("Resolved settings: {:?}", settings);

    let evaluator = settings.evaluator()?;
    let format = settings.output_format;
    let mut out = io::stdout();

    let outcome = match (settings.axes, settings.input_mode) {
        (Some(axes), _) => {
            ReportEngine::with_options(FixedAxes(axes), evaluator, format).run(&mut out)
        }
        (None, InputMode::Combined) => ReportEngine::with_options(
            CombinedReader::new(io::stdin().lock()),
            evaluator,
            format,
        )
        .run(&mut out),
        (None, InputMode::Prompted) => ReportEngine::with_options(
            PromptedReader::new(io::stdin().lock(), io::stdout()),
            evaluator,
            format,
        )
        .run(&mut out),
    }
    .context("Failed to produce the report")?;

    tracing::info!(
        "✅ Reported {} formulas for a = {}, b = {}",
        outcome.results.len(),
        outcome.axes.a,
        outcome.axes.b
    );

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<TomlConfig> {
    tracing::info!("📁 Loading configuration from: {}", path.display());

    let config = TomlConfig::from_file(path)
        .with_context(|| format!("Failed to load config file '{}'", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file '{}'", path.display()))?;

    tracing::info!("✅ Configuration loaded and validated successfully");
    Ok(config)
}
