pub mod audio;
pub mod cli;
pub mod config;
pub mod reference;
pub mod tts;

use anyhow::Context;
use cli::Cli;
use reference::ReferenceResolver;
use tts::{SpeechRequest, Synthesizer};

pub const NOOP_NOTICE: &str =
    "Not running as a command line tool; pass --as_command_line_tool to synthesize speech.";

pub fn run(cli: Cli) -> anyhow::Result<()> {
    setup_tracing(cli.verbose);

    if !cli.as_command_line_tool && !cli.list_models {
        println!("{NOOP_NOTICE}");
        return Ok(());
    }

    let config = config::Config::load(cli.config.as_deref()).context("load config")?;
    config.validate().context("validate config")?;

    if cli.list_models {
        return list_models(&config);
    }

    let text = cli.text.context("text is required for synthesis")?;
    let engine = tts::select_engine(&config.tts)?;
    let resolver = ReferenceResolver::new(config.references_dir());
    let synthesizer = Synthesizer::new(engine.as_ref(), &resolver, config.tts.language.clone());

    let output_dir = config.output_dir();
    let output_path = output_dir.join(&cli.output_path);
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }

    let request = SpeechRequest {
        text,
        emotion: cli.emotion,
        gender: cli.gender,
        intensity: cli.strong_intensity.into(),
        output_path,
    };
    synthesizer.speak(&request)?;

    report_output(&request.output_path);
    Ok(())
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn list_models(config: &config::Config) -> anyhow::Result<()> {
    let engine = tts::select_engine(&config.tts)?;
    let models = engine.list_models().context("list models")?;
    if models.is_empty() {
        tracing::warn!(engine = engine.name(), "engine reported no models");
    }
    for model in models {
        println!("{model}");
    }
    Ok(())
}

fn report_output(path: &std::path::Path) {
    match audio::summarize(path) {
        Ok(summary) => println!(
            "Wrote {} ({} Hz, {:.2}s)",
            path.display(),
            summary.sample_rate,
            summary.duration_secs
        ),
        Err(err) => {
            tracing::warn!(error = ?err, path = %path.display(), "could not read output header");
        }
    }
}
