//! CLI entrypoint for Song Match
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;
use song_match_application::{NoQuizLogger, QuizLogger, RunQuizInput, RunQuizUseCase};
use song_match_domain::QuizDefinition;
use song_match_infrastructure::{
    ConfigIssue, ConfigLoader, FileConfig, FileOutputFormat, JsonlQuizLogger,
};
use song_match_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormat, QuizRepl, ReplConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Song Match");

    if cli.show_config {
        println!("Configuration sources (in priority order):");
        for line in ConfigLoader::config_sources() {
            println!("  {}", line);
        }
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let issues = config.validate();
    for issue in &issues {
        if !cli.quiet || issue.is_error() {
            eprintln!("{} {}", "Config:".yellow().bold(), issue);
        }
        warn!("{}", issue.message);
    }
    if issues.iter().any(ConfigIssue::is_error) {
        bail!("Configuration has errors, see above");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let quiz = Arc::new(QuizDefinition::song_match());

    if cli.list_questions {
        print!("{}", ConsoleFormatter::format_questions(&quiz));
        return Ok(());
    }

    // === Dependency Injection ===
    let use_case = RunQuizUseCase::new(Arc::clone(&quiz))
        .with_config(config.quiz.to_quiz_config())
        .with_logger(transcript_logger(&cli, &config));

    let output = OutputConfig {
        format: cli
            .output
            .or(config.output.format.map(|format| match format {
                FileOutputFormat::Text => OutputFormat::Text,
                FileOutputFormat::Json => OutputFormat::Json,
            }))
            .unwrap_or_default(),
        color: config.output.color,
        show_ranking: cli.ranking || config.quiz.show_ranking,
    };

    // Scripted mode - one answer per question
    if cli.is_scripted() {
        if cli.answer.len() != quiz.question_count() {
            bail!(
                "Expected {} answers (one --answer per question), got {}. Use --list-questions to see them.",
                quiz.question_count(),
                cli.answer.len()
            );
        }

        let mut input = RunQuizInput::new(cli.answer.iter().cloned());
        if let Some(artist) = &cli.artist {
            input = input.with_artist(artist.clone());
        }

        let result = use_case.execute(input)?;

        let rendered = match output.format {
            OutputFormat::Text => {
                ConsoleFormatter::format(&result, cli.artist.as_deref(), output.show_ranking)
            }
            OutputFormat::Json => ConsoleFormatter::format_json(&result),
        };
        println!("{}", rendered);
        return Ok(());
    }

    if output.format == OutputFormat::Json {
        bail!("JSON output needs a scripted run. Pass one --answer per question.");
    }

    let repl_config = ReplConfig {
        history_file: config
            .repl
            .history_file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from),
        quiet: cli.quiet,
    };

    QuizRepl::new(use_case, output, repl_config)
        .with_artist(cli.artist.clone())
        .run()?;

    Ok(())
}

/// Transcript logger from `--transcript` or `[logging] transcript`
fn transcript_logger(cli: &Cli, config: &FileConfig) -> Arc<dyn QuizLogger> {
    let path = cli.transcript.clone().or_else(|| {
        config
            .logging
            .transcript
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    });

    match path.and_then(JsonlQuizLogger::new) {
        Some(logger) => {
            info!("Writing transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoQuizLogger),
    }
}
