//! PersonaTUI - Main entry point
//!
//! A terminal questionnaire that walks through the eight MBTI questions and
//! predicts a personality type from the answers.

mod answers_file;
mod app;
mod classifier;
mod cli;
mod error;
mod labels;
mod mapping_file;
mod predictor;
mod session;
mod theme;
mod ui;
mod wizard;

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::answers_file::AnswersFile;
use crate::cli::Cli;
use crate::mapping_file::{Descriptions, LabelMappingFile};
use crate::predictor::Predictor;
use crate::session::QuestionnaireMode;

/// Initialize the tracing subscriber with appropriate settings
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // Logs go to stderr so the alternate screen stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging first
    init_tracing();
    info!("PersonaTUI starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    // A mismatched mapping file must abort before any prediction runs
    if let Some(path) = &cli.mappings {
        info!("Verifying label mapping file: {}", path.display());
        LabelMappingFile::load_verified(path)?;
        info!("Label mappings match the built-in tables");
    }

    let descriptions = match &cli.descriptions {
        Some(path) => {
            info!("Loading personality descriptions from: {}", path.display());
            let descriptions = Descriptions::load(path)?;
            let missing = descriptions.missing();
            if !missing.is_empty() {
                warn!(
                    "Description file covers {} of 16 personality types; the rest fall back to a placeholder",
                    16 - missing.len()
                );
            }
            descriptions
        }
        None => Descriptions::builtin(),
    };

    match cli.command {
        Some(cli::Commands::Predict { answers }) => {
            info!("Predicting from answers file: {}", answers.display());
            run_headless_predict(&answers, &descriptions)?;
        }
        Some(cli::Commands::Validate { answers }) => {
            info!("Validating answers file: {}", answers.display());
            run_validate(&answers);
        }
        Some(cli::Commands::Sample { out_dir }) => {
            info!("Writing template files to: {}", out_dir.display());
            run_sample(&out_dir)?;
        }
        None => {
            let mode = if cli.detailed {
                QuestionnaireMode::Detailed
            } else {
                QuestionnaireMode::Quick
            };
            info!("No command specified, launching questionnaire TUI");
            run_tui(mode, descriptions)?;
        }
    }

    Ok(())
}

/// Run the interactive questionnaire TUI
fn run_tui(mode: QuestionnaireMode, descriptions: Descriptions) -> anyhow::Result<()> {
    debug!("Initializing terminal for TUI mode");

    // Initialize terminal
    enable_raw_mode()
        .map_err(|e| error::general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| error::general_error(format!("Failed to enter alternate screen: {}", e)))?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| error::general_error(format!("Failed to create terminal: {}", e)))?;

    // Create and run application
    let mut app = app::App::new(mode, Predictor::with_rules(), descriptions);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result?;
    Ok(())
}

/// Predict a personality type from a saved answers file (headless mode)
fn run_headless_predict(path: &Path, descriptions: &Descriptions) -> anyhow::Result<()> {
    let answers = AnswersFile::load(path)?;
    answers.validate()?;

    let session = answers.to_session();
    let predictor = Predictor::with_rules();
    let personality = predictor.predict_session(&session)?;

    info!("Predicted personality type: {}", personality);
    println!("Predicted personality type: {}", personality);
    println!();
    println!("{}", descriptions.describe(personality));

    Ok(())
}

/// Validate an answers file and report the result
fn run_validate(path: &Path) {
    match AnswersFile::load(path) {
        Ok(answers) => match answers.validate() {
            Ok(()) => {
                info!("Answers file validation successful");
                println!("✓ Answers file is valid: {}", path.display());
            }
            Err(e) => {
                error!("Answers file validation failed: {:#}", e);
                eprintln!("✗ Answers file validation failed: {:#}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to load answers file: {:#}", e);
            eprintln!("✗ Failed to load answers file: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Write template answers, mapping, and description files
fn run_sample(out_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let answers_path = out_dir.join("answers.json");
    AnswersFile::default().save(&answers_path)?;
    println!("✓ Wrote answers template: {}", answers_path.display());

    let mappings_path = out_dir.join("label_mappings.json");
    LabelMappingFile::builtin().save(&mappings_path)?;
    println!("✓ Wrote label mappings: {}", mappings_path.display());

    let descriptions_path = out_dir.join("descriptions.json");
    Descriptions::builtin().save(&descriptions_path)?;
    println!(
        "✓ Wrote personality descriptions: {}",
        descriptions_path.display()
    );

    Ok(())
}
