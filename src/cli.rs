use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PersonaTUI - MBTI personality questionnaire for the terminal
#[derive(Parser)]
#[command(name = "personatui")]
#[command(about = "A guided MBTI personality questionnaire with TUI interface")]
#[command(version)]
pub struct Cli {
    /// Detailed mode: answer three short questions per trait instead of one slider.
    ///
    /// Each detailed answer is a value between 0 and 1. The three answers for a
    /// trait are summed and scaled to the same 0-10 range the quick sliders use.
    #[arg(long, global = true)]
    pub detailed: bool,

    /// Path to a label-mapping JSON file to verify against the built-in tables.
    ///
    /// The file must assign the same codes the classifier was trained with;
    /// any shifted, missing, or renamed entry aborts startup.
    #[arg(long, value_name = "FILE", global = true)]
    pub mappings: Option<PathBuf>,

    /// Path to a personality-description JSON file.
    ///
    /// Types absent from the file fall back to a generic placeholder.
    #[arg(long, value_name = "FILE", global = true)]
    pub descriptions: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict a personality type from a saved answers file, without the TUI
    Predict {
        /// Path to the answers JSON file
        #[arg(short, long)]
        answers: PathBuf,
    },
    /// Validate an answers file
    Validate {
        /// Path to the answers JSON file to validate
        answers: PathBuf,
    },
    /// Write template JSON files (answers, mappings, descriptions) to a directory
    Sample {
        /// Directory to write the templates into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
