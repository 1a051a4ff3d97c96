//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::domain::SubjectRequest;

/// FocusFlow - priority-weighted study planner
#[derive(Parser, Debug)]
#[command(name = "ff")]
#[command(author, version, about = "Priority-weighted study planner with Pomodoro timers", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split study hours across subjects by priority
    Plan {
        /// Subject and priority as SUBJECT[:High|Medium|Low] (repeatable)
        #[arg(short, long = "subject", value_name = "SUBJECT[:PRIORITY]")]
        subjects: Vec<SubjectRequest>,

        /// Total study hours per day (default from config)
        #[arg(short = 'H', long)]
        hours: Option<String>,

        /// YAML plan file with `total-hours` and `subjects`
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Show study tips for each subject
        #[arg(long)]
        tips: bool,

        /// Print the study-tip prompts sent to the text generator
        #[arg(long)]
        prompts: bool,
    },

    /// Run a Pomodoro countdown for a subject
    Timer {
        /// Subject being studied
        #[arg(required = true)]
        subject: String,

        /// Pomodoro length in minutes (5-60, steps of 5; default from config)
        #[arg(short, long)]
        minutes: Option<u32>,
    },
}

/// Output format for plans
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" | "plain" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text, json", s)),
        }
    }
}

/// Where the binary writes its log file
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("focusflow")
        .join("logs")
        .join("focusflow.log")
}
