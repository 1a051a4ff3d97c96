//! FocusFlow - study planner CLI

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use focusflow::advice::OfflineAdvisor;
use focusflow::cli::{Cli, Command, OutputFormat, get_log_path};
use focusflow::config::Config;
use focusflow::input::{PlanFile, PlanInput, SubjectEntry};
use focusflow::plan::validate_pomodoro;
use focusflow::planner::StudyPlanner;
use focusflow::prompts::PromptLoader;
use focusflow::render;
use focusflow::timer::{Countdown, TimerEvent, format_clock, run_countdown};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let prompts = PromptLoader::new(config.prompts.dir.as_deref());
    let planner = StudyPlanner::new(prompts, config.planner.default_pomodoro_minutes)?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Plan {
            subjects,
            hours,
            file,
            format,
            tips,
            prompts,
        } => {
            let input = collect_input(&config, subjects, hours, file)?;
            cmd_plan(&config, &planner, input, format, tips, prompts)
        }
        Command::Timer { subject, minutes } => {
            let minutes = minutes.unwrap_or(config.planner.default_pomodoro_minutes);
            cmd_timer(&config, &planner, &subject, minutes).await
        }
    }
}

/// Merge command-line subjects and hours with an optional plan file
///
/// Command-line hours win over the file, which wins over the config default.
/// File subjects come first, followed by `--subject` entries.
fn collect_input(
    config: &Config,
    subjects: Vec<focusflow::SubjectRequest>,
    hours: Option<String>,
    file: Option<PathBuf>,
) -> Result<PlanInput> {
    let plan_file = match file {
        Some(path) => {
            let content =
                fs::read_to_string(&path).context(format!("Failed to read plan file {}", path.display()))?;
            PlanFile::from_yaml(&content).context(format!("Failed to parse plan file {}", path.display()))?
        }
        None => PlanFile::default(),
    };

    let mut entries = plan_file.subjects;
    entries.extend(
        subjects
            .into_iter()
            .map(|r| SubjectEntry::new(r.subject, r.priority.to_string())),
    );

    let hours = hours
        .or_else(|| plan_file.total_hours.map(|h| h.to_string()))
        .unwrap_or_else(|| config.planner.default_total_hours.to_string());

    Ok(PlanInput::new(entries, hours))
}

fn cmd_plan(
    config: &Config,
    planner: &StudyPlanner,
    input: PlanInput,
    format: OutputFormat,
    show_tips: bool,
    show_prompts: bool,
) -> Result<()> {
    let (requests, total_hours) = input.validate(config.planner.max_subjects)?;
    let plan = planner.build(&requests, total_hours, &OfflineAdvisor)?;

    match format {
        OutputFormat::Json => println!("{}", render::plan_json(&plan)?),
        OutputFormat::Text => {
            println!("{}", "Your Study Plan".bold());
            print!("{}", render::plan_table(&plan));
            if plan.unallocated_minutes() > 0 {
                println!(
                    "{}",
                    format!("{} min of {}h left unallocated", plan.unallocated_minutes(), total_hours).dimmed()
                );
            }
            if show_tips {
                println!();
                print!("{}", render::study_tips(&plan));
            }
            if show_prompts {
                for entry in plan.entries() {
                    println!();
                    println!("{}", format!("--- prompt: {} ---", entry.subject()).yellow());
                    println!("{}", planner.prompts().study_tips_prompt(&entry.allocation)?.trim_end());
                }
            }
        }
    }

    Ok(())
}

async fn cmd_timer(config: &Config, planner: &StudyPlanner, subject: &str, minutes: u32) -> Result<()> {
    validate_pomodoro(minutes)?;
    info!(%subject, minutes, "Starting Pomodoro");
    println!("{} {} ({} min)", "Studying".bold(), subject.cyan(), minutes);

    let tick = Duration::from_millis(config.timer.tick_ms);
    run_countdown(Countdown::from_minutes(minutes), tick, |event| match event {
        TimerEvent::Tick { remaining } => {
            print!("\r⏳ {}", format_clock(remaining));
            let _ = std::io::stdout().flush();
        }
        TimerEvent::Finished => println!("\r{}   ", "✅ Time's up!".green()),
    })
    .await;

    let suggestion = planner.break_suggestion(subject, minutes, &OfflineAdvisor)?;
    println!("{}", suggestion);
    Ok(())
}
