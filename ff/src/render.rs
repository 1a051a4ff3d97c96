//! Plan output formatting

use colored::*;
use eyre::Result;

use crate::plan::StudyPlan;

const HEADERS: [&str; 4] = ["Subject", "Priority", "Allocated Time", "Pomodoro Minutes"];

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Plan as an aligned text table
pub fn plan_table(plan: &StudyPlan) -> String {
    let rows: Vec<[String; 4]> = plan
        .entries()
        .iter()
        .map(|e| {
            [
                e.allocation.subject.clone(),
                e.allocation.priority.to_string(),
                e.allocation.formatted_label.clone(),
                e.pomodoro_minutes.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w).bold().to_string())
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    for row in &rows {
        let line: Vec<String> = row.iter().zip(widths).map(|(cell, w)| pad(cell, w)).collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Study tips block, one section per subject
pub fn study_tips(plan: &StudyPlan) -> String {
    let mut out = String::new();
    for entry in plan.entries() {
        out.push_str(&format!(
            "{} ({}, {})\n{}\n\n",
            entry.subject().cyan(),
            entry.allocation.priority,
            entry.allocation.formatted_label,
            entry.study_tips.trim()
        ));
    }
    out
}

/// Plan as pretty JSON
pub fn plan_json(plan: &StudyPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}
