//! Terminal output for propagation results.

use crossterm::style::{Color, Stylize};

use crate::apply::ApplyReport;

const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const HEADING_UPDATED: &str = "Applied theme updates in:";
const NOTHING_TO_DO: &str = "No files required updates.";
const RELOAD_HEADING: &str = "Reminder: reload to apply:";
const RELOAD_HINTS: &[&str] = &[
    "hyprctl reload",
    "killall waybar && waybar &  # or pkill -SIGUSR2 waybar",
    "makoctl reload  # if using mako",
];

/// Prints the pass report to stdout and diagnostics to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print the list of updated files, or the nothing-to-do line.
    pub fn report(&self, report: &ApplyReport) {
        if !self.color || report.is_empty() {
            for line in report_lines(report) {
                println!("{line}");
            }
            return;
        }
        println!("{}", HEADING_UPDATED.bold());
        for path in &report.updated {
            println!(" - {}", path.display().to_string().with(Color::Cyan));
        }
        println!();
        println!("{RELOAD_HEADING}");
        for hint in RELOAD_HINTS {
            println!("  {}", hint.with(Color::DarkGrey));
        }
    }

    /// Print a warning (to stderr).
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    /// Print an error (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }
}

/// Plain-text report lines, as printed without colour.
pub fn report_lines(report: &ApplyReport) -> Vec<String> {
    if report.is_empty() {
        return vec![NOTHING_TO_DO.to_string()];
    }
    let mut lines = vec![HEADING_UPDATED.to_string()];
    lines.extend(
        report
            .updated
            .iter()
            .map(|path| format!(" - {}", path.display())),
    );
    lines.push(String::new());
    lines.push(RELOAD_HEADING.to_string());
    lines.extend(RELOAD_HINTS.iter().map(|hint| format!("  {hint}")));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_report_says_nothing_to_do() {
        assert_eq!(
            report_lines(&ApplyReport::default()),
            vec!["No files required updates.".to_string()]
        );
    }

    #[test]
    fn report_lists_paths_then_reload_hints() {
        let report = ApplyReport {
            updated: vec![PathBuf::from("waybar.css"), PathBuf::from("mako/config")],
            settings_written: None,
        };
        let lines = report_lines(&report);
        assert_eq!(lines[0], "Applied theme updates in:");
        assert_eq!(lines[1], " - waybar.css");
        assert_eq!(lines[2], " - mako/config");
        assert_eq!(lines[3], "");
        assert!(lines.iter().any(|line| line.contains("hyprctl reload")));
    }
}
