//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu -> Journal / History / Trends; support panel after every action
//! while the alert is active.

use super::chart::{self, HALF_WIDTH};
use super::support;
use crate::domain::{DomainError, Session};
use crate::ports::{ExportPort, InputPort};
use crate::usecases::JournalService;
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, InquireError, Select, Text};
use std::fmt;
use std::io::{Write, stdout};
use std::sync::Arc;
use tracing::{info, warn};

const POSITIVE: TermColor = TermColor::Rgb {
    r: 0x81,
    g: 0xc7,
    b: 0x84,
};
const NEGATIVE: TermColor = TermColor::Rgb {
    r: 0xff,
    g: 0x6e,
    b: 0x6e,
};

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightMagenta))
        .with_highlighted_option_prefix(Styled::new("▸").with_fg(Color::LightCyan))
        .with_answer(StyleSheet::new().with_fg(Color::LightCyan))
        .with_help_message(StyleSheet::new().with_fg(Color::DarkGrey));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Journal,
    History,
    Trends,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 4] = [
        MenuItem::Journal,
        MenuItem::History,
        MenuItem::Trends,
        MenuItem::Quit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MenuItem::Journal => "Journal  - write a new entry",
            MenuItem::History => "History  - past entries",
            MenuItem::Trends => "Trends   - mood over time",
            MenuItem::Quit => "Quit",
        };
        f.write_str(s)
    }
}

/// Cancel (Esc) and interrupt (Ctrl-C) are user choices, not failures.
fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn score_color(score: i32) -> TermColor {
    if score < 0 { NEGATIVE } else { POSITIVE }
}

fn print_colored(color: TermColor, text: &str) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(text));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

/// TUI adapter. Owns nothing but its collaborators; each `run` gets a fresh session.
pub struct TuiInputPort {
    journal: Arc<JournalService>,
    exporter: Arc<dyn ExportPort>,
}

impl TuiInputPort {
    pub fn new(journal: Arc<JournalService>, exporter: Arc<dyn ExportPort>) -> Self {
        Self { journal, exporter }
    }

    fn journal_tab(&self, session: &mut Session) -> Result<(), DomainError> {
        let text = match Text::new("How are you feeling today?")
            .with_help_message("Enter to save, Esc to go back")
            .prompt()
        {
            Ok(t) => t,
            Err(e) if is_cancel(&e) => return Ok(()),
            Err(e) => return Err(DomainError::Ui(e.to_string())),
        };

        match self.journal.submit_entry(session, &text)? {
            Some(entry) => {
                println!();
                println!("  Latest Emotion:    {}", entry.emotion().display_name());
                print!("  Latest Mood Score: ");
                print_colored(score_color(entry.score()), &format!("{}\n", entry.score()));
                println!("  Entry saved!\n");
            }
            None => println!("  Nothing to save.\n"),
        }
        Ok(())
    }

    async fn history_tab(&self, session: &Session) -> Result<(), DomainError> {
        if session.is_empty() {
            println!("  No entries yet. Go to Journal to write one.\n");
            return Ok(());
        }

        println!("\n  Past Entries\n");
        for entry in self.journal.history(session) {
            print!("  {}  ", entry.timestamp().format("%Y-%m-%d %H:%M"));
            print_colored(
                score_color(entry.score()),
                &format!(
                    "{} ({})\n",
                    entry.emotion().display_name(),
                    entry.score()
                ),
            );
            println!("    {}\n", entry.text());
        }

        let export = match Confirm::new("Export this session to CSV?")
            .with_default(false)
            .prompt()
        {
            Ok(yes) => yes,
            Err(e) if is_cancel(&e) => false,
            Err(e) => return Err(DomainError::Ui(e.to_string())),
        };
        if export {
            match self.exporter.export(session.entries()).await {
                Ok(path) => println!("  Exported to {}\n", path.display()),
                Err(e) => {
                    warn!(error = %e, "export failed");
                    println!("  Export failed: {}\n", e);
                }
            }
        }
        Ok(())
    }

    fn trends_tab(&self, session: &Session) {
        if session.is_empty() {
            println!("  Add entries in Journal first.\n");
            return;
        }

        println!("\n  Mood Trends (Entry-by-Entry)\n");
        let points = self.journal.trend(session);
        for row in chart::render_rows(&points, HALF_WIDTH) {
            print!("  {}  ", row.label);
            print_colored(score_color(row.score), &row.bar);
            println!(" {:>4}", row.score);
        }
        println!("\n  Mood Score for Every Journal Entry Over Time\n");
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut session = Session::new();
        info!("session started");

        loop {
            let choice = match Select::new("What would you like to do?", MenuItem::ALL.to_vec())
                .prompt()
            {
                Ok(c) => c,
                Err(e) if is_cancel(&e) => break,
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            };

            match choice {
                MenuItem::Journal => self.journal_tab(&mut session)?,
                MenuItem::History => self.history_tab(&session).await?,
                MenuItem::Trends => self.trends_tab(&session),
                MenuItem::Quit => break,
            }

            if self.journal.support_alert_active(&session) {
                support::print_panel();
            }
        }

        info!(entries = session.len(), "session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_all_tabs() {
        let labels: Vec<String> = MenuItem::ALL.iter().map(|m| m.to_string()).collect();
        assert!(labels[0].starts_with("Journal"));
        assert!(labels[1].starts_with("History"));
        assert!(labels[2].starts_with("Trends"));
        assert_eq!(labels[3], "Quit");
    }

    #[test]
    fn test_cancel_is_not_failure() {
        assert!(is_cancel(&InquireError::OperationCanceled));
        assert!(is_cancel(&InquireError::OperationInterrupted));
        assert!(!is_cancel(&InquireError::NotTTY));
    }

    #[test]
    fn test_score_color() {
        assert_eq!(score_color(-1), NEGATIVE);
        assert_eq!(score_color(0), POSITIVE);
    }
}
