//! Headless roster interface for programmatic use.
//!
//! This module drives a [`Roster`] from text commands (see
//! [`crate::command`]) and renders the results as plain lines. It's designed
//! for:
//! - Script-driven sessions piped through stdin
//! - Integration tests that want the full command path
//!
//! Confirmation is supplied by the caller as a closure that receives the
//! prompt text and answers yes or no.
//!
//! # Example
//!
//! ```
//! use roster_core::headless::HeadlessSession;
//! use roster_core::RosterConfig;
//!
//! let mut session = HeadlessSession::new(&RosterConfig::default());
//! let lines = session.handle_line("add Boromir | Guerreiro | 20", &mut |_: &str| true);
//! assert!(lines.iter().any(|l| l.starts_with("[SUCCESS]")));
//! ```

use tracing::debug;

use crate::command::{Command, HELP};
use crate::config::RosterConfig;
use crate::roster::{Character, Filter, RecruitOutcome, Roster};

/// A roster session driven by text commands.
#[derive(Debug)]
pub struct HeadlessSession {
    roster: Roster,
    filter: Filter,
    confirm_destructive: bool,
    confirm_add: bool,
    finished: bool,
}

impl HeadlessSession {
    pub fn new(config: &RosterConfig) -> Self {
        Self::with_roster(config.build_roster(), config)
    }

    /// Drive an existing roster.
    pub fn with_roster(roster: Roster, config: &RosterConfig) -> Self {
        Self {
            roster,
            filter: Filter::All,
            confirm_destructive: config.confirm_destructive,
            confirm_add: config.confirm_add,
            finished: false,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// True once `quit` has been handled.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Lines printed when the session starts.
    pub fn banner(&self) -> Vec<String> {
        let mut lines = vec![
            "=== Guild Roster (headless) ===".to_string(),
            format!("{} characters, {}", self.roster.len(), self.roster.counts()),
            String::new(),
            "Commands:".to_string(),
        ];
        lines.extend(HELP.iter().map(|l| format!("  {l}")));
        lines.push(String::new());
        lines
    }

    /// Handle one input line and return the output.
    ///
    /// `confirm` is only called for operations that need confirmation; it
    /// receives the question to ask.
    pub fn handle_line<C>(&mut self, line: &str, confirm: &mut C) -> Vec<String>
    where
        C: FnMut(&str) -> bool,
    {
        let line = line.trim();
        if line.is_empty() {
            return Vec::new();
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => return vec![format!("[ERROR] {e}. Type 'help' for help.")],
        };
        debug!(?command, "headless command");

        let mut out = self.execute(command, confirm);
        out.extend(
            self.roster
                .notifications_mut()
                .take_unseen()
                .into_iter()
                .map(|n| n.to_string()),
        );
        out
    }

    fn execute<C>(&mut self, command: Command, confirm: &mut C) -> Vec<String>
    where
        C: FnMut(&str) -> bool,
    {
        match command {
            Command::Add { name, class, level } => {
                let ask = self.confirm_add;
                let result = self.roster.add_with(&name, &class, &level, |draft| {
                    !ask || confirm(&format!(
                        "Add {} ({}, level {})?",
                        draft.name(),
                        draft.class(),
                        draft.level()
                    ))
                });
                match result {
                    Ok(Some(id)) => vec![format!("[ADDED] #{id}")],
                    Ok(None) => vec!["[CANCELLED] Nothing was added".to_string()],
                    Err(_) => Vec::new(),
                }
            }
            Command::Recruit(id) => {
                let ask = self.confirm_destructive;
                let result = self
                    .roster
                    .recruit_with(id, |c| !ask || confirm(&format!("Recruit {}?", c.name)));
                match result {
                    Ok(RecruitOutcome::Declined) => {
                        vec!["[CANCELLED] Nobody was recruited".to_string()]
                    }
                    Ok(_) | Err(_) => Vec::new(),
                }
            }
            Command::Remove(id) => {
                let ask = self.confirm_destructive;
                let result = self.roster.remove_with(id, |c| {
                    !ask || confirm(&format!("Remove {} from the guild?", c.name))
                });
                match result {
                    Ok(None) => vec!["[CANCELLED] Nobody was removed".to_string()],
                    Ok(Some(_)) | Err(_) => Vec::new(),
                }
            }
            Command::List(filter) => {
                if let Some(filter) = filter {
                    self.filter = filter;
                }
                self.list_lines()
            }
            Command::Counts => vec![format!("[COUNTS] {}", self.roster.counts())],
            Command::Json => {
                let view: Vec<&Character> = self.roster.filtered(self.filter).collect();
                match serde_json::to_string_pretty(&view) {
                    Ok(json) => json.lines().map(str::to_string).collect(),
                    Err(e) => vec![format!("[ERROR] JSON encoding failed: {e}")],
                }
            }
            Command::Help => {
                let mut lines = vec!["[HELP]".to_string()];
                lines.extend(HELP.iter().map(|l| format!("  {l}")));
                lines
            }
            Command::Quit => {
                self.finished = true;
                vec!["Goodbye!".to_string()]
            }
        }
    }

    fn list_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "[LIST] {} ({})",
            self.filter.label(),
            self.roster.counts()
        )];
        let rows: Vec<String> = self.roster.filtered(self.filter).map(format_row).collect();
        if rows.is_empty() {
            lines.push("  (no characters)".to_string());
        } else {
            lines.extend(rows);
        }
        lines
    }
}

/// One list row, e.g. `  #2   Gandalf          Mago         Lv  50  Recruited`.
pub fn format_row(character: &Character) -> String {
    format!(
        "  #{:<3} {:<16} {:<12} Lv {:>3}  {}",
        character.id,
        character.name,
        character.class,
        character.level,
        character.status_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Seed;
    use crate::roster::CharacterId;

    fn session() -> HeadlessSession {
        HeadlessSession::new(&RosterConfig::default())
    }

    fn yes(_: &str) -> bool {
        true
    }

    fn no(_: &str) -> bool {
        false
    }

    #[test]
    fn test_add_reports_success() {
        let mut session = HeadlessSession::new(&RosterConfig::new().with_seed(Seed::Empty));
        let out = session.handle_line("add Gandalf | Mago | 50", &mut yes);

        assert_eq!(out[0], "[ADDED] #1");
        assert_eq!(out[1], "[SUCCESS] Gandalf was added to the roster!");
        assert_eq!(session.roster().len(), 1);
    }

    #[test]
    fn test_add_validation_error_is_reported() {
        let mut session = session();
        let out = session.handle_line("add Gandalf | Mago | 101", &mut yes);

        assert_eq!(
            out,
            vec!["[ERROR] Level must be between 1 and 100, got 101".to_string()]
        );
        assert_eq!(session.roster().len(), 4);
    }

    #[test]
    fn test_remove_asks_and_respects_answer() {
        let mut session = session();
        let mut asked = Vec::new();

        let out = session.handle_line("remove 1", &mut |prompt: &str| {
            asked.push(prompt.to_string());
            false
        });
        assert_eq!(asked, vec!["Remove Aragorn from the guild?".to_string()]);
        assert_eq!(out, vec!["[CANCELLED] Nobody was removed".to_string()]);
        assert_eq!(session.roster().len(), 4);

        let out = session.handle_line("remove 1", &mut yes);
        assert_eq!(out, vec!["[ERROR] Aragorn was removed from the guild!".to_string()]);
        assert_eq!(session.roster().len(), 3);
    }

    #[test]
    fn test_confirmations_can_be_disabled() {
        let config = RosterConfig::new().with_confirmations(false);
        let mut session = HeadlessSession::new(&config);

        let out = session.handle_line("recruit 3", &mut |_: &str| -> bool {
            panic!("should not ask")
        });
        assert_eq!(
            out,
            vec!["[SUCCESS] Legolas was recruited to the guild!".to_string()]
        );
        assert!(session.roster().get(CharacterId(3)).unwrap().recruited);
    }

    #[test]
    fn test_add_confirmation() {
        let config = RosterConfig::new().with_add_confirmation(true);
        let mut session = HeadlessSession::new(&config);

        let out = session.handle_line("add Sam | Ladino | 4", &mut no);
        assert_eq!(out, vec!["[CANCELLED] Nothing was added".to_string()]);
        assert_eq!(session.roster().len(), 4);
    }

    #[test]
    fn test_unknown_id_warns() {
        let mut session = session();
        let out = session.handle_line("recruit 40", &mut yes);
        assert_eq!(out, vec!["[WARNING] No character with id 40".to_string()]);
    }

    #[test]
    fn test_list_remembers_filter() {
        let mut session = session();
        let out = session.handle_line("list recruited", &mut yes);

        assert_eq!(out[0], "[LIST] Recruited (2/4 recruited)");
        assert_eq!(out.len(), 3);
        assert!(out[1].contains("Gandalf"));
        assert!(out[2].contains("Gimli"));

        let out = session.handle_line("list", &mut yes);
        assert_eq!(out.len(), 3);
        assert_eq!(session.filter(), Filter::Recruited);
    }

    #[test]
    fn test_json_uses_current_filter() {
        let mut session = session();
        session.handle_line("filter available", &mut yes);
        let out = session.handle_line("json", &mut yes);

        let parsed: serde_json::Value = serde_json::from_str(&out.join("\n")).unwrap();
        let names: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Aragorn", "Legolas"]);
    }

    #[test]
    fn test_parse_error_and_quit() {
        let mut session = session();
        let out = session.handle_line("dance", &mut yes);
        assert_eq!(
            out,
            vec!["[ERROR] Unknown command: dance. Type 'help' for help.".to_string()]
        );

        assert!(session.handle_line("   ", &mut yes).is_empty());

        session.handle_line("quit", &mut yes);
        assert!(session.is_finished());
    }

    #[test]
    fn test_format_row() {
        let roster = Roster::sample();
        let row = format_row(roster.get(CharacterId(2)).unwrap());
        assert!(row.starts_with("  #2   Gandalf"));
        assert!(row.ends_with("Lv  50  Recruited"));
    }
}
