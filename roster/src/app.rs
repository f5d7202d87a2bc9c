//! Main application state and logic

use std::time::Instant;

use roster_core::{
    Character, CharacterId, Command, Draft, Filter, Notification, RecruitOutcome, Roster,
    RosterConfig, RosterError,
};
use tracing::debug;

use crate::form::{AddForm, TextField};
use crate::ui::theme::RosterTheme;
use crate::ui::{FocusedPanel, Overlay};

/// Vim-style input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - navigation and hotkeys (default)
    #[default]
    Normal,
    /// Insert mode - editing the add form
    Insert,
    /// Command mode - entering : commands
    Command,
}

/// An action waiting on the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Add(Draft),
    Recruit(CharacterId),
    Remove(CharacterId),
}

/// Main application state
pub struct App {
    pub roster: Roster,

    // UI state
    pub theme: RosterTheme,
    pub focused_panel: FocusedPanel,
    overlay: Option<Overlay>,

    // Form and list
    pub form: AddForm,
    pub filter: Filter,
    selected: usize,

    // Input state
    pub input_mode: InputMode,
    command: TextField,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,

    // Confirmation policy
    confirm_destructive: bool,
    confirm_add: bool,
}

impl App {
    /// Create a new application over a roster
    pub fn new(roster: Roster, config: &RosterConfig) -> Self {
        Self {
            roster,
            theme: RosterTheme::default(),
            focused_panel: FocusedPanel::default(),
            overlay: None,
            form: AddForm::default(),
            filter: Filter::All,
            selected: 0,
            input_mode: InputMode::Normal,
            command: TextField::default(),
            status_message: None,
            should_quit: false,
            confirm_destructive: config.confirm_destructive,
            confirm_add: config.confirm_add,
        }
    }

    // =========================================================================
    // List view
    // =========================================================================

    /// Characters visible under the current filter
    pub fn visible(&self) -> Vec<&Character> {
        self.roster.filtered(self.filter).collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_character(&self) -> Option<&Character> {
        self.roster.filtered(self.filter).nth(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.roster.filtered(self.filter).count();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        let len = self.roster.filtered(self.filter).count();
        self.selected = len.saturating_sub(1);
    }

    /// Keep the selection inside the visible list after it shrinks
    fn clamp_selection(&mut self) {
        let len = self.roster.filtered(self.filter).count();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Switch the list filter
    pub fn set_filter(&mut self, filter: Filter) {
        debug!(%filter, "filter changed");
        self.filter = filter;
        self.selected = 0;
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn cycle_filter_reverse(&mut self) {
        self.set_filter(self.filter.prev());
    }

    // =========================================================================
    // Roster actions
    // =========================================================================

    /// Validate the form and add (or ask to add) the character
    pub fn submit_form(&mut self) {
        let draft = match self.form.draft() {
            Ok(draft) => draft,
            Err(err) => {
                self.roster.reject(err.into());
                return;
            }
        };
        self.request_add(draft);
    }

    fn request_add(&mut self, draft: Draft) {
        if self.confirm_add {
            let message = format!(
                "Add {} ({}, level {})?",
                draft.name(),
                draft.class(),
                draft.level()
            );
            self.open_confirm("Add Character", message, PendingAction::Add(draft));
        } else {
            self.apply(PendingAction::Add(draft));
        }
    }

    /// Recruit the selected character
    pub fn recruit_selected(&mut self) {
        match self.selected_character().map(|c| c.id) {
            Some(id) => self.request_recruit(id),
            None => self.set_status("No character selected"),
        }
    }

    /// Remove the selected character
    pub fn remove_selected(&mut self) {
        match self.selected_character().map(|c| c.id) {
            Some(id) => self.request_remove(id),
            None => self.set_status("No character selected"),
        }
    }

    /// Recruit a character, asking first when confirmations are enabled
    pub fn request_recruit(&mut self, id: CharacterId) {
        let name = match self.roster.get(id) {
            Some(c) if !c.recruited && self.confirm_destructive => c.name.clone(),
            // Unknown, already recruited, or no confirmation: let the
            // roster handle and report it.
            _ => return self.apply(PendingAction::Recruit(id)),
        };
        self.open_confirm(
            "Recruit Character",
            format!("Recruit {name}?"),
            PendingAction::Recruit(id),
        );
    }

    /// Remove a character, asking first when confirmations are enabled
    pub fn request_remove(&mut self, id: CharacterId) {
        let name = match self.roster.get(id) {
            Some(c) if self.confirm_destructive => c.name.clone(),
            _ => return self.apply(PendingAction::Remove(id)),
        };
        self.open_confirm(
            "Remove Character",
            format!("Remove {name} from the guild?"),
            PendingAction::Remove(id),
        );
    }

    fn open_confirm(&mut self, title: &str, message: String, action: PendingAction) {
        self.overlay = Some(Overlay::Confirm {
            title: title.to_string(),
            message,
            action,
        });
    }

    /// Run the action behind the open confirmation dialog
    pub fn confirm_pending(&mut self) {
        if let Some(Overlay::Confirm { action, .. }) = self.overlay.take() {
            self.apply(action);
        }
    }

    /// Dismiss the confirmation dialog without acting
    pub fn cancel_pending(&mut self) {
        if let Some(Overlay::Confirm { .. }) = self.overlay.take() {
            self.set_status("Cancelled");
        }
    }

    fn apply(&mut self, action: PendingAction) {
        match action {
            PendingAction::Add(draft) => {
                // A failed insert has already posted its notification
                if let Ok(id) = self.roster.insert(draft) {
                    self.form.clear();
                    self.select_id(id);
                }
            }
            PendingAction::Recruit(id) => {
                if let Ok(RecruitOutcome::Recruited) = self.roster.recruit(id) {
                    // Leaves the Available view; keep the cursor in range
                    self.clamp_selection();
                }
            }
            PendingAction::Remove(id) => {
                if self.roster.remove(id).is_ok() {
                    self.clamp_selection();
                }
            }
        }
    }

    /// Move the selection onto `id` if it is visible
    fn select_id(&mut self, id: CharacterId) {
        if let Some(index) = self.roster.filtered(self.filter).position(|c| c.id == id) {
            self.selected = index;
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Enter command mode with an empty prompt
    pub fn enter_command_mode(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.clear();
    }

    /// Enter insert mode on the add form
    pub fn enter_insert_mode(&mut self) {
        self.input_mode = InputMode::Insert;
        self.focused_panel = FocusedPanel::Form;
    }

    /// Exit to normal mode
    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.clear();
    }

    /// Execute the command prompt
    pub fn submit_command(&mut self) {
        let line = self.command.as_str().to_string();
        self.enter_normal_mode();
        if !line.trim().is_empty() {
            self.process_command(&line);
        }
    }

    /// Process a colon command
    pub fn process_command(&mut self, line: &str) {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                self.set_status(e.to_string());
                return;
            }
        };

        match command {
            Command::Add { name, class, level } => {
                match roster_core::validate(&name, &class, &level) {
                    Ok(draft) => self.request_add(draft),
                    Err(err) => {
                        self.roster.reject(RosterError::from(err));
                    }
                }
            }
            Command::Recruit(id) => self.request_recruit(id),
            Command::Remove(id) => self.request_remove(id),
            Command::List(filter) => {
                if let Some(filter) = filter {
                    self.set_filter(filter);
                }
            }
            Command::Counts => {
                let counts = self.roster.counts();
                self.set_status(counts.to_string());
            }
            Command::Json => self.set_status("JSON output is only available with --headless"),
            Command::Help => self.toggle_help(),
            Command::Quit => self.should_quit = true,
        }
    }

    pub fn command_field(&self) -> &TextField {
        &self.command
    }

    pub fn command_field_mut(&mut self) -> &mut TextField {
        &mut self.command
    }

    // =========================================================================
    // Overlays and status
    // =========================================================================

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    /// Close any open overlay
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Toggle focus between the form and the list
    pub fn cycle_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Form => FocusedPanel::List,
            FocusedPanel::List => FocusedPanel::Form,
        };
    }

    /// Notification to show at `now`
    pub fn current_notification(&self, now: Instant) -> Option<&Notification> {
        self.roster.notifications().current(now)
    }

    pub fn dismiss_notification(&mut self) {
        self.roster.notifications_mut().dismiss();
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::NotificationKind;

    fn app() -> App {
        App::new(Roster::sample(), &RosterConfig::default())
    }

    fn app_without_confirm() -> App {
        let config = RosterConfig::default().with_confirmations(false);
        App::new(Roster::sample(), &config)
    }

    fn last_kind(app: &App) -> Option<NotificationKind> {
        app.roster.notifications().latest().map(|n| n.kind)
    }

    #[test]
    fn test_submit_form_adds_and_clears() {
        let mut app = app();
        app.form.name.set("Boromir");
        app.form.class.set("Guerreiro");
        app.form.level.set("20");

        app.submit_form();

        assert_eq!(app.roster.len(), 5);
        assert!(app.form.name.is_empty());
        assert_eq!(app.selected_character().unwrap().name, "Boromir");
        assert_eq!(last_kind(&app), Some(NotificationKind::Success));
    }

    #[test]
    fn test_submit_form_invalid_keeps_input() {
        let mut app = app();
        app.form.name.set("Boromir");
        app.form.class.set("Guerreiro");
        app.form.level.set("200");

        app.submit_form();

        assert_eq!(app.roster.len(), 4);
        assert_eq!(app.form.level.as_str(), "200");
        assert_eq!(last_kind(&app), Some(NotificationKind::Error));
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let mut app = app();
        app.remove_selected();
        assert!(matches!(
            app.overlay(),
            Some(Overlay::Confirm {
                action: PendingAction::Remove(CharacterId(1)),
                ..
            })
        ));
        assert_eq!(app.roster.len(), 4);

        app.cancel_pending();
        assert!(!app.has_overlay());
        assert_eq!(app.roster.len(), 4);
        assert_eq!(app.status_message(), Some("Cancelled"));

        app.remove_selected();
        app.confirm_pending();
        assert_eq!(app.roster.len(), 3);
        assert!(app.roster.get(CharacterId(1)).is_none());
    }

    #[test]
    fn test_recruit_already_recruited_skips_dialog() {
        let mut app = app();
        app.select_next(); // Gandalf, already recruited
        app.recruit_selected();

        assert!(!app.has_overlay());
        assert_eq!(last_kind(&app), Some(NotificationKind::Warning));
    }

    #[test]
    fn test_recruit_in_available_view_clamps_selection() {
        let mut app = app_without_confirm();
        app.set_filter(Filter::Available);
        app.select_last(); // Legolas
        assert_eq!(app.selected_character().unwrap().name, "Legolas");

        app.recruit_selected();

        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.selected_index(), 0);
        assert_eq!(app.selected_character().unwrap().name, "Aragorn");
    }

    #[test]
    fn test_remove_last_clamps_selection() {
        let mut app = app_without_confirm();
        app.select_last();
        app.remove_selected();
        assert_eq!(app.selected_index(), 2);

        for _ in 0..3 {
            app.remove_selected();
        }
        assert!(app.roster.is_empty());
        assert!(app.selected_character().is_none());

        app.remove_selected();
        assert_eq!(app.status_message(), Some("No character selected"));
    }

    #[test]
    fn test_selection_bounds() {
        let mut app = app();
        app.select_prev();
        assert_eq!(app.selected_index(), 0);
        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.selected_index(), 3);
        app.select_first();
        assert_eq!(app.selected_index(), 0);
    }

    #[test]
    fn test_filter_cycle_resets_selection() {
        let mut app = app();
        app.select_last();
        app.cycle_filter();
        assert_eq!(app.filter, Filter::Available);
        assert_eq!(app.selected_index(), 0);
        app.cycle_filter_reverse();
        assert_eq!(app.filter, Filter::All);
    }

    #[test]
    fn test_commands() {
        let mut app = app_without_confirm();

        app.process_command("add Sam | Ladino | 3");
        assert_eq!(app.roster.len(), 5);

        app.process_command("recruit 5");
        assert!(app.roster.get(CharacterId(5)).unwrap().recruited);

        app.process_command("filter recruited");
        assert_eq!(app.filter, Filter::Recruited);

        app.process_command("counts");
        assert_eq!(app.status_message(), Some("3/5 recruited"));

        app.process_command("frobnicate");
        assert_eq!(app.status_message(), Some("Unknown command: frobnicate"));

        app.process_command("q");
        assert!(app.should_quit);
    }

    #[test]
    fn test_add_confirmation_dialog() {
        let config = RosterConfig::default().with_add_confirmation(true);
        let mut app = App::new(Roster::new(), &config);

        app.process_command("add Sam | Ladino | 3");
        assert!(matches!(
            app.overlay(),
            Some(Overlay::Confirm {
                action: PendingAction::Add(_),
                ..
            })
        ));
        assert!(app.roster.is_empty());

        app.confirm_pending();
        assert_eq!(app.roster.len(), 1);
    }

    #[test]
    fn test_submit_command_returns_to_normal() {
        let mut app = app();
        app.enter_command_mode();
        for c in "list available".chars() {
            app.command_field_mut().type_char(c);
        }
        app.submit_command();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.command_field().is_empty());
        assert_eq!(app.filter, Filter::Available);
    }
}
