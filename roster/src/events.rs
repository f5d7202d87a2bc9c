//! Event handling for the roster TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use roster_core::Filter;

use crate::app::{App, InputMode};
use crate::form::{FormField, TextField};
use crate::ui::{FocusedPanel, Overlay};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    if app.has_overlay() {
        return EventResult::Continue;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    // Handle overlay keys first
    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    // Route based on input mode
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Insert => handle_insert_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

/// Handle keys while an overlay is open
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match app.overlay() {
        Some(Overlay::Confirm { .. }) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.confirm_pending();
                EventResult::NeedsRedraw
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
                app.cancel_pending();
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        },
        Some(Overlay::Help) => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                app.close_overlay();
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        },
        None => EventResult::Continue,
    }
}

/// Handle keys in NORMAL mode (vim-style navigation and hotkeys)
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        // Mode switching
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.clear_status();
            app.enter_insert_mode();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(':') => {
            app.clear_status();
            app.enter_command_mode();
            EventResult::NeedsRedraw
        }

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        // Quit
        KeyCode::Char('q') => EventResult::Quit,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.select_first();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.select_last();
            EventResult::NeedsRedraw
        }

        // Roster actions
        KeyCode::Char('r') | KeyCode::Enter => {
            app.recruit_selected();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            app.remove_selected();
            EventResult::NeedsRedraw
        }

        // Filters
        KeyCode::Char('f') | KeyCode::Right => {
            app.cycle_filter();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('F') | KeyCode::Left => {
            app.cycle_filter_reverse();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            app.set_filter(Filter::ALL[index]);
            EventResult::NeedsRedraw
        }

        // Panel focus cycling
        KeyCode::Tab | KeyCode::BackTab => {
            app.cycle_focus();
            if app.focused_panel == FocusedPanel::Form {
                app.enter_insert_mode();
            }
            EventResult::NeedsRedraw
        }

        KeyCode::Esc => {
            app.dismiss_notification();
            app.clear_status();
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Handle keys in INSERT mode (editing the add form)
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.enter_normal_mode();
            app.focused_panel = FocusedPanel::List;
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.submit_form();
            EventResult::NeedsRedraw
        }
        KeyCode::Tab => {
            app.form.next_field();
            EventResult::NeedsRedraw
        }
        KeyCode::BackTab => {
            app.form.prev_field();
            EventResult::NeedsRedraw
        }
        KeyCode::Down if app.form.focus == FormField::Class => {
            app.form.next_suggestion();
            EventResult::NeedsRedraw
        }
        KeyCode::Up if app.form.focus == FormField::Class => {
            app.form.prev_suggestion();
            EventResult::NeedsRedraw
        }
        _ => edit_field(app.form.focused_mut(), key),
    }
}

/// Handle keys in COMMAND mode (entering : commands)
fn handle_command_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.enter_normal_mode();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.submit_command();
            if app.should_quit {
                EventResult::Quit
            } else {
                EventResult::NeedsRedraw
            }
        }
        KeyCode::Backspace if app.command_field().is_empty() => {
            app.enter_normal_mode();
            EventResult::NeedsRedraw
        }
        _ => edit_field(app.command_field_mut(), key),
    }
}

/// Shared line-editing keys
fn edit_field(field: &mut TextField, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char(c) => field.type_char(c),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.cursor_left(),
        KeyCode::Right => field.cursor_right(),
        KeyCode::Home => field.cursor_home(),
        KeyCode::End => field.cursor_end(),
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}
