//! Render orchestration for the roster TUI

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, PendingAction};
use crate::ui::layout::{centered_rect_fixed, top_strip, AppLayout};
use crate::ui::widgets::{
    AddFormWidget, CharacterListWidget, FilterBarWidget, InputWidget, ToastWidget,
};

/// Which panel is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Form,
    #[default]
    List,
}

/// Overlay types
#[derive(Debug, Clone)]
pub enum Overlay {
    Help,
    Confirm {
        title: String,
        message: String,
        action: PendingAction,
    },
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    render_at(frame, app, Instant::now());
}

/// Render as of `now`, which decides whether the toast is still visible
pub fn render_at(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_header(frame, app, layout.header_area);

    let form_widget = AddFormWidget::new(&app.form, &app.theme)
        .focused(matches!(app.focused_panel, FocusedPanel::Form))
        .editing(app.input_mode == InputMode::Insert);
    frame.render_widget(form_widget, layout.form_area);

    let filter_widget = FilterBarWidget::new(app.filter, app.roster.counts(), &app.theme);
    frame.render_widget(filter_widget, layout.filter_area);

    let visible = app.visible();
    let list_widget = CharacterListWidget::new(&visible, &app.theme)
        .filter(app.filter)
        .selected(app.selected_index())
        .focused(matches!(app.focused_panel, FocusedPanel::List));
    frame.render_widget(list_widget, layout.list_area);

    render_hotkey_bar(frame, app, layout.hotkey_bar);

    if let Some(notification) = app.current_notification(now) {
        let toast_area = top_strip(area, 2, 3);
        frame.render_widget(ToastWidget::new(notification, &app.theme), toast_area);
    }

    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, overlay, area);
    }
}

/// Render the title header
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "⚔ Guild Roster",
            app.theme.header_style(),
        )),
        Line::from(Span::styled(
            "Manage your guild of adventurers",
            app.theme.subtitle_style(),
        )),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.primary));
    frame.render_widget(header, area);
}

/// Render the hotkey bar, or the command line in COMMAND mode
fn render_hotkey_bar(frame: &mut Frame, app: &App, area: Rect) {
    if app.input_mode == InputMode::Command {
        let field = app.command_field();
        let input = InputWidget::new(field.as_str(), &app.theme)
            .prefix(":")
            .cursor_position(field.cursor())
            .active(true);
        frame.render_widget(input, area);
        return;
    }

    let (mode, hints) = match app.input_mode {
        InputMode::Insert => (
            " INSERT ",
            "Tab next field  ↑/↓ class suggestions  Enter add  Esc done",
        ),
        _ => (
            " NORMAL ",
            "j/k move  r recruit  d remove  f filter  a add  : command  ? help  q quit",
        ),
    };

    let mut spans = vec![Span::styled(mode, app.theme.mode_style()), Span::raw(" ")];
    match app.status_message() {
        Some(status) => spans.push(Span::styled(
            status,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        None => spans.push(Span::styled(hints, app.theme.dim_style())),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render overlay
fn render_overlay(frame: &mut Frame, app: &App, overlay: &Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
        Overlay::Confirm { title, message, .. } => {
            render_confirm_overlay(frame, app, title, message, area)
        }
    }
}

/// Render confirmation dialog
fn render_confirm_overlay(frame: &mut Frame, app: &App, title: &str, message: &str, area: Rect) {
    let popup_area = centered_rect_fixed(50, 7, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y ", app.theme.active_filter_style()),
            Span::raw(" Confirm    "),
            Span::styled(" n ", app.theme.mode_style()),
            Span::raw(" Cancel"),
        ]),
    ];

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(56, 24, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::UNDERLINED),
        ))
    };

    let help_text = vec![
        Line::from(Span::styled(
            " Guild Roster - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("List (NORMAL mode):"),
        Line::from("  j/k or ↑/↓     Select next/previous"),
        Line::from("  g/G            Jump to first/last"),
        Line::from("  r              Recruit selected"),
        Line::from("  d/x/Del        Remove selected"),
        Line::from("  f/F or ←/→     Cycle filter"),
        Line::from("  1/2/3          All / Available / Recruited"),
        Line::from("  Tab            Switch form/list focus"),
        Line::from("  Esc            Dismiss notification"),
        Line::from(""),
        heading("Form (INSERT mode):"),
        Line::from("  a/i            Start editing the form"),
        Line::from("  Tab/S-Tab      Next/previous field"),
        Line::from("  ↑/↓            Cycle suggested classes"),
        Line::from("  Enter          Add character"),
        Line::from(""),
        heading("Commands:"),
        Line::from("  :add N | C | L  :recruit ID  :remove ID"),
        Line::from("  :filter KIND    :counts      :q"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}
