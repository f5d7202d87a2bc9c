//! Single-line input widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::RosterTheme;

/// One labelled text input; draws a cursor when active
pub struct InputWidget<'a> {
    content: &'a str,
    cursor_position: usize,
    theme: &'a RosterTheme,
    prefix: &'a str,
    placeholder: &'a str,
    is_active: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(content: &'a str, theme: &'a RosterTheme) -> Self {
        Self {
            content,
            cursor_position: content.chars().count(),
            theme,
            prefix: "> ",
            placeholder: "",
            is_active: false,
        }
    }

    pub fn cursor_position(mut self, pos: usize) -> Self {
        self.cursor_position = pos;
        self
    }

    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prefix_style = self.theme.title_style(self.is_active);

        let line = if self.content.is_empty() && !self.is_active {
            Line::from(vec![
                Span::styled(self.prefix, prefix_style),
                Span::styled(self.placeholder, self.theme.dim_style()),
            ])
        } else if !self.is_active {
            Line::from(vec![
                Span::styled(self.prefix, prefix_style),
                Span::raw(self.content),
            ])
        } else {
            // Use character-based slicing for unicode safety
            let before_cursor: String = self.content.chars().take(self.cursor_position).collect();
            let at_cursor = self
                .content
                .chars()
                .nth(self.cursor_position)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after_cursor: String = self
                .content
                .chars()
                .skip(self.cursor_position + 1)
                .collect();

            Line::from(vec![
                Span::styled(self.prefix, prefix_style),
                Span::raw(before_cursor),
                Span::styled(
                    at_cursor,
                    Style::default()
                        .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
                        .fg(self.theme.primary),
                ),
                Span::raw(after_cursor),
            ])
        };

        Paragraph::new(line).render(area, buf);
    }
}
