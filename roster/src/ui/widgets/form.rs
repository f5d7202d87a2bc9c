//! Add-character form widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use roster_core::SUGGESTED_CLASSES;

use crate::form::{AddForm, FormField};
use crate::ui::theme::RosterTheme;
use crate::ui::widgets::InputWidget;

/// The three form inputs plus the class suggestions
pub struct AddFormWidget<'a> {
    form: &'a AddForm,
    theme: &'a RosterTheme,
    focused: bool,
    editing: bool,
}

impl<'a> AddFormWidget<'a> {
    pub fn new(form: &'a AddForm, theme: &'a RosterTheme) -> Self {
        Self {
            form,
            theme,
            focused: false,
            editing: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Whether keystrokes currently go to the form
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for AddFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                " Add New Character ",
                self.theme.title_style(self.focused),
            ))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Name
                Constraint::Length(1), // Class
                Constraint::Length(1), // Level
                Constraint::Length(1), // Suggestions
            ])
            .split(inner);

        for (row, field) in FormField::ALL.into_iter().enumerate() {
            let input = self.form.field(field);
            let prefix = format!("{:<7}", format!("{}:", field.label()));
            InputWidget::new(input.as_str(), self.theme)
                .prefix(&prefix)
                .placeholder(field.placeholder())
                .cursor_position(input.cursor())
                .active(self.editing && self.form.focus == field)
                .render(chunks[row], buf);
        }

        let suggestions = Line::from(vec![
            Span::styled("Suggested classes: ", self.theme.dim_style()),
            Span::raw(SUGGESTED_CLASSES.join(", ")),
        ]);
        Paragraph::new(suggestions).render(chunks[3], buf);
    }
}
