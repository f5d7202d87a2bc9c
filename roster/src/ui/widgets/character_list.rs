//! Character list widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use roster_core::{Character, Filter};

use crate::ui::theme::RosterTheme;

/// Two-line card per character with a selection highlight
pub struct CharacterListWidget<'a> {
    characters: &'a [&'a Character],
    filter: Filter,
    selected: usize,
    theme: &'a RosterTheme,
    focused: bool,
}

impl<'a> CharacterListWidget<'a> {
    pub fn new(characters: &'a [&'a Character], theme: &'a RosterTheme) -> Self {
        Self {
            characters,
            filter: Filter::All,
            selected: 0,
            theme,
            focused: false,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for CharacterListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ({}) ", self.filter.label(), self.characters.len()),
                self.theme.title_style(self.focused),
            ))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        if self.characters.is_empty() {
            let hint = match self.filter {
                Filter::All => "No characters yet. Press 'a' to add one.",
                Filter::Available => "Everyone has been recruited.",
                Filter::Recruited => "Nobody has been recruited yet.",
            };
            Paragraph::new(Line::from(Span::styled(hint, self.theme.dim_style())))
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .characters
            .iter()
            .map(|c| character_item(c, self.theme))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.selected_style())
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

fn character_item<'a>(character: &'a Character, theme: &RosterTheme) -> ListItem<'a> {
    let mut header = vec![
        Span::styled(format!("#{} ", character.id), theme.dim_style()),
        Span::styled(character.name.as_str(), theme.name_style(character.recruited)),
    ];
    if character.recruited {
        header.push(Span::raw("  "));
        header.push(Span::styled(" Recruited ", theme.badge_style()));
    }

    let details = Line::from(vec![
        Span::raw("    Class: "),
        Span::raw(character.class.as_str()),
        Span::raw("   Level: "),
        Span::raw(character.level.to_string()),
    ]);

    ListItem::new(vec![Line::from(header), details])
}
