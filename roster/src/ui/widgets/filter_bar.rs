//! Filter selector with the recruited counter

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs, Widget},
};

use roster_core::{Filter, RosterCounts};

use crate::ui::theme::RosterTheme;

pub struct FilterBarWidget<'a> {
    current: Filter,
    counts: RosterCounts,
    theme: &'a RosterTheme,
}

impl<'a> FilterBarWidget<'a> {
    pub fn new(current: Filter, counts: RosterCounts, theme: &'a RosterTheme) -> Self {
        Self {
            current,
            counts,
            theme,
        }
    }
}

impl Widget for FilterBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" Filters - {} ", self.counts),
                self.theme.title_style(false),
            ))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let titles: Vec<Line> = Filter::ALL
            .iter()
            .enumerate()
            .map(|(i, filter)| Line::from(format!(" {} {} ", i + 1, filter.label())))
            .collect();

        let selected = Filter::ALL
            .iter()
            .position(|f| *f == self.current)
            .unwrap_or(0);

        Tabs::new(titles)
            .block(block)
            .select(selected)
            .style(Style::default().fg(self.theme.muted))
            .highlight_style(self.theme.active_filter_style())
            .divider(" ")
            .render(area, buf);
    }
}
