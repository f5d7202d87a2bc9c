//! Transient notification banner

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use roster_core::Notification;

use crate::ui::theme::RosterTheme;

pub struct ToastWidget<'a> {
    notification: &'a Notification,
    theme: &'a RosterTheme,
}

impl<'a> ToastWidget<'a> {
    pub fn new(notification: &'a Notification, theme: &'a RosterTheme) -> Self {
        Self {
            notification,
            theme,
        }
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.toast_style(self.notification.kind);

        Clear.render(area, buf);
        Paragraph::new(self.notification.message.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .render(area, buf);
    }
}
