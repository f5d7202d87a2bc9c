//! Color theme and styling for the roster TUI

use ratatui::style::{Color, Modifier, Style};

use roster_core::NotificationKind;

/// Roster UI color theme
#[derive(Debug, Clone)]
pub struct RosterTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Brand colors
    pub primary: Color,
    pub accent: Color,
    pub pale: Color,
    pub muted: Color,

    // Toast backgrounds
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

impl Default for RosterTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Rgb(0xb2, 0x45, 0x72),

            primary: Color::Rgb(0xb2, 0x45, 0x72),
            accent: Color::Rgb(0xdf, 0xa7, 0x92),
            pale: Color::Rgb(0xfa, 0xce, 0xe0),
            muted: Color::Gray,

            success: Color::Rgb(0xdf, 0xa7, 0x92),
            error: Color::Rgb(0xb2, 0x45, 0x72),
            warning: Color::Rgb(0xfa, 0xce, 0xe0),
        }
    }
}

impl RosterTheme {
    /// Get style for the header title
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for the header subtitle
    pub fn subtitle_style(&self) -> Style {
        Style::default().fg(self.pale).bg(self.primary)
    }

    /// Get style for hints and placeholders
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Get title style
    pub fn title_style(&self, focused: bool) -> Style {
        let style = Style::default().fg(if focused {
            self.primary
        } else {
            self.foreground
        });

        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Get style for a character name, by recruitment
    pub fn name_style(&self, recruited: bool) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if recruited {
            style.fg(self.primary)
        } else {
            style.fg(self.foreground)
        }
    }

    /// Get style for the "Recruited" badge
    pub fn badge_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.pale)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for the selected list row
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(Color::Rgb(0x3a, 0x1c, 0x2a))
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for the active filter tab
    pub fn active_filter_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for a toast of the given kind
    pub fn toast_style(&self, kind: NotificationKind) -> Style {
        let (bg, fg) = match kind {
            NotificationKind::Success => (self.success, Color::Black),
            NotificationKind::Error => (self.error, self.foreground),
            NotificationKind::Warning => (self.warning, Color::Black),
        };
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    }

    /// Get style for the mode indicator in the hotkey bar
    pub fn mode_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
