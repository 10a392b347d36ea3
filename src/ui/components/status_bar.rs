//! Status bar component

use crate::constants::{HINT_CLOCK, HINT_NORMAL};
use crate::ui::core::actions::{Notice, NoticeLevel};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
///
/// Doubles as the notification surface: a transient notice replaces the
/// key hints until it expires.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, notice: Option<&Notice>, clock_focused: bool) {
        let (text, color) = match notice {
            Some(notice) => {
                let color = match notice.level {
                    NoticeLevel::Success => Color::Green,
                    NoticeLevel::Error => Color::Red,
                };
                (notice.text.clone(), color)
            }
            None => {
                let hint = if clock_focused { HINT_CLOCK } else { HINT_NORMAL };
                (hint.to_string(), Color::Gray)
            }
        };

        let status_bar = Paragraph::new(text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}
