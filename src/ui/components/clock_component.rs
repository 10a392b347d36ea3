//! Live epoch clock banner

use crate::constants::{ERROR_NOTHING_TO_COPY, TITLE_CLOCK};
use crate::ui::core::{
    actions::{Action, Notice},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shows the current Unix timestamp, refreshed once per second by the
/// background clock task. The component itself never samples the clock;
/// it only displays whatever the last tick delivered.
pub struct ClockComponent {
    pub running: bool,
    current: Option<i64>,
    focused: bool,
}

impl ClockComponent {
    pub fn new(running: bool) -> Self {
        Self {
            running,
            current: None,
            focused: false,
        }
    }

    /// Called by the app when a clock tick arrives.
    pub fn set_current(&mut self, timestamp: i64) {
        self.current = Some(timestamp);
    }

    fn copy_current(&self) -> Action {
        match self.current {
            Some(ts) => Action::Copy(ts.to_string()),
            None => Action::Notify(Notice::error(ERROR_NOTHING_TO_COPY)),
        }
    }
}

impl Component for ClockComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('s') => Action::ToggleClock,
            KeyCode::Char('c') => self.copy_current(),
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => self.copy_current(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(TITLE_CLOCK)
            .title_alignment(Alignment::Center)
            .border_style(border_style);

        let value = match self.current {
            Some(ts) => ts.to_string(),
            None => "—".to_string(),
        };
        let state = if self.running { "updates every second" } else { "paused" };
        let line = Line::from(vec![
            Span::styled(
                value,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(state, Style::default().fg(Color::DarkGray)),
        ]);

        let paragraph = Paragraph::new(line).block(block).alignment(Alignment::Center);
        f.render_widget(paragraph, rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
