//! Seconds → duration decomposition widget

use crate::constants::{ERROR_NOTHING_TO_COPY, TITLE_DURATION};
use crate::convert::{duration, DurationParts};
use crate::ui::core::{
    actions::{Action, Notice},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::input::InputField;

pub struct DurationComponent {
    input: InputField,
    result: Option<DurationParts>,
    focused: bool,
}

impl DurationComponent {
    pub fn new() -> Self {
        Self {
            input: InputField::new("Seconds", "86400"),
            result: None,
            focused: false,
        }
    }

    fn convert(&mut self) -> Action {
        match duration::decompose(self.input.as_str()) {
            Ok(parts) => {
                self.result = Some(parts);
                Action::None
            }
            Err(e) => Action::Notify(Notice::error(format!("❌ {e}"))),
        }
    }
}

impl Default for DurationComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DurationComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('y') = key.code {
                return match &self.result {
                    Some(parts) => Action::Copy(format!(
                        "{}d {}h {}m {}s",
                        parts.days, parts.hours, parts.minutes, parts.seconds
                    )),
                    None => Action::Notify(Notice::error(ERROR_NOTHING_TO_COPY)),
                };
            }
            return Action::None;
        }
        match key.code {
            KeyCode::Enter => self.convert(),
            KeyCode::Esc => {
                self.input.clear();
                self.result = None;
                Action::None
            }
            _ => {
                self.input.handle_key(key);
                Action::None
            }
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
            .title(TITLE_DURATION)
            .title_alignment(Alignment::Left)
            .border_style(border_style);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // input
                Constraint::Length(1), // spacer
                Constraint::Min(0),    // result
            ])
            .split(inner);

        self.input.render(f, rows[0], self.focused);

        if let Some(parts) = &self.result {
            let value_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
            let label_style = Style::default().fg(Color::Gray);
            let lines = vec![
                Line::from(vec![
                    Span::styled(parts.days.to_string(), value_style),
                    Span::styled(" days  ", label_style),
                    Span::styled(parts.hours.to_string(), value_style),
                    Span::styled(" hours", label_style),
                ]),
                Line::from(vec![
                    Span::styled(parts.minutes.to_string(), value_style),
                    Span::styled(" minutes  ", label_style),
                    Span::styled(parts.seconds.to_string(), value_style),
                    Span::styled(" seconds", label_style),
                ]),
            ];
            f.render_widget(Paragraph::new(lines), rows[2]);
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
