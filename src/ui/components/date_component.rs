//! Date → timestamp converter widget

use crate::constants::{ERROR_NOTHING_TO_COPY, SUCCESS_NOW_STAMPED, TITLE_DATE};
use crate::convert::{date, TimeReference};
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
use super::selector_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveField {
    Input,
    Reference,
}

pub struct DateComponent {
    input: InputField,
    reference: TimeReference,
    initial_reference: TimeReference,
    active: ActiveField,
    result: Option<i64>,
    focused: bool,
}

impl DateComponent {
    pub fn new(reference: TimeReference) -> Self {
        Self {
            input: InputField::new("Date", "Mon, 17 Nov 2025 13:07:33 GMT"),
            reference,
            initial_reference: reference,
            active: ActiveField::Input,
            result: None,
            focused: false,
        }
    }

    fn convert(&mut self) -> Action {
        match date::parse(self.input.as_str(), self.reference) {
            Ok(timestamp) => {
                self.result = Some(timestamp);
                Action::None
            }
            Err(e) => Action::Notify(Notice::error(format!("❌ {e}"))),
        }
    }

    fn reset(&mut self) {
        self.input.clear();
        self.result = None;
        self.reference = self.initial_reference;
        self.active = ActiveField::Input;
    }
}

impl Component for DateComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('y') => match self.result {
                    Some(timestamp) => Action::Copy(timestamp.to_string()),
                    None => Action::Notify(Notice::error(ERROR_NOTHING_TO_COPY)),
                },
                // Stamp the field with the current moment for quick editing.
                KeyCode::Char('n') => {
                    self.input.set(date::now_stamp());
                    self.active = ActiveField::Input;
                    Action::Notify(Notice::success(SUCCESS_NOW_STAMPED))
                }
                _ => Action::None,
            };
        }
        match key.code {
            KeyCode::Enter => self.convert(),
            KeyCode::Esc => {
                self.reset();
                Action::None
            }
            KeyCode::Up | KeyCode::Down => {
                self.active = match self.active {
                    ActiveField::Input => ActiveField::Reference,
                    ActiveField::Reference => ActiveField::Input,
                };
                Action::None
            }
            KeyCode::Left | KeyCode::Right if self.active == ActiveField::Reference => {
                self.reference = self.reference.toggle();
                Action::None
            }
            _ => {
                if self.active == ActiveField::Input {
                    self.input.handle_key(key);
                }
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
            .title(TITLE_DATE)
            .title_alignment(Alignment::Left)
            .border_style(border_style);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // input
                Constraint::Length(1), // reference selector
                Constraint::Length(1), // spacer
                Constraint::Min(0),    // result + hint
            ])
            .split(inner);

        self.input
            .render(f, rows[0], self.focused && self.active == ActiveField::Input);
        selector_line(
            f,
            rows[1],
            "Reference",
            self.reference.label(),
            self.focused && self.active == ActiveField::Reference,
        );

        let mut lines = Vec::new();
        if let Some(timestamp) = self.result {
            lines.push(Line::from(vec![
                Span::styled("Unix timestamp: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    timestamp.to_string(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        lines.push(Line::from(Span::styled(
            "YYYY-MM-DD, MM/DD/YYYY, RFC dates, or today/yesterday • Ctrl+N: now",
            Style::default().fg(Color::DarkGray),
        )));
        f.render_widget(Paragraph::new(lines), rows[3]);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
