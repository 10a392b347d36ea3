//! Timestamp → date converter widget

use crate::constants::{ERROR_NOTHING_TO_COPY, TITLE_TIMESTAMP};
use crate::convert::{timestamp, ResolvedTimestamp, TimeReference};
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

pub struct TimestampComponent {
    input: InputField,
    reference: TimeReference,
    initial_reference: TimeReference,
    active: ActiveField,
    result: Option<ResolvedTimestamp>,
    date_format: String,
    focused: bool,
}

impl TimestampComponent {
    pub fn new(reference: TimeReference, date_format: String) -> Self {
        Self {
            input: InputField::new("Timestamp", "1763384855"),
            reference,
            initial_reference: reference,
            active: ActiveField::Input,
            result: None,
            date_format,
            focused: false,
        }
    }

    fn convert(&mut self) -> Action {
        match timestamp::resolve(self.input.as_str(), self.reference, &self.date_format) {
            Ok(resolved) => {
                self.result = Some(resolved);
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

impl Component for TimestampComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('y') = key.code {
                return match &self.result {
                    Some(resolved) => Action::Copy(resolved.seconds.to_string()),
                    None => Action::Notify(Notice::error(ERROR_NOTHING_TO_COPY)),
                };
            }
            return Action::None;
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
            .title(TITLE_TIMESTAMP)
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
                Constraint::Min(0),    // result
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

        if let Some(resolved) = &self.result {
            let lines = vec![
                Line::from(vec![
                    Span::styled("Date: ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        resolved.formatted.clone(),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Unit: ", Style::default().fg(Color::Gray)),
                    Span::raw(resolved.unit.label()),
                ]),
                Line::from(vec![
                    Span::styled("Seconds: ", Style::default().fg(Color::Gray)),
                    Span::raw(resolved.seconds.to_string()),
                ]),
            ];
            f.render_widget(Paragraph::new(lines), rows[3]);
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
