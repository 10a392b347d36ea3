//! Start/end-of-period calculator widget

use crate::constants::{ERROR_NOTHING_TO_COPY, TITLE_PERIOD};
use crate::convert::{period, PeriodBounds, PeriodKind, TimeReference};
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
    Kind,
    Year,
    Month,
    Day,
    Reference,
}

pub struct PeriodComponent {
    kind: PeriodKind,
    year: InputField,
    month: InputField,
    day: InputField,
    reference: TimeReference,
    initial_reference: TimeReference,
    active: ActiveField,
    result: Option<PeriodBounds>,
    date_format: String,
    focused: bool,
}

impl PeriodComponent {
    pub fn new(reference: TimeReference, date_format: String) -> Self {
        let (year, month, day) = period::today_fields();
        Self {
            kind: PeriodKind::default(),
            year: InputField::with_value("Year", year.to_string()),
            month: InputField::with_value("Month", format!("{month:02}")),
            day: InputField::with_value("Day", format!("{day:02}")),
            reference,
            initial_reference: reference,
            active: ActiveField::Kind,
            result: None,
            date_format,
            focused: false,
        }
    }

    fn field_enabled(&self, field: ActiveField) -> bool {
        match field {
            ActiveField::Month => self.kind.uses_month(),
            ActiveField::Day => self.kind.uses_day(),
            _ => true,
        }
    }

    fn move_active(&mut self, down: bool) {
        const ORDER: [ActiveField; 5] = [
            ActiveField::Kind,
            ActiveField::Year,
            ActiveField::Month,
            ActiveField::Day,
            ActiveField::Reference,
        ];
        let mut index = ORDER.iter().position(|f| *f == self.active).unwrap_or(0);
        // Skip fields the current kind doesn't use.
        for _ in 0..ORDER.len() {
            index = if down {
                (index + 1) % ORDER.len()
            } else {
                (index + ORDER.len() - 1) % ORDER.len()
            };
            if self.field_enabled(ORDER[index]) {
                break;
            }
        }
        self.active = ORDER[index];
    }

    fn calculate(&mut self) -> Action {
        let year: i32 = match self.year.as_str().trim().parse() {
            Ok(year) => year,
            Err(_) => return Action::Notify(Notice::error(format!("❌ '{}' is not a valid year", self.year.as_str()))),
        };
        let month: u32 = if self.kind.uses_month() {
            match self.month.as_str().trim().parse() {
                Ok(month) => month,
                Err(_) => {
                    return Action::Notify(Notice::error(format!("❌ '{}' is not a valid month", self.month.as_str())))
                }
            }
        } else {
            1
        };
        let day: u32 = if self.kind.uses_day() {
            match self.day.as_str().trim().parse() {
                Ok(day) => day,
                Err(_) => return Action::Notify(Notice::error(format!("❌ '{}' is not a valid day", self.day.as_str()))),
            }
        } else {
            1
        };

        match period::bounds(self.kind, year, month, day, self.reference, &self.date_format) {
            Ok(bounds) => {
                self.result = Some(bounds);
                Action::None
            }
            Err(e) => Action::Notify(Notice::error(format!("❌ {e}"))),
        }
    }

    fn reset(&mut self) {
        let (year, month, day) = period::today_fields();
        self.kind = PeriodKind::default();
        self.year.set(year.to_string());
        self.month.set(format!("{month:02}"));
        self.day.set(format!("{day:02}"));
        self.reference = self.initial_reference;
        self.active = ActiveField::Kind;
        self.result = None;
    }

    fn active_input_mut(&mut self) -> Option<&mut InputField> {
        match self.active {
            ActiveField::Year => Some(&mut self.year),
            ActiveField::Month => Some(&mut self.month),
            ActiveField::Day => Some(&mut self.day),
            _ => None,
        }
    }
}

impl Component for PeriodComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // Copy start / end of the last result.
                KeyCode::Char('y') => match &self.result {
                    Some(bounds) => Action::Copy(bounds.start.to_string()),
                    None => Action::Notify(Notice::error(ERROR_NOTHING_TO_COPY)),
                },
                KeyCode::Char('u') => match &self.result {
                    Some(bounds) => Action::Copy(bounds.end.to_string()),
                    None => Action::Notify(Notice::error(ERROR_NOTHING_TO_COPY)),
                },
                _ => Action::None,
            };
        }
        match key.code {
            KeyCode::Enter => self.calculate(),
            KeyCode::Esc => {
                self.reset();
                Action::None
            }
            KeyCode::Up => {
                self.move_active(false);
                Action::None
            }
            KeyCode::Down => {
                self.move_active(true);
                Action::None
            }
            KeyCode::Left | KeyCode::Right if self.active == ActiveField::Kind => {
                self.kind = if key.code == KeyCode::Left {
                    self.kind.previous()
                } else {
                    self.kind.next()
                };
                Action::None
            }
            KeyCode::Left | KeyCode::Right if self.active == ActiveField::Reference => {
                self.reference = self.reference.toggle();
                Action::None
            }
            _ => {
                if let Some(input) = self.active_input_mut() {
                    input.handle_key(key);
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
            .title(TITLE_PERIOD)
            .title_alignment(Alignment::Left)
            .border_style(border_style);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // kind
                Constraint::Length(1), // year
                Constraint::Length(1), // month
                Constraint::Length(1), // day
                Constraint::Length(1), // reference
                Constraint::Min(0),    // result
            ])
            .split(inner);

        selector_line(
            f,
            rows[0],
            "Period",
            self.kind.label(),
            self.focused && self.active == ActiveField::Kind,
        );
        self.year
            .render(f, rows[1], self.focused && self.active == ActiveField::Year);
        if self.kind.uses_month() {
            self.month
                .render(f, rows[2], self.focused && self.active == ActiveField::Month);
        } else {
            disabled_line(f, rows[2], "Month");
        }
        if self.kind.uses_day() {
            self.day
                .render(f, rows[3], self.focused && self.active == ActiveField::Day);
        } else {
            disabled_line(f, rows[3], "Day");
        }
        selector_line(
            f,
            rows[4],
            "Reference",
            self.reference.label(),
            self.focused && self.active == ActiveField::Reference,
        );

        if let Some(bounds) = &self.result {
            let lines = vec![
                Line::from(vec![
                    Span::styled("Start: ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        bounds.start.to_string(),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", bounds.start_display), Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(vec![
                    Span::styled("End:   ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        bounds.end.to_string(),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", bounds.end_display), Style::default().fg(Color::DarkGray)),
                ]),
            ];
            f.render_widget(Paragraph::new(lines), rows[5]);
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

fn disabled_line(f: &mut Frame, rect: Rect, label: &str) {
    let line = Line::from(Span::styled(
        format!("{label}: —"),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(line), rect);
}
