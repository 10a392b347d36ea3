//! Single-line text input shared by the converter widgets

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A labeled one-line text field with cursor editing.
#[derive(Debug, Clone)]
pub struct InputField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub buffer: String,
    pub cursor: usize,
}

impl InputField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn with_value(label: &'static str, value: String) -> Self {
        let cursor = value.chars().count();
        Self {
            label,
            placeholder: "",
            buffer: value,
            cursor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn set(&mut self, value: String) {
        self.cursor = value.chars().count();
        self.buffer = value;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !c.is_control() => {
                let byte_index = self.byte_index();
                self.buffer.insert(byte_index, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let byte_index = self.byte_index();
                    self.buffer.remove(byte_index);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.buffer.chars().count() {
                    let byte_index = self.byte_index();
                    self.buffer.remove(byte_index);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                if self.cursor < self.buffer.chars().count() {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.buffer.chars().count();
                true
            }
            _ => false,
        }
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    /// Render as a `label: value` line; places the terminal cursor when
    /// the field is the active one in a focused widget.
    pub fn render(&self, f: &mut Frame, rect: Rect, active: bool) {
        let label_style = if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let (text, value_style) = if self.buffer.is_empty() && !self.placeholder.is_empty() {
            (self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (self.buffer.as_str(), Style::default().fg(Color::White))
        };
        let line = Line::from(vec![
            Span::styled(format!("{}: ", self.label), label_style),
            Span::styled(text, value_style),
        ]);
        f.render_widget(Paragraph::new(line), rect);

        if active {
            let prefix = self.label.chars().count() as u16 + 2;
            let x = rect.x.saturating_add(prefix).saturating_add(self.cursor as u16);
            if x < rect.x + rect.width {
                f.set_cursor_position((x, rect.y));
            }
        }
    }
}
