//! Reusable UI components

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub mod clock_component;
pub mod date_component;
pub mod duration_component;
pub mod help_panel;
pub mod input;
pub mod period_component;
pub mod status_bar;
pub mod timestamp_component;

// Component exports
pub use clock_component::ClockComponent;
pub use date_component::DateComponent;
pub use duration_component::DurationComponent;
pub use help_panel::HelpPanel;
pub use period_component::PeriodComponent;
pub use status_bar::StatusBar;
pub use timestamp_component::TimestampComponent;

/// Render a `label: ◀ value ▶` selector row shared by the widgets.
pub(crate) fn selector_line(f: &mut Frame, rect: Rect, label: &str, value: &str, active: bool) {
    let label_style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let line = Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(format!("◀ {value} ▶"), value_style),
    ]);
    f.render_widget(Paragraph::new(line), rect);
}
