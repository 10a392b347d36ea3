//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel {
    pub scroll_offset: usize,
}

impl HelpPanel {
    pub fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(HELP_CONTENT.lines().count().saturating_sub(1));
    }

    /// Render the help panel
    pub fn render(&mut self, f: &mut Frame) {
        let screen_width = f.area().width;
        let screen_height = f.area().height;

        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen_width, screen_height);

        let help_area = LayoutManager::centered_rect(help_width, help_height, f.area());
        f.render_widget(Clear, help_area);

        let help_paragraph = Paragraph::new(HELP_CONTENT)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help")
                    .title_alignment(Alignment::Center)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));

        f.render_widget(help_paragraph, help_area);
    }
}

impl Default for HelpPanel {
    fn default() -> Self {
        Self::new()
    }
}

const HELP_CONTENT: &str = r"
EPOCHAL - Unix Epoch Conversion Tools
=====================================

NAVIGATION
----------
Tab / Shift+Tab   Move between widgets
Up/Down           Move between fields inside a widget
Left/Right        Change a selector value, or move the text cursor
Enter             Run the focused widget's conversion
Esc               Reset the focused widget

ACTIONS
-------
Ctrl+Y            Copy the focused widget's result
Ctrl+U            Copy the period end (period widget)
Ctrl+N            Fill in the current time (date widget)
c                 Copy the current epoch (clock)
s                 Pause/resume the clock
F1                Toggle this panel
Ctrl+C            Quit

WHAT IS EPOCH TIME?
-------------------
The Unix epoch (or Unix time or POSIX time) is the number of
seconds that have elapsed since January 1, 1970 (midnight
UTC/GMT), not counting leap seconds.

TIMESTAMP FORMATS
-----------------
Seconds:       10 digits (e.g., 1763384855)
Milliseconds:  13 digits (e.g., 1763384855000)
Microseconds:  16 digits
Nanoseconds:   19 digits
The unit is inferred from the number of digits typed.

DATE FORMATS
------------
ISO 8601:          2025-11-17 or 2025-11-17T13:07:33
RFC 2822:          Mon, 17 Nov 2025 13:07:33 +0000
Slash-delimited:   11/17/2025
Natural language:  now, today, yesterday, tomorrow

REFERENCES
----------
Converters interpret naive dates as local time by default; in
GMT mode a parsed date is pinned to UTC, and the period
calculator reads its calendar fields as UTC fields directly.

HELP PANEL SCROLLING
--------------------
Up/Down           Scroll this panel
Esc / F1 / q      Close this panel
";
