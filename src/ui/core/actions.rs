/// Severity of a transient status-bar notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A fire-and-forget message for the notification surface.
///
/// The core never blocks on or inspects what happens to one of these.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    FocusNext,
    FocusPrevious,

    // Widget requests handled at the app level
    Copy(String),
    Notify(Notice),

    // Clock
    ClockTick(i64),
    ToggleClock,

    // UI operations
    ShowHelp(bool),
    HelpScrollUp,
    HelpScrollDown,

    // App control
    Quit,
    None,
}
