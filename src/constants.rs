//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_COPIED: &str = "✅ Copied to clipboard";
pub const SUCCESS_NOW_STAMPED: &str = "✅ Current time filled in";
pub const CONFIG_GENERATED: &str = "✅ Config file generated";

// Error Messages
pub const ERROR_NOTHING_TO_COPY: &str = "❌ Nothing to copy yet";

// Status bar hints
pub const HINT_NORMAL: &str = "Tab: next widget • Enter: convert • Ctrl+Y: copy • F1: help • Ctrl+C: quit";
pub const HINT_CLOCK: &str = "s: pause/resume clock • c: copy epoch • Tab: next widget • F1: help";

// Widget titles
pub const TITLE_CLOCK: &str = "⏰ Current Unix Epoch Time";
pub const TITLE_TIMESTAMP: &str = "Timestamp → Date";
pub const TITLE_DATE: &str = "Date → Timestamp";
pub const TITLE_PERIOD: &str = "Start & End of Period";
pub const TITLE_DURATION: &str = "Seconds → Duration";

// How long a transient notification stays in the status bar
pub const NOTICE_TTL_MILLIS: u64 = 2_500;
