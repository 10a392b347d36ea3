//! Epochal - A Terminal User Interface (TUI) for Unix epoch conversion
//!
//! This library provides a terminal-based toolbox for working with Unix
//! timestamps: converting raw timestamps to calendar dates, parsing
//! human-readable dates back to timestamps, computing start/end-of-period
//! boundaries, decomposing second counts into durations, and watching a
//! live epoch clock. The interactive UI is built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`convert`] - The conversion core every widget is built on
//! * [`ui`] - Terminal user interface components

/// Write-only clipboard sink for copying results
pub mod clipboard;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Timestamp, date, period, and duration conversion logic
pub mod convert;

/// File logging setup
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the conversion types for convenient access
pub use convert::{ConvertError, TimeReference};
