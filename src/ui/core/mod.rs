//! Core UI functionality for the Epochal application.
//!
//! This module contains the fundamental building blocks for the user
//! interface: event handling, the component abstraction, the action type
//! that components communicate with, and the background clock task.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent
//!    rendering and key handling
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are produced by the [`EventHandler`] poll/tick loop
//! 4. The **clock** is the sole background task, sending ticks over an
//!    mpsc action channel until its handle is aborted

// Core UI modules
pub mod actions;
pub mod clock;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, Notice, NoticeLevel};
pub use clock::ClockHandle;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
