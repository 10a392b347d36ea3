//! The live epoch clock's background task
//!
//! The only recurring activity in the application. A spawned task samples
//! the current epoch second immediately and then once per second, pushing
//! each sample over the action channel. The handle aborts the task on
//! deactivation and again on drop, so no timer outlives its owner.

use super::actions::Action;
use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

pub struct ClockHandle {
    handle: JoinHandle<()>,
}

impl ClockHandle {
    /// Start sampling. The first tick fires immediately.
    pub fn spawn(action_sender: mpsc::UnboundedSender<Action>) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));
            loop {
                ticker.tick().await;
                let now = Utc::now().timestamp();
                if action_sender.send(Action::ClockTick(now)).is_err() {
                    // Receiver is gone; the app is shutting down.
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Stop sampling; no further ticks will be delivered.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
