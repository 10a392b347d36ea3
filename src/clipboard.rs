//! Write-only clipboard sink
//!
//! The clipboard is a best-effort collaborator: when it cannot be opened
//! (headless session, no display server) or a write fails, the failure is
//! logged and the caller simply skips its success notification.

pub struct ClipboardSink {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSink {
    #[must_use]
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                log::warn!("clipboard unavailable: {e}");
                None
            }
        };
        Self { inner }
    }

    /// Copy `text`, reporting whether the write went through.
    pub fn copy(&mut self, text: &str) -> bool {
        let Some(clipboard) = self.inner.as_mut() else {
            return false;
        };
        match clipboard.set_text(text.to_string()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("clipboard write failed: {e}");
                false
            }
        }
    }
}

impl Default for ClipboardSink {
    fn default() -> Self {
        Self::new()
    }
}
