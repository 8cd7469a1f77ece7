use std::thread;

use gantry_core::Clipboard;

/// The desktop clipboard through `arboard`.
///
/// Every access opens the clipboard and performs exactly one call on a scoped
/// worker thread, so a clipboard owner that never answers only costs that
/// thread. Failures are logged and reported as "no text".
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

fn on_worker<T: Send>(op: impl FnOnce() -> Result<T, arboard::Error> + Send) -> Option<T> {
    thread::scope(|s| match s.spawn(op).join() {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            log::warn!("clipboard unavailable: {e}");
            None
        }
        Err(_) => {
            log::error!("clipboard worker panicked");
            None
        }
    })
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        on_worker(|| arboard::Clipboard::new()?.get_text())
    }

    fn set_text(&mut self, text: &str) -> bool {
        on_worker(|| arboard::Clipboard::new()?.set_text(text)).is_some()
    }
}
