use web_time::Duration;

use crate::{InputSnapshot, Rect};

/// Frame clock values handed in by the host each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameTime {
    /// Time since the host started.
    pub total: Duration,
    /// Time since the previous frame.
    pub elapsed: Duration,
}

impl FrameTime {
    pub fn new(total: Duration, elapsed: Duration) -> Self {
        Self { total, elapsed }
    }

    /// Convenience for fixed-step hosts and tests: frame `n` at `step` per frame.
    pub fn fixed(frame: u32, step: Duration) -> Self {
        Self {
            total: step * frame,
            elapsed: if frame == 0 { Duration::ZERO } else { step },
        }
    }
}

/// What the control tree needs from the game host.
pub trait Host {
    /// Current raw mouse and keyboard state. Called once per tick.
    fn poll_input(&mut self) -> InputSnapshot;

    /// Whether the host window has input focus.
    fn is_active(&self) -> bool {
        true
    }

    /// Client area of the host window.
    fn client_bounds(&self) -> Rect;
}

/// System clipboard access. Failures are reported as `None`.
pub trait Clipboard {
    fn get_text(&mut self) -> Option<String>;

    fn set_text(&mut self, _text: &str) -> bool {
        false
    }
}
