use web_time::{Duration, Instant};

use gantry_core::FrameTime;

/// Produces a [`FrameTime`] per tick, either from the wall clock or at a
/// fixed step for deterministic runs.
#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: Mode,
    frame: u32,
    total: Duration,
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Wall { start: Instant, last: Instant },
    Fixed(Duration),
}

impl FrameClock {
    pub fn wall() -> Self {
        let now = Instant::now();
        Self {
            mode: Mode::Wall { start: now, last: now },
            frame: 0,
            total: Duration::ZERO,
        }
    }

    pub fn fixed(step: Duration) -> Self {
        Self {
            mode: Mode::Fixed(step),
            frame: 0,
            total: Duration::ZERO,
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn tick(&mut self) -> FrameTime {
        let time = match &mut self.mode {
            Mode::Wall { start, last } => {
                let now = Instant::now();
                let elapsed = now.duration_since(*last);
                *last = now;
                FrameTime::new(now.duration_since(*start), elapsed)
            }
            Mode::Fixed(step) => FrameTime::fixed(self.frame, *step),
        };
        self.frame = self.frame.saturating_add(1);
        self.total = time.total;
        time
    }

    /// Total time at the last tick.
    pub fn total(&self) -> Duration {
        self.total
    }
}
