//! Host-side plumbing for driving a [`gantry_core::Ui`] outside a real game
//! window: scripted input, the system clipboard, a frame clock, a simple
//! frame driver and logger setup.

pub mod clipboard;
pub mod clock;
pub mod scripted;

pub use clipboard::SystemClipboard;
pub use clock::FrameClock;
pub use scripted::{ScriptHandle, ScriptedHost};

use gantry_core::{FrameTime, Host, Scene, Ui};

/// Installs `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
/// Calling it twice is harmless.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already installed");
    }
}

/// Runs `frames` update/draw cycles, handing every frame's scene to `on_frame`.
/// Stops early when `on_frame` returns `false`. Returns the number of frames run.
pub fn run_frames(
    ui: &mut Ui,
    host: &mut dyn Host,
    clock: &mut FrameClock,
    frames: usize,
    mut on_frame: impl FnMut(&mut Ui, FrameTime, &Scene) -> bool,
) -> usize {
    for n in 0..frames {
        let time = clock.tick();
        ui.update(host, time);
        let scene = ui.draw(time);
        if !on_frame(ui, time, &scene) {
            log::debug!("frame loop stopped after {} frames", n + 1);
            return n + 1;
        }
    }
    frames
}
