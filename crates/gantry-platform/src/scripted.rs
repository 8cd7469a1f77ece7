use std::sync::Arc;

use parking_lot::Mutex;

use gantry_core::{Host, InputSnapshot, Key, Modifiers, MouseButtons, Rect, Vec2};

#[derive(Debug)]
struct Shared {
    input: InputSnapshot,
    active: bool,
    bounds: Rect,
}

/// A [`Host`] whose hardware state is written through a [`ScriptHandle`],
/// possibly from another thread. Each poll copies the current state.
#[derive(Debug)]
pub struct ScriptedHost {
    shared: Arc<Mutex<Shared>>,
}

/// Writes the state a [`ScriptedHost`] reports. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ScriptHandle {
    shared: Arc<Mutex<Shared>>,
}

impl ScriptedHost {
    pub fn new(bounds: Rect) -> (Self, ScriptHandle) {
        let shared = Arc::new(Mutex::new(Shared {
            input: InputSnapshot::default(),
            active: true,
            bounds,
        }));
        (
            Self {
                shared: shared.clone(),
            },
            ScriptHandle { shared },
        )
    }
}

impl Host for ScriptedHost {
    fn poll_input(&mut self) -> InputSnapshot {
        self.shared.lock().input.clone()
    }

    fn is_active(&self) -> bool {
        self.shared.lock().active
    }

    fn client_bounds(&self) -> Rect {
        self.shared.lock().bounds
    }
}

impl ScriptHandle {
    pub fn move_mouse(&self, x: f32, y: f32) {
        self.shared.lock().input.mouse.position = Vec2::new(x, y);
    }

    pub fn press(&self, buttons: MouseButtons) {
        self.shared.lock().input.mouse.buttons.insert(buttons);
    }

    pub fn release(&self, buttons: MouseButtons) {
        self.shared.lock().input.mouse.buttons.remove(buttons);
    }

    /// Adds `notches` to the cumulative wheel value.
    pub fn scroll(&self, notches: i32) {
        let mut shared = self.shared.lock();
        shared.input.mouse.wheel = shared.input.mouse.wheel.wrapping_add(notches);
    }

    pub fn key_down(&self, key: Key) {
        let mut shared = self.shared.lock();
        if !shared.input.keys.contains(&key) {
            shared.input.keys.push(key);
        }
    }

    pub fn key_up(&self, key: Key) {
        self.shared.lock().input.keys.retain(|k| *k != key);
    }

    pub fn set_modifiers(&self, modifiers: Modifiers) {
        self.shared.lock().input.modifiers = modifiers;
    }

    pub fn set_active(&self, active: bool) {
        self.shared.lock().active = active;
    }

    pub fn resize(&self, bounds: Rect) {
        self.shared.lock().bounds = bounds;
    }

    pub fn snapshot(&self) -> InputSnapshot {
        self.shared.lock().input.clone()
    }
}
