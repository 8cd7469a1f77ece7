//! Raw hardware state as sampled from the host once per tick, and the
//! edge detection that turns two consecutive samples into input transitions.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::Vec2;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        /// Cmd on Mac, Win key on Windows
        const META = 1 << 3;
    }
}

/// A physical key. `Char` carries the unshifted character printed on the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Space,
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    F(u8), // F1-F12
}

impl Key {
    /// Character produced by this key, honouring shift for a US layout.
    pub fn to_char(self, shift: bool) -> Option<char> {
        match self {
            Key::Space => Some(' '),
            Key::Char(c) if !shift => Some(c),
            Key::Char(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
            Key::Char(c) => Some(match c {
                '1' => '!',
                '2' => '@',
                '3' => '#',
                '4' => '$',
                '5' => '%',
                '6' => '^',
                '7' => '&',
                '8' => '*',
                '9' => '(',
                '0' => ')',
                '-' => '_',
                '=' => '+',
                '[' => '{',
                ']' => '}',
                ';' => ':',
                '\'' => '"',
                ',' => '<',
                '.' => '>',
                '/' => '?',
                '\\' => '|',
                '`' => '~',
                other => other,
            }),
            _ => None,
        }
    }
}

pub type KeySet = SmallVec<[Key; 8]>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MouseState {
    pub position: Vec2,
    pub buttons: MouseButtons,
    /// Cumulative wheel value; only its change between ticks matters.
    pub wheel: i32,
}

/// Hardware state for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub mouse: MouseState,
    pub keys: KeySet,
    pub modifiers: Modifiers,
}

impl InputSnapshot {
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Text the key produces, if any.
    pub ch: Option<char>,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            ch: key.to_char(modifiers.contains(Modifiers::SHIFT)),
        }
    }
}

/// Transitions between the previous and the current snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputEdges {
    pub position: Vec2,
    pub previous_position: Vec2,
    pub moved: bool,
    /// Down now, up last tick.
    pub pressed: MouseButtons,
    /// Up now, down last tick.
    pub released: MouseButtons,
    pub held: MouseButtons,
    pub wheel_delta: i32,
    /// Keys down now that were up last tick, in host order.
    pub keys_pressed: KeySet,
    pub modifiers: Modifiers,
}

/// Caches the previous tick's snapshot. The first sample counts as movement
/// so hover state is established on the very first tick.
#[derive(Debug, Default)]
pub struct InputPoller {
    previous: Option<InputSnapshot>,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self) -> Option<&InputSnapshot> {
        self.previous.as_ref()
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn advance(&mut self, current: InputSnapshot) -> InputEdges {
        let edges = match &self.previous {
            None => InputEdges {
                position: current.mouse.position,
                previous_position: current.mouse.position,
                moved: true,
                pressed: current.mouse.buttons,
                released: MouseButtons::empty(),
                held: current.mouse.buttons,
                wheel_delta: 0,
                keys_pressed: current.keys.clone(),
                modifiers: current.modifiers,
            },
            Some(prev) => InputEdges {
                position: current.mouse.position,
                previous_position: prev.mouse.position,
                moved: prev.mouse.position != current.mouse.position,
                pressed: current.mouse.buttons - prev.mouse.buttons,
                released: prev.mouse.buttons - current.mouse.buttons,
                held: current.mouse.buttons,
                wheel_delta: current.mouse.wheel.wrapping_sub(prev.mouse.wheel),
                keys_pressed: current
                    .keys
                    .iter()
                    .copied()
                    .filter(|k| !prev.keys.contains(k))
                    .collect(),
                modifiers: current.modifiers,
            },
        };
        self.previous = Some(current);
        edges
    }
}
