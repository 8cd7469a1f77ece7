use bitflags::bitflags;

use crate::Vec2;
use crate::input::{KeyEvent, Modifiers, MouseButtons};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseEnter,
    MouseOver,
    MouseLeave,
    DragStart,
    Drag,
    DragEnd,
    Click,
    DoubleClick,
    KeyTyped,
    GotFocus,
    LostFocus,
    WheelMoved,
}

bitflags! {
    /// Event kinds a control currently handles.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventMask: u16 {
        const MOUSE_ENTER = 1 << 0;
        const MOUSE_OVER = 1 << 1;
        const MOUSE_LEAVE = 1 << 2;
        const DRAG_START = 1 << 3;
        const DRAG = 1 << 4;
        const DRAG_END = 1 << 5;
        const CLICK = 1 << 6;
        const DOUBLE_CLICK = 1 << 7;
        const KEY_TYPED = 1 << 8;
        const GOT_FOCUS = 1 << 9;
        const LOST_FOCUS = 1 << 10;
        const WHEEL_MOVED = 1 << 11;

        const HOVER = Self::MOUSE_ENTER.bits() | Self::MOUSE_OVER.bits() | Self::MOUSE_LEAVE.bits();
        const DRAGGING = Self::DRAG_START.bits() | Self::DRAG.bits() | Self::DRAG_END.bits();
        const CLICKS = Self::CLICK.bits() | Self::DOUBLE_CLICK.bits();
        const FOCUS = Self::GOT_FOCUS.bits() | Self::LOST_FOCUS.bits();
        const POINTER = Self::HOVER.bits() | Self::DRAGGING.bits() | Self::CLICKS.bits() | Self::WHEEL_MOVED.bits();
    }
}

impl EventMask {
    pub const NONE: EventMask = EventMask::empty();
    pub const ALL: EventMask = EventMask::all();
}

impl From<EventKind> for EventMask {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::MouseEnter => EventMask::MOUSE_ENTER,
            EventKind::MouseOver => EventMask::MOUSE_OVER,
            EventKind::MouseLeave => EventMask::MOUSE_LEAVE,
            EventKind::DragStart => EventMask::DRAG_START,
            EventKind::Drag => EventMask::DRAG,
            EventKind::DragEnd => EventMask::DRAG_END,
            EventKind::Click => EventMask::CLICK,
            EventKind::DoubleClick => EventMask::DOUBLE_CLICK,
            EventKind::KeyTyped => EventMask::KEY_TYPED,
            EventKind::GotFocus => EventMask::GOT_FOCUS,
            EventKind::LostFocus => EventMask::LOST_FOCUS,
            EventKind::WheelMoved => EventMask::WHEEL_MOVED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickInfo {
    pub position: Vec2,
    pub button: MouseButtons,
    pub modifiers: Modifiers,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragInfo {
    pub start: Vec2,
    pub current: Vec2,
    /// Movement since the previous drag message.
    pub delta: Vec2,
}

/// One queued input occurrence.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    MouseEnter { position: Vec2 },
    MouseOver { position: Vec2 },
    MouseLeave { position: Vec2 },
    DragStart(DragInfo),
    Drag(DragInfo),
    DragEnd(DragInfo),
    Click(ClickInfo),
    DoubleClick(ClickInfo),
    KeyTyped(KeyEvent),
    GotFocus,
    LostFocus,
    WheelMoved { position: Vec2, delta: i32 },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::MouseEnter { .. } => EventKind::MouseEnter,
            Event::MouseOver { .. } => EventKind::MouseOver,
            Event::MouseLeave { .. } => EventKind::MouseLeave,
            Event::DragStart(_) => EventKind::DragStart,
            Event::Drag(_) => EventKind::Drag,
            Event::DragEnd(_) => EventKind::DragEnd,
            Event::Click(_) => EventKind::Click,
            Event::DoubleClick(_) => EventKind::DoubleClick,
            Event::KeyTyped(_) => EventKind::KeyTyped,
            Event::GotFocus => EventKind::GotFocus,
            Event::LostFocus => EventKind::LostFocus,
            Event::WheelMoved { .. } => EventKind::WheelMoved,
        }
    }

    /// Screen point used to forward the message to a more specific child.
    /// Hover messages are addressed to exactly one control and never route.
    pub fn routing_point(&self) -> Option<Vec2> {
        match self {
            Event::DragStart(d) | Event::Drag(d) | Event::DragEnd(d) => Some(d.current),
            Event::Click(c) | Event::DoubleClick(c) => Some(c.position),
            Event::WheelMoved { position, .. } => Some(*position),
            _ => None,
        }
    }
}
