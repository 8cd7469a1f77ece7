//! Capability traits a widget composes, and the contexts its hooks receive.
//!
//! A widget is any `'static` type implementing [`Updatable`], [`Drawable`]
//! and [`EventReceiver`]; every hook has an empty default, so a widget only
//! writes the ones it cares about:
//!
//! ```rust
//! use gantry_core::*;
//!
//! struct Counter {
//!     clicks: u32,
//! }
//!
//! impl Updatable for Counter {}
//! impl Drawable for Counter {}
//! impl EventReceiver for Counter {
//!     fn event_mask(&self) -> EventMask {
//!         EventMask::HOVER | EventMask::CLICK
//!     }
//!     fn on_click(&mut self, _ctx: &mut Ctx, _click: &ClickInfo) {
//!         self.clicks += 1;
//!     }
//! }
//!
//! let mut ui = Ui::new();
//! let id = ui.create(Counter { clicks: 0 }, Rect::new(0.0, 0.0, 10.0, 10.0));
//! assert_eq!(ui.widget::<Counter>(id).map(|c| c.clicks), Some(0));
//! ```

use std::any::Any;

use crate::{
    ClickInfo, Control, ControlId, DialogResult, DragInfo, EventMask, FrameTime,
    KeyEvent, Rect, Result, Scene, Ui, Vec2,
};

/// Per-tick logic.
pub trait Updatable {
    /// Runs every tick, after children and before the event queue drains,
    /// whether or not the control is eligible to update.
    fn always_update(&mut self, _ctx: &mut Ctx) {}
    /// Runs only while the host is active, the control is visible and, with
    /// modal gating, it belongs to the top dialog.
    fn update(&mut self, _ctx: &mut Ctx) {}
    /// Called exactly once when the control is disposed.
    fn on_dispose(&mut self) {}
}

pub trait Drawable {
    /// Paints before the children.
    fn draw(&self, _ctx: &DrawCtx, _scene: &mut Scene) {}
    /// Paints after the children.
    fn draw_overlay(&self, _ctx: &DrawCtx, _scene: &mut Scene) {}
}

/// One hook per event kind. Hooks only fire for kinds in the control's mask.
pub trait EventReceiver {
    /// Mask the control starts with.
    fn event_mask(&self) -> EventMask {
        EventMask::HOVER | EventMask::FOCUS
    }
    fn focusable(&self) -> bool {
        false
    }

    fn on_mouse_enter(&mut self, _ctx: &mut Ctx, _position: Vec2) {}
    fn on_mouse_over(&mut self, _ctx: &mut Ctx, _position: Vec2) {}
    fn on_mouse_leave(&mut self, _ctx: &mut Ctx, _position: Vec2) {}
    fn on_drag_start(&mut self, _ctx: &mut Ctx, _drag: &DragInfo) {}
    fn on_drag(&mut self, _ctx: &mut Ctx, _drag: &DragInfo) {}
    fn on_drag_end(&mut self, _ctx: &mut Ctx, _drag: &DragInfo) {}
    fn on_click(&mut self, _ctx: &mut Ctx, _click: &ClickInfo) {}
    fn on_double_click(&mut self, _ctx: &mut Ctx, _click: &ClickInfo) {}
    fn on_key_typed(&mut self, _ctx: &mut Ctx, _key: &KeyEvent) {}
    fn on_got_focus(&mut self, _ctx: &mut Ctx) {}
    fn on_lost_focus(&mut self, _ctx: &mut Ctx) {}
    fn on_wheel_moved(&mut self, _ctx: &mut Ctx, _position: Vec2, _delta: i32) {}

    /// Dialog about to close; set `args.cancel` to keep it open.
    fn on_closing(&mut self, _ctx: &mut Ctx, _args: &mut ClosingArgs) {}
    /// Dialog popped from the modal stack, right before disposal.
    fn on_closed(&mut self, _ctx: &mut Ctx, _result: DialogResult) {}
}

pub trait Widget: Updatable + Drawable + EventReceiver + Any {}
impl<T: Updatable + Drawable + EventReceiver + Any> Widget for T {}

/// A control with no behavior of its own; useful as a plain container.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bare;

impl Updatable for Bare {}
impl Drawable for Bare {}
impl EventReceiver for Bare {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosingArgs {
    pub result: DialogResult,
    pub cancel: bool,
}

impl ClosingArgs {
    pub fn new(result: DialogResult) -> Self {
        Self {
            result,
            cancel: false,
        }
    }
}

/// Handed to update and event hooks. The hook's own widget is detached from
/// its control while the hook runs, so the whole `Ui` is available.
pub struct Ctx<'a> {
    pub(crate) ui: &'a mut Ui,
    pub(crate) id: ControlId,
}

impl<'a> Ctx<'a> {
    pub fn id(&self) -> ControlId {
        self.id
    }
    pub fn ui(&self) -> &Ui {
        self.ui
    }
    pub fn ui_mut(&mut self) -> &mut Ui {
        self.ui
    }
    pub fn time(&self) -> FrameTime {
        self.ui.time()
    }

    /// `None` once the control has been disposed from inside the hook.
    pub fn control(&self) -> Option<&Control> {
        self.ui.control(self.id).ok()
    }
    pub fn control_mut(&mut self) -> Option<&mut Control> {
        self.ui.control_mut(self.id).ok()
    }

    pub fn absolute_area(&self) -> Rect {
        self.ui.draw_area_with_offset(self.id).unwrap_or_default()
    }

    pub fn has_focus(&self) -> bool {
        self.ui.focused() == Some(self.id)
    }

    pub fn focus(&mut self) {
        self.ui.set_focus(Some(self.id));
    }

    /// Clipboard text; empty when no clipboard is installed or it is unavailable.
    pub fn clipboard_text(&mut self) -> String {
        self.ui
            .clipboard
            .as_mut()
            .and_then(|c| c.get_text())
            .unwrap_or_default()
    }

    /// Closes the dialog this control belongs to.
    pub fn close_dialog(&mut self, result: DialogResult) -> Result<bool> {
        let dialog = self.ui.root_of(self.id)?;
        self.ui.close_dialog(dialog, result)
    }
}

/// Handed to draw hooks.
pub struct DrawCtx<'a> {
    pub(crate) ui: &'a Ui,
    pub(crate) id: ControlId,
    pub(crate) area: Rect,
}

impl<'a> DrawCtx<'a> {
    pub fn id(&self) -> ControlId {
        self.id
    }
    pub fn ui(&self) -> &Ui {
        self.ui
    }
    /// Absolute draw area (all ancestor offsets applied).
    pub fn area(&self) -> Rect {
        self.area
    }
    pub fn time(&self) -> FrameTime {
        self.ui.time()
    }
    pub fn control(&self) -> Option<&Control> {
        self.ui.control(self.id).ok()
    }
    pub fn mouse_over(&self) -> bool {
        self.control().is_some_and(|c| c.mouse_over())
    }
    pub fn has_focus(&self) -> bool {
        self.ui.focused() == Some(self.id)
    }
    /// Left button went down on this control and is still held.
    pub fn is_pressed(&self) -> bool {
        self.ui.press_target() == Some(self.id)
    }
}
