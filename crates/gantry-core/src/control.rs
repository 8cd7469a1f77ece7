use std::collections::VecDeque;

use slotmap::new_key_type;
use smallvec::SmallVec;

use crate::{Event, EventKind, EventMask, Rect, Widget};

new_key_type! {
    /// Generational handle to a control owned by a [`crate::Ui`].
    pub struct ControlId;
}

pub type Children = SmallVec<[ControlId; 4]>;

/// A node of the control tree.
///
/// Plain attributes are set directly; anything that touches the tree
/// (parent, children, draw order) goes through [`crate::Ui`] so derived state
/// stays consistent.
pub struct Control {
    pub(crate) name: String,
    pub(crate) area: Rect,
    pub(crate) visible: bool,
    pub(crate) enabled: bool,
    pub(crate) focusable: bool,
    pub(crate) keep_in_bounds: bool,
    pub(crate) update_order: i32,
    pub(crate) draw_order: i32,
    pub(crate) event_mask: EventMask,
    pub(crate) parent: Option<ControlId>,
    pub(crate) children: Children,
    pub(crate) queue: VecDeque<Event>,
    pub(crate) mouse_over: bool,
    pub(crate) mouse_over_previously: bool,
    pub(crate) focused: bool,
    /// Taken out while one of its hooks runs.
    pub(crate) behavior: Option<Box<dyn Widget>>,
}

impl Control {
    pub(crate) fn new(behavior: Box<dyn Widget>, area: Rect) -> Self {
        Self {
            name: String::new(),
            area,
            visible: true,
            enabled: true,
            focusable: behavior.focusable(),
            keep_in_bounds: false,
            update_order: 0,
            draw_order: 0,
            event_mask: behavior.event_mask(),
            parent: None,
            children: Children::new(),
            queue: VecDeque::new(),
            mouse_over: false,
            mouse_over_previously: false,
            focused: false,
            behavior: Some(behavior),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Draw area in parent-local coordinates.
    pub fn area(&self) -> Rect {
        self.area
    }
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Disabled controls still update and draw but are skipped by input targeting.
    pub fn enabled(&self) -> bool {
        self.enabled
    }
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn focusable(&self) -> bool {
        self.focusable
    }
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    pub fn keep_in_bounds(&self) -> bool {
        self.keep_in_bounds
    }
    pub fn set_keep_in_bounds(&mut self, keep: bool) {
        self.keep_in_bounds = keep;
    }

    pub fn update_order(&self) -> i32 {
        self.update_order
    }
    /// Update order is independent of the tree and is never propagated.
    pub fn set_update_order(&mut self, order: i32) {
        self.update_order = order;
    }

    /// Use [`crate::Ui::set_draw_order`] to change; it propagates to descendants.
    pub fn draw_order(&self) -> i32 {
        self.draw_order
    }

    pub fn event_mask(&self) -> EventMask {
        self.event_mask
    }
    pub fn set_event_mask(&mut self, mask: EventMask) {
        self.event_mask = mask;
    }
    pub fn handles(&self, kind: EventKind) -> bool {
        self.event_mask.contains(kind.into())
    }

    pub fn parent(&self) -> Option<ControlId> {
        self.parent
    }
    pub fn children(&self) -> &[ControlId] {
        &self.children
    }

    pub fn mouse_over(&self) -> bool {
        self.mouse_over
    }
    /// `mouse_over` as it was when the previous tick finished.
    pub fn mouse_over_previously(&self) -> bool {
        self.mouse_over_previously
    }
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Messages waiting for this control's next update pass.
    pub fn pending_messages(&self) -> usize {
        self.queue.len()
    }
}

impl std::fmt::Debug for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Control")
            .field("name", &self.name)
            .field("area", &self.area)
            .field("visible", &self.visible)
            .field("update_order", &self.update_order)
            .field("draw_order", &self.draw_order)
            .field("event_mask", &self.event_mask)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("queued", &self.queue.len())
            .field("behavior", &"<widget>")
            .finish()
    }
}
