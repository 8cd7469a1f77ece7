use std::collections::HashSet;

use slotmap::SlotMap;

use crate::{
    Clipboard, Control, ControlId, DialogStack, FrameTime, InputPoller, Rect, Result, UiError,
    UiConfig, Widget,
};

/// Pointer interaction carried across ticks.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PointerState {
    pub press_target: Option<ControlId>,
    pub drag_source: Option<ControlId>,
    pub drag_started: bool,
    pub press_pos: crate::Vec2,
    pub last_drag_pos: crate::Vec2,
    pub last_click: Option<(ControlId, web_time::Duration)>,
}

/// Host context: owns every control, the top-level collection, the modal
/// dialog stack and the per-tick input state.
pub struct Ui {
    pub(crate) controls: SlotMap<ControlId, Control>,
    pub(crate) components: Vec<ControlId>,
    pub(crate) dialogs: DialogStack,
    pub(crate) hovered: HashSet<ControlId>,
    pub(crate) poller: InputPoller,
    pub(crate) pointer: PointerState,
    pub(crate) focused: Option<ControlId>,
    pub(crate) host_active: bool,
    pub(crate) client_bounds: Rect,
    pub(crate) time: FrameTime,
    pub(crate) config: UiConfig,
    pub(crate) clipboard: Option<Box<dyn Clipboard>>,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            controls: SlotMap::with_key(),
            components: Vec::new(),
            dialogs: DialogStack::default(),
            hovered: HashSet::new(),
            poller: InputPoller::new(),
            pointer: PointerState::default(),
            focused: None,
            host_active: true,
            client_bounds: Rect::default(),
            time: FrameTime::default(),
            config,
            clipboard: None,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }
    pub fn config_mut(&mut self) -> &mut UiConfig {
        &mut self.config
    }

    pub fn set_clipboard(&mut self, clipboard: impl Clipboard + 'static) {
        self.clipboard = Some(Box::new(clipboard));
    }

    /// Creates a detached control. It takes part in update and draw once it
    /// is added to the top-level collection or parented.
    pub fn create<W: Widget>(&mut self, widget: W, area: Rect) -> ControlId {
        let id = self.controls.insert(Control::new(Box::new(widget), area));
        log::trace!("created control {id:?}");
        id
    }

    /// Creates a control and parents it under `parent` in one step.
    pub fn create_child<W: Widget>(
        &mut self,
        parent: ControlId,
        widget: W,
        area: Rect,
    ) -> Result<ControlId> {
        self.ensure(parent)?;
        let id = self.create(widget, area);
        self.set_parent_control(id, parent)?;
        Ok(id)
    }

    pub fn control(&self, id: ControlId) -> Result<&Control> {
        self.ensure(id)
    }
    pub fn control_mut(&mut self, id: ControlId) -> Result<&mut Control> {
        self.ensure_mut(id)
    }

    pub(crate) fn ensure(&self, id: ControlId) -> Result<&Control> {
        self.controls.get(id).ok_or(UiError::UnknownControl(id))
    }
    pub(crate) fn ensure_mut(&mut self, id: ControlId) -> Result<&mut Control> {
        self.controls.get_mut(id).ok_or(UiError::UnknownControl(id))
    }

    /// Widget state of `id`, if it is a `W` and no hook of it is running.
    pub fn widget<W: Widget>(&self, id: ControlId) -> Option<&W> {
        let behavior: &dyn std::any::Any = self.controls.get(id)?.behavior.as_deref()?;
        behavior.downcast_ref::<W>()
    }
    pub fn widget_mut<W: Widget>(&mut self, id: ControlId) -> Option<&mut W> {
        let behavior: &mut dyn std::any::Any = self.controls.get_mut(id)?.behavior.as_deref_mut()?;
        behavior.downcast_mut::<W>()
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.controls.contains_key(id)
    }
    pub fn is_disposed(&self, id: ControlId) -> bool {
        !self.contains(id)
    }
    pub fn len(&self) -> usize {
        self.controls.len()
    }
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// The top-level collection, in registration order.
    pub fn components(&self) -> &[ControlId] {
        &self.components
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }
    pub fn host_active(&self) -> bool {
        self.host_active
    }
    pub fn client_bounds(&self) -> Rect {
        self.client_bounds
    }
    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }
    /// Control the left button went down on, while it is held.
    pub fn press_target(&self) -> Option<ControlId> {
        self.pointer.press_target
    }
    pub fn is_hovered(&self, id: ControlId) -> bool {
        self.hovered.contains(&id)
    }

    /// Whether the modal gate lets `id` update and receive input.
    pub fn in_modal_scope(&self, id: ControlId) -> bool {
        match self.modal_top() {
            Some(top) => self.root_of(id).is_ok_and(|root| root == top),
            None => true,
        }
    }

    /// The dialog that gates input, if any.
    pub(crate) fn modal_top(&self) -> Option<ControlId> {
        if self.config.modal_gating {
            self.dialogs.top()
        } else {
            None
        }
    }

    /// Host active, visible, alive and inside the modal gate.
    pub fn is_update_eligible(&self, id: ControlId) -> bool {
        self.host_active
            && self.controls.get(id).is_some_and(|n| n.visible)
            && self.in_modal_scope(id)
    }

    /// Moves keyboard focus, notifying the old and new owners.
    pub fn set_focus(&mut self, id: Option<ControlId>) {
        let id = id.filter(|&id| self.contains(id));
        if self.focused == id {
            return;
        }
        if let Some(old) = self.focused.take() {
            if let Some(node) = self.controls.get_mut(old) {
                node.focused = false;
            }
            self.send_message(old, crate::Event::LostFocus);
        }
        if let Some(new) = id {
            self.controls[new].focused = true;
            self.send_message(new, crate::Event::GotFocus);
        }
        log::trace!("focus -> {id:?}");
        self.focused = id;
    }

    /// Disposes `id` and its whole subtree. Each disposed widget's
    /// `on_dispose` runs exactly once; ids become stale.
    pub fn dispose(&mut self, id: ControlId) -> Result<()> {
        self.set_control_unparented(id)?;
        self.components.retain(|&c| c != id);
        if self.dialogs.remove(id) {
            log::warn!("dialog {id:?} disposed without being closed");
        }
        self.dispose_subtree(id);
        Ok(())
    }

    fn dispose_subtree(&mut self, id: ControlId) {
        let Some(mut node) = self.controls.remove(id) else {
            return;
        };
        for child in std::mem::take(&mut node.children) {
            self.dispose_subtree(child);
        }
        self.hovered.remove(&id);
        if self.focused == Some(id) {
            self.focused = None;
        }
        for slot in [&mut self.pointer.press_target, &mut self.pointer.drag_source] {
            if *slot == Some(id) {
                *slot = None;
            }
        }
        if self.pointer.last_click.is_some_and(|(c, _)| c == id) {
            self.pointer.last_click = None;
        }
        // A widget whose hook is running is notified when the hook returns.
        if let Some(mut behavior) = node.behavior.take() {
            behavior.on_dispose();
        }
        log::debug!("disposed control {id:?}");
    }

    /// Host shutdown: clears the modal stack and disposes every top-level control.
    pub fn shutdown(&mut self) {
        self.dialogs.clear();
        for id in std::mem::take(&mut self.components) {
            self.dispose_subtree(id);
        }
        self.poller.reset();
        self.pointer = PointerState::default();
        log::debug!("ui shut down; {} detached controls remain", self.controls.len());
    }
}
