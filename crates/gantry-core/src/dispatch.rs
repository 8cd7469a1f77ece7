//! Per-control event queues and the routine that drains them.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::{ControlId, Ctx, Event, EventMask, Ui, Widget};

impl Ui {
    /// Queues `event` for `id`. Nothing runs until the control's next update
    /// pass. Messages for disposed controls are dropped.
    pub fn send_message(&mut self, id: ControlId, event: Event) {
        match self.controls.get_mut(id) {
            Some(node) => {
                log::trace!("queue {:?} -> {id:?}", event.kind());
                node.queue.push_back(event);
            }
            None => log::warn!("dropping {:?} for disposed control {id:?}", event.kind()),
        }
    }

    /// Runs `f` against the widget of `id` with a context over the whole `Ui`.
    ///
    /// A panicking hook is logged and swallowed; the widget is put back (or,
    /// if the hook disposed its own control, notified of the disposal).
    pub(crate) fn with_behavior<R>(
        &mut self,
        id: ControlId,
        f: impl FnOnce(&mut dyn Widget, &mut Ctx) -> R,
    ) -> Option<R> {
        let mut behavior = self.controls.get_mut(id)?.behavior.take()?;
        let result = {
            let mut ctx = Ctx { ui: self, id };
            catch_unwind(AssertUnwindSafe(|| f(behavior.as_mut(), &mut ctx)))
        };
        match self.controls.get_mut(id) {
            Some(node) => node.behavior = Some(behavior),
            None => behavior.on_dispose(),
        }
        match result {
            Ok(r) => Some(r),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or("unknown panic");
                log::error!("hook of control {id:?} panicked: {message}");
                None
            }
        }
    }

    /// Drains the queue of `id` in arrival order.
    pub(crate) fn drain_queue(&mut self, id: ControlId) {
        while let Some(event) = self.controls.get_mut(id).and_then(|n| n.queue.pop_front()) {
            self.dispatch(id, event);
        }
    }

    /// Handles one dequeued message. Returns whether anything handled it.
    ///
    /// A message with a routing point first resolves the descendant under
    /// that point. If that descendant handles the kind the message moves to
    /// its queue; otherwise this control handles it (or drops it) itself.
    pub(crate) fn dispatch(&mut self, id: ControlId, event: Event) -> bool {
        let kind = event.kind();
        let Some(node) = self.controls.get(id) else {
            return false;
        };

        if let Some(point) = event.routing_point()
            && !node.children.is_empty()
        {
            let children = node.children.to_vec();
            if let Some(child) = self.resolve_point(&children, point, EventMask::NONE)
                && self.controls[child].handles(kind)
            {
                log::trace!("forward {kind:?} {id:?} -> {child:?}");
                self.send_message(child, event);
                return true;
            }
        }

        if !self.controls[id].handles(kind) {
            log::trace!("{id:?} ignores {kind:?}");
            return false;
        }

        match event {
            Event::MouseEnter { position } => {
                self.controls[id].mouse_over = true;
                self.with_behavior(id, |w, ctx| w.on_mouse_enter(ctx, position));
            }
            Event::MouseOver { position } => {
                self.controls[id].mouse_over = true;
                self.with_behavior(id, |w, ctx| w.on_mouse_over(ctx, position));
            }
            Event::MouseLeave { position } => {
                self.controls[id].mouse_over = false;
                self.with_behavior(id, |w, ctx| w.on_mouse_leave(ctx, position));
            }
            Event::DragStart(drag) => {
                self.with_behavior(id, |w, ctx| w.on_drag_start(ctx, &drag));
            }
            Event::Drag(drag) => {
                self.with_behavior(id, |w, ctx| w.on_drag(ctx, &drag));
            }
            Event::DragEnd(drag) => {
                self.with_behavior(id, |w, ctx| w.on_drag_end(ctx, &drag));
            }
            Event::Click(click) => {
                self.with_behavior(id, |w, ctx| w.on_click(ctx, &click));
            }
            Event::DoubleClick(click) => {
                self.with_behavior(id, |w, ctx| w.on_double_click(ctx, &click));
            }
            Event::KeyTyped(key) => {
                self.with_behavior(id, |w, ctx| w.on_key_typed(ctx, &key));
            }
            Event::GotFocus => {
                self.with_behavior(id, |w, ctx| w.on_got_focus(ctx));
            }
            Event::LostFocus => {
                self.with_behavior(id, |w, ctx| w.on_lost_focus(ctx));
            }
            Event::WheelMoved { position, delta } => {
                self.with_behavior(id, |w, ctx| w.on_wheel_moved(ctx, position, delta));
            }
        }
        true
    }
}
