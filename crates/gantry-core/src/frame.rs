//! The per-frame `update` and `draw` passes driven by the host.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::{
    ClickInfo, ControlId, DragInfo, DrawCtx, Event, FrameTime, Host, InputEdges, Key, KeyEvent, MouseButtons,
    Scene, Ui, Vec2,
};

impl Ui {
    /// One tick: samples input, turns it into queued messages, then runs the
    /// update pass over the top-level collection in ascending update order.
    pub fn update(&mut self, host: &mut dyn Host, time: FrameTime) {
        self.time = time;
        self.host_active = host.is_active();
        self.client_bounds = host.client_bounds();

        let edges = self.poller.advance(host.poll_input());
        if self.host_active {
            self.track_hover(&edges);
            self.route_pointer(&edges);
            self.route_keys(&edges);
        } else if self.pointer.press_target.is_some() || self.pointer.drag_source.is_some() {
            log::debug!("host lost focus; abandoning pointer interaction");
            self.pointer.press_target = None;
            self.pointer.drag_source = None;
            self.pointer.drag_started = false;
        }

        for id in self.sorted_by_update_order(&self.components.clone()) {
            if self.components.contains(&id) {
                self.update_control(id);
            }
        }

        let bounds = self.client_bounds;
        let clamped: Vec<ControlId> = self
            .components
            .iter()
            .copied()
            .filter(|&id| self.controls.get(id).is_some_and(|n| n.keep_in_bounds))
            .collect();
        for id in clamped {
            self.clamp_into(id, bounds);
        }
    }

    /// Children first, then unconditional bookkeeping, then the queue, then
    /// the gated update hook.
    fn update_control(&mut self, id: ControlId) {
        let Some(node) = self.controls.get_mut(id) else {
            return;
        };
        node.mouse_over_previously = node.mouse_over;
        let children = node.children.to_vec();

        for child in self.sorted_by_update_order(&children) {
            if self.controls.get(child).is_some_and(|c| c.parent == Some(id)) {
                self.update_control(child);
            }
        }

        self.with_behavior(id, |w, ctx| w.always_update(ctx));
        self.drain_queue(id);
        if self.is_update_eligible(id) {
            self.with_behavior(id, |w, ctx| w.update(ctx));
        }
    }

    fn sorted_by_update_order(&self, ids: &[ControlId]) -> Vec<ControlId> {
        let mut ids: Vec<ControlId> = ids.iter().copied().filter(|&id| self.contains(id)).collect();
        ids.sort_by_key(|&id| self.controls[id].update_order);
        ids
    }

    fn sorted_by_draw_order(&self, ids: &[ControlId]) -> Vec<ControlId> {
        let mut ids: Vec<ControlId> = ids.iter().copied().filter(|&id| self.contains(id)).collect();
        ids.sort_by_key(|&id| self.controls[id].draw_order);
        ids
    }

    /// Paints every visible top-level control and its visible descendants in
    /// ascending draw order. A panicking widget paints nothing for this frame.
    pub fn draw(&mut self, time: FrameTime) -> Scene {
        self.time = time;
        self.render()
    }

    /// Draw pass without advancing the frame time.
    pub fn render(&self) -> Scene {
        let mut scene = Scene::default();
        for id in self.sorted_by_draw_order(&self.components) {
            self.draw_control(id, Vec2::ZERO, &mut scene);
        }
        scene
    }

    fn draw_control(&self, id: ControlId, parent_origin: Vec2, scene: &mut Scene) {
        let Some(node) = self.controls.get(id) else {
            return;
        };
        if !node.visible {
            return;
        }
        let ctx = DrawCtx {
            ui: self,
            id,
            area: node.area.offset(parent_origin),
        };
        if let Some(widget) = node.behavior.as_deref() {
            let mark = scene.nodes.len();
            if catch_unwind(AssertUnwindSafe(|| widget.draw(&ctx, scene))).is_err() {
                log::error!("draw of control {id:?} panicked; skipping it this frame");
                scene.nodes.truncate(mark);
            }
        }
        for child in self.sorted_by_draw_order(&node.children) {
            self.draw_control(child, ctx.area.origin(), scene);
        }
        if let Some(widget) = node.behavior.as_deref() {
            let mark = scene.nodes.len();
            if catch_unwind(AssertUnwindSafe(|| widget.draw_overlay(&ctx, scene))).is_err() {
                log::error!("overlay draw of control {id:?} panicked");
                scene.nodes.truncate(mark);
            }
        }
    }

    /// Enter / over / leave for every hover candidate when the pointer moved.
    fn track_hover(&mut self, edges: &InputEdges) {
        if !edges.moved {
            return;
        }
        let position = edges.position;
        let candidates = self.hover_candidates();

        for &id in &candidates {
            let contained = self.controls[id].enabled
                && self.in_modal_scope(id)
                && self
                    .draw_area_with_offset(id)
                    .is_ok_and(|a| a.contains(position));
            let was = self.hovered.contains(&id);
            match (was, contained) {
                (false, true) => {
                    self.hovered.insert(id);
                    self.send_message(id, Event::MouseEnter { position });
                }
                (true, true) => self.send_message(id, Event::MouseOver { position }),
                (true, false) => {
                    self.hovered.remove(&id);
                    self.send_message(id, Event::MouseLeave { position });
                }
                (false, false) => {}
            }
        }

        // Hidden or detached since last tick.
        let stale: Vec<ControlId> = self
            .hovered
            .iter()
            .copied()
            .filter(|id| !candidates.contains(id))
            .collect();
        for id in stale {
            self.hovered.remove(&id);
            self.send_message(id, Event::MouseLeave { position });
        }
    }


    /// Press, drag, release/click, double click and wheel for the left button.
    /// Every pointer message goes to the control [`Ui::target_at`] picks; a
    /// target whose mask lacks the kind drops it.
    fn route_pointer(&mut self, edges: &InputEdges) {
        let pos = edges.position;

        if edges.pressed.contains(MouseButtons::LEFT) {
            self.pointer.press_pos = pos;
            self.pointer.last_drag_pos = pos;
            self.pointer.drag_started = false;
            let target = self.target_at(pos);
            self.pointer.drag_source = target;
            self.pointer.press_target = target;
            let focus = target.filter(|&t| self.controls[t].focusable);
            self.set_focus(focus);
        }

        if edges.held.contains(MouseButtons::LEFT)
            && !edges.pressed.contains(MouseButtons::LEFT)
            && edges.moved
            && let Some(source) = self.pointer.drag_source
        {
            let start = self.pointer.press_pos;
            if !self.pointer.drag_started {
                if start.distance(pos) >= self.config.drag_threshold {
                    self.pointer.drag_started = true;
                    self.send_message(
                        source,
                        Event::DragStart(DragInfo {
                            start,
                            current: pos,
                            delta: pos - start,
                        }),
                    );
                    self.pointer.last_drag_pos = pos;
                }
            } else {
                let delta = pos - self.pointer.last_drag_pos;
                self.pointer.last_drag_pos = pos;
                self.send_message(
                    source,
                    Event::Drag(DragInfo {
                        start,
                        current: pos,
                        delta,
                    }),
                );
            }
        }

        if edges.released.contains(MouseButtons::LEFT) {
            if let Some(source) = self.pointer.drag_source.take()
                && self.pointer.drag_started
            {
                let start = self.pointer.press_pos;
                self.send_message(
                    source,
                    Event::DragEnd(DragInfo {
                        start,
                        current: pos,
                        delta: pos - self.pointer.last_drag_pos,
                    }),
                );
            }
            self.pointer.drag_started = false;
            self.pointer.press_target = None;

            if let Some(target) = self.target_at(pos) {
                let click = ClickInfo {
                    position: pos,
                    button: MouseButtons::LEFT,
                    modifiers: edges.modifiers,
                };
                self.send_message(target, Event::Click(click));

                let now = self.time.total;
                let double = self.pointer.last_click.is_some_and(|(last, at)| {
                    last == target && now.saturating_sub(at) <= self.config.double_click_time
                });
                if double {
                    self.send_message(target, Event::DoubleClick(click));
                    self.pointer.last_click = None;
                } else {
                    self.pointer.last_click = Some((target, now));
                }
            }
        }

        if edges.wheel_delta != 0
            && let Some(target) = self.target_at(pos)
        {
            self.send_message(
                target,
                Event::WheelMoved {
                    position: pos,
                    delta: edges.wheel_delta,
                },
            );
        }
    }

    /// Newly pressed keys go to the focused control; Tab moves focus instead.
    fn route_keys(&mut self, edges: &InputEdges) {
        for &key in &edges.keys_pressed {
            if key == Key::Tab {
                self.focus_next();
                continue;
            }
            match self.focused {
                Some(id) if self.in_modal_scope(id) => {
                    self.send_message(id, Event::KeyTyped(KeyEvent::new(key, edges.modifiers)));
                }
                _ => log::trace!("no focused control for {key:?}"),
            }
        }
    }

    /// Focusable, enabled, effectively visible controls inside the modal
    /// gate, in ascending update order.
    pub fn focus_chain(&self) -> Vec<ControlId> {
        let mut chain = Vec::new();
        for root in self.input_roots() {
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                let Some(node) = self.controls.get(id) else {
                    continue;
                };
                if !node.visible {
                    continue;
                }
                if node.focusable && node.enabled {
                    chain.push(id);
                }
                stack.extend(node.children.iter().rev().copied());
            }
        }
        chain.sort_by_key(|&id| self.controls[id].update_order);
        chain
    }

    /// Moves focus to the next control of [`Ui::focus_chain`], wrapping around.
    pub fn focus_next(&mut self) {
        let chain = self.focus_chain();
        if chain.is_empty() {
            return;
        }
        let next = match self.focused.and_then(|f| chain.iter().position(|&c| c == f)) {
            Some(i) => chain[(i + 1) % chain.len()],
            None => chain[0],
        };
        self.set_focus(Some(next));
    }
}
