//! Parent/child relationships and the geometry and draw order derived from them.

use crate::{ControlId, Rect, Result, Ui, UiError, Vec2};

impl Ui {
    /// Parents `child` under `parent`, detaching it from any previous parent
    /// and from the top-level collection. The child's subtree takes draw
    /// orders `parent + 1`, `parent + 2`, ...
    pub fn set_parent_control(&mut self, child: ControlId, parent: ControlId) -> Result<()> {
        self.ensure(child)?;
        self.ensure(parent)?;
        if child == parent {
            return Err(UiError::SelfParent(child));
        }
        if self.ancestors(parent).any(|a| a == child) {
            return Err(UiError::ParentCycle { child, parent });
        }

        if self.controls[child].parent != Some(parent) {
            self.set_control_unparented(child)?;
            self.controls[parent].children.push(child);
            self.controls[child].parent = Some(parent);
        }
        self.components.retain(|&c| c != child);

        let order = self.controls[parent].draw_order + 1;
        self.apply_draw_order(child, order);
        log::debug!("control {child:?} parented under {parent:?}");
        Ok(())
    }

    /// Detaches `id` from its parent. Does not re-register it as top-level.
    pub fn set_control_unparented(&mut self, id: ControlId) -> Result<()> {
        let Some(parent) = self.ensure(id)?.parent else {
            return Ok(());
        };
        if let Some(p) = self.controls.get_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        self.controls[id].parent = None;
        log::debug!("control {id:?} unparented from {parent:?}");
        Ok(())
    }

    /// Unparents `id` and registers it in the top-level collection.
    /// Already-registered controls are left where they are.
    pub fn add_control_to_default_game(&mut self, id: ControlId) -> Result<()> {
        self.set_control_unparented(id)?;
        if !self.components.contains(&id) {
            self.components.push(id);
            log::debug!("control {id:?} added to top-level collection");
        }
        Ok(())
    }

    /// Removes `id` from the top-level collection without disposing it.
    pub fn remove_from_default_game(&mut self, id: ControlId) -> Result<()> {
        self.ensure(id)?;
        self.components.retain(|&c| c != id);
        Ok(())
    }

    /// Sets the draw order of `id`; every descendant follows at its depth.
    pub fn set_draw_order(&mut self, id: ControlId, order: i32) -> Result<()> {
        self.ensure(id)?;
        self.apply_draw_order(id, order);
        Ok(())
    }

    pub(crate) fn apply_draw_order(&mut self, id: ControlId, order: i32) {
        let mut stack = vec![(id, order)];
        while let Some((id, order)) = stack.pop() {
            let Some(node) = self.controls.get_mut(id) else {
                continue;
            };
            node.draw_order = order;
            stack.extend(node.children.iter().map(|&c| (c, order + 1)));
        }
    }

    pub fn set_update_order(&mut self, id: ControlId, order: i32) -> Result<()> {
        self.ensure_mut(id)?.update_order = order;
        Ok(())
    }

    pub fn parent(&self, id: ControlId) -> Result<Option<ControlId>> {
        Ok(self.ensure(id)?.parent)
    }

    pub fn children(&self, id: ControlId) -> Result<&[ControlId]> {
        Ok(&self.ensure(id)?.children)
    }

    /// Parent, grandparent, ... of `id`, nearest first.
    pub fn ancestors(&self, id: ControlId) -> impl Iterator<Item = ControlId> + '_ {
        std::iter::successors(self.controls.get(id).and_then(|n| n.parent), move |&p| {
            self.controls.get(p).and_then(|n| n.parent)
        })
    }

    /// Top-most ancestor of `id`, or `id` itself when unparented.
    pub fn root_of(&self, id: ControlId) -> Result<ControlId> {
        self.ensure(id)?;
        Ok(self.ancestors(id).last().unwrap_or(id))
    }

    /// Draw area in screen coordinates: every ancestor's offset applied.
    pub fn draw_area_with_offset(&self, id: ControlId) -> Result<Rect> {
        let node = self.ensure(id)?;
        let origin = match node.parent {
            Some(parent) => self.absolute_origin(parent),
            None => Vec2::ZERO,
        };
        Ok(node.area.offset(origin))
    }

    pub(crate) fn absolute_origin(&self, id: ControlId) -> Vec2 {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .filter_map(|a| self.controls.get(a))
            .fold(Vec2::ZERO, |acc, n| acc + n.area.origin())
    }

    /// Visible along with every ancestor.
    pub fn is_effectively_visible(&self, id: ControlId) -> bool {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .all(|a| self.controls.get(a).is_some_and(|n| n.visible))
    }

    /// Moves `id` so its absolute area lies within `bounds`.
    pub(crate) fn clamp_into(&mut self, id: ControlId, bounds: Rect) {
        let Ok(abs) = self.draw_area_with_offset(id) else {
            return;
        };
        let clamped = abs.clamp_within(bounds);
        if clamped != abs
            && let Some(node) = self.controls.get_mut(id)
        {
            node.area = node.area.offset(clamped.origin() - abs.origin());
        }
    }
}
