//! Input target resolution: which control(s) sit under a point.

use crate::{ControlId, EventMask, Ui, Vec2};

/// A control under the query point, in enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: ControlId,
    pub draw_order: i32,
    /// Every control has an update order, so candidates from
    /// [`Ui::point_candidates`] always carry `Some`. `None` is for items a
    /// host mixes in itself that have no update order of their own.
    pub update_order: Option<i32>,
}

/// Picks exactly one target from `candidates`.
///
/// Highest draw order wins. Among ties, if every tied candidate has an update
/// order the lowest one wins. Any remaining tie goes to the candidate
/// enumerated last.
pub fn pick_target(candidates: &[Candidate]) -> Option<ControlId> {
    let top_z = candidates.iter().map(|c| c.draw_order).max()?;
    let tied: Vec<&Candidate> = candidates.iter().filter(|c| c.draw_order == top_z).collect();

    if tied.len() > 1 && tied.iter().all(|c| c.update_order.is_some()) {
        let lowest = tied.iter().filter_map(|c| c.update_order).min();
        return tied
            .iter()
            .rev()
            .find(|c| c.update_order == lowest)
            .map(|c| c.id);
    }
    tied.last().map(|c| c.id)
}

impl Ui {
    /// Every visible control with every visible descendant, roots in
    /// collection order, depth first.
    pub fn hover_candidates(&self) -> Vec<ControlId> {
        let mut out = Vec::new();
        for &root in &self.components {
            self.collect_visible(root, &mut out);
        }
        out
    }

    fn collect_visible(&self, id: ControlId, out: &mut Vec<ControlId>) {
        let Some(node) = self.controls.get(id) else {
            return;
        };
        if !node.visible {
            return;
        }
        out.push(id);
        for &child in &node.children {
            self.collect_visible(child, out);
        }
    }

    /// All enabled controls under `point` whose mask intersects `mask`
    /// (an empty mask accepts everything), searching `roots` and, through
    /// every root or parent containing the point, their descendants.
    /// Invisible controls hide their whole subtree.
    pub fn point_candidates(&self, roots: &[ControlId], point: Vec2, mask: EventMask) -> Vec<Candidate> {
        let mut out = Vec::new();
        for &root in roots {
            let origin = match self.controls.get(root).and_then(|n| n.parent) {
                Some(parent) => self.absolute_origin(parent),
                None => Vec2::ZERO,
            };
            self.collect_under(root, origin, point, mask, &mut out);
        }
        out
    }

    fn collect_under(
        &self,
        id: ControlId,
        parent_origin: Vec2,
        point: Vec2,
        mask: EventMask,
        out: &mut Vec<Candidate>,
    ) {
        let Some(node) = self.controls.get(id) else {
            return;
        };
        if !node.visible {
            return;
        }
        let area = node.area.offset(parent_origin);
        if !area.contains(point) {
            return;
        }
        if node.enabled && (mask.is_empty() || node.event_mask.intersects(mask)) {
            out.push(Candidate {
                id,
                draw_order: node.draw_order,
                update_order: Some(node.update_order),
            });
        }
        for &child in &node.children {
            self.collect_under(child, area.origin(), point, mask, out);
        }
    }

    /// Resolves one target under `point` among `roots` and their descendants.
    pub fn resolve_point(&self, roots: &[ControlId], point: Vec2, mask: EventMask) -> Option<ControlId> {
        pick_target(&self.point_candidates(roots, point, mask))
    }

    /// The control a click at `point` would reach, honouring the modal gate.
    pub fn target_at(&self, point: Vec2) -> Option<ControlId> {
        let roots = self.input_roots();
        self.resolve_point(&roots, point, EventMask::NONE)
    }

    /// Roots eligible for input: the top dialog while modal gating applies,
    /// otherwise the whole top-level collection.
    pub fn input_roots(&self) -> Vec<ControlId> {
        match self.modal_top() {
            Some(top) => vec![top],
            None => self.components.clone(),
        }
    }
}
