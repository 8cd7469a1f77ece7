//! The modal dialog stack.

use crate::{ClosingArgs, ControlId, Result, Ui, UiError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DialogResult {
    #[default]
    None,
    Ok,
    Cancel,
    Yes,
    No,
    Custom(i32),
}

/// Open dialogs, oldest first. Only the last entry may be closed.
#[derive(Clone, Debug, Default)]
pub struct DialogStack {
    entries: Vec<ControlId>,
}

impl DialogStack {
    pub fn push(&mut self, id: ControlId) {
        self.entries.push(id);
    }

    pub fn top(&self) -> Option<ControlId> {
        self.entries.last().copied()
    }

    /// Pops `id` iff it is the top entry.
    pub fn pop_if_top(&mut self, id: ControlId) -> bool {
        if self.top() == Some(id) {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Removes `id` wherever it is. Only used when a dialog is disposed
    /// without being closed.
    pub(crate) fn remove(&mut self, id: ControlId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|&e| e != id);
        before != self.entries.len()
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.entries.contains(&id)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn as_slice(&self) -> &[ControlId] {
        &self.entries
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Ui {
    pub fn dialogs(&self) -> &DialogStack {
        &self.dialogs
    }

    /// Shows `id` as a modal dialog: registers it top-level, lifts it into the
    /// next draw-order band above every open dialog, and pushes it.
    pub fn open_dialog(&mut self, id: ControlId) -> Result<()> {
        self.ensure(id)?;
        if self.dialogs.contains(id) {
            log::warn!("dialog {id:?} is already open");
            return Ok(());
        }
        self.add_control_to_default_game(id)?;
        let order = self.config.dialog_draw_order(self.dialogs.len());
        self.apply_draw_order(id, order);
        self.controls[id].visible = true;
        self.dialogs.push(id);
        if self.config.modal_gating
            && let Some(focused) = self.focused
            && !self.in_modal_scope(focused)
        {
            self.set_focus(None);
        }
        log::debug!("opened dialog {id:?} at draw order {order}; {} open", self.dialogs.len());
        Ok(())
    }

    /// Closes the top dialog `id`.
    ///
    /// Fails when `id` is not the top of the stack. Returns `Ok(false)` when
    /// the dialog's closing hook cancelled, `Ok(true)` once it has been popped,
    /// notified and disposed.
    pub fn close_dialog(&mut self, id: ControlId, result: DialogResult) -> Result<bool> {
        let top = self.dialogs.top();
        if top != Some(id) {
            log::warn!("refusing to close dialog {id:?}; top is {top:?}");
            return Err(UiError::DialogNotOnTop { dialog: id, top });
        }

        let mut args = ClosingArgs::new(result);
        let cancelled = self
            .with_behavior(id, |w, ctx| {
                w.on_closing(ctx, &mut args);
                args.cancel
            })
            .unwrap_or(false);
        if cancelled {
            log::debug!("closing of dialog {id:?} cancelled");
            return Ok(false);
        }
        // The closing hook may have closed it already.
        if !self.dialogs.pop_if_top(id) {
            return Ok(!self.dialogs.contains(id));
        }

        self.with_behavior(id, |w, ctx| w.on_closed(ctx, result));
        if self.contains(id) {
            self.dispose(id)?;
        }
        log::debug!("closed dialog {id:?} with {result:?}; {} open", self.dialogs.len());
        Ok(true)
    }
}
