use thiserror::Error;

use crate::ControlId;

pub type Result<T, E = UiError> = std::result::Result<T, E>;

/// Usage errors raised synchronously by the control and dialog APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// The id was never issued by this `Ui`, or its control has been disposed.
    #[error("control {0:?} does not exist or has been disposed")]
    UnknownControl(ControlId),

    #[error("control {0:?} cannot be its own parent")]
    SelfParent(ControlId),

    #[error("parenting {child:?} under {parent:?} would make it its own ancestor")]
    ParentCycle { child: ControlId, parent: ControlId },

    #[error("dialog {dialog:?} is not the top of the modal stack (top is {top:?})")]
    DialogNotOnTop {
        dialog: ControlId,
        top: Option<ControlId>,
    },
}

impl UiError {
    /// True for errors caused by a bad argument to a tree operation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            UiError::UnknownControl(_) | UiError::SelfParent(_) | UiError::ParentCycle { .. }
        )
    }
}
