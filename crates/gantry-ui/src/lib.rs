//! Stock widgets built on `gantry-core`.
//!
//! Every widget here is an ordinary [`gantry_core::Widget`]; create one with
//! [`gantry_core::Ui::create`] or [`gantry_core::Ui::create_child`] and talk to
//! it afterwards through [`gantry_core::Ui::widget_mut`].

pub mod button;
pub mod dialog;
pub mod label;
pub mod panel;
pub mod picture;
pub mod textbox;

pub use button::{Button, ButtonStyle};
pub use dialog::{Dialog, message_box};
pub use label::{HyperLink, Label};
pub use panel::Panel;
pub use picture::Picture;
pub use textbox::TextBox;

use gantry_core::Ctx;
use unicode_segmentation::UnicodeSegmentation;

/// Callback fired from an event hook with the widget's context.
pub type Callback = Box<dyn FnMut(&mut Ctx)>;

pub const DEFAULT_TEXT_SIZE: f32 = 16.0;

/// Rough advance of `text` at `size` px. There is no font engine behind the
/// scene; hosts that shape text themselves only use this for caret placement.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.graphemes(true).count() as f32 * size * 0.55
}
