//! # Controls, events and the frame loop
//!
//! Gantry is a retained control tree driven by a game host that calls
//! `update` then `draw` once per frame. There are four main pieces:
//!
//! - [`Ui`]: the host context. Owns every [`Control`] in an arena, the
//!   top-level collection, the modal [`DialogStack`] and per-tick input state.
//! - [`Control`]: a node with a local draw area, parent link, ordered
//!   children, visibility, update/draw order and an [`EventMask`].
//! - [`Event`]: a queued input occurrence. Each control drains its own FIFO
//!   queue during its update pass.
//! - [`Widget`]: the behavior behind a control, composed from
//!   [`Updatable`], [`Drawable`] and [`EventReceiver`].
//!
//! ## Building a tree
//!
//! ```rust
//! use gantry_core::*;
//!
//! let mut ui = Ui::new();
//! let panel = ui.create(Bare, Rect::new(10.0, 10.0, 200.0, 100.0));
//! ui.add_control_to_default_game(panel)?;
//! ui.set_draw_order(panel, 10)?;
//!
//! let child = ui.create_child(panel, Bare, Rect::new(5.0, 5.0, 50.0, 20.0))?;
//! assert_eq!(ui.control(child)?.draw_order(), 11);
//! assert_eq!(ui.draw_area_with_offset(child)?, Rect::new(15.0, 15.0, 50.0, 20.0));
//! # Ok::<(), UiError>(())
//! ```
//!
//! ## The frame
//!
//! Each [`Ui::update`] polls the [`Host`], diffs the sample against the
//! previous tick to derive hover, press, drag, click, wheel and key messages,
//! routes them to targets picked by [`pick_target`], and then updates the
//! tree: children before parents, each control draining its queue before
//! its gated `update` hook runs. [`Ui::draw`] walks the tree in draw order
//! and collects a [`Scene`].
//!
//! While a dialog is open (see [`Ui::open_dialog`]) only that dialog's
//! subtree updates and receives input, unless [`UiConfig::modal_gating`]
//! is turned off.

pub mod color;
pub mod config;
pub mod control;
pub mod dialog;
pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod input;
pub mod prelude;
pub mod scene;
pub mod target;
pub mod ui;
pub mod widget;

mod dispatch;
mod frame;
mod tests;
mod tree;

pub use color::*;
pub use config::*;
pub use control::*;
pub use dialog::*;
pub use error::*;
pub use event::*;
pub use geometry::*;
pub use host::*;
pub use input::*;
pub use scene::*;
pub use target::*;
pub use ui::*;
pub use widget::*;
