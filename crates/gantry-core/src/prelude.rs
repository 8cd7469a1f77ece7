pub use crate::color::Color;
pub use crate::config::UiConfig;
pub use crate::control::{Control, ControlId};
pub use crate::dialog::{DialogResult, DialogStack};
pub use crate::error::*;
pub use crate::event::{ClickInfo, DragInfo, Event, EventKind, EventMask};
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::host::{Clipboard, FrameTime, Host};
pub use crate::input::*;
pub use crate::scene::{Scene, SceneNode, Texture, TextureId};
pub use crate::ui::Ui;
pub use crate::widget::{
    Bare, ClosingArgs, Ctx, DrawCtx, Drawable, EventReceiver, Updatable, Widget,
};
