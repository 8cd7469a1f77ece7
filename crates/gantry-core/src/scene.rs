use std::cell::Cell;
use std::rc::Rc;

use crate::{Color, Rect, Size};

pub type TextureId = u64;

/// Handle to a host-owned texture. The host may dispose the backing storage
/// at any time; widgets check [`Texture::is_disposed`] before drawing.
#[derive(Clone, Debug)]
pub struct Texture {
    id: TextureId,
    size: Size,
    alive: Rc<Cell<bool>>,
}

impl Texture {
    pub fn new(id: TextureId, size: Size) -> Self {
        Self {
            id,
            size,
            alive: Rc::new(Cell::new(true)),
        }
    }
    pub fn id(&self) -> TextureId {
        self.id
    }
    pub fn size(&self) -> Size {
        self.size
    }
    pub fn dispose(&self) {
        self.alive.set(false);
    }
    pub fn is_disposed(&self) -> bool {
        !self.alive.get()
    }
}

/// Draw output for one frame, in paint order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// Text of every `Text` node, in paint order. Handy for tests and tooling.
    pub fn texts(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                SceneNode::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
    Image {
        rect: Rect,
        texture: TextureId,
        tint: Color,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}
