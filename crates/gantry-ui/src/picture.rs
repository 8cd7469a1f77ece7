use gantry_core::*;

/// Draws a host texture stretched over its area.
///
/// With no texture, or one the host already disposed, it draws nothing.
#[derive(Clone, Debug, Default)]
pub struct Picture {
    pub texture: Option<Texture>,
    pub tint: Color,
}

impl Picture {
    pub fn new(texture: Texture) -> Self {
        Self {
            texture: Some(texture),
            tint: Color::WHITE,
        }
    }

    pub fn empty() -> Self {
        Self {
            texture: None,
            tint: Color::WHITE,
        }
    }

    pub fn set_texture(&mut self, texture: Option<Texture>) {
        self.texture = texture;
    }
}

impl Updatable for Picture {}

impl Drawable for Picture {
    fn draw(&self, ctx: &DrawCtx, scene: &mut Scene) {
        let Some(texture) = self.texture.as_ref() else {
            return;
        };
        if texture.is_disposed() {
            log::trace!("picture {:?} skipped; texture {} is gone", ctx.id(), texture.id());
            return;
        }
        scene.push(SceneNode::Image {
            rect: ctx.area(),
            texture: texture.id(),
            tint: self.tint,
        });
    }
}

impl EventReceiver for Picture {
    fn event_mask(&self) -> EventMask {
        EventMask::NONE
    }
}
