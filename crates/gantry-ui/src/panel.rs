use gantry_core::*;

/// Filled, optionally bordered rectangle. Children draw on top of it.
#[derive(Clone, Debug)]
pub struct Panel {
    pub background: Color,
    pub border: Option<(Color, f32)>,
    pub radius: f32,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#2B2B2B"),
            border: Some((Color::GRAY, 1.0)),
            radius: 0.0,
        }
    }
}

impl Panel {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            ..Default::default()
        }
    }

    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border = Some((color, width));
        self
    }

    pub fn borderless(mut self) -> Self {
        self.border = None;
        self
    }
}

impl Updatable for Panel {}

impl Drawable for Panel {
    fn draw(&self, ctx: &DrawCtx, scene: &mut Scene) {
        scene.push(SceneNode::Rect {
            rect: ctx.area(),
            color: self.background,
            radius: self.radius,
        });
        if let Some((color, width)) = self.border {
            scene.push(SceneNode::Border {
                rect: ctx.area(),
                color,
                width,
                radius: self.radius,
            });
        }
    }
}

impl EventReceiver for Panel {
    fn event_mask(&self) -> EventMask {
        EventMask::HOVER
    }
}
