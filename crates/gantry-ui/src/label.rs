use gantry_core::*;

use crate::{Callback, DEFAULT_TEXT_SIZE};

/// Static text. Ignores input.
#[derive(Clone, Debug)]
pub struct Label {
    pub text: String,
    pub color: Color,
    pub size: f32,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::WHITE,
            size: DEFAULT_TEXT_SIZE,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Updatable for Label {}

impl Drawable for Label {
    fn draw(&self, ctx: &DrawCtx, scene: &mut Scene) {
        scene.push(SceneNode::Text {
            rect: ctx.area(),
            text: self.text.clone(),
            color: self.color,
            size: self.size,
        });
    }
}

impl EventReceiver for Label {
    fn event_mask(&self) -> EventMask {
        EventMask::NONE
    }
}

/// Clickable text that changes color while hovered.
pub struct HyperLink {
    pub label: Label,
    pub hover_color: Color,
    on_click: Option<Callback>,
    visits: u32,
}

impl HyperLink {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            label: Label::new(text).color(Color::CORNFLOWER_BLUE),
            hover_color: Color::WHITE,
            on_click: None,
            visits: 0,
        }
    }

    pub fn on_click(mut self, f: impl FnMut(&mut Ctx) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// How many times the link has been clicked.
    pub fn visits(&self) -> u32 {
        self.visits
    }
}

impl Updatable for HyperLink {}

impl Drawable for HyperLink {
    fn draw(&self, ctx: &DrawCtx, scene: &mut Scene) {
        let color = if ctx.mouse_over() {
            self.hover_color
        } else {
            self.label.color
        };
        scene.push(SceneNode::Text {
            rect: ctx.area(),
            text: self.label.text.clone(),
            color,
            size: self.label.size,
        });
    }
}

impl EventReceiver for HyperLink {
    fn event_mask(&self) -> EventMask {
        EventMask::HOVER | EventMask::CLICK
    }

    fn on_click(&mut self, ctx: &mut Ctx, _click: &ClickInfo) {
        self.visits += 1;
        if let Some(f) = self.on_click.as_mut() {
            f(ctx);
        }
    }
}
