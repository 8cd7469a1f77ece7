use gantry_core::*;

use crate::{Callback, DEFAULT_TEXT_SIZE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonStyle {
    pub normal: Color,
    pub hovered: Color,
    pub pressed: Color,
    pub disabled: Color,
    pub text: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            normal: Color::from_hex("#3C3F41"),
            hovered: Color::from_hex("#4B6EAF"),
            pressed: Color::from_hex("#2F4F86"),
            disabled: Color::from_hex("#2A2A2A"),
            text: Color::WHITE,
        }
    }
}

/// Push button. Fires its callback on click.
pub struct Button {
    pub text: String,
    pub style: ButtonStyle,
    hovered: bool,
    held: bool,
    on_click: Option<Callback>,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: ButtonStyle::default(),
            hovered: false,
            held: false,
            on_click: None,
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn on_click(mut self, f: impl FnMut(&mut Ctx) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn fill(&self, ctx: &DrawCtx) -> Color {
        let enabled = ctx.control().is_some_and(|c| c.enabled());
        if !enabled {
            self.style.disabled
        } else if self.held || ctx.is_pressed() {
            self.style.pressed
        } else if self.hovered {
            self.style.hovered
        } else {
            self.style.normal
        }
    }
}

impl Updatable for Button {}

impl Drawable for Button {
    fn draw(&self, ctx: &DrawCtx, scene: &mut Scene) {
        let area = ctx.area();
        scene.push(SceneNode::Rect {
            rect: area,
            color: self.fill(ctx),
            radius: 4.0,
        });
        let width = crate::text_width(&self.text, DEFAULT_TEXT_SIZE);
        let x = area.x + ((area.w - width) / 2.0).max(0.0);
        let y = area.y + ((area.h - DEFAULT_TEXT_SIZE) / 2.0).max(0.0);
        scene.push(SceneNode::Text {
            rect: Rect::new(x, y, width.min(area.w), DEFAULT_TEXT_SIZE),
            text: self.text.clone(),
            color: self.style.text,
            size: DEFAULT_TEXT_SIZE,
        });
    }
}

impl EventReceiver for Button {
    fn event_mask(&self) -> EventMask {
        EventMask::HOVER | EventMask::DRAGGING | EventMask::CLICK
    }

    fn on_mouse_enter(&mut self, _ctx: &mut Ctx, _position: Vec2) {
        self.hovered = true;
    }

    fn on_mouse_leave(&mut self, _ctx: &mut Ctx, _position: Vec2) {
        self.hovered = false;
        self.held = false;
    }

    fn on_drag_start(&mut self, _ctx: &mut Ctx, _drag: &DragInfo) {
        self.held = true;
    }

    fn on_drag_end(&mut self, _ctx: &mut Ctx, _drag: &DragInfo) {
        self.held = false;
    }

    fn on_click(&mut self, ctx: &mut Ctx, _click: &ClickInfo) {
        log::debug!("button {:?} clicked", self.text);
        if let Some(f) = self.on_click.as_mut() {
            f(ctx);
        }
    }
}
