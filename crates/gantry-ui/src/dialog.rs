use gantry_core::*;

use crate::{Button, DEFAULT_TEXT_SIZE, Label, Panel};

const TITLE_HEIGHT: f32 = 24.0;

type ClosingFn = Box<dyn FnMut(&mut Ctx, &mut ClosingArgs)>;
type ClosedFn = Box<dyn FnMut(&mut Ctx, DialogResult)>;

/// A titled panel meant to be shown with [`Ui::open_dialog`]. Dragging the
/// title bar moves it.
pub struct Dialog {
    pub title: String,
    pub panel: Panel,
    on_closing: Option<ClosingFn>,
    on_closed: Option<ClosedFn>,
    grabbed: bool,
}

impl Dialog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            panel: Panel::default(),
            on_closing: None,
            on_closed: None,
            grabbed: false,
        }
    }

    /// Runs before the dialog closes; set `args.cancel` to keep it open.
    pub fn on_closing(mut self, f: impl FnMut(&mut Ctx, &mut ClosingArgs) + 'static) -> Self {
        self.on_closing = Some(Box::new(f));
        self
    }

    pub fn on_closed(mut self, f: impl FnMut(&mut Ctx, DialogResult) + 'static) -> Self {
        self.on_closed = Some(Box::new(f));
        self
    }

    fn title_bar(area: Rect) -> Rect {
        Rect::new(area.x, area.y, area.w, TITLE_HEIGHT.min(area.h))
    }
}

impl Updatable for Dialog {}

impl Drawable for Dialog {
    fn draw(&self, ctx: &DrawCtx, scene: &mut Scene) {
        self.panel.draw(ctx, scene);
        let bar = Self::title_bar(ctx.area());
        scene.push(SceneNode::Rect {
            rect: bar,
            color: Color::from_hex("#4B6EAF"),
            radius: self.panel.radius,
        });
        scene.push(SceneNode::Text {
            rect: bar.inset(4.0),
            text: self.title.clone(),
            color: Color::WHITE,
            size: DEFAULT_TEXT_SIZE,
        });
    }
}

impl EventReceiver for Dialog {
    fn event_mask(&self) -> EventMask {
        EventMask::HOVER | EventMask::DRAGGING
    }

    fn on_drag_start(&mut self, ctx: &mut Ctx, drag: &DragInfo) {
        self.grabbed = Self::title_bar(ctx.absolute_area()).contains(drag.start);
    }

    fn on_drag(&mut self, ctx: &mut Ctx, drag: &DragInfo) {
        if !self.grabbed {
            return;
        }
        if let Some(control) = ctx.control_mut() {
            let moved = control.area().offset(drag.delta);
            control.set_area(moved);
        }
    }

    fn on_drag_end(&mut self, _ctx: &mut Ctx, _drag: &DragInfo) {
        self.grabbed = false;
    }

    fn on_closing(&mut self, ctx: &mut Ctx, args: &mut ClosingArgs) {
        if let Some(f) = self.on_closing.as_mut() {
            f(ctx, args);
        }
    }

    fn on_closed(&mut self, ctx: &mut Ctx, result: DialogResult) {
        if let Some(f) = self.on_closed.as_mut() {
            f(ctx, result);
        }
    }
}

/// Opens a modal dialog showing `text` with an OK button that closes it,
/// centered in the host's client area.
pub fn message_box(ui: &mut Ui, title: &str, text: &str) -> Result<ControlId> {
    const WIDTH: f32 = 320.0;
    const HEIGHT: f32 = 140.0;
    let bounds = ui.client_bounds();
    let x = bounds.x + ((bounds.w - WIDTH) / 2.0).max(0.0);
    let y = bounds.y + ((bounds.h - HEIGHT) / 2.0).max(0.0);

    let dialog = ui.create(Dialog::new(title), Rect::new(x, y, WIDTH, HEIGHT));
    ui.control_mut(dialog)?.set_name(title);
    ui.create_child(
        dialog,
        Label::new(text),
        Rect::new(12.0, TITLE_HEIGHT + 12.0, WIDTH - 24.0, DEFAULT_TEXT_SIZE * 2.0),
    )?;
    let ok = ui.create_child(
        dialog,
        Button::new("OK").on_click(|ctx| {
            if let Err(err) = ctx.close_dialog(DialogResult::Ok) {
                log::warn!("message box OK could not close its dialog: {err}");
            }
        }),
        Rect::new(WIDTH - 92.0, HEIGHT - 40.0, 80.0, 28.0),
    )?;
    ui.control_mut(ok)?.set_focusable(true);
    ui.open_dialog(dialog)?;
    Ok(dialog)
}
