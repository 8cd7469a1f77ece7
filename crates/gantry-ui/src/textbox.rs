use gantry_core::*;
use unicode_segmentation::UnicodeSegmentation;

use crate::{DEFAULT_TEXT_SIZE, text_width};

const PADDING_X: f32 = 6.0;

type SubmitFn = Box<dyn FnMut(&mut Ctx, &str)>;

/// Single-line text input. Takes keyboard focus when clicked; the caret is a
/// byte offset that always sits on a grapheme boundary.
pub struct TextBox {
    text: String,
    caret: usize,
    pub placeholder: String,
    pub max_len: Option<usize>,
    on_submit: Option<SubmitFn>,
}

fn prev_grapheme_boundary(text: &str, byte: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(i, _)| i)
        .take_while(|&i| i < byte)
        .last()
        .unwrap_or(0)
}

fn next_grapheme_boundary(text: &str, byte: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(i, _)| i)
        .find(|&i| i > byte)
        .unwrap_or(text.len())
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBox {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            caret: 0,
            placeholder: String::new(),
            max_len: None,
            on_submit: None,
        }
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Limit in graphemes.
    pub fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    /// Called with the current text when Enter is typed.
    pub fn on_submit(mut self, f: impl FnMut(&mut Ctx, &str) + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.text.len();
    }

    /// Inserts at the caret, dropping line breaks and whatever exceeds `max_len`.
    pub fn insert_text(&mut self, text: &str) {
        let mut room = match self.max_len {
            Some(max) => max.saturating_sub(self.text.graphemes(true).count()),
            None => usize::MAX,
        };
        let mut accepted = String::new();
        for g in text.graphemes(true) {
            if room == 0 {
                break;
            }
            if g.chars().any(char::is_control) {
                continue;
            }
            accepted.push_str(g);
            room -= 1;
        }
        self.text.insert_str(self.caret, &accepted);
        self.caret += accepted.len();
    }

    pub fn delete_backward(&mut self) {
        if self.caret > 0 {
            let prev = prev_grapheme_boundary(&self.text, self.caret);
            self.text.replace_range(prev..self.caret, "");
            self.caret = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.caret < self.text.len() {
            let next = next_grapheme_boundary(&self.text, self.caret);
            self.text.replace_range(self.caret..next, "");
        }
    }

    pub fn move_caret(&mut self, delta: isize) {
        for _ in 0..delta.unsigned_abs() {
            self.caret = if delta < 0 {
                prev_grapheme_boundary(&self.text, self.caret)
            } else {
                next_grapheme_boundary(&self.text, self.caret)
            };
        }
    }
}

impl Updatable for TextBox {}

impl Drawable for TextBox {
    fn draw(&self, ctx: &DrawCtx, scene: &mut Scene) {
        let area = ctx.area();
        let focused = ctx.has_focus();
        scene.push(SceneNode::Rect {
            rect: area,
            color: Color::from_hex("#1E1E1E"),
            radius: 2.0,
        });
        scene.push(SceneNode::Border {
            rect: area,
            color: if focused { Color::CORNFLOWER_BLUE } else { Color::GRAY },
            width: 1.0,
            radius: 2.0,
        });

        let inner = Rect::new(area.x + PADDING_X, area.y, (area.w - 2.0 * PADDING_X).max(0.0), area.h);
        scene.push(SceneNode::PushClip { rect: inner });
        let (text, color) = if self.text.is_empty() {
            (self.placeholder.clone(), Color::GRAY)
        } else {
            (self.text.clone(), Color::WHITE)
        };
        if !text.is_empty() {
            scene.push(SceneNode::Text {
                rect: inner,
                text,
                color,
                size: DEFAULT_TEXT_SIZE,
            });
        }
        if focused {
            let x = inner.x + text_width(&self.text[..self.caret], DEFAULT_TEXT_SIZE);
            scene.push(SceneNode::Rect {
                rect: Rect::new(x, area.y + 3.0, 1.0, (area.h - 6.0).max(0.0)),
                color: Color::WHITE,
                radius: 0.0,
            });
        }
        scene.push(SceneNode::PopClip);
    }
}

impl EventReceiver for TextBox {
    fn event_mask(&self) -> EventMask {
        EventMask::HOVER | EventMask::CLICKS | EventMask::KEY_TYPED | EventMask::FOCUS
    }

    fn focusable(&self) -> bool {
        true
    }

    fn on_click(&mut self, ctx: &mut Ctx, _click: &ClickInfo) {
        if !ctx.has_focus() {
            ctx.focus();
        }
    }

    fn on_key_typed(&mut self, ctx: &mut Ctx, key: &KeyEvent) {
        let command = key.modifiers.intersects(Modifiers::CTRL | Modifiers::META);
        match key.key {
            Key::Char('v') | Key::Char('V') if command => {
                let pasted = ctx.clipboard_text();
                self.insert_text(&pasted);
            }
            _ if command => {}
            Key::Backspace => self.delete_backward(),
            Key::Delete => self.delete_forward(),
            Key::ArrowLeft => self.move_caret(-1),
            Key::ArrowRight => self.move_caret(1),
            Key::Home => self.caret = 0,
            Key::End => self.caret = self.text.len(),
            Key::Enter => {
                if let Some(f) = self.on_submit.as_mut() {
                    f(ctx, &self.text);
                }
            }
            _ => {
                if let Some(ch) = key.ch {
                    self.insert_text(ch.encode_utf8(&mut [0; 4]));
                }
            }
        }
    }
}
