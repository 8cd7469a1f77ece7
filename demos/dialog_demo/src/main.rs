//! Headless session: a form with a text box and a button that pops a message
//! box, driven by a scripted mouse and keyboard.

use std::cell::RefCell;
use std::rc::Rc;

use gantry_core::*;
use gantry_platform::{FrameClock, ScriptHandle, ScriptedHost, SystemClipboard, init_logging, run_frames};
use gantry_ui::{Button, Label, Panel, TextBox, message_box};
use web_time::Duration;

/// One scripted step per frame.
enum Step {
    Move(f32, f32),
    Down,
    Up,
    Type(Key),
    Idle,
}

fn apply(handle: &ScriptHandle, step: &Step) {
    match *step {
        Step::Move(x, y) => handle.move_mouse(x, y),
        Step::Down => handle.press(MouseButtons::LEFT),
        Step::Up => handle.release(MouseButtons::LEFT),
        Step::Type(key) => handle.key_down(key),
        Step::Idle => {}
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
    let (mut host, handle) = ScriptedHost::new(bounds);
    let mut ui = Ui::new();
    ui.set_clipboard(SystemClipboard::new());

    let form = ui.create(Panel::default(), Rect::new(40.0, 40.0, 360.0, 200.0));
    ui.add_control_to_default_game(form)?;
    ui.control_mut(form)?.set_name("form");
    ui.create_child(form, Label::new("Your name:"), Rect::new(16.0, 16.0, 200.0, 20.0))?;

    let greeting = Rc::new(RefCell::new(String::new()));
    let submitted = greeting.clone();
    let name = ui.create_child(
        form,
        TextBox::new()
            .placeholder("type here")
            .on_submit(move |_, text| *submitted.borrow_mut() = text.to_string()),
        Rect::new(16.0, 44.0, 220.0, 24.0),
    )?;
    ui.set_update_order(name, 0)?;

    let shown = greeting.clone();
    let greet = ui.create_child(
        form,
        Button::new("Greet").on_click(move |ctx| {
            let text = format!("Hello, {}!", shown.borrow());
            if let Err(err) = message_box(ctx.ui_mut(), "Greeting", &text) {
                log::error!("could not open greeting: {err}");
            }
        }),
        Rect::new(16.0, 84.0, 100.0, 30.0),
    )?;
    ui.set_update_order(greet, 1)?;

    let script = [
        Step::Move(100.0, 95.0),
        Step::Down,
        Step::Up,
        Step::Type(Key::Char('a')),
        Step::Type(Key::Char('d')),
        Step::Type(Key::Char('a')),
        Step::Type(Key::Enter),
        Step::Move(90.0, 140.0),
        Step::Down,
        Step::Up,
        Step::Idle,
        // OK button of the centered message box
        Step::Move(510.0, 345.0),
        Step::Down,
        Step::Up,
        Step::Idle,
    ];

    let mut clock = FrameClock::fixed(Duration::from_millis(16));
    let mut steps = script.iter();
    let mut dialogs_seen = 0;
    let frames = run_frames(&mut ui, &mut host, &mut clock, script.len() + 1, |ui, time, scene| {
        for key in handle.snapshot().keys {
            handle.key_up(key);
        }
        dialogs_seen = dialogs_seen.max(ui.dialogs().len());
        log::info!(
            "t={:?} dialogs={} texts={:?}",
            time.total,
            ui.dialogs().len(),
            scene.texts()
        );
        match steps.next() {
            Some(step) => {
                apply(&handle, step);
                true
            }
            None => false,
        }
    });

    log::info!(
        "ran {frames} frames; submitted {:?}; {} dialog(s) shown, {} open",
        greeting.borrow(),
        dialogs_seen,
        ui.dialogs().len()
    );
    anyhow::ensure!(greeting.borrow().as_str() == "ada", "text box did not submit");
    anyhow::ensure!(dialogs_seen == 1 && ui.dialogs().is_empty(), "message box did not open and close");

    ui.shutdown();
    Ok(())
}
