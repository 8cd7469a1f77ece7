#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::*;
    use web_time::Duration;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Probe {
        name: &'static str,
        log: Log,
        mask: EventMask,
        focusable: bool,
        cancel_close: bool,
        panic_on_click: bool,
    }

    impl Probe {
        fn new(name: &'static str, log: &Log) -> Self {
            Self {
                name,
                log: log.clone(),
                mask: EventMask::ALL,
                focusable: false,
                cancel_close: false,
                panic_on_click: false,
            }
        }
        fn mask(mut self, mask: EventMask) -> Self {
            self.mask = mask;
            self
        }
        fn focusable(mut self) -> Self {
            self.focusable = true;
            self
        }
        fn record(&self, what: impl std::fmt::Display) {
            self.log.borrow_mut().push(format!("{}:{what}", self.name));
        }
    }

    impl Updatable for Probe {
        fn always_update(&mut self, _ctx: &mut Ctx) {
            self.record("always");
        }
        fn update(&mut self, _ctx: &mut Ctx) {
            self.record("update");
        }
        fn on_dispose(&mut self) {
            self.record("dispose");
        }
    }

    impl Drawable for Probe {
        fn draw(&self, ctx: &DrawCtx, scene: &mut Scene) {
            scene.push(SceneNode::Text {
                rect: ctx.area(),
                text: self.name.to_string(),
                color: Color::WHITE,
                size: 12.0,
            });
        }
    }

    impl EventReceiver for Probe {
        fn event_mask(&self) -> EventMask {
            self.mask
        }
        fn focusable(&self) -> bool {
            self.focusable
        }
        fn on_mouse_enter(&mut self, _ctx: &mut Ctx, _p: Vec2) {
            self.record("enter");
        }
        fn on_mouse_over(&mut self, _ctx: &mut Ctx, _p: Vec2) {
            self.record("over");
        }
        fn on_mouse_leave(&mut self, _ctx: &mut Ctx, _p: Vec2) {
            self.record("leave");
        }
        fn on_drag_start(&mut self, _ctx: &mut Ctx, _d: &DragInfo) {
            self.record("drag_start");
        }
        fn on_drag(&mut self, _ctx: &mut Ctx, d: &DragInfo) {
            self.record(format!("drag({},{})", d.delta.x, d.delta.y));
        }
        fn on_drag_end(&mut self, _ctx: &mut Ctx, _d: &DragInfo) {
            self.record("drag_end");
        }
        fn on_click(&mut self, _ctx: &mut Ctx, _c: &ClickInfo) {
            if self.panic_on_click {
                panic!("boom");
            }
            self.record("click");
        }
        fn on_double_click(&mut self, _ctx: &mut Ctx, _c: &ClickInfo) {
            self.record("double_click");
        }
        fn on_key_typed(&mut self, _ctx: &mut Ctx, key: &KeyEvent) {
            match key.ch {
                Some(ch) => self.record(format!("key({ch})")),
                None => self.record(format!("key({:?})", key.key)),
            }
        }
        fn on_got_focus(&mut self, _ctx: &mut Ctx) {
            self.record("got_focus");
        }
        fn on_lost_focus(&mut self, _ctx: &mut Ctx) {
            self.record("lost_focus");
        }
        fn on_wheel_moved(&mut self, _ctx: &mut Ctx, _p: Vec2, delta: i32) {
            self.record(format!("wheel({delta})"));
        }
        fn on_closing(&mut self, _ctx: &mut Ctx, args: &mut ClosingArgs) {
            self.record("closing");
            args.cancel = self.cancel_close;
        }
        fn on_closed(&mut self, _ctx: &mut Ctx, result: DialogResult) {
            self.record(format!("closed({result:?})"));
        }
    }

    struct TestHost {
        input: InputSnapshot,
        active: bool,
        bounds: Rect,
    }

    impl TestHost {
        fn new() -> Self {
            Self {
                input: InputSnapshot::default(),
                active: true,
                bounds: Rect::new(0.0, 0.0, 800.0, 600.0),
            }
        }
        fn move_to(&mut self, x: f32, y: f32) {
            self.input.mouse.position = Vec2::new(x, y);
        }
        fn left(&mut self, down: bool) {
            self.input.mouse.buttons.set(MouseButtons::LEFT, down);
        }
    }

    impl Host for TestHost {
        fn poll_input(&mut self) -> InputSnapshot {
            self.input.clone()
        }
        fn is_active(&self) -> bool {
            self.active
        }
        fn client_bounds(&self) -> Rect {
            self.bounds
        }
    }

    struct Rig {
        ui: Ui,
        host: TestHost,
        log: Log,
        frame: u32,
    }

    impl Rig {
        fn new() -> Self {
            Self::with_config(UiConfig::default())
        }
        fn with_config(config: UiConfig) -> Self {
            let mut host = TestHost::new();
            // park the pointer away from everything
            host.move_to(-100.0, -100.0);
            Self {
                ui: Ui::with_config(config),
                host,
                log: Rc::default(),
                frame: 0,
            }
        }
        fn top(&mut self, probe: Probe, area: Rect) -> ControlId {
            let id = self.ui.create(probe, area);
            self.ui.add_control_to_default_game(id).unwrap();
            id
        }
        fn child(&mut self, parent: ControlId, probe: Probe, area: Rect) -> ControlId {
            self.ui.create_child(parent, probe, area).unwrap()
        }
        fn probe(&self, name: &'static str) -> Probe {
            Probe::new(name, &self.log)
        }
        fn tick(&mut self) {
            let time = FrameTime::fixed(self.frame, Duration::from_millis(16));
            self.ui.update(&mut self.host, time);
            self.frame += 1;
        }
        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.log.borrow_mut())
        }
        /// Log entries other than the per-tick `always`/`update` noise.
        fn events(&self) -> Vec<String> {
            self.take()
                .into_iter()
                .filter(|e| !e.ends_with(":always") && !e.ends_with(":update"))
                .collect()
        }
        fn click_at(&mut self, x: f32, y: f32) {
            self.host.move_to(x, y);
            self.host.left(true);
            self.tick();
            self.host.left(false);
            self.tick();
        }
    }

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn draw_order_propagates_to_every_depth() {
        let mut rig = Rig::new();
        let p = rig.top(rig.probe("p"), r(0.0, 0.0, 100.0, 100.0));
        rig.ui.set_draw_order(p, 10).unwrap();
        let a = rig.ui.create(rig.probe("a"), r(0.0, 0.0, 10.0, 10.0));
        let b = rig.ui.create(rig.probe("b"), r(0.0, 0.0, 10.0, 10.0));
        let c = rig.ui.create(rig.probe("c"), r(0.0, 0.0, 10.0, 10.0));
        let d = rig.ui.create(rig.probe("d"), r(0.0, 0.0, 10.0, 10.0));
        for k in [a, b, c] {
            assert_eq!(rig.ui.control(k).unwrap().draw_order(), 0);
            rig.ui.set_parent_control(k, p).unwrap();
        }
        rig.ui.set_parent_control(d, a).unwrap();

        rig.ui.set_draw_order(p, 15).unwrap();
        let order = |id| rig.ui.control(id).unwrap().draw_order();
        assert_eq!((order(a), order(b), order(c)), (16, 16, 16));
        assert_eq!(order(d), 17);

        // reparenting re-derives the whole subtree
        let q = rig.top(rig.probe("q"), r(0.0, 0.0, 10.0, 10.0));
        rig.ui.set_draw_order(q, 40).unwrap();
        rig.ui.set_parent_control(a, q).unwrap();
        let order = |id| rig.ui.control(id).unwrap().draw_order();
        assert_eq!((order(a), order(d)), (41, 42));
    }

    #[test]
    fn hover_enter_over_leave_sequence() {
        let mut rig = Rig::new();
        let x = rig.top(rig.probe("x"), r(0.0, 0.0, 50.0, 50.0));
        rig.tick();
        assert!(rig.events().is_empty());

        rig.host.move_to(10.0, 10.0);
        rig.tick();
        assert_eq!(rig.events(), vec!["x:enter"]);
        let c = rig.ui.control(x).unwrap();
        assert!(c.mouse_over());
        assert!(!c.mouse_over_previously());

        rig.host.move_to(20.0, 20.0);
        rig.tick();
        assert_eq!(rig.events(), vec!["x:over"]);
        assert!(rig.ui.control(x).unwrap().mouse_over_previously());

        // no movement, no message
        rig.tick();
        assert!(rig.events().is_empty());

        rig.host.move_to(200.0, 200.0);
        rig.tick();
        assert_eq!(rig.events(), vec!["x:leave"]);
        let c = rig.ui.control(x).unwrap();
        assert!(!c.mouse_over());
        assert!(c.mouse_over_previously());

        rig.host.move_to(300.0, 200.0);
        rig.tick();
        assert!(rig.events().is_empty());
        assert!(!rig.ui.control(x).unwrap().mouse_over_previously());
    }

    #[test]
    fn hiding_a_hovered_control_sends_leave() {
        let mut rig = Rig::new();
        let x = rig.top(rig.probe("x"), r(0.0, 0.0, 50.0, 50.0));
        rig.host.move_to(10.0, 10.0);
        rig.tick();
        rig.take();

        rig.ui.control_mut(x).unwrap().set_visible(false);
        rig.host.move_to(11.0, 10.0);
        rig.tick();
        assert_eq!(rig.events(), vec!["x:leave"]);
        assert!(!rig.ui.is_hovered(x));
    }

    #[test]
    fn click_goes_to_higher_draw_order() {
        let mut rig = Rig::new();
        let x = rig.top(rig.probe("x"), r(0.0, 0.0, 100.0, 100.0));
        let y = rig.top(rig.probe("y"), r(50.0, 50.0, 100.0, 100.0));
        rig.ui.set_draw_order(x, 5).unwrap();
        rig.ui.set_draw_order(y, 7).unwrap();
        // x registered later than y would otherwise win an order tie
        rig.ui.remove_from_default_game(x).unwrap();
        rig.ui.add_control_to_default_game(x).unwrap();

        assert_eq!(rig.ui.target_at(Vec2::new(75.0, 75.0)), Some(y));
        assert_eq!(rig.ui.target_at(Vec2::new(10.0, 10.0)), Some(x));

        rig.click_at(75.0, 75.0);
        let events = rig.events();
        assert!(events.contains(&"y:click".to_string()));
        assert!(!events.contains(&"x:click".to_string()));
    }

    #[test]
    fn click_on_control_ignoring_clicks_is_dropped() {
        let mut rig = Rig::new();
        let x = rig.top(rig.probe("x"), r(0.0, 0.0, 100.0, 100.0));
        let y = rig.top(rig.probe("y").mask(EventMask::HOVER), r(40.0, 40.0, 100.0, 100.0));
        rig.ui.set_draw_order(x, 5).unwrap();
        rig.ui.set_draw_order(y, 7).unwrap();
        assert_eq!(rig.ui.target_at(Vec2::new(50.0, 50.0)), Some(y));

        rig.click_at(50.0, 50.0);
        let clicks: Vec<String> = rig.events().into_iter().filter(|e| e.ends_with("click")).collect();
        assert!(clicks.is_empty(), "{clicks:?}");
    }

    #[test]
    fn click_on_inert_label_does_not_reach_its_button() {
        let mut rig = Rig::new();
        let panel = rig.top(rig.probe("panel"), r(0.0, 0.0, 200.0, 200.0));
        let button = rig.child(panel, rig.probe("button"), r(10.0, 10.0, 100.0, 40.0));
        let label = rig.child(
            button,
            rig.probe("label").mask(EventMask::NONE),
            r(5.0, 5.0, 50.0, 20.0),
        );
        assert_eq!(rig.ui.target_at(Vec2::new(20.0, 20.0)), Some(label));

        rig.click_at(20.0, 20.0);
        let clicks: Vec<String> = rig.events().into_iter().filter(|e| e.ends_with("click")).collect();
        assert!(clicks.is_empty(), "{clicks:?}");

        // beside the label the button is on top
        rig.click_at(90.0, 20.0);
        let clicks: Vec<String> = rig.events().into_iter().filter(|e| e.ends_with("click")).collect();
        assert_eq!(clicks, vec!["button:click"]);
    }

    #[test]
    fn parent_keeps_message_when_child_on_top_ignores_it() {
        let mut rig = Rig::new();
        let p = rig.top(rig.probe("p"), r(0.0, 0.0, 100.0, 100.0));
        rig.child(p, rig.probe("b"), r(0.0, 0.0, 50.0, 50.0));
        rig.child(p, rig.probe("a").mask(EventMask::NONE), r(0.0, 0.0, 50.0, 50.0));

        rig.ui.send_message(
            p,
            Event::Click(ClickInfo {
                position: Vec2::new(10.0, 10.0),
                button: MouseButtons::LEFT,
                modifiers: Modifiers::empty(),
            }),
        );
        rig.tick();
        rig.tick();
        assert_eq!(rig.events(), vec!["p:click"]);
    }

    #[test]
    fn parent_forwards_routed_message_to_child() {
        let mut rig = Rig::new();
        let panel = rig.top(rig.probe("panel"), r(0.0, 0.0, 200.0, 200.0));
        let child = rig.child(panel, rig.probe("child"), r(100.0, 100.0, 50.0, 50.0));
        let click = |x, y| {
            Event::Click(ClickInfo {
                position: Vec2::new(x, y),
                button: MouseButtons::LEFT,
                modifiers: Modifiers::empty(),
            })
        };

        rig.ui.send_message(panel, click(120.0, 120.0));
        rig.ui.send_message(panel, click(5.0, 5.0));
        rig.tick();
        assert_eq!(rig.events(), vec!["panel:click"]);
        assert_eq!(rig.ui.control(child).unwrap().pending_messages(), 1);

        rig.tick();
        assert_eq!(rig.events(), vec!["child:click"]);
    }

    #[test]
    fn queue_drains_in_order_after_children_update() {
        let mut rig = Rig::new();
        let parent = rig.top(rig.probe("parent"), r(0.0, 0.0, 10.0, 10.0));
        let _child = rig.child(parent, rig.probe("child"), r(0.0, 0.0, 5.0, 5.0));
        rig.ui.send_message(parent, Event::GotFocus);
        rig.ui.send_message(parent, Event::WheelMoved { position: Vec2::new(50.0, 50.0), delta: 3 });
        rig.ui.send_message(parent, Event::LostFocus);
        rig.tick();
        assert_eq!(
            rig.take(),
            vec![
                "child:always",
                "child:update",
                "parent:always",
                "parent:got_focus",
                "parent:wheel(3)",
                "parent:lost_focus",
                "parent:update",
            ]
        );
    }

    #[test]
    fn masked_out_kinds_are_dropped() {
        let mut rig = Rig::new();
        let x = rig.top(rig.probe("x").mask(EventMask::HOVER), r(0.0, 0.0, 10.0, 10.0));
        rig.ui.send_message(x, Event::GotFocus);
        rig.tick();
        assert!(rig.events().is_empty());
        assert_eq!(rig.ui.control(x).unwrap().pending_messages(), 0);
    }

    #[test]
    fn update_order_sorts_siblings_independently_of_draw_order() {
        let mut rig = Rig::new();
        let a = rig.top(rig.probe("a"), r(0.0, 0.0, 10.0, 10.0));
        let b = rig.top(rig.probe("b"), r(0.0, 0.0, 10.0, 10.0));
        rig.ui.set_update_order(a, 2).unwrap();
        rig.ui.set_update_order(b, 1).unwrap();
        rig.ui.set_draw_order(a, 1).unwrap();
        rig.ui.set_draw_order(b, 2).unwrap();
        rig.tick();
        assert_eq!(rig.take(), vec!["b:always", "b:update", "a:always", "a:update"]);
        assert_eq!(rig.ui.render().texts(), vec!["a", "b"]);
    }

    #[test]
    fn update_gating() {
        let mut rig = Rig::new();
        let x = rig.top(rig.probe("x"), r(0.0, 0.0, 10.0, 10.0));

        rig.tick();
        assert_eq!(rig.take(), vec!["x:always", "x:update"]);

        rig.host.active = false;
        rig.tick();
        assert_eq!(rig.take(), vec!["x:always"]);

        rig.host.active = true;
        rig.ui.control_mut(x).unwrap().set_visible(false);
        rig.tick();
        assert_eq!(rig.take(), vec!["x:always"]);
        assert!(rig.ui.render().nodes.is_empty());
    }

    #[test]
    fn inactive_host_synthesizes_no_input() {
        let mut rig = Rig::new();
        rig.top(rig.probe("x"), r(0.0, 0.0, 50.0, 50.0));
        rig.host.active = false;
        rig.click_at(10.0, 10.0);
        assert!(rig.events().is_empty());
    }

    #[test]
    fn dispose_cascades_once_and_stops_updates() {
        let mut rig = Rig::new();
        let root = rig.top(rig.probe("root"), r(0.0, 0.0, 100.0, 100.0));
        let a = rig.child(root, rig.probe("a"), r(0.0, 0.0, 10.0, 10.0));
        let b = rig.child(a, rig.probe("b"), r(0.0, 0.0, 5.0, 5.0));

        rig.ui.dispose(root).unwrap();
        let mut disposed = rig.take();
        disposed.sort();
        assert_eq!(disposed, vec!["a:dispose", "b:dispose", "root:dispose"]);
        for id in [root, a, b] {
            assert!(rig.ui.is_disposed(id));
        }
        assert!(rig.ui.components().is_empty());
        assert!(rig.ui.dispose(root).is_err());

        rig.tick();
        assert!(rig.take().is_empty());
        assert!(rig.ui.render().nodes.is_empty());
    }

    #[test]
    fn disposing_a_child_detaches_it() {
        let mut rig = Rig::new();
        let root = rig.top(rig.probe("root"), r(0.0, 0.0, 100.0, 100.0));
        let a = rig.child(root, rig.probe("a"), r(0.0, 0.0, 10.0, 10.0));
        rig.ui.dispose(a).unwrap();
        assert!(rig.ui.children(root).unwrap().is_empty());
        assert_eq!(rig.ui.components(), &[root]);
    }

    #[test]
    fn double_click_within_window() {
        let mut rig = Rig::new();
        rig.top(rig.probe("x"), r(0.0, 0.0, 50.0, 50.0));
        rig.click_at(10.0, 10.0);
        rig.click_at(10.0, 10.0);
        let clicks: Vec<String> = rig.events().into_iter().filter(|e| e.contains("click")).collect();
        assert_eq!(clicks, vec!["x:click", "x:click", "x:double_click"]);

        // far apart in time: two single clicks
        let mut rig = Rig::with_config(UiConfig::default().with_double_click_time(Duration::ZERO));
        rig.top(rig.probe("x"), r(0.0, 0.0, 50.0, 50.0));
        rig.click_at(10.0, 10.0);
        rig.click_at(10.0, 10.0);
        let clicks: Vec<String> = rig.events().into_iter().filter(|e| e.contains("click")).collect();
        assert_eq!(clicks, vec!["x:click", "x:click"]);
    }

    #[test]
    fn drag_sequence() {
        let mut rig = Rig::new();
        rig.top(rig.probe("x"), r(0.0, 0.0, 100.0, 100.0));
        rig.host.move_to(10.0, 10.0);
        rig.host.left(true);
        rig.tick();
        // below threshold
        rig.host.move_to(11.0, 10.0);
        rig.tick();
        rig.host.move_to(20.0, 10.0);
        rig.tick();
        rig.host.move_to(25.0, 12.0);
        rig.tick();
        rig.host.left(false);
        rig.tick();

        let drags: Vec<String> = rig.events().into_iter().filter(|e| e.contains("drag")).collect();
        assert_eq!(drags, vec!["x:drag_start", "x:drag(5,2)", "x:drag_end"]);
    }

    #[test]
    fn keys_go_to_focused_control_and_tab_cycles() {
        let mut rig = Rig::new();
        let a = rig.top(rig.probe("a").focusable(), r(0.0, 0.0, 50.0, 20.0));
        let b = rig.top(rig.probe("b").focusable(), r(0.0, 30.0, 50.0, 20.0));
        rig.ui.set_update_order(b, 1).unwrap();

        rig.click_at(10.0, 10.0);
        assert_eq!(rig.ui.focused(), Some(a));
        rig.take();

        rig.host.input.modifiers = Modifiers::SHIFT;
        rig.host.input.keys.push(Key::Char('h'));
        rig.tick();
        rig.host.input.keys.clear();
        rig.host.input.modifiers = Modifiers::empty();
        rig.tick();
        assert_eq!(rig.events(), vec!["a:key(H)"]);

        rig.host.input.keys.push(Key::Tab);
        rig.tick();
        rig.host.input.keys.clear();
        rig.tick();
        assert_eq!(rig.ui.focused(), Some(b));
        assert_eq!(rig.events(), vec!["a:lost_focus", "b:got_focus"]);
    }

    #[test]
    fn panicking_hook_does_not_poison_the_frame() {
        let mut rig = Rig::new();
        let mut bad = rig.probe("bad");
        bad.panic_on_click = true;
        let bad = rig.top(bad, r(0.0, 0.0, 50.0, 50.0));
        let good = rig.top(rig.probe("good"), r(100.0, 0.0, 50.0, 50.0));
        let click = |x| {
            Event::Click(ClickInfo {
                position: Vec2::new(x, 5.0),
                button: MouseButtons::LEFT,
                modifiers: Modifiers::empty(),
            })
        };
        rig.ui.send_message(bad, click(5.0));
        rig.ui.send_message(bad, Event::GotFocus);
        rig.ui.send_message(good, click(105.0));
        rig.tick();

        let events = rig.events();
        assert!(events.contains(&"bad:got_focus".to_string()));
        assert!(events.contains(&"good:click".to_string()));
        // the widget survived and keeps updating
        rig.tick();
        assert!(rig.take().contains(&"bad:update".to_string()));
    }

    #[test]
    fn modal_dialog_gates_input_and_updates() {
        let mut rig = Rig::new();
        let behind = rig.top(rig.probe("behind"), r(0.0, 0.0, 400.0, 400.0));
        let dialog = rig.ui.create(rig.probe("dialog"), r(100.0, 100.0, 100.0, 100.0));
        rig.ui.open_dialog(dialog).unwrap();
        rig.tick();
        assert_eq!(rig.take(), vec!["behind:always", "dialog:always", "dialog:update"]);

        rig.click_at(10.0, 10.0);
        assert!(!rig.take().iter().any(|e| e.starts_with("behind:click")));

        rig.click_at(150.0, 150.0);
        assert!(rig.take().contains(&"dialog:click".to_string()));

        assert_eq!(rig.ui.close_dialog(dialog, DialogResult::Ok), Ok(true));
        assert_eq!(rig.take(), vec!["dialog:closing", "dialog:closed(Ok)", "dialog:dispose"]);
        rig.click_at(10.0, 10.0);
        assert!(rig.take().contains(&"behind:click".to_string()));
        assert!(rig.ui.contains(behind));
    }

    #[test]
    fn weak_gating_when_disabled() {
        let mut rig = Rig::with_config(UiConfig::default().with_modal_gating(false));
        rig.top(rig.probe("behind"), r(0.0, 0.0, 50.0, 50.0));
        let dialog = rig.ui.create(rig.probe("dialog"), r(100.0, 100.0, 100.0, 100.0));
        rig.ui.open_dialog(dialog).unwrap();
        rig.tick();
        assert_eq!(
            rig.take(),
            vec!["behind:always", "behind:update", "dialog:always", "dialog:update"]
        );
    }

    #[test]
    fn cancelled_close_keeps_dialog_open() {
        let mut rig = Rig::new();
        let mut probe = rig.probe("dialog");
        probe.cancel_close = true;
        let dialog = rig.ui.create(probe, r(0.0, 0.0, 10.0, 10.0));
        rig.ui.open_dialog(dialog).unwrap();

        assert_eq!(rig.ui.close_dialog(dialog, DialogResult::Cancel), Ok(false));
        assert_eq!(rig.take(), vec!["dialog:closing"]);
        assert_eq!(rig.ui.dialogs().as_slice(), &[dialog]);
        assert!(rig.ui.contains(dialog));
    }

    #[test]
    fn dialogs_draw_above_everything() {
        let mut rig = Rig::new();
        let base = rig.top(rig.probe("base"), r(0.0, 0.0, 10.0, 10.0));
        rig.ui.set_draw_order(base, 900).unwrap();
        let d1 = rig.ui.create(rig.probe("d1"), r(0.0, 0.0, 10.0, 10.0));
        rig.child(d1, rig.probe("d1child"), r(0.0, 0.0, 5.0, 5.0));
        let d2 = rig.ui.create(rig.probe("d2"), r(0.0, 0.0, 10.0, 10.0));
        rig.ui.open_dialog(d1).unwrap();
        rig.ui.open_dialog(d2).unwrap();
        assert_eq!(rig.ui.render().texts(), vec!["base", "d1", "d1child", "d2"]);
    }

    #[test]
    fn keep_within_bounds_clamps_after_update() {
        let mut rig = Rig::new();
        let x = rig.top(rig.probe("x"), r(780.0, -10.0, 50.0, 50.0));
        rig.ui.control_mut(x).unwrap().set_keep_in_bounds(true);
        rig.tick();
        assert_eq!(rig.ui.control(x).unwrap().area(), r(750.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn keep_within_bounds_only_applies_to_top_level() {
        let mut rig = Rig::new();
        let root = rig.top(rig.probe("root"), r(0.0, 0.0, 100.0, 100.0));
        let child = rig.child(root, rig.probe("child"), r(900.0, 900.0, 10.0, 10.0));
        let detached = rig.ui.create(rig.probe("detached"), r(-50.0, -50.0, 10.0, 10.0));
        for id in [child, detached] {
            rig.ui.control_mut(id).unwrap().set_keep_in_bounds(true);
        }
        rig.tick();
        assert_eq!(rig.ui.control(child).unwrap().area(), r(900.0, 900.0, 10.0, 10.0));
        assert_eq!(rig.ui.control(detached).unwrap().area(), r(-50.0, -50.0, 10.0, 10.0));
    }

    #[test]
    fn shutdown_clears_everything() {
        let mut rig = Rig::new();
        let a = rig.top(rig.probe("a"), r(0.0, 0.0, 10.0, 10.0));
        let d = rig.ui.create(rig.probe("d"), r(0.0, 0.0, 10.0, 10.0));
        rig.ui.open_dialog(d).unwrap();
        rig.ui.shutdown();
        assert!(rig.ui.dialogs().is_empty());
        assert!(rig.ui.components().is_empty());
        assert!(rig.ui.is_disposed(a) && rig.ui.is_disposed(d));
    }
}
