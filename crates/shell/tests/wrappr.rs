//! Drive a whole wrapped display through a headless document.
use icy_wrappr_shell::core::option::OptionSchema;
use icy_wrappr_shell::core::storage::{self, MemoryStorage};
use icy_wrappr_shell::core::surface::{ElementOptions, Surface};
use icy_wrappr_shell::core::time::Duration;
use icy_wrappr_shell::core::{
    Config, Dimension, Error, MenuSchema, OpenPolicy, Size, SizeSummary, Storage, Value,
    VisualState,
};
use icy_wrappr_shell::futures::Clock;
use icy_wrappr_shell::headless::{Document, Node};
use icy_wrappr_shell::widget::Renderers;
use icy_wrappr_shell::{Dependencies, FullScreen, Game, UserWrappr, Visibility};

use futures::executor::block_on;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct TestGame {
    paused: Cell<bool>,
    polls: Cell<usize>,
    full_screen: Cell<bool>,
}

impl Game for TestGame {
    fn is_paused(&self) -> bool {
        self.paused.get()
    }

    fn pause(&self) {
        self.paused.set(true);
    }

    fn play(&self) {
        self.paused.set(false);
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(20)
    }

    fn speed(&self) -> f64 {
        2.0
    }

    fn run_gamepad(&self) {
        self.polls.set(self.polls.get() + 1);
    }
}

impl FullScreen for TestGame {
    fn request_full_screen(&self) {
        self.full_screen.set(true);
    }

    fn cancel_full_screen(&self) {
        self.full_screen.set(false);
    }
}

struct Harness {
    document: Rc<Document>,
    clock: Rc<Clock>,
    storage: Rc<MemoryStorage>,
    game: Rc<TestGame>,
    created: Rc<RefCell<Vec<Size>>>,
}

impl Harness {
    fn new() -> Self {
        let document = Rc::new(Document::new());
        document.set_available_size(document.root(), Size::new(840.0, 700.0));
        document.set_measure(|document, node| {
            if document.has_class(node, "menus-inner-area") {
                Size::new(200.0, 35.0)
            } else {
                Size::ZERO
            }
        });

        Self {
            document,
            clock: Rc::new(Clock::new()),
            storage: Rc::new(MemoryStorage::new()),
            game: Rc::new(TestGame::default()),
            created: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn wrappr(&self, config: Config, menus: Vec<MenuSchema>) -> UserWrappr<Document> {
        let contents = Rc::clone(&self.document);
        let created = Rc::clone(&self.created);

        UserWrappr::new(
            config,
            menus,
            Dependencies {
                surface: Rc::clone(&self.document),
                container: self.document.root(),
                scheduler: self.clock.clone(),
                storage: self.storage.clone(),
                game: self.game.clone(),
                full_screen: self.game.clone(),
                create_contents: Rc::new(move |size: Size| {
                    created.borrow_mut().push(size);
                    contents.create_element("canvas", ElementOptions::new())
                }),
            },
        )
    }

    fn titles(&self) -> Vec<Node> {
        self.document.find_by_class("menu-title")
    }
}

fn options() -> MenuSchema {
    MenuSchema::new("Options")
        .option(OptionSchema::boolean("Mute", || false))
        .option(OptionSchema::number("Speed", || 1.0).min(0.25).max(4.0))
}

#[test]
fn test_create_display_places_contents_above_menus() {
    let harness = Harness::new();
    let wrappr = harness.wrappr(Config::default(), vec![options(), MenuSchema::new("Help")]);

    let areas = block_on(wrappr.create_display()).expect("known option types");

    assert_eq!(areas.content_size, Size::new(640.0, 665.0));
    assert_eq!(*harness.created.borrow(), [Size::new(640.0, 665.0)]);
    assert_eq!(
        harness.document.children(harness.document.root()),
        [areas.content_area, areas.menu_area]
    );
    assert!(harness.document.find_by_class("menus-inner-area-fake").is_empty());
    assert_eq!(harness.titles().len(), 2);
}

#[test]
fn test_menu_titles_drive_visual_states() {
    let harness = Harness::new();
    let wrappr = harness.wrappr(
        Config::default().open_policy(OpenPolicy::Exclusive),
        vec![options(), MenuSchema::new("Help")],
    );

    let _ = block_on(wrappr.create_display()).expect("known option types");
    let menus = wrappr.menus().expect("menus are registered");
    let titles = harness.titles();

    harness.document.click(titles[0]);
    let _ = harness.clock.tick(Config::DEFAULT_TRANSITION_TIME);
    assert_eq!(menus.entries()[0].menu.visual_state(), VisualState::Open);

    harness.document.click(titles[1]);
    assert_eq!(menus.entries()[0].menu.visual_state(), VisualState::Closing);
    assert_eq!(menus.entries()[1].menu.visual_state(), VisualState::Opening);

    let first = harness.document.find_by_class("menu")[0];
    let _ = harness.clock.tick(Config::DEFAULT_TRANSITION_TIME);
    assert_eq!(
        harness.document.class_name(first).as_deref(),
        Some("menu menu-closed")
    );
}

#[test]
fn test_option_inputs_are_persisted() {
    let harness = Harness::new();
    let wrappr = harness.wrappr(Config::default(), vec![options()]);

    let _ = block_on(wrappr.create_display()).expect("known option types");

    let button = harness
        .document
        .find_by_class("option-right")
        .into_iter()
        .find(|node| harness.document.tag(*node).as_deref() == Some("button"))
        .expect("booleans render a button");

    harness.document.click(button);
    assert_eq!(harness.document.text_content(button), "on");
    assert_eq!(
        harness.storage.get(&storage::key("Options", "Mute")).as_deref(),
        Some("true")
    );

    let input = harness
        .document
        .find_by_class("option-right")
        .into_iter()
        .find(|node| harness.document.tag(*node).as_deref() == Some("input"))
        .expect("numbers render an input");

    harness.document.input(input, "10");
    assert_eq!(harness.document.text_content(input), "4");

    harness.document.input(input, "fast");
    assert_eq!(harness.document.text_content(input), "4");

    let menus = wrappr.menus().expect("menus are registered");
    let speed = menus.entries()[0].options.get("Speed").expect("speed option");
    assert!(matches!(
        speed,
        icy_wrappr_shell::widget::OptionStore::Saveable(store) if store.value() == Value::Number(4.0)
    ));
}

#[test]
fn test_stored_values_survive_new_wrappers() {
    let harness = Harness::new();
    harness
        .storage
        .set(&storage::key("Options", "Mute"), "true")
        .expect("memory storage never fails");

    let wrappr = harness.wrappr(Config::default(), vec![options()]);
    let _ = block_on(wrappr.create_display()).expect("known option types");

    let list = harness
        .document
        .first_by_class("options-list")
        .expect("options are listed");

    assert!(harness.document.text_content(list).starts_with("Muteon"));
}

#[test]
fn test_set_size_switches_and_keeps_menus() {
    let harness = Harness::new();
    let config = Config::default()
        .size("Half", SizeSummary::new(Dimension::Percent(50.0), Dimension::Fill))
        .size("Full", SizeSummary::new(Dimension::Fill, Dimension::Fill).full(true));
    let wrappr = harness.wrappr(config, vec![options()]);

    let _ = block_on(wrappr.create_display()).expect("known option types");
    let menus = wrappr.menus().expect("menus are registered");

    harness.document.click(harness.titles()[0]);
    let _ = harness.clock.tick(Config::DEFAULT_TRANSITION_TIME);

    let areas = block_on(wrappr.set_size("Half")).expect("configured size");
    assert_eq!(areas.content_size, Size::new(220.0, 665.0));
    assert_eq!(harness.document.children(harness.document.root()).len(), 2);

    let menu = harness.document.find_by_class("menu")[0];
    assert_eq!(harness.document.class_name(menu).as_deref(), Some("menu menu-open"));
    assert_eq!(wrappr.menus().map(|menus| menus.len()), Some(menus.len()));

    let _ = block_on(wrappr.set_size("Full")).expect("configured size");
    assert!(harness.game.full_screen.get());

    let _ = block_on(wrappr.set_size("Half")).expect("configured size");
    assert!(!harness.game.full_screen.get());

    let error = block_on(wrappr.set_size("Huge")).expect_err("unknown size");
    assert_eq!(error, Error::UnknownSize("Huge".to_owned()));
}

#[test]
fn test_unknown_option_types_fail_the_display() {
    let harness = Harness::new();
    let wrappr = harness.wrappr(
        Config::default(),
        vec![MenuSchema::new("Options").option(OptionSchema::unknown("Color", "color"))],
    );

    let error = block_on(wrappr.create_display()).expect_err("unknown option type");

    assert_eq!(error, Error::UnknownOptionType("color".to_owned()));
    assert!(wrappr.menus().is_none());
}

#[test]
fn test_missing_renderers_leave_the_display_untouched() {
    let harness = Harness::new();
    let wrappr = harness
        .wrappr(Config::default(), vec![options()])
        .renderers(Renderers::empty());

    let error = block_on(wrappr.create_display()).expect_err("booleans have no renderer");

    assert_eq!(error, Error::UnknownOptionType("boolean".to_owned()));
    assert!(wrappr.menus().is_none());
    assert!(wrappr.display().areas().is_none());
    assert!(harness.created.borrow().is_empty());
    assert!(harness.document.children(harness.document.root()).is_empty());
    assert!(harness.document.find_by_class("menus-inner-area-fake").is_empty());
}

#[test]
fn test_hiding_pauses_and_gamepads_keep_polling() {
    let harness = Harness::new();
    let wrappr = harness.wrappr(Config::default(), Vec::new());

    assert!(wrappr.on_visibility_change(Visibility::Hidden));
    assert!(harness.game.paused.get());

    wrappr.start_gamepad_polling();
    assert_eq!(harness.game.polls.get(), 1);

    let _ = harness.clock.tick(Config::DEFAULT_PAUSED_DEVICE_POLL_TIME);
    assert_eq!(harness.game.polls.get(), 2);

    assert!(wrappr.on_visibility_change(Visibility::Visible));
    assert!(!harness.game.paused.get());

    let _ = harness.clock.tick(Config::DEFAULT_PAUSED_DEVICE_POLL_TIME);
    assert_eq!(harness.game.polls.get(), 3);

    let _ = harness.clock.tick(Duration::from_millis(10));
    assert_eq!(harness.game.polls.get(), 4);

    assert!(wrappr.stop_gamepad_polling());
    let _ = harness.clock.run_all();
    assert_eq!(harness.game.polls.get(), 4);
}
