//! Wrap a game with sized contents, menus and device glue.
use crate::core::{Config, MenuSchema, RelativeSize, Result, Storage};
use crate::core::surface::Surface;
use crate::display::{Areas, CreateContents, Display};
use crate::futures::Scheduler;
use crate::game::{FullScreen, Game};
use crate::gamepad::GamepadPoller;
use crate::size_changer::{SizeChanger, SizeRequest};
use crate::view::MenuView;
use crate::visibility::{Visibility, VisibilityToggler};
use crate::widget::{MenusStore, Renderers};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The collaborators of a [`UserWrappr`], provided by the host.
pub struct Dependencies<S: Surface> {
    /// The surface the display is drawn on.
    pub surface: Rc<S>,
    /// The element holding the contents and the menus.
    pub container: S::Element,
    /// Schedules menu transitions and gamepad polls.
    pub scheduler: Rc<dyn Scheduler>,
    /// Persists option values.
    pub storage: Rc<dyn Storage>,
    /// The wrapped game.
    pub game: Rc<dyn Game>,
    /// Enters and leaves full screen.
    pub full_screen: Rc<dyn FullScreen>,
    /// Creates the contents at a given size.
    pub create_contents: CreateContents<S::Element>,
}

/// Wraps a game with a sized display, menus around it, and the glue
/// between the game and the host devices.
///
/// ```
/// use icy_wrappr_shell::core::{Config, MenuSchema, Size};
/// use icy_wrappr_shell::core::option::OptionSchema;
/// use icy_wrappr_shell::core::storage::MemoryStorage;
/// use icy_wrappr_shell::core::surface::{ElementOptions, Surface};
/// use icy_wrappr_shell::core::time::Duration;
/// use icy_wrappr_shell::futures::Clock;
/// use icy_wrappr_shell::headless::Document;
/// use icy_wrappr_shell::{Dependencies, FullScreen, Game, UserWrappr};
///
/// use std::rc::Rc;
///
/// struct Idle;
///
/// impl Game for Idle {
///     fn is_paused(&self) -> bool { true }
///     fn pause(&self) {}
///     fn play(&self) {}
///     fn interval(&self) -> Duration { Duration::from_millis(20) }
///     fn speed(&self) -> f64 { 1.0 }
///     fn run_gamepad(&self) {}
/// }
///
/// impl FullScreen for Idle {
///     fn request_full_screen(&self) {}
///     fn cancel_full_screen(&self) {}
/// }
///
/// let document = Rc::new(Document::new());
/// document.set_available_size(document.root(), Size::new(840.0, 700.0));
///
/// let contents = Rc::clone(&document);
/// let wrappr = UserWrappr::new(
///     Config::default(),
///     [MenuSchema::new("Options").option(OptionSchema::boolean("Mute", || false))],
///     Dependencies {
///         surface: Rc::clone(&document),
///         container: document.root(),
///         scheduler: Rc::new(Clock::new()),
///         storage: Rc::new(MemoryStorage::new()),
///         game: Rc::new(Idle),
///         full_screen: Rc::new(Idle),
///         create_contents: Rc::new(move |_size: Size| {
///             contents.create_element("canvas", ElementOptions::new())
///         }),
///     },
/// );
///
/// let areas = futures::executor::block_on(wrappr.create_display())?;
///
/// assert_eq!(areas.content_size, Size::new(840.0, 700.0));
/// assert_eq!(wrappr.menus().map(|menus| menus.titles()), Some(vec!["Options".to_owned()]));
/// # Ok::<(), icy_wrappr_shell::core::Error>(())
/// ```
pub struct UserWrappr<S: Surface> {
    config: Config,
    schemas: Vec<MenuSchema>,
    surface: Rc<S>,
    scheduler: Rc<dyn Scheduler>,
    storage: Rc<dyn Storage>,
    renderers: Renderers<S>,
    display: Display<S>,
    size_changer: SizeChanger,
    gamepad: GamepadPoller,
    visibility: VisibilityToggler,
    menus: RefCell<Option<MenusStore>>,
    view: RefCell<Option<MenuView<S>>>,
}

impl<S: Surface + 'static> UserWrappr<S> {
    /// Creates a new [`UserWrappr`] showing `menus` around the contents.
    ///
    /// Nothing is displayed until [`UserWrappr::create_display`] is called.
    pub fn new(
        config: Config,
        menus: impl IntoIterator<Item = MenuSchema>,
        dependencies: Dependencies<S>,
    ) -> Self {
        let Dependencies {
            surface,
            container,
            scheduler,
            storage,
            game,
            full_screen,
            create_contents,
        } = dependencies;

        let display = Display::new(
            Rc::clone(&surface),
            container,
            config.class_names.clone(),
            create_contents,
        );

        Self {
            schemas: menus.into_iter().collect(),
            renderers: Renderers::default(),
            display,
            size_changer: SizeChanger::new(config.sizes.clone(), full_screen),
            gamepad: GamepadPoller::new(
                Rc::clone(&game),
                Rc::clone(&scheduler),
                config.paused_device_poll_time,
            ),
            visibility: VisibilityToggler::new(game),
            menus: RefCell::new(None),
            view: RefCell::new(None),
            surface,
            scheduler,
            storage,
            config,
        }
    }

    /// Sets the [`Renderers`] used for options.
    #[must_use]
    pub fn renderers(mut self, renderers: Renderers<S>) -> Self {
        self.renderers = renderers;
        self
    }

    /// Returns the [`Config`] of the wrapper.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the [`Display`] of the wrapper.
    pub fn display(&self) -> &Display<S> {
        &self.display
    }

    /// Returns the menus, once the display was created.
    pub fn menus(&self) -> Option<MenusStore> {
        self.menus.borrow().clone()
    }

    /// Creates the contents at the default size, and the menus around them.
    ///
    /// Fails if an option has an unknown type.
    pub async fn create_display(&self) -> Result<Areas<S::Element>> {
        self.reset_contents(self.config.default_size).await
    }

    /// Switches the contents to another size.
    ///
    /// Named sizes are looked up in the [`Config`]. Full-screen sizes request
    /// full screen, and the next other size leaves it.
    pub async fn set_size(&self, request: impl Into<SizeRequest>) -> Result<Areas<S::Element>> {
        let summary = self.size_changer.set_size(request)?;

        self.reset_contents(summary.relative()).await
    }

    /// Recreates the contents at `size`, and the menus around them.
    ///
    /// Menus keep their visual state and option values. On failure, the
    /// display and the menus are left as they were.
    pub async fn reset_contents(&self, size: RelativeSize) -> Result<Areas<S::Element>> {
        let menus = self.menus_store()?;
        let view = MenuView::new(
            &self.surface,
            &self.config.class_names,
            &menus,
            &self.renderers,
        )?;

        let previous = self.view.borrow_mut().take();
        drop(previous);

        let areas = self.display.reset_contents(size, &menus.titles()).await;

        let _ = self.display.replace_menu_area(view.element().clone());
        *self.view.borrow_mut() = Some(view);
        *self.menus.borrow_mut() = Some(menus);

        Ok(self.display.areas().unwrap_or(areas))
    }

    /// Pauses or resumes the game when the display is hidden or shown.
    ///
    /// Returns whether the game was paused or resumed.
    pub fn on_visibility_change(&self, visibility: Visibility) -> bool {
        self.visibility.toggle(visibility)
    }

    /// Starts polling gamepads.
    pub fn start_gamepad_polling(&self) {
        self.gamepad.poll_devices();
    }

    /// Stops polling gamepads. Returns whether they were being polled.
    pub fn stop_gamepad_polling(&self) -> bool {
        self.gamepad.stop()
    }

    fn menus_store(&self) -> Result<MenusStore> {
        if let Some(menus) = self.menus.borrow().as_ref() {
            return Ok(menus.clone());
        }

        let mut menus = MenusStore::new(
            &self.config,
            Rc::clone(&self.scheduler),
            Rc::clone(&self.storage),
        );
        let _ = menus.register(self.schemas.iter().cloned())?;

        Ok(menus)
    }
}

impl<S: Surface> fmt::Debug for UserWrappr<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserWrappr")
            .field("config", &self.config)
            .field("display", &self.display)
            .field("size_changer", &self.size_changer)
            .field("gamepad", &self.gamepad)
            .finish_non_exhaustive()
    }
}
