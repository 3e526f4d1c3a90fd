// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the preview controller.
//!
//! The `App` struct wires together the controller, localization, and the PDF
//! session, and translates messages into side effects like decoding a
//! dropped file or rasterizing a page. Policy decisions (window sizing,
//! locale resolution, theme) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::pdf::{DocumentSession, RenderedPage};
use crate::preview::Controller;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state bridging the preview controller,
/// localization, and the live PDF session.
pub struct App {
    pub i18n: I18n,
    controller: Controller,
    /// Handle to the currently decoded document; replaced wholesale on each
    /// successful decode. Superseded handles drop when the swap releases
    /// them.
    session: Option<Arc<DocumentSession>>,
    /// The page currently on screen; replaced entirely on every navigation.
    rendered: Option<RenderedPage>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("loading", &self.controller.is_loading())
            .field("has_preview", &self.rendered.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            controller: Controller::new(),
            session: None,
            rendered: None,
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off decoding of a
    /// PDF path received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load() {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!("failed to load settings: {error}");
                config::Config::default()
            }
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = config.theme_mode;

        let task = if let Some(path) = flags.file_path {
            update::submit_path(&mut app, PathBuf::from(path))
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
