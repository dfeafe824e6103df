// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery, localization, settings and
//! the generation backend, and translates messages into side effects like
//! generation requests, file downloads or clipboard writes. Cards themselves
//! stay stateless: every render hands them a snapshot of their state.

pub mod gallery;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use gallery::{Attempt, CardEntry, Gallery};
pub use message::{Flags, Message};

use crate::application::port::{GenerationError, GenerationFuture, GenerationRequest, ImageGenerator};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::HttpGenerator;
use crate::ui::notifications::{self, Notification};
use crate::ui::polaroid_card::CardLabels;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    labels: CardLabels,
    gallery: Gallery,
    generator: Arc<dyn ImageGenerator>,
    notifications: notifications::Manager,
    window_size: Option<Size>,
    /// Compact layout forced from the command line.
    force_compact: bool,
    /// Time of the last animation tick, used as the render clock.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cards", &self.gallery.len())
            .field("generating", &self.gallery.is_generating())
            .field("window_size", &self.window_size)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 900.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 380.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be `Fn`; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Generator used when the HTTP client cannot be built.
struct UnavailableGenerator;

impl ImageGenerator for UnavailableGenerator {
    fn generate(&self, _request: GenerationRequest) -> GenerationFuture {
        Box::pin(async { Err(GenerationError::NotConfigured) })
    }
}

fn build_generator(config: &Config) -> Arc<dyn ImageGenerator> {
    match HttpGenerator::new(
        config.generation.endpoint.clone(),
        config.generation.timeout(),
    ) {
        Ok(generator) => {
            if generator.endpoint().is_none() {
                tracing::warn!("no generation endpoint configured; cards will report an error");
            }
            Arc::new(generator)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to build HTTP client");
            Arc::new(UnavailableGenerator)
        }
    }
}

impl App {
    /// Loads settings and localization, then waits for the user to start.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::with_generator(flags, config, config_warning, None);
        (app, Task::none())
    }

    /// Builds the app from already-loaded settings.
    ///
    /// `generator` replaces the HTTP backend when supplied.
    pub fn with_generator(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
        generator: Option<Arc<dyn ImageGenerator>>,
    ) -> Self {
        let i18n = I18n::new(flags.lang, &config);
        let labels = CardLabels::new(&i18n);
        let generator = generator.unwrap_or_else(|| build_generator(&config));

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        tracing::info!(locale = %i18n.current_locale(), "application started");

        Self {
            i18n,
            config,
            labels,
            gallery: Gallery::new(),
            generator,
            notifications,
            window_size: None,
            force_compact: flags.compact,
            now: Instant::now(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Whether the compact (touch) layout is active.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        if self.force_compact {
            return true;
        }
        let width = self.window_size.map_or(WINDOW_DEFAULT_WIDTH, |size| size.width);
        self.config.display.is_compact(width)
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.gallery.needs_ticks(Instant::now()),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Tick(instant) = &message {
            self.now = *instant;
        } else {
            self.now = Instant::now();
        }

        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            gallery: &mut self.gallery,
            generator: &self.generator,
            notifications: &mut self.notifications,
            window_size: &mut self.window_size,
        };

        update::update(&mut ctx, message, self.now)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            gallery: &self.gallery,
            labels: &self.labels,
            notifications: &self.notifications,
            compact: self.is_compact(),
            now: self.now,
        })
    }
}
