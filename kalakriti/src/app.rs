#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::config::{AppConfig, ConfigLoadStatus, load_config};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::state::State;
use crate::widgets::Widgets;
use crate::widgets::navigation::{NavigationEvent, NavigationWidget};
use crate::widgets::pages::{PagesEvent, PagesWidget};
use crate::widgets::router::{RouterEvent, RouterIntent, RouterWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Navigation shell widget
    Navigation(NavigationEvent),
    // Router widget
    Router(RouterEvent),
    // Pages widget
    Pages(PagesEvent),
    // Direct operations
    SplashTick,
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = read_config();

        let mut theme_manager = ThemeManager::new();
        theme_manager.set_custom_palette(&config.palette);
        let fonts = FontsConfig::with_ui_size(config.font_size);

        let state = State::new(Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        });

        let widgets = Widgets {
            navigation: NavigationWidget::new(),
            router: RouterWidget::new(),
            pages: PagesWidget::new(),
        };

        let app = App {
            theme_manager,
            fonts,
            state,
            widgets,
        };

        let task = match config.start_route {
            Some(path) => {
                log::info!("opening configured start route {path}");
                Task::done(AppEvent::Router(RouterEvent::Intent(
                    RouterIntent::OpenPath(path),
                )))
            },
            None => Task::none(),
        };

        (app, task)
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Kalakriti")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

fn read_config() -> AppConfig {
    match load_config() {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => log::info!("settings loaded"),
                ConfigLoadStatus::Missing => {
                    log::debug!("no settings file, using defaults")
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!("settings file is invalid, using defaults: {message}")
                },
            }
            config
        },
        Err(err) => {
            log::warn!("settings read failed: {err}");
            AppConfig::default()
        },
    }
}
