// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the toolbar view state, the toolbar-local state,
//! the collaborators, and the toast manager. Component events are turned
//! into collaborator calls in [`update`]; failures end up as toasts there.

mod collaborators;
mod message;
pub mod paths;
pub mod router;
mod subscription;
mod update;
mod view;

pub use collaborators::Collaborators;
pub use message::{Flags, Message};
pub use router::{Router, Screen};

use crate::config::{self, Config, DEFAULT_PLAN_ID};
use crate::domain::PlanId;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::planning_toolbar::{self, ToolbarViewState};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    plan_id: PlanId,
    view_state: ToolbarViewState,
    toolbar: planning_toolbar::State,
    collaborators: Collaborators,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Show sign-in/sign-out in the toolbar.
    profile_controls: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("plan_id", &self.plan_id)
            .field("view_state", &self.view_state)
            .field("collaborators", &self.collaborators)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

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

    // iced 0.14 wants a `Fn` boot function; flags are consumed on the first
    // call and later calls start from defaults.
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

impl App {
    /// Loads `settings.toml`, resolves the locale, and wires the desktop
    /// collaborators.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_collaborators(flags, &config, Collaborators::desktop());
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Builds the application around the given collaborators.
    ///
    /// The initial title is the one stored for the plan, falling back to
    /// `[planner] default_title`.
    pub fn with_collaborators(flags: Flags, config: &Config, collaborators: Collaborators) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);
        let plan_id = PlanId::new(flags.plan_id.unwrap_or_else(|| DEFAULT_PLAN_ID.to_string()));
        let mut notifications = notifications::Manager::new();

        let title = match collaborators.titles.load_title(&plan_id) {
            Ok(Some(title)) => title,
            Ok(None) => config.planner.default_title.clone(),
            Err(err) => {
                log::warn!("could not load title of plan {plan_id}: {err}");
                notifications.push(Notification::failure(&err));
                config.planner.default_title.clone()
            }
        };

        let mut view_state = ToolbarViewState::new(config.planner.initial_section, title);
        if flags.hide_tabs || !config.planner.show_tabs {
            view_state.hide_tabs();
        }

        log::info!(
            "opening plan {plan_id} (locale {})",
            i18n.current_locale()
        );

        Self {
            i18n,
            plan_id,
            view_state,
            toolbar: planning_toolbar::State::default(),
            collaborators,
            notifications,
            theme_mode: config.general.theme_mode,
            profile_controls: config.features.profile_controls,
        }
    }

    /// What the window currently shows, derived from the navigator.
    #[must_use]
    pub fn screen(&self) -> Screen {
        Screen::for_path(self.collaborators.navigator.current_path())
    }

    #[must_use]
    pub fn view_state(&self) -> &ToolbarViewState {
        &self.view_state
    }

    #[must_use]
    pub fn toolbar_state(&self) -> &planning_toolbar::State {
        &self.toolbar
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.screen() {
            Screen::Planner => format!("{} - {app_name}", self.view_state.title()),
            Screen::Page(route) => format!("{} - {app_name}", self.i18n.tr(route.title_key())),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            plan_id: &self.plan_id,
            view_state: &mut self.view_state,
            toolbar: &mut self.toolbar,
            collaborators: &mut self.collaborators,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Toolbar(toolbar_message) => {
                update::handle_toolbar_message(&mut ctx, toolbar_message)
            }
            Message::Footer(footer_message) => {
                update::handle_footer_message(&mut ctx, footer_message)
            }
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::ImportFileSelected(path) => update::handle_import_selection(&mut ctx, path),
            Message::ExportFinished(outcome) => update::handle_export_finished(&mut ctx, outcome),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen(),
            plan_id: &self.plan_id,
            view_state: &self.view_state,
            toolbar: &self.toolbar,
            profile_controls: self.profile_controls,
            signed_in: self.collaborators.auth.is_signed_in(),
            notifications: &self.notifications,
        })
    }
}
