// SPDX-License-Identifier: MPL-2.0
//! Toolbar-local state and message handling.

use crate::application::port::Route;
use crate::ui::settings_dialog;

/// State private to the toolbar: whether the settings dialog is open and
/// the dialog's draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    settings_open: bool,
    settings: settings_dialog::State,
}

impl State {
    #[must_use]
    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    #[must_use]
    pub fn settings(&self) -> &settings_dialog::State {
        &self.settings
    }

    /// Closes the settings dialog. Called once a title save is acknowledged.
    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }
}

/// Messages emitted by toolbar widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    TabSelected(usize),
    ExportPlan,
    ImportPlan,
    ToggleSettings,
    SignIn,
    SignOut,
    Settings(settings_dialog::Message),
}

/// Events propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    TabChanged(usize),
    ExportPlan,
    ImportPlanRequested,
    Navigate(Route),
    SignOut,
    /// A new title the user wants to keep. Not yet applied anywhere.
    TitleSubmitted(String),
}

/// Process a toolbar message. Only toolbar-local state changes here; the
/// returned event carries everything else upward.
pub fn update(state: &mut State, message: Message, current_title: &str) -> Event {
    match message {
        Message::Back => Event::Navigate(Route::AppHome),
        Message::TabSelected(index) => Event::TabChanged(index),
        Message::ExportPlan => Event::ExportPlan,
        Message::ImportPlan => Event::ImportPlanRequested,
        Message::ToggleSettings => {
            state.settings_open = !state.settings_open;
            if state.settings_open {
                state.settings.reset(current_title);
            }
            Event::None
        }
        Message::SignIn => Event::Navigate(Route::SignIn),
        Message::SignOut => Event::SignOut,
        Message::Settings(message) => {
            match settings_dialog::update(&mut state.settings, message) {
                settings_dialog::Event::None => Event::None,
                settings_dialog::Event::Close => {
                    state.settings_open = false;
                    Event::None
                }
                settings_dialog::Event::Save(title) => Event::TitleSubmitted(title),
            }
        }
    }
}
