// SPDX-License-Identifier: MPL-2.0
//! View composition: the current screen, the settings modal, and toasts.

use super::router::Screen;
use super::Message;
use crate::application::port::Route;
use crate::domain::PlanId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, toast};
use crate::ui::planning_toolbar::{self, ToolbarViewState};
use crate::ui::{footer, page, settings_dialog, styles};
use iced::widget::{Column, Container, Scrollable, Stack, Text};
use iced::{Element, Length};

/// Contextual data needed to render the application.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub plan_id: &'a PlanId,
    pub view_state: &'a ToolbarViewState,
    pub toolbar: &'a planning_toolbar::State,
    pub profile_controls: bool,
    pub signed_in: bool,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolbar_ctx = planning_toolbar::ViewContext {
        i18n: ctx.i18n,
        plan_id: ctx.plan_id,
        view_state: ctx.view_state,
        state: ctx.toolbar,
        profile_controls: ctx.profile_controls,
        signed_in: ctx.signed_in,
    };

    let mut current_view = match ctx.screen {
        Screen::Planner => {
            let dialog = planning_toolbar::settings_overlay(&toolbar_ctx);
            let planner = view_planner(toolbar_ctx, ctx.i18n, ctx.view_state);
            match dialog {
                Some(dialog) => settings_dialog::modal(
                    planner,
                    dialog.map(Message::Toolbar),
                    Message::Toolbar(planning_toolbar::Message::ToggleSettings),
                ),
                None => planner,
            }
        }
        Screen::Page(route) => view_page(ctx.i18n, route),
    };

    if let Some(toasts) = toast::overlay(ctx.notifications, ctx.i18n) {
        current_view = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(current_view)
            .push(toasts.map(Message::Notification))
            .into();
    }

    current_view
}

fn view_planner<'a>(
    toolbar_ctx: planning_toolbar::ViewContext<'a>,
    i18n: &'a I18n,
    view_state: &'a ToolbarViewState,
) -> Element<'a, Message> {
    let toolbar = planning_toolbar::view(toolbar_ctx).map(Message::Toolbar);

    let body = Column::new()
        .width(Length::Fill)
        .push(section_body(i18n, view_state))
        .push(footer::view(i18n).map(Message::Footer));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(toolbar)
        .push(Scrollable::new(body).height(Length::Fill))
        .into()
}

fn section_body<'a>(i18n: &I18n, view_state: &ToolbarViewState) -> Element<'a, Message> {
    // An out-of-range section index leaves the body empty.
    let text = view_state
        .active_section()
        .map(|section| i18n.tr(section.body_key()))
        .unwrap_or_default();

    let panel = Container::new(Text::new(text).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel);

    Container::new(panel)
        .width(Length::Fill)
        .padding(spacing::MD)
        .into()
}

fn view_page<'a>(i18n: &I18n, route: Route) -> Element<'a, Message> {
    let body = Column::new()
        .width(Length::Fill)
        .push(page::view(i18n, route).map(Message::Page))
        .push(footer::view(i18n).map(Message::Footer));

    Scrollable::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Notification;

    fn render(screen: Screen, view_state: &ToolbarViewState, manager: &notifications::Manager) {
        let i18n = I18n::default();
        let plan_id = PlanId::new("cs-2027");
        let toolbar = planning_toolbar::State::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            screen,
            plan_id: &plan_id,
            view_state,
            toolbar: &toolbar,
            profile_controls: true,
            signed_in: false,
            notifications: manager,
        });
    }

    #[test]
    fn planner_screen_renders() {
        render(
            Screen::Planner,
            &ToolbarViewState::default(),
            &notifications::Manager::new(),
        );
    }

    #[test]
    fn planner_with_out_of_range_section_renders() {
        let mut view_state = ToolbarViewState::default();
        view_state.set_section(42);
        render(Screen::Planner, &view_state, &notifications::Manager::new());
    }

    #[test]
    fn route_pages_render_with_toasts() {
        let mut manager = notifications::Manager::new();
        manager.push(Notification::success("notification-title-saved"));
        for route in Route::ALL {
            render(Screen::Page(route), &ToolbarViewState::default(), &manager);
        }
    }
}
