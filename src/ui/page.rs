// SPDX-License-Identifier: MPL-2.0
//! Placeholder page for routes other than the planner.

use crate::application::port::Route;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    OpenPlanner,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Route),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::OpenPlanner => Event::Navigate(Route::Planner),
    }
}

pub fn view<'a>(i18n: &I18n, route: Route) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr(route.title_key())).size(typography::TITLE_LG);
    let body = Text::new(i18n.tr("page-coming-soon")).size(typography::BODY);

    let open_planner = button(Text::new(i18n.tr("page-open-planner-button")))
        .on_press(Message::OpenPlanner)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(body)
        .push(open_planner);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_planner_navigates_to_planner_route() {
        assert_eq!(update(Message::OpenPlanner), Event::Navigate(Route::Planner));
    }

    #[test]
    fn page_renders_for_every_route() {
        let i18n = I18n::default();
        for route in Route::ALL {
            let _element = view(&i18n, route);
        }
    }
}
