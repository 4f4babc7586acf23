// SPDX-License-Identifier: MPL-2.0
//! Toast cards and the bottom-right overlay that stacks them.

use super::manager::{Manager, Message, NotificationId};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

const DISMISS_GLYPH: &str = "✕";

/// Render one toast: `[glyph] [message] [dismiss]`.
pub fn view<'a>(
    id: NotificationId,
    notification: &Notification,
    i18n: &I18n,
) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let glyph = Text::new(notification.severity().glyph())
        .size(typography::TITLE_SM)
        .color(accent);

    let message = Text::new(notification.text(i18n))
        .size(typography::BODY)
        .width(Length::Fill);

    let dismiss = button(Text::new(DISMISS_GLYPH).size(typography::CAPTION))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(message)
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent))
        .into()
}

/// Render every visible toast, or `None` when there is nothing to show.
pub fn overlay<'a>(manager: &Manager, i18n: &I18n) -> Option<Element<'a, Message>> {
    let toasts: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|(id, notification)| view(id, notification, i18n))
        .collect();

    if toasts.is_empty() {
        return None;
    }

    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Some(
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into(),
    )
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(base.text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    }
    .map(|a| {
        Background::Color(Color {
            a,
            ..palette::GRAY_400
        })
    });

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn toast_border_uses_severity_color() {
        let style = toast_container_style(&Theme::Dark, Severity::Error.color());
        assert_eq!(style.border.color, palette::ERROR_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn empty_manager_has_no_overlay() {
        let i18n = I18n::default();
        assert!(overlay(&Manager::new(), &i18n).is_none());
    }

    #[test]
    fn overlay_renders_visible_toasts() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-plan-imported"));
        manager.push(Notification::warning("notification-config-load-error"));
        assert!(overlay(&manager, &i18n).is_some());
    }
}
