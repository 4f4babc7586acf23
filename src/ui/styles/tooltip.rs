// SPDX-License-Identifier: MPL-2.0
//! Tooltips for the glyph-only toolbar buttons.

use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

/// Dark bubble with light text. Always high-contrast against the blue bar.
pub fn bubble(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_100),
        border: Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Wraps `content` with a tooltip shown below it.
pub fn below<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(bubble);

    tooltip(content, tip, tooltip::Position::Bottom).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_contrasts_with_its_text() {
        let style = bubble(&Theme::Light);
        let Some(Background::Color(bg)) = style.background else {
            panic!("expected color background")
        };
        let text = style.text_color.expect("text color");
        assert!(bg.r < 0.5 && text.r > 0.5);
    }

    #[test]
    fn bubble_ignores_theme() {
        assert_eq!(
            bubble(&Theme::Light).background,
            bubble(&Theme::Dark).background
        );
    }
}
