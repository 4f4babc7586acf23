// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// The blue app bar behind the toolbar and tab strip.
pub fn app_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Underline of the selected tab.
pub fn tab_indicator(selected: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: selected.then_some(Background::Color(palette::ACCENT_500)),
        ..Default::default()
    }
}

/// Main footer body.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}

/// Darker band holding the footer caption.
pub fn footer_caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_800)),
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}

/// Dimmed backdrop behind a modal dialog.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Modal dialog surface.
pub fn dialog(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Surface of a section body or route page card.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_selected_tab_has_indicator() {
        assert!(tab_indicator(true)(&Theme::Light).background.is_some());
        assert!(tab_indicator(false)(&Theme::Light).background.is_none());
    }

    #[test]
    fn scrim_is_translucent() {
        match scrim(&Theme::Dark).background {
            Some(Background::Color(color)) => assert!(color.a > 0.0 && color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }
}
