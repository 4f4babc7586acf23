// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use comet_planner::ui::design_tokens::{palette, sizing, spacing, typography};
    use comet_planner::ui::styles::{button, container};
    use comet_planner::ui::theming::ThemeMode;
    use iced::widget::button::Status;
    use iced::Theme;

    #[test]
    fn all_button_styles_are_callable() {
        let theme = Theme::Dark;
        for status in [
            Status::Active,
            Status::Hovered,
            Status::Pressed,
            Status::Disabled,
        ] {
            let _ = button::primary(&theme, status);
            let _ = button::secondary(&theme, status);
            let _ = button::app_bar(&theme, status);
            let _ = button::tab(true)(&theme, status);
            let _ = button::footer_link(&theme, status);
        }
    }

    #[test]
    fn all_container_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = container::app_bar(&theme);
            let _ = container::footer(&theme);
            let _ = container::footer_caption(&theme);
            let _ = container::scrim(&theme);
            let _ = container::dialog(&theme);
            let _ = container::panel(&theme);
        }
    }

    #[test]
    fn app_bar_uses_brand_color() {
        let style = container::app_bar(&Theme::Light);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn layout_tokens_fit_together() {
        assert!(sizing::TAB_MIN_WIDTH * 2.0 < sizing::FOOTER_MAX_WIDTH);
        assert!(sizing::DIALOG_WIDTH > sizing::TOAST_WIDTH);
        assert!(typography::TITLE_MD > typography::BODY);
        assert!(spacing::LG > spacing::XS);
    }

    #[test]
    fn explicit_theme_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.to_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_theme(), Theme::Dark);
    }
}
