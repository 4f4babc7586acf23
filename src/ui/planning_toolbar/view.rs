// SPDX-License-Identifier: MPL-2.0
//! Rendering of the planning toolbar and its section tab strip.

use super::component::{Message, State};
use super::state::ToolbarViewState;
use crate::domain::{PlanId, Section, SECTIONS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::settings_dialog;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

const BACK_GLYPH: &str = "←";
const SETTINGS_GLYPH: &str = "⚙";
const BACK_TOOLTIP_KEY: &str = "toolbar-back-button";
const SETTINGS_TOOLTIP_KEY: &str = "toolbar-settings-button";

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub plan_id: &'a PlanId,
    pub view_state: &'a ToolbarViewState,
    pub state: &'a State,
    /// Show sign-in/sign-out controls.
    pub profile_controls: bool,
    pub signed_in: bool,
}

/// One tab of the section strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabEntry {
    pub section: Section,
    pub active: bool,
}

/// Tabs the strip renders for `view_state`: none while hidden, otherwise
/// every section in order with the one at `section_index` marked active.
#[must_use]
pub fn tab_entries(view_state: &ToolbarViewState) -> Vec<TabEntry> {
    if !view_state.tabs_visible() {
        return Vec::new();
    }

    SECTIONS
        .iter()
        .map(|&section| TabEntry {
            section,
            active: section.index() == view_state.section_index(),
        })
        .collect()
}

/// Render the app bar and, when visible, the tab strip.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_bar(&ctx));

    let tabs = tab_entries(ctx.view_state);
    if !tabs.is_empty() {
        content = content.push(build_tab_strip(ctx.i18n, &tabs));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::app_bar)
        .into()
}

/// The settings dialog while it is open. The caller lays it over the whole
/// window with [`settings_dialog::modal`].
pub fn settings_overlay<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.state.settings_open() {
        return None;
    }

    let dialog = settings_dialog::view(settings_dialog::ViewContext {
        i18n: ctx.i18n,
        plan_id: ctx.plan_id,
        state: ctx.state.settings(),
    });
    Some(dialog.map(Message::Settings))
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let back_button = styles::tooltip::below(
        bar_button(BACK_GLYPH.to_string(), Message::Back),
        ctx.i18n.tr(BACK_TOOLTIP_KEY),
    );

    let title = Text::new(ctx.view_state.title().to_string())
        .size(typography::TITLE_MD)
        .width(Length::Fill);

    let export_button = bar_button(ctx.i18n.tr("toolbar-export-button"), Message::ExportPlan);
    let import_button = bar_button(ctx.i18n.tr("toolbar-import-button"), Message::ImportPlan);
    let settings_button = styles::tooltip::below(
        bar_button(SETTINGS_GLYPH.to_string(), Message::ToggleSettings),
        ctx.i18n.tr(SETTINGS_TOOLTIP_KEY),
    );

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(back_button)
        .push(title)
        .push(export_button)
        .push(import_button)
        .push(settings_button);

    if ctx.profile_controls {
        let profile_button = if ctx.signed_in {
            bar_button(ctx.i18n.tr("toolbar-sign-out-button"), Message::SignOut)
        } else {
            bar_button(ctx.i18n.tr("toolbar-sign-in-button"), Message::SignIn)
        };
        row = row.push(profile_button);
    }

    row.into()
}

fn build_tab_strip<'a>(i18n: &I18n, tabs: &[TabEntry]) -> Element<'a, Message> {
    let row = tabs.iter().fold(Row::new(), |row, tab| {
        let label = Text::new(i18n.tr(tab.section.label_key()).to_uppercase())
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        let tab_button = button(label)
            .on_press(Message::TabSelected(tab.section.index()))
            .padding([spacing::SM, spacing::MD])
            .width(Length::Fill)
            .style(styles::button::tab(tab.active));

        let indicator = Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TAB_INDICATOR))
            .style(styles::container::tab_indicator(tab.active));

        row.push(
            Column::new()
                .width(Length::Fixed(sizing::TAB_MIN_WIDTH))
                .push(tab_button)
                .push(indicator),
        )
    });

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn bar_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::app_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::planning_toolbar::component::{update, Message};

    fn render(view_state: &ToolbarViewState, state: &State, profile_controls: bool) {
        let i18n = I18n::default();
        let plan_id = PlanId::new("cs-2027");
        let ctx = ViewContext {
            i18n: &i18n,
            plan_id: &plan_id,
            view_state,
            state,
            profile_controls,
            signed_in: false,
        };
        let _overlay = settings_overlay(&ctx);
        let _element = view(ctx);
    }

    #[test]
    fn hidden_strip_has_no_tabs() {
        let mut view_state = ToolbarViewState::default();
        view_state.hide_tabs();
        assert!(tab_entries(&view_state).is_empty());
    }

    #[test]
    fn visible_strip_has_plan_then_more() {
        let view_state = ToolbarViewState::default();
        let tabs = tab_entries(&view_state);
        let sections: Vec<Section> = tabs.iter().map(|tab| tab.section).collect();
        assert_eq!(sections, vec![Section::Plan, Section::More]);
    }

    #[test]
    fn tab_labels_read_plan_and_more() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        let labels: Vec<String> = tab_entries(&ToolbarViewState::default())
            .iter()
            .map(|tab| i18n.tr(tab.section.label_key()))
            .collect();
        assert_eq!(labels, vec!["Plan".to_string(), "More".to_string()]);
    }

    #[test]
    fn glyph_buttons_have_translated_tooltips() {
        let english = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        assert_eq!(english.tr(BACK_TOOLTIP_KEY), "Back");
        assert_eq!(english.tr(SETTINGS_TOOLTIP_KEY), "Plan settings");

        let french = I18n::new(Some("fr".into()), &crate::config::Config::default());
        assert_eq!(french.tr(BACK_TOOLTIP_KEY), "Retour");
    }

    #[test]
    fn active_tab_follows_section_index() {
        let mut view_state = ToolbarViewState::default();
        view_state.set_section(1);
        let active: Vec<bool> = tab_entries(&view_state).iter().map(|t| t.active).collect();
        assert_eq!(active, vec![false, true]);
    }

    #[test]
    fn out_of_range_index_marks_no_tab_active() {
        let mut view_state = ToolbarViewState::default();
        view_state.set_section(9);
        let tabs = tab_entries(&view_state);
        assert_eq!(tabs.len(), 2);
        assert!(tabs.iter().all(|tab| !tab.active));
    }

    #[test]
    fn toolbar_view_renders() {
        render(&ToolbarViewState::default(), &State::default(), false);
    }

    #[test]
    fn toolbar_view_renders_without_tabs() {
        let mut view_state = ToolbarViewState::default();
        view_state.hide_tabs();
        render(&view_state, &State::default(), false);
    }

    #[test]
    fn toolbar_view_renders_with_profile_controls() {
        render(&ToolbarViewState::default(), &State::default(), true);
    }

    #[test]
    fn settings_overlay_only_while_open() {
        let i18n = I18n::default();
        let plan_id = PlanId::new("cs-2027");
        let view_state = ToolbarViewState::default();
        let mut state = State::default();

        let closed = ViewContext {
            i18n: &i18n,
            plan_id: &plan_id,
            view_state: &view_state,
            state: &state,
            profile_controls: false,
            signed_in: false,
        };
        assert!(settings_overlay(&closed).is_none());

        let _ = update(&mut state, Message::ToggleSettings, view_state.title());
        let open = ViewContext {
            i18n: &i18n,
            plan_id: &plan_id,
            view_state: &view_state,
            state: &state,
            profile_controls: false,
            signed_in: false,
        };
        assert!(settings_overlay(&open).is_some());
    }
}
