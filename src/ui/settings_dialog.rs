// SPDX-License-Identifier: MPL-2.0
//! Plan settings dialog opened from the planning toolbar.
//!
//! The dialog edits a draft copy of the plan title. Saving emits the trimmed
//! draft; the application persists it and, on success, updates the toolbar
//! view state and closes the dialog.

use crate::domain::PlanId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{
    button, center, mouse_area, opaque, text_input, Column, Container, Row, Space, Stack, Text,
};
use iced::{Element, Length};

/// Draft state of the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    draft: String,
}

impl State {
    /// Discards any edit and starts again from `title`.
    pub fn reset(&mut self, title: &str) {
        self.draft = title.to_string();
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// A blank title cannot be saved.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.draft.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    Save,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Trimmed, non-empty title to persist.
    Save(String),
    Close,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::DraftChanged(draft) => {
            state.draft = draft;
            Event::None
        }
        Message::Save => {
            if state.can_save() {
                Event::Save(state.draft.trim().to_string())
            } else {
                Event::None
            }
        }
        Message::Close => Event::Close,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub plan_id: &'a PlanId,
    pub state: &'a State,
}

/// Render the dialog card (without the backdrop, see [`modal`]).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("settings-dialog-title")).size(typography::TITLE_SM);

    let plan_label = Text::new(
        ctx.i18n
            .tr_with_args("planner-plan-id-label", &[("id", ctx.plan_id.as_str())]),
    )
    .size(typography::CAPTION);

    let placeholder = ctx.i18n.tr("settings-dialog-title-placeholder");
    let mut input = text_input(&placeholder, ctx.state.draft())
        .on_input(Message::DraftChanged)
        .padding(spacing::XS)
        .width(Length::Fill);
    if ctx.state.can_save() {
        input = input.on_submit(Message::Save);
    }

    let field = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("settings-dialog-title-label")).size(typography::BODY))
        .push(input);

    let close_button = button(Text::new(ctx.i18n.tr("settings-dialog-close-button")))
        .on_press(Message::Close)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    // Without on_press the button renders as disabled.
    let save_button = button(Text::new(ctx.i18n.tr("settings-dialog-save-button")))
        .on_press_maybe(ctx.state.can_save().then_some(Message::Save))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let actions = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Space::new().width(Length::Fill))
        .push(close_button)
        .push(save_button);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(plan_label)
        .push(field)
        .push(actions);

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

/// Lay `dialog` over `base` on a dimmed backdrop. Pressing the backdrop
/// produces `on_dismiss`; input never reaches `base` while the dialog is up.
pub fn modal<'a, M>(
    base: impl Into<Element<'a, M>>,
    dialog: impl Into<Element<'a, M>>,
    on_dismiss: M,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let backdrop = mouse_area(
        center(opaque(dialog)).style(styles::container::scrim),
    )
    .on_press(on_dismiss);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(opaque(backdrop))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(draft: &str) -> State {
        let mut state = State::default();
        state.reset(draft);
        state
    }

    #[test]
    fn editing_updates_draft_without_event() {
        let mut state = state_with("Your plan");
        let event = update(&mut state, Message::DraftChanged("CS 2027".into()));
        assert_eq!(event, Event::None);
        assert_eq!(state.draft(), "CS 2027");
    }

    #[test]
    fn save_emits_trimmed_title() {
        let mut state = state_with("  Spring plan  ");
        assert_eq!(
            update(&mut state, Message::Save),
            Event::Save("Spring plan".to_string())
        );
    }

    #[test]
    fn blank_draft_cannot_be_saved() {
        let mut state = state_with("   ");
        assert!(!state.can_save());
        assert_eq!(update(&mut state, Message::Save), Event::None);
    }

    #[test]
    fn close_emits_close() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Close), Event::Close);
    }

    #[test]
    fn reset_discards_edits() {
        let mut state = state_with("first");
        let _ = update(&mut state, Message::DraftChanged("edited".into()));
        state.reset("first");
        assert_eq!(state.draft(), "first");
    }

    #[test]
    fn dialog_view_renders() {
        let i18n = I18n::default();
        let plan_id = PlanId::new("cs-2027");
        let state = state_with("Your plan");
        let _element = view(ViewContext {
            i18n: &i18n,
            plan_id: &plan_id,
            state: &state,
        });
    }

    #[test]
    fn dialog_view_renders_with_blank_draft() {
        let i18n = I18n::default();
        let plan_id = PlanId::new("cs-2027");
        let state = State::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            plan_id: &plan_id,
            state: &state,
        });
    }
}
