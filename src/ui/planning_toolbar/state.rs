// SPDX-License-Identifier: MPL-2.0
//! View state shared by the planning toolbar and the planner screen.

use crate::config::{DEFAULT_PLAN_TITLE, DEFAULT_SECTION_INDEX, DEFAULT_SHOW_TABS};
use crate::domain::Section;

/// Active section, display title, and tab strip visibility.
///
/// The toolbar only reads this; the owner applies changes in response to
/// toolbar events. No value is validated: any index and any title (empty
/// included) is stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarViewState {
    section_index: usize,
    title: String,
    tabs_visible: bool,
}

impl Default for ToolbarViewState {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION_INDEX, DEFAULT_PLAN_TITLE)
    }
}

impl ToolbarViewState {
    /// Creates a view state with the tab strip visible.
    pub fn new(section_index: usize, title: impl Into<String>) -> Self {
        Self {
            section_index,
            title: title.into(),
            tabs_visible: DEFAULT_SHOW_TABS,
        }
    }

    #[must_use]
    pub fn section_index(&self) -> usize {
        self.section_index
    }

    /// Stores `index` verbatim. Out-of-range values are kept and simply
    /// select no tab.
    pub fn set_section(&mut self, index: usize) {
        self.section_index = index;
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn tabs_visible(&self) -> bool {
        self.tabs_visible
    }

    pub fn hide_tabs(&mut self) {
        self.tabs_visible = false;
    }

    pub fn show_tabs(&mut self) {
        self.tabs_visible = true;
    }

    /// The section the stored index points at, or `None` when out of range.
    #[must_use]
    pub fn active_section(&self) -> Option<Section> {
        Section::from_index(self.section_index)
    }
}
