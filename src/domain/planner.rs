// SPDX-License-Identifier: MPL-2.0
//! Plan identity, toolbar sections, and file selections.

use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// PlanId
// =============================================================================

/// Opaque identifier of a degree plan.
///
/// The planner never inspects it; it is handed as-is to the collaborators
/// that own plan storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlanId(String);

impl PlanId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlanId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// Section
// =============================================================================

/// A named section of the planner, shown as one tab of the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Plan,
    More,
}

/// Sections in tab order.
pub const SECTIONS: [Section; 2] = [Section::Plan, Section::More];

impl Section {
    /// Returns the section at `index` in tab order, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        SECTIONS.get(index).copied()
    }

    /// Position of this section in tab order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Section::Plan => 0,
            Section::More => 1,
        }
    }

    /// i18n key of the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Plan => "toolbar-tab-plan",
            Section::More => "toolbar-tab-more",
        }
    }

    /// i18n key of the placeholder body shown under the tab strip.
    #[must_use]
    pub fn body_key(self) -> &'static str {
        match self {
            Section::Plan => "planner-section-plan-body",
            Section::More => "planner-section-more-body",
        }
    }
}

// =============================================================================
// FileSelection
// =============================================================================

/// The raw outcome of the user picking a file to import.
///
/// Carries only what the picker returned. Reading and parsing the file is
/// the import collaborator's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    path: PathBuf,
}

impl FileSelection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// =============================================================================
// PlanExport
// =============================================================================

/// A downloadable copy of a plan, ready to be written wherever the user
/// chooses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanExport {
    file_name: String,
    contents: Vec<u8>,
}

impl PlanExport {
    pub fn new(file_name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// Suggested name for the save dialog.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_in_tab_order() {
        for (position, section) in SECTIONS.iter().enumerate() {
            assert_eq!(section.index(), position);
            assert_eq!(Section::from_index(position), Some(*section));
        }
    }

    #[test]
    fn from_index_out_of_range_is_none() {
        assert_eq!(Section::from_index(2), None);
        assert_eq!(Section::from_index(usize::MAX), None);
    }

    #[test]
    fn plan_id_is_passed_through_verbatim() {
        let id = PlanId::new("  weird/id?  ");
        assert_eq!(id.as_str(), "  weird/id?  ");
        assert_eq!(id.to_string(), "  weird/id?  ");
    }

    #[test]
    fn file_selection_keeps_path() {
        let selection = FileSelection::new("/tmp/plan.json");
        assert_eq!(selection.path(), Path::new("/tmp/plan.json"));
    }
}
