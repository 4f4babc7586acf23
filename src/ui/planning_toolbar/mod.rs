// SPDX-License-Identifier: MPL-2.0
//! Planning toolbar: back button, plan title, export/import, settings, and
//! the section tab strip.
//!
//! State flows down and events flow up. The application owns the
//! [`ToolbarViewState`] and the toolbar-local [`State`]; [`update`] changes
//! only the latter and reports everything else as an [`Event`].

pub mod component;
pub mod state;
pub mod view;

pub use component::{update, Event, Message, State};
pub use state::ToolbarViewState;
pub use view::{settings_overlay, tab_entries, view, TabEntry, ViewContext};
