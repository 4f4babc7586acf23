// SPDX-License-Identifier: MPL-2.0
//! Plan transfer and settings ports.
//!
//! The toolbar asks for an export or hands over a file selection; what a plan
//! looks like on disk is entirely up to the implementor.

use crate::domain::{FileSelection, PlanExport, PlanId};
use crate::error::Result;

/// Produces a downloadable copy of a plan.
pub trait PlanExporter {
    /// Produces the exported copy of the plan identified by `plan_id`.
    /// Choosing where it goes is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan could not be read or serialized.
    fn export_plan(&mut self, plan_id: &PlanId) -> Result<PlanExport>;
}

/// Brings a plan file chosen by the user into the planner.
pub trait PlanImporter {
    /// Imports the plan found at `selection`. The selection is passed exactly
    /// as the file picker returned it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Plan`](crate::error::Error::Plan) for unreadable or
    /// malformed files.
    fn import_plan(&mut self, selection: FileSelection) -> Result<()>;
}

/// Persists plan settings edited in the settings dialog.
pub trait PlanTitleStore {
    /// Stores `title` as the display title of `plan_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the title could not be persisted.
    fn save_title(&mut self, plan_id: &PlanId, title: &str) -> Result<()>;

    /// Returns the stored title of `plan_id`, or `None` if it was never saved.
    ///
    /// # Errors
    ///
    /// Returns an error if stored settings exist but cannot be read.
    fn load_title(&self, plan_id: &PlanId) -> Result<Option<String>>;
}
