// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::footer;
use crate::ui::notifications;
use crate::ui::page;
use crate::ui::planning_toolbar;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(planning_toolbar::Message),
    Footer(footer::Message),
    Page(page::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the import file picker; `None` when cancelled.
    ImportFileSelected(Option<PathBuf>),
    /// Outcome of writing an export; `Ok(None)` when the save dialog was
    /// cancelled.
    ExportFinished(Result<Option<PathBuf>, Error>),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Plan to open. Defaults to [`DEFAULT_PLAN_ID`](crate::config::DEFAULT_PLAN_ID).
    pub plan_id: Option<String>,
    /// Optional data directory override (plan files).
    /// Takes precedence over `COMET_PLANNER_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (`settings.toml`).
    /// Takes precedence over `COMET_PLANNER_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Start with the section tab strip hidden.
    pub hide_tabs: bool,
}
