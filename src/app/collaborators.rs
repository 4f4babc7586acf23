// SPDX-License-Identifier: MPL-2.0
//! The services the planner talks to, held as trait objects so tests and
//! embedders can swap any of them.

use super::paths;
use super::router::Router;
use crate::application::port::{
    AuthSession, ExternalLinks, Navigator, PlanExporter, PlanImporter, PlanTitleStore,
};
use crate::infrastructure::{LocalSession, PlanFiles, SystemBrowser};

pub struct Collaborators {
    pub navigator: Box<dyn Navigator>,
    pub auth: Box<dyn AuthSession>,
    pub exporter: Box<dyn PlanExporter>,
    pub importer: Box<dyn PlanImporter>,
    pub titles: Box<dyn PlanTitleStore>,
    pub links: Box<dyn ExternalLinks>,
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("current_path", &self.navigator.current_path())
            .field("signed_in", &self.auth.is_signed_in())
            .finish_non_exhaustive()
    }
}

impl Collaborators {
    /// File-backed plans, the in-memory router and session, and the system
    /// browser.
    #[must_use]
    pub fn desktop() -> Self {
        let plans = PlanFiles::from_data_dir().unwrap_or_else(|| {
            let fallback = std::env::temp_dir().join(paths::APP_NAME);
            log::warn!(
                "no data directory available, storing plans under {}",
                fallback.display()
            );
            PlanFiles::new(fallback)
        });

        Self {
            navigator: Box::new(Router::default()),
            auth: Box::new(LocalSession::default()),
            exporter: Box::new(plans.clone()),
            importer: Box::new(plans.clone()),
            titles: Box::new(plans),
            links: Box::new(SystemBrowser),
        }
    }
}
