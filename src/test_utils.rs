// SPDX-License-Identifier: MPL-2.0
//! Recording fakes for the collaborator ports.
//!
//! Every fake handed out by a [`Recorder`] appends to the same call log, so a
//! test can box them into [`Collaborators`] and still inspect what the
//! application asked for afterwards.

use crate::app::Collaborators;
use crate::application::port::{
    AuthSession, ExternalLinks, Navigator, PlanExporter, PlanImporter, PlanTitleStore, Route,
};
use crate::domain::{FileSelection, PlanExport, PlanId};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// One collaborator call, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GoTo(String),
    SignOut,
    ExportPlan(PlanId),
    ImportPlan(PathBuf),
    SaveTitle(PlanId, String),
    OpenLink(String),
}

#[derive(Debug)]
struct Shared {
    calls: Vec<Call>,
    failure: Option<Error>,
    current_path: String,
    signed_in: bool,
    titles: HashMap<PlanId, String>,
}

impl Default for Shared {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            failure: None,
            current_path: Route::Planner.path().to_string(),
            signed_in: true,
            titles: HashMap::new(),
        }
    }
}

/// Shared call log and behavior switches for the fakes.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    shared: Rc<RefCell<Shared>>,
}

impl Recorder {
    /// Calls recorded so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.shared.borrow().calls.clone()
    }

    /// Makes every later call fail with `error`. Calls are still recorded.
    pub fn fail_with(&self, error: Error) {
        self.shared.borrow_mut().failure = Some(error);
    }

    #[must_use]
    pub fn navigated_path(&self) -> String {
        self.shared.borrow().current_path.clone()
    }

    /// Pre-stores a title, as if saved in an earlier session.
    pub fn store_title(&self, plan_id: &PlanId, title: &str) {
        self.shared
            .borrow_mut()
            .titles
            .insert(plan_id.clone(), title.to_string());
    }

    /// Boxes one fake per port.
    #[must_use]
    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            navigator: Box::new(self.clone()),
            auth: Box::new(self.clone()),
            exporter: Box::new(self.clone()),
            importer: Box::new(self.clone()),
            titles: Box::new(self.clone()),
            links: Box::new(self.clone()),
        }
    }

    fn record(&self, call: Call) -> Result<()> {
        let mut shared = self.shared.borrow_mut();
        shared.calls.push(call);
        match &shared.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl Navigator for Recorder {
    fn go_to(&mut self, path: &str) -> Result<()> {
        self.record(Call::GoTo(path.to_string()))?;
        self.shared.borrow_mut().current_path = path.to_string();
        Ok(())
    }

    // The fake cannot lend out its RefCell contents, so it reports the
    // matching static route path instead.
    fn current_path(&self) -> &str {
        Route::from_path(&self.shared.borrow().current_path).map_or("", Route::path)
    }
}

impl AuthSession for Recorder {
    fn is_signed_in(&self) -> bool {
        self.shared.borrow().signed_in
    }

    fn sign_out(&mut self) -> Result<()> {
        self.record(Call::SignOut)?;
        self.shared.borrow_mut().signed_in = false;
        Ok(())
    }
}

impl PlanExporter for Recorder {
    fn export_plan(&mut self, plan_id: &PlanId) -> Result<PlanExport> {
        self.record(Call::ExportPlan(plan_id.clone()))?;
        Ok(PlanExport::new(format!("{plan_id}.json"), b"{}".to_vec()))
    }
}

impl PlanImporter for Recorder {
    fn import_plan(&mut self, selection: FileSelection) -> Result<()> {
        self.record(Call::ImportPlan(selection.path().to_path_buf()))
    }
}

impl PlanTitleStore for Recorder {
    fn save_title(&mut self, plan_id: &PlanId, title: &str) -> Result<()> {
        self.record(Call::SaveTitle(plan_id.clone(), title.to_string()))?;
        self.store_title(plan_id, title);
        Ok(())
    }

    fn load_title(&self, plan_id: &PlanId) -> Result<Option<String>> {
        Ok(self.shared.borrow().titles.get(plan_id).cloned())
    }
}

impl ExternalLinks for Recorder {
    fn open(&mut self, url: &str) -> Result<()> {
        self.record(Call::OpenLink(url.to_string()))
    }
}
