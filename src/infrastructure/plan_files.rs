// SPDX-License-Identifier: MPL-2.0
//! Plan documents stored as JSON files under the data directory.
//!
//! Layout: `<data_dir>/plans/<encoded id>.json`. Only `id` and `title` are
//! interpreted; every other field of an imported document is kept verbatim
//! so nothing the planner does not understand is lost on re-export.

use crate::app::paths;
use crate::application::port::{PlanExporter, PlanImporter, PlanTitleStore};
use crate::config::DEFAULT_PLAN_TITLE;
use crate::domain::{FileSelection, PlanExport, PlanId};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PLANS_DIR: &str = "plans";
const PLAN_EXTENSION: &str = "json";

/// A stored plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    /// Missing in hand-written files; the file name is used instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PlanDocument {
    /// A fresh document with the default title.
    #[must_use]
    pub fn empty(plan_id: &PlanId) -> Self {
        Self {
            id: Some(plan_id.as_str().to_string()),
            title: DEFAULT_PLAN_TITLE.to_string(),
            extra: serde_json::Map::new(),
        }
    }
}

/// File-backed plan storage.
#[derive(Debug, Clone)]
pub struct PlanFiles {
    root: PathBuf,
}

impl PlanFiles {
    /// Stores plans under `data_dir/plans`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let mut root = data_dir.into();
        root.push(PLANS_DIR);
        Self { root }
    }

    /// Uses the resolved application data directory.
    #[must_use]
    pub fn from_data_dir() -> Option<Self> {
        paths::get_app_data_dir().map(Self::new)
    }

    /// Path of the document for `plan_id`.
    #[must_use]
    pub fn plan_path(&self, plan_id: &PlanId) -> PathBuf {
        self.root
            .join(format!("{}.{PLAN_EXTENSION}", file_stem_for(plan_id)))
    }

    /// Reads the stored document, if there is one.
    pub fn load(&self, plan_id: &PlanId) -> Result<Option<PlanDocument>> {
        let path = self.plan_path(plan_id);
        if !path.exists() {
            return Ok(None);
        }
        read_document(&path).map(Some)
    }

    /// Writes `document` as the stored copy of `plan_id`.
    pub fn store(&self, plan_id: &PlanId, document: &PlanDocument) -> Result<PathBuf> {
        let path = self.plan_path(plan_id);
        write_document(&path, document)?;
        Ok(path)
    }

    /// The stored document, or a fresh one if the plan was never saved.
    fn load_or_empty(&self, plan_id: &PlanId) -> Result<PlanDocument> {
        Ok(self
            .load(plan_id)?
            .unwrap_or_else(|| PlanDocument::empty(plan_id)))
    }
}

impl PlanExporter for PlanFiles {
    fn export_plan(&mut self, plan_id: &PlanId) -> Result<PlanExport> {
        let document = self.load_or_empty(plan_id)?;
        let contents = serde_json::to_vec_pretty(&document)?;
        Ok(PlanExport::new(
            format!("{}.{PLAN_EXTENSION}", file_stem_for(plan_id)),
            contents,
        ))
    }
}

impl PlanImporter for PlanFiles {
    fn import_plan(&mut self, selection: FileSelection) -> Result<()> {
        let mut document = read_document(selection.path())?;

        let id = match &document.id {
            Some(id) if !id.trim().is_empty() => PlanId::new(id.clone()),
            _ => {
                let stem = selection
                    .path()
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .ok_or_else(|| Error::Plan("plan file has no usable name".to_string()))?;
                PlanId::new(stem)
            }
        };
        document.id = Some(id.as_str().to_string());

        let stored = self.store(&id, &document)?;
        log::info!("imported plan {id} into {}", stored.display());
        Ok(())
    }
}

impl PlanTitleStore for PlanFiles {
    fn save_title(&mut self, plan_id: &PlanId, title: &str) -> Result<()> {
        let mut document = self.load_or_empty(plan_id)?;
        document.title = title.to_string();
        self.store(plan_id, &document)?;
        Ok(())
    }

    fn load_title(&self, plan_id: &PlanId) -> Result<Option<String>> {
        Ok(self.load(plan_id)?.map(|document| document.title))
    }
}

fn read_document(path: &Path) -> Result<PlanDocument> {
    let content = fs::read_to_string(path)?;
    let document = serde_json::from_str(&content)?;
    Ok(document)
}

fn write_document(path: &Path, document: &PlanDocument) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(document)?;
    fs::write(path, content)?;
    Ok(())
}

/// Turns an opaque plan id into a file stem. ASCII letters, digits, and `-`
/// are kept; every other byte (`_` included) becomes `_XX` in upper-case hex,
/// so distinct ids never share a file.
fn file_stem_for(plan_id: &PlanId) -> String {
    let id = plan_id.as_str();
    if id.is_empty() {
        return "_".to_string();
    }

    let mut stem = String::with_capacity(id.len());
    for byte in id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("_{byte:02X}"));
        }
    }
    stem
}
