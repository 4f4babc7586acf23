// SPDX-License-Identifier: MPL-2.0
//! Desktop adapters for the ports in `application::port`.
//!
//! # Available Adapters
//!
//! - [`session`]: in-memory user session (implements [`AuthSession`])
//! - [`plan_files`]: JSON plan documents in the data directory (implements
//!   [`PlanExporter`], [`PlanImporter`], [`PlanTitleStore`])
//! - [`browser`]: the platform URL opener (implements [`ExternalLinks`])
//!
//! Navigation is implemented by the app's own router
//! ([`crate::app::router::Router`]).
//!
//! [`AuthSession`]: crate::application::port::AuthSession
//! [`PlanExporter`]: crate::application::port::PlanExporter
//! [`PlanImporter`]: crate::application::port::PlanImporter
//! [`PlanTitleStore`]: crate::application::port::PlanTitleStore
//! [`ExternalLinks`]: crate::application::port::ExternalLinks

pub mod browser;
pub mod plan_files;
pub mod session;

pub use browser::SystemBrowser;
pub use plan_files::{PlanDocument, PlanFiles};
pub use session::LocalSession;
