// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the planner's external collaborators.
//!
//! # Available Ports
//!
//! - [`auth`]: signed-in state and sign-out
//! - [`navigation`]: in-app route changes
//! - [`plan`]: export, import, and title persistence of a plan
//! - [`links`]: opening external web links
//!
//! # Design Notes
//!
//! - Calls are synchronous and fire-and-forget from the UI's point of view;
//!   the app shell reports any `Err` to the user and carries on
//! - Traits use domain types only (no Iced types)
//! - Long-running work (file pickers) happens before the port call, as an
//!   Iced `Task` in the caller

pub mod auth;
pub mod links;
pub mod navigation;
pub mod plan;

pub use auth::AuthSession;
pub use links::ExternalLinks;
pub use navigation::{Navigator, Route};
pub use plan::{PlanExporter, PlanImporter, PlanTitleStore};
