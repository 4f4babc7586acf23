// SPDX-License-Identifier: MPL-2.0
//! Domain types shared by the UI, the ports, and the adapters.
//!
//! Nothing here depends on Iced or on any concrete collaborator.

pub mod planner;

pub use planner::{FileSelection, PlanExport, PlanId, Section, SECTIONS};
