// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

// ==========================================================================
// Planner Defaults
// ==========================================================================

/// Title shown in the toolbar before the user renames the plan.
pub const DEFAULT_PLAN_TITLE: &str = "Your plan";

/// Tab selected when the planner opens (0 = "Plan").
pub const DEFAULT_SECTION_INDEX: usize = 0;

/// Whether the section tab strip is visible when the planner opens.
pub const DEFAULT_SHOW_TABS: bool = true;

/// Plan identifier used when none is given on the command line.
pub const DEFAULT_PLAN_ID: &str = "default";

// ==========================================================================
// Feature Defaults
// ==========================================================================

/// Sign-in/sign-out controls are hidden unless enabled in `settings.toml`.
pub const DEFAULT_PROFILE_CONTROLS: bool = false;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Interval between notification auto-dismiss checks, in milliseconds.
pub const NOTIFICATION_TICK_MS: u64 = 200;
