// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes `Message`, an `update` that returns an `Event` for the
//! application, and a `view` built from a borrowed context.
//!
//! # Components
//!
//! - [`planning_toolbar`] - App bar with plan title, actions, and section tabs
//! - [`settings_dialog`] - Modal for renaming the plan
//! - [`footer`] - Site links and credits
//! - [`page`] - Placeholder page for non-planner routes
//! - [`notifications`] - Toast notifications, including action failures
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod footer;
pub mod notifications;
pub mod page;
pub mod planning_toolbar;
pub mod settings_dialog;
pub mod styles;
pub mod theming;
