// SPDX-License-Identifier: MPL-2.0
//! `comet_planner` is the desktop shell of the Comet Planning degree planner,
//! built with the Iced GUI framework.
//!
//! It provides the planning toolbar (plan title, export/import, settings,
//! section tabs) and the site footer, and delegates every side effect to
//! collaborators behind the traits in [`application::port`].

#![doc(html_root_url = "https://docs.rs/comet_planner/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
#[doc(hidden)]
pub mod test_utils;
pub mod ui;
