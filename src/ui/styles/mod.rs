// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the toolbar, dialog, footer, toasts, and tooltips.

pub mod button;
pub mod container;
pub mod tooltip;
