// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded in the binary. The active
//! locale is resolved from the CLI, then `settings.toml`, then the OS, and
//! falls back to `en-US`.

pub mod fluent;
