// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: the collaborator traits the planner shell depends on
//!
//! The UI produces events; the app shell turns them into port calls. Concrete
//! adapters live in [`crate::infrastructure`] (desktop) and
//! [`crate::test_utils`] (recording fakes).

pub mod port;
