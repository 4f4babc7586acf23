// SPDX-License-Identifier: MPL-2.0
//! In-memory user session.

use crate::application::port::AuthSession;
use crate::error::Result;

/// Session that lives for the lifetime of the process.
///
/// There is no identity provider behind it: it only remembers whether the
/// user is signed in so the profile controls have something to show.
#[derive(Debug, Clone, Default)]
pub struct LocalSession {
    signed_in: bool,
}

impl LocalSession {
    #[must_use]
    pub fn new(signed_in: bool) -> Self {
        Self { signed_in }
    }
}

impl AuthSession for LocalSession {
    fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    fn sign_out(&mut self) -> Result<()> {
        if self.signed_in {
            log::info!("signing out of local session");
        }
        self.signed_in = false;
        Ok(())
    }
}
