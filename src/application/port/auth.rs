// SPDX-License-Identifier: MPL-2.0
//! Authentication port.
//!
//! Signing in is not part of this port: the toolbar reaches the sign-in page
//! through [`Navigator`](super::Navigator) with [`Route::SignIn`](super::Route::SignIn).

use crate::error::Result;

/// The current user session.
pub trait AuthSession {
    /// Whether a user is currently signed in.
    fn is_signed_in(&self) -> bool;

    /// Ends the current session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`](crate::error::Error::Auth) if the session
    /// could not be closed.
    fn sign_out(&mut self) -> Result<()>;
}
