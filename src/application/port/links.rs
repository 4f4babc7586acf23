// SPDX-License-Identifier: MPL-2.0
//! External link port.

use crate::error::Result;

/// Opens web pages outside the application (e.g. footer resource links).
pub trait ExternalLinks {
    /// Opens `url` in the user's browser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::External`](crate::error::Error::External) when the
    /// platform could not hand the URL to a browser.
    fn open(&mut self, url: &str) -> Result<()>;
}
