// SPDX-License-Identifier: MPL-2.0
//! Opens web links with the platform's default handler.

use crate::application::port::ExternalLinks;
use crate::error::{Error, Result};

/// Hands http(s) URLs to the system browser through the `open` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl ExternalLinks for SystemBrowser {
    fn open(&mut self, url: &str) -> Result<()> {
        if !is_web_url(url) {
            return Err(Error::External(format!("refusing to open non-web URL: {url}")));
        }

        log::debug!("opening {url} in system browser");
        open::that_detached(url).map_err(|err| Error::External(format!("{url}: {err}")))
    }
}

fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
