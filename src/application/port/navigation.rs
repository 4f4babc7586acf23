// SPDX-License-Identifier: MPL-2.0
//! Navigation port and the fixed set of in-app routes.

use crate::error::Result;

/// In-app pages reachable from the toolbar and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    AppHome,
    Planner,
    SignIn,
    Terms,
    Privacy,
    Support,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Landing,
        Route::AppHome,
        Route::Planner,
        Route::SignIn,
        Route::Terms,
        Route::Privacy,
        Route::Support,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::AppHome => "/app",
            Route::Planner => "/app/plan",
            Route::SignIn => "/auth/signIn",
            Route::Terms => "/terms",
            Route::Privacy => "/privacy",
            Route::Support => "/support",
        }
    }

    /// Looks up the route for `path`. Matching is exact.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// i18n key of the page heading.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Route::Landing => "page-title-landing",
            Route::AppHome => "page-title-app-home",
            Route::Planner => "page-title-planner",
            Route::SignIn => "page-title-sign-in",
            Route::Terms => "page-title-terms",
            Route::Privacy => "page-title-privacy",
            Route::Support => "page-title-support",
        }
    }
}

/// Moves the application between pages.
pub trait Navigator {
    /// Navigates to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Navigation`](crate::error::Error::Navigation) when
    /// the path does not name a known page.
    fn go_to(&mut self, path: &str) -> Result<()>;

    /// Path of the page currently shown.
    fn current_path(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn unknown_or_inexact_paths_do_not_match() {
        assert_eq!(Route::from_path("/nowhere"), None);
        assert_eq!(Route::from_path("/app/"), None);
        assert_eq!(Route::from_path("/auth/signin"), None);
    }

    #[test]
    fn toolbar_targets_have_expected_paths() {
        assert_eq!(Route::AppHome.path(), "/app");
        assert_eq!(Route::SignIn.path(), "/auth/signIn");
    }
}
