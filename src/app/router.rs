// SPDX-License-Identifier: MPL-2.0
//! In-app navigation between the planner and the other routes.

use crate::application::port::{Navigator, Route};
use crate::error::{Error, Result};

/// What the window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Toolbar, section body, and footer.
    Planner,
    /// Placeholder page for any other route.
    Page(Route),
}

impl Screen {
    #[must_use]
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Planner => Screen::Planner,
            other => Screen::Page(other),
        }
    }

    /// Screen for a navigator path. Paths outside the route table fall back
    /// to the planner.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        Route::from_path(path).map_or(Screen::Planner, Self::for_route)
    }
}

/// Navigator that keeps the current route in memory.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Planner)
    }
}

impl Router {
    #[must_use]
    pub fn new(start: Route) -> Self {
        Self { current: start }
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.current
    }
}

impl Navigator for Router {
    fn go_to(&mut self, path: &str) -> Result<()> {
        let route = Route::from_path(path)
            .ok_or_else(|| Error::Navigation(format!("unknown route: {path}")))?;
        log::debug!("navigating {} -> {}", self.current.path(), route.path());
        self.current = route;
        Ok(())
    }

    fn current_path(&self) -> &str {
        self.current.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_starts_on_planner() {
        let router = Router::default();
        assert_eq!(router.current_path(), "/app/plan");
        assert_eq!(Screen::for_path(router.current_path()), Screen::Planner);
    }

    #[test]
    fn go_to_known_path_switches_route() {
        let mut router = Router::default();
        router.go_to("/app").expect("known route");
        assert_eq!(router.route(), Route::AppHome);
        assert_eq!(
            Screen::for_path(router.current_path()),
            Screen::Page(Route::AppHome)
        );
    }

    #[test]
    fn go_to_unknown_path_fails_and_keeps_route() {
        let mut router = Router::new(Route::Terms);
        let result = router.go_to("/nowhere");
        assert!(matches!(result, Err(Error::Navigation(_))));
        assert_eq!(router.route(), Route::Terms);
    }

    #[test]
    fn every_route_maps_to_a_screen() {
        for route in Route::ALL {
            let screen = Screen::for_path(route.path());
            if route == Route::Planner {
                assert_eq!(screen, Screen::Planner);
            } else {
                assert_eq!(screen, Screen::Page(route));
            }
        }
    }

    #[test]
    fn unknown_path_shows_planner() {
        assert_eq!(Screen::for_path("/does/not/exist"), Screen::Planner);
    }
}
