//! Routes and delayed redirects.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Top-level destinations of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/auth/login",
            Route::Register => "/auth/register",
            Route::Home => "/home",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "/auth/login" => Some(Route::Login),
            "/auth/register" => Some(Route::Register),
            "/home" => Some(Route::Home),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    /// Accepts either a path or a short name (`login`, `register`, `home`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "login" => Ok(Route::Login),
            "register" | "registration" => Ok(Route::Register),
            "home" | "journal" => Ok(Route::Home),
            other => Route::from_path(other).ok_or_else(|| format!("Unknown screen: {}", s)),
        }
    }
}

/// A redirect waiting for its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRedirect {
    pub route: Route,
    pub at: Instant,
}

/// One-shot delayed redirect.
///
/// Once scheduled a redirect cannot be cancelled; scheduling again replaces it.
#[derive(Debug, Default)]
pub struct Navigator {
    pending: Option<PendingRedirect>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redirect to `route` once `delay` has elapsed.
    pub fn schedule(&mut self, route: Route, delay: Duration) {
        self.schedule_at(route, Instant::now() + delay);
    }

    pub fn schedule_at(&mut self, route: Route, at: Instant) {
        self.pending = Some(PendingRedirect { route, at });
    }

    /// The scheduled redirect, if any.
    pub fn pending(&self) -> Option<PendingRedirect> {
        self.pending
    }

    /// Take the route if its deadline has passed.
    pub fn due(&mut self, now: Instant) -> Option<Route> {
        match self.pending {
            Some(redirect) if now >= redirect.at => {
                self.pending = None;
                Some(redirect.route)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        for route in [Route::Login, Route::Register, Route::Home] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/home/"), Some(Route::Home));
        assert_eq!(Route::from_path("/nowhere"), None);
        assert_eq!("register".parse::<Route>().unwrap(), Route::Register);
        assert_eq!("/auth/login".parse::<Route>().unwrap(), Route::Login);
        assert!("settings".parse::<Route>().is_err());
    }

    #[test]
    fn test_redirect_fires_once_after_deadline() {
        let mut navigator = Navigator::new();
        let start = Instant::now();
        navigator.schedule_at(Route::Home, start + Duration::from_secs(2));

        assert_eq!(navigator.due(start), None);
        assert_eq!(navigator.due(start + Duration::from_secs(2)), Some(Route::Home));
        assert_eq!(navigator.due(start + Duration::from_secs(3)), None);
        assert!(navigator.pending().is_none());
    }

    #[test]
    fn test_reschedule_replaces() {
        let mut navigator = Navigator::new();
        let start = Instant::now();
        navigator.schedule_at(Route::Home, start);
        navigator.schedule_at(Route::Login, start);
        assert_eq!(navigator.due(start), Some(Route::Login));
    }
}
