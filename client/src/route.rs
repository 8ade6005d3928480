//! Fragment-based view routing.
//!
//! DESIGN
//! ======
//! The app has a handful of top-level screens, each addressed by a URL
//! fragment (`#dashboard`, `#viewer-setup`, ...). Instead of comparing
//! fragment strings inline, every screen is registered once in a
//! [`RouteTable`] that is validated when it is built. Resolution is an exact
//! string match; anything unregistered lands on [`View::Landing`].

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::sync::LazyLock;

/// Top-level screens of the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Landing,
    Auth,
    Dashboard,
    StreamerSetup,
    ViewerSetup,
}

/// Fragment bound to the landing view. Never stored in a table.
pub const LANDING_FRAGMENT: &str = "#";

/// Fragment bindings for every non-landing view.
pub const STANDARD_ROUTES: &[(&str, View)] = &[
    ("#auth", View::Auth),
    ("#dashboard", View::Dashboard),
    ("#streamer-setup", View::StreamerSetup),
    ("#viewer-setup", View::ViewerSetup),
];

static STANDARD: LazyLock<Result<RouteTable, RouteTableError>> = LazyLock::new(|| RouteTable::new(STANDARD_ROUTES));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route fragment must start with '#': {0:?}")]
    MissingHash(String),
    #[error("route fragment has no name")]
    EmptyName,
    #[error("duplicate route fragment: {0}")]
    DuplicateFragment(String),
    #[error("view {0:?} is bound to more than one fragment")]
    DuplicateView(View),
    #[error("landing is the fallback view and cannot be bound to {0}")]
    LandingBound(String),
}

/// Validated mapping between URL fragments and views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<(String, View)>,
}

impl RouteTable {
    /// Build a table from `(fragment, view)` pairs.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a fragment without a leading `#`,
    /// a bare `#`, a repeated fragment or view, or a binding for the landing
    /// view.
    pub fn new<'a, I>(routes: I) -> Result<Self, RouteTableError>
    where
        I: IntoIterator<Item = &'a (&'a str, View)>,
    {
        let mut entries: Vec<(String, View)> = Vec::new();
        for &(fragment, view) in routes {
            let Some(name) = fragment.strip_prefix('#') else {
                return Err(RouteTableError::MissingHash(fragment.to_owned()));
            };
            if name.trim().is_empty() {
                return Err(RouteTableError::EmptyName);
            }
            if view == View::Landing {
                return Err(RouteTableError::LandingBound(fragment.to_owned()));
            }
            if entries.iter().any(|(f, _)| f == fragment) {
                return Err(RouteTableError::DuplicateFragment(fragment.to_owned()));
            }
            if entries.iter().any(|(_, v)| *v == view) {
                return Err(RouteTableError::DuplicateView(view));
            }
            entries.push((fragment.to_owned(), view));
        }
        Ok(Self { entries })
    }

    /// The application's route table, built from [`STANDARD_ROUTES`] on
    /// first use and shared by every caller after that.
    ///
    /// # Errors
    ///
    /// Fails only if [`STANDARD_ROUTES`] itself is malformed; the host
    /// checks this once at startup.
    pub fn standard() -> Result<&'static Self, RouteTableError> {
        STANDARD.as_ref().map_err(Clone::clone)
    }

    /// Resolve a raw `location.hash` value to a view.
    pub fn resolve(&self, fragment: &str) -> View {
        self.entries
            .iter()
            .find(|(f, _)| f == fragment)
            .map_or(View::Landing, |(_, v)| *v)
    }

    /// Fragment to navigate to for `view`.
    pub fn fragment(&self, view: View) -> &str {
        self.entries
            .iter()
            .find(|(_, v)| *v == view)
            .map_or(LANDING_FRAGMENT, |(f, _)| f.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
