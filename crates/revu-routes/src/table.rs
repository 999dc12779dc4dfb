//! Route declarations and the route table.

use std::fmt;

use crate::pattern::{Params, Pattern, PatternError};

/// The page view a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Landing page.
    Home,
    /// Review list.
    Reviews,
    /// Single review, selected by its document identifier.
    ReviewDetails,
    /// About page.
    About,
    /// Contact page.
    Contact,
}

impl View {
    /// Stable identifier used in JSON payloads and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Reviews => "reviews",
            Self::ReviewDetails => "review-details",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named route: a path pattern bound to a view.
#[derive(Debug, Clone)]
pub struct Route {
    name: String,
    pattern: Pattern,
    view: View,
}

impl Route {
    /// Create a route from a pattern string.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the pattern string is invalid.
    pub fn new(name: &str, pattern: &str, view: View) -> Result<Self, PatternError> {
        Ok(Self {
            name: name.to_owned(),
            pattern: Pattern::parse(pattern)?,
            view,
        })
    }

    /// The route's symbolic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The route's path pattern.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The view this route renders.
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }
}

/// Error from constructing a [`RouteTable`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteTableError {
    /// Two routes share a name.
    #[error("duplicate route name: {0:?}")]
    DuplicateName(String),

    /// Two routes share a path pattern.
    #[error("duplicate route path: {0:?}")]
    DuplicatePath(String),
}

/// A successful resolution: the matched route and its captured parameters.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    /// The matched route.
    pub route: &'a Route,
    /// Parameters captured from the path.
    pub params: Params,
}

/// An ordered, immutable route table.
///
/// Declaration order is priority order: [`RouteTable::resolve`] walks the
/// table top to bottom and returns the first route whose pattern matches.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate names and duplicate patterns.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteTableError`] naming the first duplicate found.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        for (i, route) in routes.iter().enumerate() {
            for earlier in &routes[..i] {
                if earlier.name == route.name {
                    return Err(RouteTableError::DuplicateName(route.name.clone()));
                }
                if earlier.pattern.as_str() == route.pattern.as_str() {
                    return Err(RouteTableError::DuplicatePath(
                        route.pattern.as_str().to_owned(),
                    ));
                }
            }
        }
        Ok(Self { routes })
    }

    /// The route table of the review site.
    ///
    /// # Panics
    ///
    /// Panics if the built-in declarations are invalid, the same way a
    /// router panics on a malformed static path literal. The table below is
    /// covered by tests.
    #[must_use]
    pub fn site_default() -> Self {
        let declarations = [
            ("home", "/", View::Home),
            ("reviews", "/reviews", View::Reviews),
            ("review-details", "/review/:id", View::ReviewDetails),
            ("about", "/about", View::About),
            ("contact", "/contact", View::Contact),
        ];

        let routes = declarations
            .into_iter()
            .map(|(name, pattern, view)| {
                Route::new(name, pattern, view).expect("invalid built-in route pattern")
            })
            .collect();

        Self::new(routes).expect("invalid built-in route table")
    }

    /// Resolve a request path to the first matching route.
    ///
    /// Returns `None` when no route matches; not-found handling belongs to
    /// the caller.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            route
                .pattern
                .matches(path)
                .map(|params| RouteMatch { route, params })
        })
    }

    /// All routes, in declaration order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
