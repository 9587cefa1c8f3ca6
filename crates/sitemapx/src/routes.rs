//! Named route registry.
//!
//! Static sitemaps register pages by route name rather than literal
//! URL. A [`RouteMap`] stores `name → pattern` where patterns embed
//! `{param}` placeholders, and resolves a name plus [`RouteParams`]
//! to a concrete path. Placeholders are filled from keyword
//! parameters by name first, then from positional parameters in
//! order.

use std::collections::HashMap;

/// Route resolution error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No route registered under this name.
    #[error("Unknown route: {0:?}")]
    UnknownRoute(String),

    /// Pattern has a placeholder with no matching parameter.
    #[error("Route {route:?} is missing a value for parameter {param:?}")]
    MissingParam {
        /// Route name.
        route: String,
        /// Placeholder name.
        param: String,
    },

    /// More parameters supplied than the pattern has placeholders.
    #[error("Route {route:?} does not use {unused} of the supplied parameters")]
    UnusedParams {
        /// Route name.
        route: String,
        /// Count of parameters left over after substitution.
        unused: usize,
    },

    /// Pattern contains an unterminated `{` placeholder.
    #[error("Route {route:?} has a malformed pattern: {pattern:?}")]
    MalformedPattern {
        /// Route name.
        route: String,
        /// Offending pattern.
        pattern: String,
    },
}

/// Arguments for route resolution.
///
/// Positional parameters fill placeholders left to right; keyword
/// parameters match placeholders by name and take precedence.
#[derive(Debug, Clone, Default)]
pub struct RouteParams {
    args: Vec<String>,
    kwargs: HashMap<String, String>,
}

impl RouteParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional parameter.
    #[must_use]
    pub fn arg(mut self, value: impl ToString) -> Self {
        self.args.push(value.to_string());
        self
    }

    /// Set a keyword parameter.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.kwargs.insert(name.into(), value.to_string());
        self
    }

    fn len(&self) -> usize {
        self.args.len() + self.kwargs.len()
    }
}

/// Registry of named URL patterns.
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    routes: HashMap<String, String>,
}

impl RouteMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern under a name, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, pattern: impl Into<String>) -> &mut Self {
        self.routes.insert(name.into(), pattern.into());
        self
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.register(name, pattern);
        self
    }

    /// Resolve a route name and parameters to a concrete path.
    pub fn resolve(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_owned()))?;

        let mut out = String::with_capacity(pattern.len());
        let mut positional = params.args.iter();
        let mut used = 0usize;
        let mut rest = pattern.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| RouteError::MalformedPattern {
                    route: name.to_owned(),
                    pattern: pattern.clone(),
                })?;
            let param = &after[..close];
            let value = params
                .kwargs
                .get(param)
                .or_else(|| positional.next())
                .ok_or_else(|| RouteError::MissingParam {
                    route: name.to_owned(),
                    param: param.to_owned(),
                })?;
            out.push_str(value);
            used += 1;
            rest = &after[close + 1..];
        }
        out.push_str(rest);

        if used < params.len() {
            return Err(RouteError::UnusedParams {
                route: name.to_owned(),
                unused: params.len() - used,
            });
        }
        Ok(out)
    }
}
