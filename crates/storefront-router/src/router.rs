//! Ordered route table with base-path stripping.

use crate::query::path_without_query;
use crate::route::{RouteError, RoutePattern};
use crate::RouteParams;

/// A registered route. A `None` handler marks the catch-all.
#[derive(Debug, Clone)]
pub struct Route<H> {
    pub pattern: RoutePattern,
    pub handler: Option<H>,
}

/// Result of matching a request path.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a, H> {
    /// Template text of the route that matched, if any.
    pub route: Option<&'a str>,
    /// Captured path parameters.
    pub params: RouteParams,
    /// Handler bound to the route; `None` for the catch-all or no match.
    pub handler: Option<&'a H>,
    /// Whether a route with a handler matched.
    pub matched: bool,
}

impl<'a, H> RouteMatch<'a, H> {
    fn none() -> Self {
        Self {
            route: None,
            params: RouteParams::new(),
            handler: None,
            matched: false,
        }
    }
}

/// Normalize a deployment base path: no trailing slash, `""` for root.
pub fn normalize_base_path(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// First-match router over an ordered list of templates.
#[derive(Debug, Clone)]
pub struct Router<H> {
    base_path: String,
    routes: Vec<Route<H>>,
}

impl<H> Router<H> {
    /// Create a router that strips `base_path` before matching.
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: normalize_base_path(base_path),
            routes: Vec::new(),
        }
    }

    /// Register a route. Routes match in registration order.
    pub fn add_route(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        let pattern = RoutePattern::parse(pattern)?;
        self.routes.push(Route {
            pattern,
            handler: Some(handler),
        });
        Ok(self)
    }

    /// Register the catch-all route with no handler. Register it last.
    pub fn add_catch_all(&mut self) -> &mut Self {
        self.routes.push(Route {
            pattern: RoutePattern::wildcard(),
            handler: None,
        });
        self
    }

    /// Configured base path.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Registered routes in match order.
    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    /// Strip the base path; an empty remainder is the root.
    ///
    /// The prefix only strips on a segment boundary, so `/shop` does not
    /// strip from `/shopping`.
    pub fn strip_base<'p>(&self, path: &'p str) -> &'p str {
        let stripped = if self.base_path.is_empty() {
            path
        } else {
            match path.strip_prefix(self.base_path.as_str()) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
                _ => path,
            }
        };
        if stripped.is_empty() {
            "/"
        } else {
            stripped
        }
    }

    /// Match a request URL. Any query string is ignored.
    pub fn match_path(&self, url: &str) -> RouteMatch<'_, H> {
        let path = self.strip_base(path_without_query(url));

        for route in &self.routes {
            if let Some(params) = route.pattern.matches(path) {
                return RouteMatch {
                    route: Some(route.pattern.as_str()),
                    params,
                    handler: route.handler.as_ref(),
                    matched: route.handler.is_some(),
                };
            }
        }

        RouteMatch::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storefront_router(base: &str) -> Router<&'static str> {
        let mut router = Router::new(base);
        router.add_route("/", "home").unwrap();
        router.add_route("/product/:id/", "detail").unwrap();
        router.add_catch_all();
        router
    }

    #[test]
    fn test_routes_table() {
        let cases: &[(&str, Option<&str>, Option<&str>)] = &[
            ("/", Some("home"), None),
            ("", Some("home"), None),
            ("/?search=cup", Some("home"), None),
            ("/product/42/", Some("detail"), Some("42")),
            ("/product/42", Some("detail"), Some("42")),
            ("/product/42/?tab=reviews", Some("detail"), Some("42")),
            ("/does/not/exist", None, None),
            ("/product/", None, None),
        ];

        let router = storefront_router("");
        for (path, handler, id) in cases {
            let m = router.match_path(path);
            assert_eq!(m.handler.copied(), *handler, "handler for {path}");
            assert_eq!(m.matched, handler.is_some(), "matched for {path}");
            assert_eq!(m.params.get("id").map(String::as_str), *id, "id for {path}");
        }
    }

    #[test]
    fn test_base_prefix_stripped() {
        let router = storefront_router("/front_7th_chapter4-1/vanilla");

        let m = router.match_path("/front_7th_chapter4-1/vanilla/product/42/");
        assert_eq!(m.handler, Some(&"detail"));
        assert_eq!(m.route, Some("/product/:id/"));
        assert_eq!(m.params["id"], "42");

        let m = router.match_path("/front_7th_chapter4-1/vanilla");
        assert_eq!(m.handler, Some(&"home"));

        let m = router.match_path("/front_7th_chapter4-1/vanilla/");
        assert_eq!(m.handler, Some(&"home"));
    }

    #[test]
    fn test_unprefixed_paths_still_match() {
        let router = storefront_router("/shop");
        assert_eq!(router.match_path("/product/9/").handler, Some(&"detail"));
        // not a segment boundary
        assert_eq!(router.strip_base("/shopping"), "/shopping");
    }

    #[test]
    fn test_catch_all_has_no_handler() {
        let router = storefront_router("");
        let m = router.match_path("/does/not/exist");
        assert_eq!(m.route, Some("*"));
        assert!(m.handler.is_none());
        assert!(!m.matched);
    }

    #[test]
    fn test_no_catch_all_is_no_match() {
        let mut router: Router<&str> = Router::new("");
        router.add_route("/", "home").unwrap();
        let m = router.match_path("/missing");
        assert_eq!(m.route, None);
        assert!(!m.matched);
    }

    #[test]
    fn test_first_match_wins() {
        let mut router = Router::new("");
        router.add_route("/product/featured/", "featured").unwrap();
        router.add_route("/product/:id/", "detail").unwrap();
        assert_eq!(router.match_path("/product/featured/").handler, Some(&"featured"));

        let mut router = Router::new("");
        router.add_route("/product/:id/", "detail").unwrap();
        router.add_route("/product/featured/", "featured").unwrap();
        assert_eq!(router.match_path("/product/featured/").handler, Some(&"detail"));
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("/shop/"), "/shop");
        assert_eq!(normalize_base_path("shop"), "/shop");
    }
}
