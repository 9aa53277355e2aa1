//! Route matching for the storefront renderer.
//!
//! Routes are data: an ordered list of path templates, each bound to a
//! handler value. Matching is a pure function over that list, independent
//! of any HTTP layer:
//!
//! ```text
//! /                 -> home
//! /product/:id/     -> product detail   (params.id)
//! *                 -> catch-all, no handler (404)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use storefront_router::prelude::*;
//!
//! let mut router = Router::new("/shop");
//! router.add_route("/", "home")?;
//! router.add_route("/product/:id/", "detail")?;
//! router.add_catch_all();
//!
//! let m = router.match_path("/shop/product/42/");
//! assert_eq!(m.handler, Some(&"detail"));
//! assert_eq!(m.params["id"], "42");
//! ```

pub mod prelude;
mod query;
mod route;
mod router;

pub use query::{parse_query, parse_query_string, path_without_query};
pub use route::{RouteError, RoutePattern, Segment};
pub use router::{normalize_base_path, Route, RouteMatch, Router};

use std::collections::HashMap;

/// Extracted route parameters (e.g., `:id` from `/product/:id/`).
pub type RouteParams = HashMap<String, String>;

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;
