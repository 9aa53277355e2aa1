//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use storefront_router::prelude::*;
//! ```

pub use crate::{
    parse_query, QueryParams, Route, RouteError, RouteMatch, RouteParams, RoutePattern, Router,
};
