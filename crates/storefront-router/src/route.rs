//! Path templates.

use std::fmt;

use crate::RouteParams;

/// Errors raised while registering routes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Route pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    #[error("Empty parameter name in route pattern: {0}")]
    EmptyParam(String),

    #[error("Duplicate parameter '{param}' in route pattern: {pattern}")]
    DuplicateParam { pattern: String, param: String },
}

/// One segment of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Static(String),
    /// Captures any non-empty segment under this name.
    Param(String),
}

/// A parsed path template.
///
/// Literal segments match exactly, `:name` captures one segment, and a
/// trailing slash is optional. `*` matches any path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Option<Vec<Segment>>,
}

impl RoutePattern {
    /// Source text of the catch-all pattern.
    pub const WILDCARD: &'static str = "*";

    /// Parse a template like `/product/:id/`.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        if pattern == Self::WILDCARD {
            return Ok(Self::wildcard());
        }
        if !pattern.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash(pattern.to_string()));
        }

        let mut segments = Vec::new();
        for raw in pattern.split('/').filter(|s| !s.is_empty()) {
            match raw.strip_prefix(':') {
                Some("") => return Err(RouteError::EmptyParam(pattern.to_string())),
                Some(name) => {
                    let duplicate = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if duplicate {
                        return Err(RouteError::DuplicateParam {
                            pattern: pattern.to_string(),
                            param: name.to_string(),
                        });
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Static(raw.to_string())),
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments: Some(segments),
        })
    }

    /// The catch-all pattern.
    pub fn wildcard() -> Self {
        Self {
            source: Self::WILDCARD.to_string(),
            segments: None,
        }
    }

    /// Check if this is the catch-all pattern.
    pub fn is_wildcard(&self) -> bool {
        self.segments.is_none()
    }

    /// Template text as registered; this doubles as the route id.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parsed segments (empty for the root, `None` for the wildcard).
    pub fn segments(&self) -> Option<&[Segment]> {
        self.segments.as_deref()
    }

    /// Match a path (no query string, base already stripped).
    ///
    /// Returns the captured parameters on a structural match.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let Some(segments) = &self.segments else {
            return Some(RouteParams::new());
        };

        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in segments.iter().zip(parts) {
            match segment {
                Segment::Static(literal) if literal == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
