//! Path pattern parsing and matching.
//!
//! A pattern is an ordered list of segment matchers compiled from a string
//! such as `/review/:id`. Literal segments match case-sensitively and
//! byte-exactly; a `:name` segment matches any single non-empty path segment
//! and captures it under `name`.

use std::fmt;

/// A single segment matcher within a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches exactly this text.
    Literal(String),
    /// Matches any non-empty segment and captures it under this name.
    Param(String),
}

/// Error from parsing a pattern string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatternError {
    /// Pattern does not start with `/`.
    #[error("pattern must start with '/': {0:?}")]
    MissingLeadingSlash(String),

    /// Pattern contains an empty segment (`//`).
    #[error("pattern contains an empty segment: {0:?}")]
    EmptySegment(String),

    /// A `:` segment has no name.
    #[error("pattern contains a parameter with no name: {0:?}")]
    EmptyParamName(String),

    /// The same parameter name appears twice.
    #[error("duplicate parameter name {name:?} in pattern {pattern:?}")]
    DuplicateParamName {
        /// The offending pattern string.
        pattern: String,
        /// The repeated parameter name.
        name: String,
    },
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse a pattern string like `/review/:id`.
    ///
    /// The root pattern `/` compiles to zero segments. A single trailing
    /// slash is ignored, so `/reviews/` and `/reviews` compile identically.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the string does not start with `/`,
    /// contains an empty segment or an unnamed parameter, or names the same
    /// parameter twice.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(pattern.to_owned()));
        };

        let rest = trim_trailing_slash(rest);

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(PatternError::EmptySegment(pattern.to_owned()));
                }
                if let Some(name) = part.strip_prefix(':') {
                    if name.is_empty() {
                        return Err(PatternError::EmptyParamName(pattern.to_owned()));
                    }
                    let duplicate = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if duplicate {
                        return Err(PatternError::DuplicateParamName {
                            pattern: pattern.to_owned(),
                            name: name.to_owned(),
                        });
                    }
                    segments.push(Segment::Param(name.to_owned()));
                } else {
                    segments.push(Segment::Literal(part.to_owned()));
                }
            }
        }

        Ok(Self {
            raw: pattern.to_owned(),
            segments,
        })
    }

    /// The original pattern string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The compiled segment matchers, in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the pattern captures any parameters.
    #[must_use]
    pub fn has_params(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Param(_)))
    }

    /// Match a request path against this pattern.
    ///
    /// Returns the captured parameters on success, `None` otherwise. The
    /// input must start with `/`; one trailing slash is tolerated. Matching
    /// only sees the path portion of a URL, so callers strip any query or
    /// fragment first.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<Params> {
        let rest = path.strip_prefix('/')?;
        let rest = trim_trailing_slash(rest);

        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut captured = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(text) => {
                    if text != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    captured.push((name.clone(), part.to_owned()));
                }
            }
        }

        Some(Params(captured))
    }
}

/// Drop one trailing `/` after real content; a bare `/` stays, so `//`
/// keeps its empty segment instead of collapsing to the root.
fn trim_trailing_slash(rest: &str) -> &str {
    if rest.len() > 1 {
        rest.strip_suffix('/').unwrap_or(rest)
    } else {
        rest
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parameters captured by a successful match, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Look up a captured value by parameter name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of captured parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_root() {
        let pattern = Pattern::parse("/").unwrap();
        assert_eq!(pattern.segments(), &[]);
        assert_eq!(pattern.as_str(), "/");
    }

    #[test]
    fn test_parse_literals_and_params() {
        let pattern = Pattern::parse("/review/:id").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("review".to_owned()),
                Segment::Param("id".to_owned()),
            ]
        );
        assert!(pattern.has_params());
    }

    #[test]
    fn test_parse_rejects_missing_leading_slash() {
        let err = Pattern::parse("reviews").unwrap_err();
        assert_eq!(err, PatternError::MissingLeadingSlash("reviews".to_owned()));
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        let err = Pattern::parse("/a//b").unwrap_err();
        assert_eq!(err, PatternError::EmptySegment("/a//b".to_owned()));
    }

    #[test]
    fn test_parse_rejects_lone_empty_segment() {
        let err = Pattern::parse("//").unwrap_err();
        assert_eq!(err, PatternError::EmptySegment("//".to_owned()));
    }

    #[test]
    fn test_parse_rejects_unnamed_param() {
        let err = Pattern::parse("/review/:").unwrap_err();
        assert_eq!(err, PatternError::EmptyParamName("/review/:".to_owned()));
    }

    #[test]
    fn test_parse_rejects_duplicate_param() {
        let err = Pattern::parse("/a/:id/b/:id").unwrap_err();
        assert_eq!(
            err,
            PatternError::DuplicateParamName {
                pattern: "/a/:id/b/:id".to_owned(),
                name: "id".to_owned(),
            }
        );
    }

    #[test]
    fn test_match_root() {
        let pattern = Pattern::parse("/").unwrap();
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/reviews").is_none());
        assert!(pattern.matches("//").is_none());
    }

    #[test]
    fn test_match_literal_is_exact() {
        let pattern = Pattern::parse("/reviews").unwrap();
        assert!(pattern.matches("/reviews").is_some());
        assert!(pattern.matches("/Reviews").is_none());
        assert!(pattern.matches("/reviews/extra").is_none());
        assert!(pattern.matches("reviews").is_none());
    }

    #[test]
    fn test_match_binds_param() {
        let pattern = Pattern::parse("/review/:id").unwrap();
        let params = pattern.matches("/review/abc123").unwrap();
        assert_eq!(params.get("id"), Some("abc123"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_match_param_requires_single_nonempty_segment() {
        let pattern = Pattern::parse("/review/:id").unwrap();
        assert!(pattern.matches("/review/").is_none());
        assert!(pattern.matches("/review").is_none());
        assert!(pattern.matches("/review/a/b").is_none());
    }

    #[test]
    fn test_match_tolerates_trailing_slash() {
        let pattern = Pattern::parse("/reviews").unwrap();
        assert!(pattern.matches("/reviews/").is_some());

        let pattern = Pattern::parse("/review/:id").unwrap();
        let params = pattern.matches("/review/xyz/").unwrap();
        assert_eq!(params.get("id"), Some("xyz"));
    }

    #[test]
    fn test_params_lookup_misses() {
        let pattern = Pattern::parse("/review/:id").unwrap();
        let params = pattern.matches("/review/xyz").unwrap();
        assert_eq!(params.get("other"), None);
        assert!(!params.is_empty());
    }
}
