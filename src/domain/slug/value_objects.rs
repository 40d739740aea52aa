use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// A normalized, non-empty URL token.
///
/// Accepts lowercase letters (any script), digits and hyphens. Whether the
/// letters must be ASCII is decided by the normalizer that produced the value;
/// [`Slug::is_downgraded`] tells the two forms apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let valid = value
            .chars()
            .all(|c| c == '-' || (c.is_alphanumeric() && !c.is_uppercase()));
        if !valid {
            return Err(DomainError::Validation(format!(
                "slug may only contain lower-case letters, numbers or hyphens: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the slug only uses `[a-z0-9-]`.
    pub fn is_downgraded(&self) -> bool {
        self.0
            .bytes()
            .all(|b| b == b'-' || b.is_ascii_lowercase() || b.is_ascii_digit())
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub const PATH_SEPARATOR: char = '/';

/// Slash-joined chain of slugs, e.g. `about/team/jane`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlugPath(String);

impl SlugPath {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug path cannot be empty".into()));
        }
        if value.split(PATH_SEPARATOR).any(str::is_empty) {
            return Err(DomainError::Validation(format!(
                "slug path contains an empty segment: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> DomainResult<Self> {
        let joined = segments
            .into_iter()
            .collect::<Vec<_>>()
            .join(&PATH_SEPARATOR.to_string());
        Self::new(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }
}

impl fmt::Display for SlugPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SlugPath> for String {
    fn from(value: SlugPath) -> Self {
        value.0
    }
}
