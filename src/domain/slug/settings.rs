use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::node::NodeId;

pub const DEFAULT_MAX_LENGTH: usize = 50;
pub const DEFAULT_SLUG: &str = "item";

/// Which records a slug has to be unique against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeKind {
    /// Every node in the store.
    #[default]
    Table,
    /// Only nodes sharing the same parent.
    Siblings,
}

impl ScopeKind {
    pub fn scope_for(self, parent: Option<NodeId>) -> SlugScope {
        match self {
            Self::Table => SlugScope::Table,
            Self::Siblings => SlugScope::Siblings { parent },
        }
    }
}

impl std::str::FromStr for ScopeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "siblings" => Ok(Self::Siblings),
            other => Err(DomainError::Validation(format!(
                "unknown slug scope: {other}"
            ))),
        }
    }
}

/// Concrete uniqueness scope used for a single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugScope {
    Table,
    Siblings { parent: Option<NodeId> },
}

/// Explicit slug configuration handed to the normalizer, allocator and
/// node services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugSettings {
    max_length: usize,
    allow_unicode: bool,
    default_slug: Option<String>,
    scope: ScopeKind,
}

impl Default for SlugSettings {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            allow_unicode: false,
            default_slug: Some(DEFAULT_SLUG.into()),
            scope: ScopeKind::Table,
        }
    }
}

impl SlugSettings {
    pub fn new(
        max_length: usize,
        allow_unicode: bool,
        default_slug: Option<String>,
        scope: ScopeKind,
    ) -> DomainResult<Self> {
        if max_length == 0 {
            return Err(DomainError::Validation(
                "slug max length must be positive".into(),
            ));
        }
        let default_slug = default_slug.filter(|s| !s.trim().is_empty());
        Ok(Self {
            max_length,
            allow_unicode,
            default_slug,
            scope,
        })
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_unicode(mut self, allow_unicode: bool) -> Self {
        self.allow_unicode = allow_unicode;
        self
    }

    pub fn with_default_slug(mut self, default_slug: Option<String>) -> Self {
        self.default_slug = default_slug.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_scope(mut self, scope: ScopeKind) -> Self {
        self.scope = scope;
        self
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn allow_unicode(&self) -> bool {
        self.allow_unicode
    }

    pub fn default_slug(&self) -> Option<&str> {
        self.default_slug.as_deref()
    }

    pub fn scope(&self) -> ScopeKind {
        self.scope
    }
}
