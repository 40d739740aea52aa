use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::node::NodeId;
use crate::domain::slug::settings::SlugScope;
use crate::domain::slug::value_objects::Slug;

/// Lookup of existing slugs inside a uniqueness scope.
#[async_trait]
pub trait SlugScopeLookup: Send + Sync {
    /// Slugs in `scope` starting with `prefix` (case-insensitive), ignoring
    /// the record `exclude`.
    async fn find_similar_slugs(
        &self,
        scope: &SlugScope,
        prefix: &str,
        exclude: Option<NodeId>,
    ) -> DomainResult<Vec<String>>;
}

/// Makes a slug candidate unique within a scope by appending or continuing
/// a numeric suffix, shortening the base when the result would exceed
/// `max_length` characters.
#[derive(Debug, Clone, Copy)]
pub struct SlugAllocator {
    max_length: usize,
}

impl SlugAllocator {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub async fn allocate<L>(
        &self,
        lookup: &L,
        candidate: &str,
        scope: &SlugScope,
        exclude: Option<NodeId>,
    ) -> DomainResult<Slug>
    where
        L: SlugScopeLookup + ?Sized,
    {
        if candidate.is_empty() {
            return Err(DomainError::EmptyCandidate);
        }
        let max_length = self.max_length;
        if max_length == 0 {
            return Err(DomainError::LengthExhausted { max_length });
        }

        let (mut base, mut index) = split_counter(candidate);
        let mut value = candidate.to_owned();
        let mut similar = lookup.find_similar_slugs(scope, &base, exclude).await?;

        while similar.contains(&value) || char_len(&value) > max_length {
            value = render(&base, index);
            if char_len(&value) > max_length {
                let overflow = char_len(&value) - max_length;
                let keep = char_len(&base).saturating_sub(overflow);
                base = base.chars().take(keep).collect::<String>();
                base.truncate(base.trim_end_matches('-').len());
                value = render(&base, index);
                if char_len(&value) > max_length {
                    return Err(DomainError::LengthExhausted { max_length });
                }
                similar = lookup.find_similar_slugs(scope, &base, exclude).await?;
            }
            index = index
                .checked_add(1)
                .ok_or(DomainError::LengthExhausted { max_length })?;
        }

        if value != candidate {
            tracing::debug!(candidate, allocated = %value, "slug candidate adjusted");
        }
        Slug::new(value)
    }
}

/// Splits `"<base>-<n>"` into the base and the next counter to try.
fn split_counter(value: &str) -> (String, u64) {
    if let Some((base, counter)) = value.rsplit_once('-') {
        if !base.is_empty() && !counter.is_empty() && counter.bytes().all(|b| b.is_ascii_digit()) {
            if let Some(next) = counter.parse::<u64>().ok().and_then(|n| n.checked_add(1)) {
                return (base.to_owned(), next);
            }
        }
    }
    // "-2" goes to the first duplicate; the bare base stays with its owner
    (value.to_owned(), 2)
}

fn render(base: &str, index: u64) -> String {
    if base.is_empty() {
        index.to_string()
    } else {
        format!("{base}-{index}")
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
