use std::collections::HashMap;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::node::NodeId;
use crate::domain::slug::value_objects::{PATH_SEPARATOR, Slug, SlugPath};

/// Access to the slug fields of a record.
pub trait HasSlugFields {
    fn slug(&self) -> &Slug;
    /// Stored path; `None` until the record has been saved once.
    fn slug_path(&self) -> Option<&SlugPath>;
}

/// Position of a record inside the tree.
pub trait HasTreePosition {
    /// `None` for records that have not been persisted yet.
    fn node_id(&self) -> Option<NodeId>;
    fn parent_id(&self) -> Option<NodeId>;
    /// Whether the record's slug appears in its descendants' paths.
    fn has_url(&self) -> bool;
}

/// Joins the slugs of contributing ancestors (root first) and `slug`.
///
/// Ancestors with `has_url == false` are skipped without breaking the chain.
pub fn compute_path<A>(slug: &Slug, ancestors: &[A]) -> DomainResult<SlugPath>
where
    A: HasSlugFields + HasTreePosition,
{
    SlugPath::from_segments(
        ancestors
            .iter()
            .filter(|a| a.has_url())
            .map(|a| a.slug().as_str())
            .chain(std::iter::once(slug.as_str())),
    )
}

/// Outcome of recomputing a record's own path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathChange {
    /// First computation for a record without a stored path.
    Computed,
    Unchanged,
    Recomputed { previous: SlugPath },
}

impl PathChange {
    pub fn between(previous: Option<&SlugPath>, current: &SlugPath) -> Self {
        match previous {
            None => Self::Computed,
            Some(previous) if previous == current => Self::Unchanged,
            Some(previous) => Self::Recomputed {
                previous: previous.clone(),
            },
        }
    }

    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// A descendant whose stored path is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRewrite {
    pub id: NodeId,
    pub previous: Option<SlugPath>,
    pub slug_path: SlugPath,
}

/// Computes the path of every descendant of `record` from `record_path` and
/// returns only those whose stored value differs.
///
/// `descendants` must be in pre-order (parents before their children).
pub fn plan_cascade<R, D>(
    record: &R,
    record_path: &SlugPath,
    descendants: &[D],
) -> DomainResult<Vec<PathRewrite>>
where
    R: HasTreePosition,
    D: HasSlugFields + HasTreePosition,
{
    let Some(record_id) = record.node_id() else {
        return Ok(Vec::new());
    };

    let mut prefixes: HashMap<NodeId, String> = HashMap::with_capacity(descendants.len() + 1);
    prefixes.insert(record_id, child_prefix(record.has_url(), record_path));

    let mut rewrites = Vec::new();
    for descendant in descendants {
        let Some(id) = descendant.node_id() else {
            continue;
        };
        let parent = descendant.parent_id().ok_or_else(|| {
            DomainError::Validation(format!("descendant {id} has no parent"))
        })?;
        let prefix = prefixes.get(&parent).ok_or_else(|| {
            DomainError::Validation(format!(
                "descendant {id} listed before its parent {parent}"
            ))
        })?;

        let path = if prefix.is_empty() {
            SlugPath::new(descendant.slug().as_str())?
        } else {
            SlugPath::new(format!("{prefix}{PATH_SEPARATOR}{}", descendant.slug()))?
        };

        prefixes.insert(id, child_prefix(descendant.has_url(), &path));
        if descendant.slug_path() != Some(&path) {
            rewrites.push(PathRewrite {
                id,
                previous: descendant.slug_path().cloned(),
                slug_path: path,
            });
        }
    }
    Ok(rewrites)
}

/// Path prefix a record hands down to its children.
fn child_prefix(has_url: bool, path: &SlugPath) -> String {
    if has_url {
        return path.as_str().to_owned();
    }
    path.as_str()
        .rsplit_once(PATH_SEPARATOR)
        .map(|(prefix, _)| prefix.to_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Rec {
        id: i64,
        parent: Option<i64>,
        slug: Slug,
        path: Option<SlugPath>,
        has_url: bool,
    }

    fn rec(id: i64, parent: Option<i64>, slug: &str, path: Option<&str>, has_url: bool) -> Rec {
        Rec {
            id,
            parent,
            slug: Slug::new(slug).unwrap(),
            path: path.map(|p| SlugPath::new(p).unwrap()),
            has_url,
        }
    }

    impl HasSlugFields for Rec {
        fn slug(&self) -> &Slug {
            &self.slug
        }

        fn slug_path(&self) -> Option<&SlugPath> {
            self.path.as_ref()
        }
    }

    impl HasTreePosition for Rec {
        fn node_id(&self) -> Option<NodeId> {
            Some(NodeId(self.id))
        }

        fn parent_id(&self) -> Option<NodeId> {
            self.parent.map(NodeId)
        }

        fn has_url(&self) -> bool {
            self.has_url
        }
    }

    #[test]
    fn skips_ancestors_without_url() {
        let chain = [
            rec(1, None, "root", None, true),
            rec(2, Some(1), "child", None, false),
        ];
        let path = compute_path(&Slug::new("leaf").unwrap(), &chain).unwrap();
        assert_eq!(path.as_str(), "root/leaf");
    }

    #[test]
    fn root_path_is_own_slug() {
        let path = compute_path::<Rec>(&Slug::new("home").unwrap(), &[]).unwrap();
        assert_eq!(path.as_str(), "home");
    }

    #[test]
    fn path_change_states() {
        let a = SlugPath::new("a").unwrap();
        let b = SlugPath::new("b").unwrap();
        assert_eq!(PathChange::between(None, &a), PathChange::Computed);
        assert_eq!(PathChange::between(Some(&a), &a), PathChange::Unchanged);
        assert_eq!(
            PathChange::between(Some(&a), &b),
            PathChange::Recomputed { previous: a.clone() }
        );
        assert!(!PathChange::Unchanged.is_changed());
    }

    #[test]
    fn cascade_rewrites_stale_descendants_recursively() {
        let root = rec(1, None, "renamed", Some("renamed"), true);
        let descendants = vec![
            rec(2, Some(1), "section", Some("old/section"), false),
            rec(3, Some(2), "page", Some("old/section/page"), true),
            rec(4, Some(3), "deep", Some("old/section/page/deep"), true),
        ];
        let plan = plan_cascade(&root, &SlugPath::new("renamed").unwrap(), &descendants).unwrap();
        let paths: Vec<_> = plan.iter().map(|r| r.slug_path.as_str()).collect();
        assert_eq!(paths, ["renamed/section", "renamed/page", "renamed/page/deep"]);
        assert_eq!(plan[0].previous.as_ref().map(SlugPath::as_str), Some("old/section"));
    }

    #[test]
    fn cascade_is_empty_when_paths_are_current() {
        let root = rec(1, None, "a", Some("a"), true);
        let descendants = vec![rec(2, Some(1), "b", Some("a/b"), true), rec(3, Some(2), "c", Some("a/b/c"), true)];
        let plan = plan_cascade(&root, &SlugPath::new("a").unwrap(), &descendants).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn hidden_record_does_not_prefix_children() {
        let root = rec(5, Some(1), "hidden", Some("top/hidden"), false);
        let descendants = vec![rec(6, Some(5), "x", Some("top/hidden/x"), true)];
        let plan = plan_cascade(&root, &SlugPath::new("top/hidden").unwrap(), &descendants).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].slug_path.as_str(), "top/x");
    }

    #[test]
    fn cascade_rejects_out_of_order_listing() {
        let root = rec(1, None, "a", Some("a"), true);
        let descendants = vec![rec(3, Some(2), "c", None, true), rec(2, Some(1), "b", None, true)];
        assert!(plan_cascade(&root, &SlugPath::new("a").unwrap(), &descendants).is_err());
    }
}
