// tests/support/builders.rs
use slugtree_core::domain::node::{Node, NodeId, PageTitles};
use slugtree_core::domain::slug::{Slug, SlugPath};

use super::mocks::fixed_now;

/// Builds detached `Node` values for the pure path functions.
pub struct NodeBuilder {
    id: i64,
    parent_id: Option<i64>,
    slug: String,
    slug_path: Option<String>,
    has_url: bool,
}

impl NodeBuilder {
    pub fn new(id: i64, slug: impl Into<String>) -> Self {
        Self {
            id,
            parent_id: None,
            slug: slug.into(),
            slug_path: None,
            has_url: true,
        }
    }

    pub fn parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn path(mut self, slug_path: impl Into<String>) -> Self {
        self.slug_path = Some(slug_path.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.has_url = false;
        self
    }

    pub fn build(self) -> Node {
        let slug_path = self.slug_path.unwrap_or_else(|| self.slug.clone());
        Node {
            id: NodeId::new(self.id).unwrap(),
            parent_id: self.parent_id.map(|id| NodeId::new(id).unwrap()),
            titles: PageTitles::new(self.slug.clone()).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            slug_path: SlugPath::new(slug_path).unwrap(),
            has_url: self.has_url,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
