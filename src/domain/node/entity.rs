use chrono::{DateTime, Utc};

use crate::domain::node::titles::PageTitles;
use crate::domain::node::value_objects::NodeId;
use crate::domain::slug::path::{HasSlugFields, HasTreePosition};
use crate::domain::slug::value_objects::{Slug, SlugPath};

#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub parent_id: Option<NodeId>,
    pub titles: PageTitles,
    pub slug: Slug,
    pub slug_path: SlugPath,
    pub has_url: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HasSlugFields for Node {
    fn slug(&self) -> &Slug {
        &self.slug
    }

    fn slug_path(&self) -> Option<&SlugPath> {
        Some(&self.slug_path)
    }
}

impl HasTreePosition for Node {
    fn node_id(&self) -> Option<NodeId> {
        Some(self.id)
    }

    fn parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    fn has_url(&self) -> bool {
        self.has_url
    }
}

#[derive(Debug, Clone)]
pub struct NewNode {
    pub parent_id: Option<NodeId>,
    pub titles: PageTitles,
    pub slug: Slug,
    pub slug_path: SlugPath,
    pub has_url: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NodeUpdate {
    pub id: NodeId,
    /// `Some(None)` moves the node to the root level.
    pub parent_id: Option<Option<NodeId>>,
    pub titles: Option<PageTitles>,
    pub slug: Option<Slug>,
    pub slug_path: Option<SlugPath>,
    pub has_url: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl NodeUpdate {
    pub fn new(id: NodeId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            parent_id: None,
            titles: None,
            slug: None,
            slug_path: None,
            has_url: None,
            updated_at,
        }
    }

    pub fn with_parent(mut self, parent_id: Option<NodeId>) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_titles(mut self, titles: PageTitles) -> Self {
        self.titles = Some(titles);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_slug_path(mut self, slug_path: SlugPath) -> Self {
        self.slug_path = Some(slug_path);
        self
    }

    pub fn with_has_url(mut self, has_url: bool) -> Self {
        self.has_url = Some(has_url);
        self
    }

    /// Applies the update to an in-memory copy of the node.
    pub fn apply_to(&self, node: &mut Node) {
        if let Some(parent_id) = self.parent_id {
            node.parent_id = parent_id;
        }
        if let Some(titles) = &self.titles {
            node.titles = titles.clone();
        }
        if let Some(slug) = &self.slug {
            node.slug = slug.clone();
        }
        if let Some(slug_path) = &self.slug_path {
            node.slug_path = slug_path.clone();
        }
        if let Some(has_url) = self.has_url {
            node.has_url = has_url;
        }
        node.updated_at = self.updated_at;
    }
}
