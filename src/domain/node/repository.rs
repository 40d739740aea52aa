use crate::domain::errors::DomainResult;
use crate::domain::node::entity::{NewNode, Node, NodeUpdate};
use crate::domain::node::value_objects::NodeId;
use crate::domain::slug::allocator::SlugScopeLookup;
use crate::domain::slug::value_objects::SlugPath;
use async_trait::async_trait;

#[async_trait]
pub trait NodeWriteRepository: Send + Sync {
    async fn insert(&self, node: NewNode) -> DomainResult<Node>;
    async fn update(&self, update: NodeUpdate) -> DomainResult<Node>;
    async fn update_slug_path(&self, id: NodeId, slug_path: &SlugPath) -> DomainResult<()>;
}

#[async_trait]
pub trait NodeReadRepository: SlugScopeLookup {
    async fn find_by_id(&self, id: NodeId) -> DomainResult<Option<Node>>;
    async fn find_by_slug_path(&self, slug_path: &SlugPath) -> DomainResult<Option<Node>>;
    /// Ancestors of `id`, root first, without the node itself.
    async fn ancestors(&self, id: NodeId) -> DomainResult<Vec<Node>>;
    /// Direct children of `parent`; `None` lists the roots.
    async fn children(&self, parent: Option<NodeId>) -> DomainResult<Vec<Node>>;
    /// All descendants of `id` in pre-order, so every parent precedes its
    /// children.
    async fn descendants(&self, id: NodeId) -> DomainResult<Vec<Node>>;
}
