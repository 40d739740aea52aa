use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::node::{NewNode, Node, NodeId, NodeReadRepository, NodeUpdate, NodeWriteRepository};
use crate::domain::slug::{SlugPath, SlugScope, SlugScopeLookup};

#[derive(Default)]
struct State {
    nodes: BTreeMap<NodeId, Node>,
    next_id: i64,
}

/// Process-local node store with the same uniqueness rules as the Postgres
/// schema (slugs unique per parent).
#[derive(Default)]
pub struct InMemoryNodeRepository {
    state: Mutex<State>,
}

impl InMemoryNodeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|state| state.nodes.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Persistence("node store lock poisoned".into()))
    }
}

impl State {
    fn sibling_slug_taken(&self, parent: Option<NodeId>, slug: &str, exclude: Option<NodeId>) -> bool {
        self.nodes
            .values()
            .any(|n| n.parent_id == parent && n.slug.as_str() == slug && Some(n.id) != exclude)
    }

    fn children_of(&self, parent: Option<NodeId>) -> Vec<Node> {
        self.nodes
            .values()
            .filter(|n| n.parent_id == parent)
            .cloned()
            .collect()
    }

    fn ensure_parent(&self, parent: Option<NodeId>) -> DomainResult<()> {
        match parent {
            Some(id) if !self.nodes.contains_key(&id) => {
                Err(DomainError::NotFound("parent node not found".into()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SlugScopeLookup for InMemoryNodeRepository {
    async fn find_similar_slugs(
        &self,
        scope: &SlugScope,
        prefix: &str,
        exclude: Option<NodeId>,
    ) -> DomainResult<Vec<String>> {
        let state = self.lock()?;
        let prefix = prefix.to_lowercase();
        Ok(state
            .nodes
            .values()
            .filter(|n| Some(n.id) != exclude)
            .filter(|n| match scope {
                SlugScope::Table => true,
                SlugScope::Siblings { parent } => n.parent_id == *parent,
            })
            .filter(|n| n.slug.as_str().to_lowercase().starts_with(&prefix))
            .map(|n| n.slug.as_str().to_owned())
            .collect())
    }
}

#[async_trait]
impl NodeReadRepository for InMemoryNodeRepository {
    async fn find_by_id(&self, id: NodeId) -> DomainResult<Option<Node>> {
        Ok(self.lock()?.nodes.get(&id).cloned())
    }

    async fn find_by_slug_path(&self, slug_path: &SlugPath) -> DomainResult<Option<Node>> {
        Ok(self
            .lock()?
            .nodes
            .values()
            .find(|n| &n.slug_path == slug_path)
            .cloned())
    }

    async fn ancestors(&self, id: NodeId) -> DomainResult<Vec<Node>> {
        let state = self.lock()?;
        let mut chain = Vec::new();
        let mut current = state.nodes.get(&id).and_then(|n| n.parent_id);
        while let Some(parent_id) = current {
            let parent = state
                .nodes
                .get(&parent_id)
                .ok_or_else(|| DomainError::Persistence(format!("dangling parent {parent_id}")))?;
            if chain.iter().any(|n: &Node| n.id == parent.id) {
                return Err(DomainError::Persistence(format!("cycle at node {parent_id}")));
            }
            chain.push(parent.clone());
            current = parent.parent_id;
        }
        chain.reverse();
        Ok(chain)
    }

    async fn children(&self, parent: Option<NodeId>) -> DomainResult<Vec<Node>> {
        Ok(self.lock()?.children_of(parent))
    }

    async fn descendants(&self, id: NodeId) -> DomainResult<Vec<Node>> {
        let state = self.lock()?;
        let mut out = Vec::new();
        let mut stack: Vec<Node> = state.children_of(Some(id)).into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.id == id || out.iter().any(|n: &Node| n.id == node.id) {
                return Err(DomainError::Persistence(format!("cycle at node {}", node.id)));
            }
            stack.extend(state.children_of(Some(node.id)).into_iter().rev());
            out.push(node);
        }
        Ok(out)
    }
}

#[async_trait]
impl NodeWriteRepository for InMemoryNodeRepository {
    async fn insert(&self, node: NewNode) -> DomainResult<Node> {
        let mut state = self.lock()?;
        state.ensure_parent(node.parent_id)?;
        if state.sibling_slug_taken(node.parent_id, node.slug.as_str(), None) {
            return Err(DomainError::Conflict("slug already exists among siblings".into()));
        }

        state.next_id += 1;
        let id = NodeId::new(state.next_id)?;
        let created = Node {
            id,
            parent_id: node.parent_id,
            titles: node.titles,
            slug: node.slug,
            slug_path: node.slug_path,
            has_url: node.has_url,
            created_at: node.created_at,
            updated_at: node.updated_at,
        };
        state.nodes.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: NodeUpdate) -> DomainResult<Node> {
        let mut state = self.lock()?;
        let mut node = state
            .nodes
            .get(&update.id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("node not found".into()))?;
        update.apply_to(&mut node);

        if node.parent_id == Some(node.id) {
            return Err(DomainError::Validation("a node cannot be its own parent".into()));
        }
        state.ensure_parent(node.parent_id)?;
        if state.sibling_slug_taken(node.parent_id, node.slug.as_str(), Some(node.id)) {
            return Err(DomainError::Conflict("slug already exists among siblings".into()));
        }

        state.nodes.insert(node.id, node.clone());
        Ok(node)
    }

    async fn update_slug_path(&self, id: NodeId, slug_path: &SlugPath) -> DomainResult<()> {
        let mut state = self.lock()?;
        let node = state
            .nodes
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("node not found".into()))?;
        node.slug_path = slug_path.clone();
        Ok(())
    }
}
