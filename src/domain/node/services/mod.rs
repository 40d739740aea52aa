// src/domain/node/services/mod.rs
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::node::entity::Node;
use crate::domain::node::repository::{NodeReadRepository, NodeWriteRepository};
use crate::domain::node::value_objects::NodeId;
use crate::domain::slug::{
    ScopeKind, Slug, SlugAllocator, SlugNormalizer, SlugPath, SlugSettings, compute_path,
    plan_cascade,
};
use crate::application::ports::util::Transliterator;

/// Domain service responsible for producing unique slugs for nodes.
pub struct NodeSlugService {
    read_repo: Arc<dyn NodeReadRepository>,
    normalizer: SlugNormalizer,
    allocator: SlugAllocator,
    scope: ScopeKind,
}

impl NodeSlugService {
    pub fn new(
        read_repo: Arc<dyn NodeReadRepository>,
        transliterator: Arc<dyn Transliterator>,
        settings: &SlugSettings,
    ) -> Self {
        Self {
            read_repo,
            normalizer: SlugNormalizer::new(settings, transliterator),
            allocator: SlugAllocator::new(settings.max_length()),
            scope: settings.scope(),
        }
    }

    pub fn normalizer(&self) -> &SlugNormalizer {
        &self.normalizer
    }

    pub fn scope(&self) -> ScopeKind {
        self.scope
    }

    /// Normalizes `source` and makes it unique among the nodes in scope of
    /// `parent`, ignoring `ignore_id` (the node being saved).
    pub async fn generate_unique_slug(
        &self,
        source: &str,
        parent: Option<NodeId>,
        ignore_id: Option<NodeId>,
    ) -> DomainResult<Slug> {
        let candidate = self.normalizer.normalize(source)?;
        self.allocator
            .allocate(
                self.read_repo.as_ref(),
                &candidate,
                &self.scope.scope_for(parent),
                ignore_id,
            )
            .await
    }
}

/// Keeps `slug_path` values in line with the tree.
pub struct SlugPathMaintainer {
    read_repo: Arc<dyn NodeReadRepository>,
    write_repo: Arc<dyn NodeWriteRepository>,
}

impl SlugPathMaintainer {
    pub fn new(
        read_repo: Arc<dyn NodeReadRepository>,
        write_repo: Arc<dyn NodeWriteRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
        }
    }

    /// Root-first chain of `parent` and its ancestors.
    pub async fn ancestor_chain(&self, parent: Option<NodeId>) -> DomainResult<Vec<Node>> {
        let Some(parent_id) = parent else {
            return Ok(Vec::new());
        };
        let parent = self
            .read_repo
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("parent node {parent_id}")))?;
        let mut chain = self.read_repo.ancestors(parent_id).await?;
        chain.push(parent);
        Ok(chain)
    }

    /// Path of a node with `slug` placed under `parent`.
    pub async fn path_for(&self, slug: &Slug, parent: Option<NodeId>) -> DomainResult<SlugPath> {
        let chain = self.ancestor_chain(parent).await?;
        compute_path(slug, &chain)
    }

    /// Rewrites the stored path of every stale descendant of `node`.
    ///
    /// Returns the number of writes. Stops at the first storage error, leaving
    /// the remaining descendants untouched; running it again picks up where it
    /// stopped.
    pub async fn cascade_descendants(&self, node: &Node) -> DomainResult<usize> {
        let descendants = self.read_repo.descendants(node.id).await?;
        let rewrites = plan_cascade(node, &node.slug_path, &descendants)?;

        for (done, rewrite) in rewrites.iter().enumerate() {
            if let Err(err) = self
                .write_repo
                .update_slug_path(rewrite.id, &rewrite.slug_path)
                .await
            {
                tracing::warn!(
                    node = %node.id,
                    failed = %rewrite.id,
                    written = done,
                    pending = rewrites.len() - done,
                    error = %err,
                    "slug path cascade aborted"
                );
                return Err(err);
            }
        }

        if !rewrites.is_empty() {
            tracing::info!(
                node = %node.id,
                descendants = descendants.len(),
                rewritten = rewrites.len(),
                "slug paths cascaded"
            );
        }
        Ok(rewrites.len())
    }
}
