// tests/support/mocks/repos.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use slugtree_core::domain::errors::{DomainError, DomainResult};
use slugtree_core::domain::node::{NewNode, Node, NodeId, NodeUpdate, NodeWriteRepository};
use slugtree_core::domain::slug::SlugPath;
use slugtree_core::infrastructure::repositories::InMemoryNodeRepository;

/// Write repository over an in-memory store that counts path rewrites and can
/// be told to fail after a number of them.
pub struct RecordingWriteRepo {
    inner: Arc<InMemoryNodeRepository>,
    path_writes: AtomicUsize,
    fail_after: AtomicUsize,
}

impl RecordingWriteRepo {
    pub fn new(inner: Arc<InMemoryNodeRepository>) -> Self {
        Self {
            inner,
            path_writes: AtomicUsize::new(0),
            fail_after: AtomicUsize::new(usize::MAX),
        }
    }

    /// Number of successful `update_slug_path` calls so far.
    pub fn path_writes(&self) -> usize {
        self.path_writes.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.path_writes.store(0, Ordering::SeqCst);
    }

    /// Lets `writes` more path rewrites succeed, then fails the rest.
    pub fn fail_after(&self, writes: usize) {
        let done = self.path_writes();
        self.fail_after.store(done + writes, Ordering::SeqCst);
    }

    pub fn heal(&self) {
        self.fail_after.store(usize::MAX, Ordering::SeqCst);
    }
}

#[async_trait]
impl NodeWriteRepository for RecordingWriteRepo {
    async fn insert(&self, node: NewNode) -> DomainResult<Node> {
        self.inner.insert(node).await
    }

    async fn update(&self, update: NodeUpdate) -> DomainResult<Node> {
        self.inner.update(update).await
    }

    async fn update_slug_path(&self, id: NodeId, slug_path: &SlugPath) -> DomainResult<()> {
        if self.path_writes() >= self.fail_after.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("simulated write failure".into()));
        }
        self.inner.update_slug_path(id, slug_path).await?;
        self.path_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
