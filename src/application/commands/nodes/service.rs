// src/application/commands/nodes/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::node::{
        NodeReadRepository, NodeWriteRepository, PageTitles,
        services::{NodeSlugService, SlugPathMaintainer},
    },
};

/// Accessor producing the raw text a new slug is derived from.
pub type SlugSource = Arc<dyn Fn(&PageTitles) -> String + Send + Sync>;

/// Derives slugs from the short title.
pub fn short_title_source() -> SlugSource {
    Arc::new(|titles: &PageTitles| titles.short_title().to_owned())
}

pub struct NodeCommandService {
    pub(super) write_repo: Arc<dyn NodeWriteRepository>,
    pub(super) read_repo: Arc<dyn NodeReadRepository>,
    pub(super) slug_service: Arc<NodeSlugService>,
    pub(super) path_maintainer: Arc<SlugPathMaintainer>,
    pub(super) slug_source: SlugSource,
    pub(super) clock: Arc<dyn Clock>,
}

impl NodeCommandService {
    pub fn new(
        write_repo: Arc<dyn NodeWriteRepository>,
        read_repo: Arc<dyn NodeReadRepository>,
        slug_service: Arc<NodeSlugService>,
        path_maintainer: Arc<SlugPathMaintainer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            path_maintainer,
            slug_source: short_title_source(),
            clock,
        }
    }

    #[must_use]
    pub fn with_slug_source(mut self, slug_source: SlugSource) -> Self {
        self.slug_source = slug_source;
        self
    }
}
