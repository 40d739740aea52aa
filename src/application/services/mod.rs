// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::nodes::NodeCommandService,
        ports::{ClockPort, TransliteratorPort},
        queries::nodes::NodeQueryService,
    },
    domain::{
        node::{
            NodeReadRepository, NodeWriteRepository,
            services::{NodeSlugService, SlugPathMaintainer},
        },
        slug::SlugSettings,
    },
};

pub struct ApplicationServices {
    pub node_commands: Arc<NodeCommandService>,
    pub node_queries: Arc<NodeQueryService>,
    slug_service: Arc<NodeSlugService>,
}

impl ApplicationServices {
    pub fn new(
        node_write_repo: Arc<dyn NodeWriteRepository>,
        node_read_repo: Arc<dyn NodeReadRepository>,
        clock: Arc<ClockPort>,
        transliterator: Arc<TransliteratorPort>,
        settings: &SlugSettings,
    ) -> Self {
        let slug_service = Arc::new(NodeSlugService::new(
            Arc::clone(&node_read_repo),
            Arc::clone(&transliterator),
            settings,
        ));

        let path_maintainer = Arc::new(SlugPathMaintainer::new(
            Arc::clone(&node_read_repo),
            Arc::clone(&node_write_repo),
        ));

        let node_commands = Arc::new(NodeCommandService::new(
            Arc::clone(&node_write_repo),
            Arc::clone(&node_read_repo),
            Arc::clone(&slug_service),
            path_maintainer,
            clock,
        ));

        let node_queries = Arc::new(NodeQueryService::new(Arc::clone(&node_read_repo)));

        Self {
            node_commands,
            node_queries,
            slug_service,
        }
    }

    pub fn slug_service(&self) -> Arc<NodeSlugService> {
        Arc::clone(&self.slug_service)
    }
}
