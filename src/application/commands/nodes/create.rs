// src/application/commands/nodes/create.rs
use super::NodeCommandService;
use crate::{
    application::{dto::NodeDto, error::ApplicationResult},
    domain::{
        node::{NewNode, NodeId, PageTitles},
        slug::compute_path,
    },
};

pub struct CreateNodeCommand {
    pub parent_id: Option<i64>,
    pub short_title: String,
    pub title: Option<String>,
    pub window_title: Option<String>,
    /// Explicit slug; derived from the slug source when absent.
    pub slug: Option<String>,
    pub has_url: bool,
}

impl CreateNodeCommand {
    pub fn builder() -> CreateNodeCommandBuilder {
        CreateNodeCommandBuilder::default()
    }
}

pub struct CreateNodeCommandBuilder {
    parent_id: Option<i64>,
    short_title: Option<String>,
    title: Option<String>,
    window_title: Option<String>,
    slug: Option<String>,
    has_url: bool,
}

impl Default for CreateNodeCommandBuilder {
    fn default() -> Self {
        Self {
            parent_id: None,
            short_title: None,
            title: None,
            window_title: None,
            slug: None,
            has_url: true,
        }
    }
}

impl CreateNodeCommandBuilder {
    pub fn parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn short_title(mut self, short_title: impl Into<String>) -> Self {
        self.short_title = Some(short_title.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn window_title(mut self, window_title: impl Into<String>) -> Self {
        self.window_title = Some(window_title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn has_url(mut self, has_url: bool) -> Self {
        self.has_url = has_url;
        self
    }

    pub fn build(self) -> Result<CreateNodeCommand, &'static str> {
        Ok(CreateNodeCommand {
            parent_id: self.parent_id,
            short_title: self.short_title.ok_or("short title is required")?,
            title: self.title,
            window_title: self.window_title,
            slug: self.slug,
            has_url: self.has_url,
        })
    }
}

impl NodeCommandService {
    pub async fn create_node(&self, command: CreateNodeCommand) -> ApplicationResult<NodeDto> {
        let parent_id = command.parent_id.map(NodeId::new).transpose()?;
        let titles = PageTitles::new(command.short_title)?
            .with_title(command.title)?
            .with_window_title(command.window_title)?;

        let chain = self.path_maintainer.ancestor_chain(parent_id).await?;

        let source = match command.slug.filter(|s| !s.trim().is_empty()) {
            Some(slug) => slug,
            None => (self.slug_source)(&titles),
        };
        let slug = self
            .slug_service
            .generate_unique_slug(&source, parent_id, None)
            .await?;
        let slug_path = compute_path(&slug, &chain)?;

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewNode {
                parent_id,
                titles,
                slug,
                slug_path,
                has_url: command.has_url,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::debug!(node = %created.id, path = %created.slug_path, "node created");
        Ok(created.into())
    }
}
