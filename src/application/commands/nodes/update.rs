// src/application/commands/nodes/update.rs
use super::NodeCommandService;
use crate::{
    application::{
        dto::NodeDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        node::{Node, NodeId, NodeUpdate, PageTitles},
        slug::{PathChange, ScopeKind, Slug, compute_path},
    },
};

#[derive(Debug, Clone, Default)]
pub struct UpdateNodeCommand {
    pub id: i64,
    pub short_title: Option<String>,
    /// `Some(None)` clears the long title.
    pub title: Option<Option<String>>,
    pub window_title: Option<Option<String>>,
    pub slug: Option<String>,
    pub has_url: Option<bool>,
    /// `Some(None)` moves the node to the root level.
    pub parent_id: Option<Option<i64>>,
}

impl UpdateNodeCommand {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn short_title(mut self, short_title: impl Into<String>) -> Self {
        self.short_title = Some(short_title.into());
        self
    }

    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = Some(title);
        self
    }

    pub fn window_title(mut self, window_title: Option<String>) -> Self {
        self.window_title = Some(window_title);
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn has_url(mut self, has_url: bool) -> Self {
        self.has_url = Some(has_url);
        self
    }

    pub fn move_to(mut self, parent_id: Option<i64>) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

impl NodeCommandService {
    pub async fn update_node(&self, command: UpdateNodeCommand) -> ApplicationResult<NodeDto> {
        let id = NodeId::new(command.id)?;
        let node = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("node {id} not found")))?;

        let mut update = NodeUpdate::new(id, self.clock.now());

        if let Some(titles) = Self::updated_titles(&node, &command)? {
            update = update.with_titles(titles);
        }

        let moved_to = match command.parent_id {
            Some(parent) => {
                let parent = parent.map(NodeId::new).transpose()?;
                (parent != node.parent_id).then_some(parent)
            }
            None => None,
        };
        let parent = moved_to.unwrap_or(node.parent_id);

        let chain = self.path_maintainer.ancestor_chain(parent).await?;
        if moved_to.is_some() && chain.iter().any(|ancestor| ancestor.id == id) {
            return Err(ApplicationError::validation(
                "a node cannot be moved below itself or one of its descendants",
            ));
        }

        let slug = self
            .resolve_slug(&node, command.slug.as_deref(), parent, moved_to.is_some())
            .await?;
        if slug != node.slug {
            update = update.with_slug(slug.clone());
        }

        let has_url = command.has_url.unwrap_or(node.has_url);
        let has_url_flipped = has_url != node.has_url;
        if has_url_flipped {
            update = update.with_has_url(has_url);
        }

        let slug_path = compute_path(&slug, &chain)?;
        let change = PathChange::between(Some(&node.slug_path), &slug_path);
        if change.is_changed() {
            update = update.with_slug_path(slug_path);
        }
        if let Some(parent) = moved_to {
            update = update.with_parent(parent);
        }

        let updated = self.write_repo.update(update).await?;

        // has_url changes what the children inherit even when this node's own
        // path stays the same
        if change.is_changed() || has_url_flipped {
            self.path_maintainer.cascade_descendants(&updated).await?;
        }

        Ok(updated.into())
    }

    fn updated_titles(node: &Node, command: &UpdateNodeCommand) -> ApplicationResult<Option<PageTitles>> {
        if command.short_title.is_none() && command.title.is_none() && command.window_title.is_none() {
            return Ok(None);
        }
        let current = &node.titles;
        let short_title = command
            .short_title
            .clone()
            .unwrap_or_else(|| current.short_title().to_owned());
        let title = command
            .title
            .clone()
            .unwrap_or_else(|| current.raw_title().map(str::to_owned));
        let window_title = command
            .window_title
            .clone()
            .unwrap_or_else(|| current.raw_window_title().map(str::to_owned));

        Ok(Some(
            PageTitles::new(short_title)?
                .with_title(title)?
                .with_window_title(window_title)?,
        ))
    }

    /// Explicit edits are normalized and made unique; a move into another
    /// sibling scope re-checks the current slug there.
    async fn resolve_slug(
        &self,
        node: &Node,
        requested: Option<&str>,
        parent: Option<NodeId>,
        moved: bool,
    ) -> ApplicationResult<Slug> {
        let source = match requested {
            Some(raw) => raw,
            None if moved && self.slug_service.scope() == ScopeKind::Siblings => node.slug.as_str(),
            None => return Ok(node.slug.clone()),
        };
        Ok(self
            .slug_service
            .generate_unique_slug(source, parent, Some(node.id))
            .await?)
    }
}
