use super::NodeQueryService;
use crate::{
    application::{dto::NodeDto, error::ApplicationResult},
    domain::node::NodeId,
};

pub struct ListChildrenQuery {
    /// `None` lists the root nodes.
    pub parent_id: Option<i64>,
}

impl NodeQueryService {
    pub async fn list_children(&self, query: ListChildrenQuery) -> ApplicationResult<Vec<NodeDto>> {
        let parent = query.parent_id.map(NodeId::new).transpose()?;
        let children = self.read_repo.children(parent).await?;
        Ok(children.into_iter().map(Into::into).collect())
    }
}
