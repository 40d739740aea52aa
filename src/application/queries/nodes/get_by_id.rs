use super::NodeQueryService;
use crate::{
    application::{
        dto::NodeDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::node::NodeId,
};

pub struct GetNodeByIdQuery {
    pub id: i64,
}

impl NodeQueryService {
    pub async fn get_node_by_id(&self, query: GetNodeByIdQuery) -> ApplicationResult<NodeDto> {
        let id = NodeId::new(query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("node {id} not found")))
    }
}
