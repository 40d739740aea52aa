use super::NodeQueryService;
use crate::{
    application::{
        dto::NodeDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::{PATH_SEPARATOR, SlugPath},
};

pub struct GetNodeByPathQuery {
    /// URL path such as `/about/team/`; surrounding slashes are ignored.
    pub path: String,
}

impl NodeQueryService {
    pub async fn get_node_by_path(&self, query: GetNodeByPathQuery) -> ApplicationResult<NodeDto> {
        let trimmed = query.path.trim().trim_matches(PATH_SEPARATOR);
        let path = SlugPath::new(trimmed)
            .map_err(|_| ApplicationError::not_found(format!("no node at {:?}", query.path)))?;
        self.read_repo
            .find_by_slug_path(&path)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("no node at {path}")))
    }
}
