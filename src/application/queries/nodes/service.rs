use std::sync::Arc;

use crate::domain::node::NodeReadRepository;

pub struct NodeQueryService {
    pub(super) read_repo: Arc<dyn NodeReadRepository>,
}

impl NodeQueryService {
    pub fn new(read_repo: Arc<dyn NodeReadRepository>) -> Self {
        Self { read_repo }
    }
}
