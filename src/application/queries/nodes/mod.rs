mod get_by_id;
mod get_by_path;
mod list_children;
mod service;

pub use get_by_id::GetNodeByIdQuery;
pub use get_by_path::GetNodeByPathQuery;
pub use list_children::ListChildrenQuery;
pub use service::NodeQueryService;
