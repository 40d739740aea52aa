use crate::domain::node::Node;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeDto {
    pub id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub short_title: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub window_title: Option<String>,
    pub slug: String,
    pub slug_path: String,
    pub has_url: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Node> for NodeDto {
    fn from(node: Node) -> Self {
        Self {
            id: node.id.into(),
            parent_id: node.parent_id.map(Into::into),
            short_title: node.titles.short_title().to_owned(),
            title: node.titles.raw_title().map(str::to_owned),
            window_title: node.titles.raw_window_title().map(str::to_owned),
            slug: node.slug.into(),
            slug_path: node.slug_path.into(),
            has_url: node.has_url,
            created_at: node.created_at,
            updated_at: node.updated_at,
        }
    }
}
