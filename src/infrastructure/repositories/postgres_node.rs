// src/infrastructure/repositories/postgres_node.rs
use super::error::{escape_like, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::node::{
    NewNode, Node, NodeId, NodeReadRepository, NodeUpdate, NodeWriteRepository, PageTitles,
};
use crate::domain::slug::{Slug, SlugPath, SlugScope, SlugScopeLookup};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const NODE_COLUMNS: &str =
    "id, parent_id, short_title, title, window_title, slug, slug_path, has_url, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresNodeWriteRepository {
    pool: PgPool,
}

impl PostgresNodeWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresNodeReadRepository {
    pool: PgPool,
}

impl PostgresNodeReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NodeRow {
    id: i64,
    parent_id: Option<i64>,
    short_title: String,
    title: Option<String>,
    window_title: Option<String>,
    slug: String,
    slug_path: String,
    has_url: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NodeRow> for Node {
    type Error = DomainError;

    fn try_from(row: NodeRow) -> Result<Self, Self::Error> {
        Ok(Node {
            id: NodeId::new(row.id)?,
            parent_id: row.parent_id.map(NodeId::new).transpose()?,
            titles: PageTitles::new(row.short_title)?
                .with_title(row.title)?
                .with_window_title(row.window_title)?,
            slug: Slug::new(row.slug)?,
            slug_path: SlugPath::new(row.slug_path)?,
            has_url: row.has_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_nodes(rows: Vec<NodeRow>) -> DomainResult<Vec<Node>> {
    rows.into_iter().map(Node::try_from).collect()
}

#[async_trait]
impl SlugScopeLookup for PostgresNodeReadRepository {
    async fn find_similar_slugs(
        &self,
        scope: &SlugScope,
        prefix: &str,
        exclude: Option<NodeId>,
    ) -> DomainResult<Vec<String>> {
        let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT slug FROM nodes WHERE lower(slug) LIKE ");
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\'");

        if let Some(id) = exclude {
            builder.push(" AND id <> ");
            builder.push_bind(i64::from(id));
        }
        if let SlugScope::Siblings { parent } = scope {
            builder.push(" AND parent_id IS NOT DISTINCT FROM ");
            builder.push_bind(parent.map(i64::from));
        }

        builder
            .build_query_scalar::<String>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl NodeReadRepository for PostgresNodeReadRepository {
    async fn find_by_id(&self, id: NodeId) -> DomainResult<Option<Node>> {
        let row = sqlx::query_as::<_, NodeRow>(&format!(
            "SELECT {NODE_COLUMNS} FROM nodes WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Node::try_from).transpose()
    }

    async fn find_by_slug_path(&self, slug_path: &SlugPath) -> DomainResult<Option<Node>> {
        let row = sqlx::query_as::<_, NodeRow>(&format!(
            "SELECT {NODE_COLUMNS} FROM nodes WHERE slug_path = $1 ORDER BY id LIMIT 1"
        ))
        .bind(slug_path.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Node::try_from).transpose()
    }

    async fn ancestors(&self, id: NodeId) -> DomainResult<Vec<Node>> {
        let rows = sqlx::query_as::<_, NodeRow>(&format!(
            "WITH RECURSIVE chain AS (
                 SELECT {NODE_COLUMNS}, 0 AS depth
                 FROM nodes
                 WHERE id = (SELECT parent_id FROM nodes WHERE id = $1)
                 UNION ALL
                 SELECT p.id, p.parent_id, p.short_title, p.title, p.window_title,
                        p.slug, p.slug_path, p.has_url, p.created_at, p.updated_at,
                        c.depth + 1
                 FROM nodes p
                 JOIN chain c ON p.id = c.parent_id
             )
             SELECT {NODE_COLUMNS} FROM chain ORDER BY depth DESC"
        ))
        .bind(i64::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_nodes(rows)
    }

    async fn children(&self, parent: Option<NodeId>) -> DomainResult<Vec<Node>> {
        let rows = sqlx::query_as::<_, NodeRow>(&format!(
            "SELECT {NODE_COLUMNS} FROM nodes WHERE parent_id IS NOT DISTINCT FROM $1 ORDER BY id"
        ))
        .bind(parent.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_nodes(rows)
    }

    async fn descendants(&self, id: NodeId) -> DomainResult<Vec<Node>> {
        let rows = sqlx::query_as::<_, NodeRow>(&format!(
            "WITH RECURSIVE tree AS (
                 SELECT {NODE_COLUMNS}, ARRAY[id] AS sort_path
                 FROM nodes
                 WHERE parent_id = $1
                 UNION ALL
                 SELECT n.id, n.parent_id, n.short_title, n.title, n.window_title,
                        n.slug, n.slug_path, n.has_url, n.created_at, n.updated_at,
                        t.sort_path || n.id
                 FROM nodes n
                 JOIN tree t ON n.parent_id = t.id
             )
             SELECT {NODE_COLUMNS} FROM tree ORDER BY sort_path"
        ))
        .bind(i64::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_nodes(rows)
    }
}

#[async_trait]
impl NodeWriteRepository for PostgresNodeWriteRepository {
    async fn insert(&self, node: NewNode) -> DomainResult<Node> {
        let NewNode {
            parent_id,
            titles,
            slug,
            slug_path,
            has_url,
            created_at,
            updated_at,
        } = node;

        let row = sqlx::query_as::<_, NodeRow>(&format!(
            "INSERT INTO nodes (parent_id, short_title, title, window_title, slug, slug_path, has_url, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {NODE_COLUMNS}"
        ))
        .bind(parent_id.map(i64::from))
        .bind(titles.short_title())
        .bind(titles.raw_title())
        .bind(titles.raw_window_title())
        .bind(slug.as_str())
        .bind(slug_path.as_str())
        .bind(has_url)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Node::try_from(row)
    }

    async fn update(&self, update: NodeUpdate) -> DomainResult<Node> {
        let NodeUpdate {
            id,
            parent_id,
            titles,
            slug,
            slug_path,
            has_url,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE nodes SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(parent_id) = parent_id {
            builder.push(", parent_id = ");
            builder.push_bind(parent_id.map(i64::from));
        }
        if let Some(titles) = titles {
            builder.push(", short_title = ");
            builder.push_bind(titles.short_title().to_owned());
            builder.push(", title = ");
            builder.push_bind(titles.raw_title().map(str::to_owned));
            builder.push(", window_title = ");
            builder.push_bind(titles.raw_window_title().map(str::to_owned));
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(slug_path) = slug_path {
            builder.push(", slug_path = ");
            builder.push_bind(String::from(slug_path));
        }
        if let Some(has_url) = has_url {
            builder.push(", has_url = ");
            builder.push_bind(has_url);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(NODE_COLUMNS);

        let row = builder
            .build_query_as::<NodeRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("node not found".into()))?;

        Node::try_from(row)
    }

    async fn update_slug_path(&self, id: NodeId, slug_path: &SlugPath) -> DomainResult<()> {
        let result = sqlx::query("UPDATE nodes SET slug_path = $1 WHERE id = $2")
            .bind(slug_path.as_str())
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("node not found".into()));
        }
        Ok(())
    }
}
