use crate::domain::errors::DomainError;

const CNT_NODE_PARENT_SLUG: &str = "nodes_parent_slug_key";
const CNT_NODE_PARENT: &str = "nodes_parent_id_fkey";
const CNT_NODE_PARENT_NOT_SELF: &str = "nodes_parent_not_self_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_NODE_PARENT_SLUG => {
                        DomainError::Conflict("slug already exists among siblings".into())
                    }
                    CNT_NODE_PARENT => DomainError::NotFound("parent node not found".into()),
                    CNT_NODE_PARENT_NOT_SELF => {
                        DomainError::Validation("a node cannot be its own parent".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Escapes `%`, `_` and `\` for use inside a `LIKE` pattern.
pub fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
