// src/infrastructure/repositories/mod.rs
mod error;
mod memory_node;
mod postgres_node;

pub use error::map_sqlx;
pub use memory_node::InMemoryNodeRepository;
pub use postgres_node::{PostgresNodeReadRepository, PostgresNodeWriteRepository};
