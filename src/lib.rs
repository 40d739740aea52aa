//! Unique slug allocation and slug-path maintenance for tree-structured
//! content.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
