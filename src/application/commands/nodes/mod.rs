// src/application/commands/nodes/mod.rs
mod create;
mod rebuild;
mod service;
mod update;

pub use create::{CreateNodeCommand, CreateNodeCommandBuilder};
pub use service::{NodeCommandService, SlugSource, short_title_source};
pub use update::UpdateNodeCommand;
