pub mod entity;
pub mod services;
pub mod repository;
pub mod titles;
pub mod value_objects;

pub use entity::{NewNode, Node, NodeUpdate};
pub use repository::{NodeReadRepository, NodeWriteRepository};
pub use titles::PageTitles;
pub use value_objects::NodeId;
pub use services::{NodeSlugService, SlugPathMaintainer};
