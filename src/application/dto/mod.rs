pub mod nodes;

pub use nodes::NodeDto;
