pub mod dates;
pub mod errors;
pub mod node;
pub mod slug;
pub mod text;
