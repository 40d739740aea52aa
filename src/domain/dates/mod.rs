pub mod format;
pub mod runtime;

pub use format::{DateFormats, DateVariant, format_time};
pub use runtime::{PartialDate, Runtime};
