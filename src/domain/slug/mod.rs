pub mod allocator;
pub mod normalizer;
pub mod path;
pub mod settings;
pub mod value_objects;

pub use allocator::{SlugAllocator, SlugScopeLookup};
pub use normalizer::SlugNormalizer;
pub use path::{
    HasSlugFields, HasTreePosition, PathChange, PathRewrite, compute_path, plan_cascade,
};
pub use settings::{DEFAULT_MAX_LENGTH, DEFAULT_SLUG, ScopeKind, SlugScope, SlugSettings};
pub use value_objects::{PATH_SEPARATOR, Slug, SlugPath};
