// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the `created_at` / `updated_at` timestamps written on save.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
