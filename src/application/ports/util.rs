// src/application/ports/util.rs

/// Downgrades text to its closest ASCII spelling before slug normalization.
pub trait Transliterator: Send + Sync {
    fn downgrade(&self, input: &str) -> String;
}
