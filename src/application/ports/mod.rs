// src/application/ports/mod.rs
pub mod time;
pub mod util;

// Shorter names for the injected trait objects
pub type ClockPort = dyn time::Clock;
pub type TransliteratorPort = dyn util::Transliterator;
