//! Astro Rules - zodiac compatibility, sign classification and tarot reveal rules
//!
//! The `core` module holds the three rule components as plain synchronous
//! functions and types. `services` and `routes` wrap them in an HTTP service
//! that fetches tarot content from a remote generator.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{classify, classify_date, CompatibilityEngine, RevealController, RuleError};
pub use models::{CompatibilityResult, DrawableCard, Element, RevealSnapshot, SignId, Verdict, ZodiacSign};
