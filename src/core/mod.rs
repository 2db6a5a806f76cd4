// Rule component exports
pub mod compatibility;
pub mod error;
pub mod reveal;
pub mod zodiac;

pub use compatibility::{element_affinity, verdict_for, CompatibilityEngine};
pub use error::RuleError;
pub use reveal::RevealController;
pub use zodiac::{classify, classify_date, days_in_month, ZODIAC_SIGNS};
