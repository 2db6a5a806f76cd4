use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score two signs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "zodiacSign1", alias = "sign_1", rename = "sign1")]
    pub sign1: String,
    #[validate(length(min = 1))]
    #[serde(alias = "zodiacSign2", alias = "sign_2", rename = "sign2")]
    pub sign2: String,
}

/// Query for date classification
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClassifyQuery {
    #[validate(range(min = 1, max = 12))]
    pub month: u32,
    #[validate(range(min = 1, max = 31))]
    pub day: u32,
}
