// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CardOrientation, CardPosition, CompatibilityResult, DrawableCard, Element, MonthDay, ReadingPhase,
    RevealSnapshot, SignId, Verdict, ZodiacSign,
};
pub use requests::{ClassifyQuery, CompatibilityRequest};
pub use responses::{
    CardView, CompatibilityResponse, ErrorResponse, HealthResponse, ReadingResponse,
};
