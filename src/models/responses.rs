use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::core::RevealController;
use crate::models::domain::{
    CardPosition, CompatibilityResult, DrawableCard, Element, ReadingPhase, SignId, Verdict,
};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response for the compatibility endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    pub sign1: SignId,
    pub sign2: SignId,
    pub element1: Element,
    pub element2: Element,
    pub score: u8,
    pub verdict: Verdict,
    pub message: &'static str,
    pub summary: &'static str,
    pub love_compatibility: String,
    pub friendship_compatibility: String,
    pub business_compatibility: String,
    pub tips: &'static [&'static str],
}

impl From<CompatibilityResult> for CompatibilityResponse {
    fn from(result: CompatibilityResult) -> Self {
        let name1 = result.sign_a.sign().name;
        let name2 = result.sign_b.sign().name;
        let level = result.verdict.level();

        Self {
            sign1: result.sign_a,
            sign2: result.sign_b,
            element1: result.element_a,
            element2: result.element_b,
            score: result.score,
            verdict: result.verdict,
            message: result.verdict.message(),
            summary: result.verdict.summary(),
            love_compatibility: format!(
                "{} and {} have a {}% love compatibility. {}",
                name1,
                name2,
                result.score,
                result.verdict.message()
            ),
            friendship_compatibility: format!(
                "As friends, {} and {} can build a {} level of trust and understanding.",
                name1, name2, level
            ),
            business_compatibility: format!(
                "In business partnerships, {} and {} can achieve {} success through collaboration.",
                name1, name2, level
            ),
            tips: result.verdict.tips(),
        }
    }
}

/// One slot of a reading; content is withheld until revealed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub index: usize,
    pub position: CardPosition,
    pub revealed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<DrawableCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response for reading endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingResponse {
    pub reading_id: Uuid,
    pub phase: ReadingPhase,
    pub revealed: BTreeSet<usize>,
    pub gate_open: bool,
    pub synthesis_ready: bool,
    pub cards: Vec<CardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ReadingResponse {
    pub fn new(
        reading_id: Uuid,
        controller: &RevealController<DrawableCard>,
        interpretation: &str,
        message: &str,
    ) -> Self {
        let snapshot = controller.snapshot();

        let cards = controller
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let revealed = snapshot.revealed.contains(&index);
                CardView {
                    index,
                    position: card.position,
                    revealed,
                    card: revealed.then(|| card.clone()),
                    text: revealed.then(|| card.display_text().to_string()),
                }
            })
            .collect();

        // Synthesis stays hidden until every card is face up
        let (interpretation, message) = if snapshot.synthesis_ready {
            (Some(interpretation.to_string()), Some(message.to_string()))
        } else {
            (None, None)
        };

        Self {
            reading_id,
            phase: snapshot.phase,
            revealed: snapshot.revealed,
            gate_open: snapshot.gate_open,
            synthesis_ready: snapshot.synthesis_ready,
            cards,
            interpretation,
            message,
        }
    }
}
