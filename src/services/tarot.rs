use crate::models::{CardOrientation, CardPosition, DrawableCard};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

/// Cards per reading
pub const READING_SIZE: usize = 3;

/// Errors that can occur when fetching readings from the content service
#[derive(Debug, Error)]
pub enum TarotError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Envelope every content-service endpoint wraps its payload in
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

/// Reading as sent over the wire; nothing is trusted yet
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteReading {
    #[serde(default)]
    pub cards: Vec<RemoteCard>,
    pub interpretation: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCard {
    pub id: Option<String>,
    pub name: Option<String>,
    pub meaning: Option<String>,
    pub reversed: Option<String>,
    pub image: Option<String>,
    pub suit: Option<String>,
    #[serde(default)]
    pub is_reversed: bool,
    pub position: Option<String>,
}

/// A validated reading, cards ordered past, present, future
#[derive(Debug, Clone)]
pub struct TarotReading {
    pub cards: Vec<DrawableCard>,
    pub interpretation: String,
    pub message: String,
}

fn required(field: Option<String>, name: &str, slot: usize) -> Result<String, TarotError> {
    field
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| TarotError::InvalidResponse(format!("card {} is missing '{}'", slot, name)))
}

impl TryFrom<(usize, RemoteCard)> for DrawableCard {
    type Error = TarotError;

    fn try_from((slot, card): (usize, RemoteCard)) -> Result<Self, Self::Error> {
        let position = required(card.position, "position", slot)?
            .parse::<CardPosition>()
            .map_err(|e| TarotError::InvalidResponse(format!("card {}: {}", slot, e)))?;

        Ok(DrawableCard {
            id: required(card.id, "id", slot)?,
            name: required(card.name, "name", slot)?,
            upright: required(card.meaning, "meaning", slot)?,
            reversed: required(card.reversed, "reversed", slot)?,
            image: card.image,
            suit: card.suit,
            orientation: if card.is_reversed {
                CardOrientation::Reversed
            } else {
                CardOrientation::Upright
            },
            position,
        })
    }
}

impl TryFrom<RemoteReading> for TarotReading {
    type Error = TarotError;

    fn try_from(reading: RemoteReading) -> Result<Self, Self::Error> {
        if reading.cards.len() != READING_SIZE {
            return Err(TarotError::InvalidResponse(format!(
                "expected {} cards, got {}",
                READING_SIZE,
                reading.cards.len()
            )));
        }

        let mut cards = reading
            .cards
            .into_iter()
            .enumerate()
            .map(DrawableCard::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let positions: HashSet<CardPosition> = cards.iter().map(|c| c.position).collect();
        if positions.len() != cards.len() {
            return Err(TarotError::InvalidResponse(
                "cards must occupy distinct positions".into(),
            ));
        }
        cards.sort_by_key(|c| c.position);

        let interpretation = reading
            .interpretation
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| TarotError::InvalidResponse("missing interpretation".into()))?;

        Ok(TarotReading {
            cards,
            interpretation,
            message: reading.message.unwrap_or_default(),
        })
    }
}

/// Client for the remote content-generation service
///
/// Only the tarot endpoint is consumed; the payload is validated here so the
/// rest of the crate only ever sees `DrawableCard` values.
#[derive(Debug, Clone)]
pub struct TarotClient {
    base_url: String,
    client: Client,
}

impl TarotClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, TarotError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    /// Draw a fresh three-card reading
    pub async fn draw_reading(&self) -> Result<TarotReading, TarotError> {
        let url = format!("{}/api/tarot", self.base_url.trim_end_matches('/'));

        tracing::debug!("Fetching tarot reading from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(TarotError::ApiError(format!(
                "Failed to fetch reading: {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<RemoteReading> = response
            .json()
            .await
            .map_err(|e| TarotError::InvalidResponse(format!("Failed to parse reading: {}", e)))?;

        if !envelope.success {
            return Err(TarotError::ApiError(
                envelope.error.unwrap_or_else(|| "request was not successful".to_string()),
            ));
        }

        let data = envelope
            .data
            .ok_or_else(|| TarotError::InvalidResponse("Missing data object".into()))?;

        TarotReading::try_from(data)
    }
}
