use crate::core::{RevealController, RuleError};
use crate::models::{DrawableCard, ReadingResponse};
use crate::services::tarot::TarotReading;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Errors that can occur when operating on a stored reading
#[derive(Debug, Error)]
pub enum ReadingError {
    #[error("Reading not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// One caller-owned reading: its controller plus the synthesis text
#[derive(Debug, Default)]
pub struct ReadingSession {
    pub controller: RevealController<DrawableCard>,
    pub interpretation: String,
    pub message: String,
}

impl ReadingSession {
    /// Replace whatever this session held with a freshly drawn reading
    pub fn redraw(&mut self, reading: TarotReading) -> Result<(), RuleError> {
        self.controller.reset();
        self.controller.start_reading(reading.cards)?;
        self.interpretation = reading.interpretation;
        self.message = reading.message;
        Ok(())
    }

    pub fn response(&self, id: Uuid) -> ReadingResponse {
        ReadingResponse::new(id, &self.controller, &self.interpretation, &self.message)
    }
}

/// Registry of independent readings addressed by handle
///
/// Each handle owns its own controller, so concurrent readings never share
/// state. Entries expire once the configured TTL has passed since they were
/// started, whether or not they are still being revealed.
#[derive(Clone)]
pub struct ReadingRegistry {
    sessions: moka::future::Cache<Uuid, Arc<Mutex<ReadingSession>>>,
}

impl ReadingRegistry {
    pub fn new(max_readings: u64, ttl_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_readings)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { sessions }
    }

    /// Start a new reading and return its handle
    pub async fn start(&self, reading: TarotReading) -> Result<ReadingResponse, ReadingError> {
        let id = Uuid::new_v4();
        let mut session = ReadingSession::default();
        session.redraw(reading)?;

        let response = session.response(id);
        self.sessions.insert(id, Arc::new(Mutex::new(session))).await;

        tracing::debug!("Started reading {}", id);
        Ok(response)
    }

    async fn session(&self, id: Uuid) -> Result<Arc<Mutex<ReadingSession>>, ReadingError> {
        self.sessions.get(&id).await.ok_or(ReadingError::NotFound(id))
    }

    pub async fn snapshot(&self, id: Uuid) -> Result<ReadingResponse, ReadingError> {
        let session = self.session(id).await?;
        let session = session.lock().await;
        Ok(session.response(id))
    }

    pub async fn reveal(&self, id: Uuid, index: usize) -> Result<ReadingResponse, ReadingError> {
        let session = self.session(id).await?;
        let mut session = session.lock().await;
        session.controller.reveal(index)?;
        Ok(session.response(id))
    }

    /// Re-draw on an existing handle; the previous reading is discarded in full
    pub async fn redraw(&self, id: Uuid, reading: TarotReading) -> Result<ReadingResponse, ReadingError> {
        let session = self.session(id).await?;
        let mut session = session.lock().await;
        session.redraw(reading)?;

        tracing::debug!("Redrew reading {}", id);
        Ok(session.response(id))
    }

    /// Discard a reading; returns whether it existed
    pub async fn reset(&self, id: Uuid) -> bool {
        let existed = self.sessions.remove(&id).await.is_some();
        if existed {
            tracing::debug!("Reset reading {}", id);
        }
        existed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardOrientation, CardPosition, ReadingPhase};

    fn reading(prefix: &str) -> TarotReading {
        let cards = CardPosition::ORDER
            .iter()
            .enumerate()
            .map(|(i, &position)| DrawableCard {
                id: format!("{}{}", prefix, i),
                name: format!("Card {}{}", prefix, i),
                upright: "upright".to_string(),
                reversed: "reversed".to_string(),
                image: None,
                suit: None,
                orientation: CardOrientation::Upright,
                position,
            })
            .collect();

        TarotReading {
            cards,
            interpretation: format!("interpretation {}", prefix),
            message: "message".to_string(),
        }
    }

    #[tokio::test]
    async fn test_reveal_flow() {
        let registry = ReadingRegistry::new(10, 60);
        let started = registry.start(reading("a")).await.unwrap();
        let id = started.reading_id;

        assert_eq!(started.phase, ReadingPhase::InProgress);
        registry.reveal(id, 0).await.unwrap();
        registry.reveal(id, 2).await.unwrap();
        let done = registry.reveal(id, 1).await.unwrap();

        assert!(done.synthesis_ready);
        assert_eq!(done.interpretation.as_deref(), Some("interpretation a"));
    }

    #[tokio::test]
    async fn test_readings_are_independent() {
        let registry = ReadingRegistry::new(10, 60);
        let first = registry.start(reading("a")).await.unwrap().reading_id;
        let second = registry.start(reading("b")).await.unwrap().reading_id;

        registry.reveal(first, 0).await.unwrap();

        let other = registry.snapshot(second).await.unwrap();
        assert!(other.revealed.is_empty());
    }

    #[tokio::test]
    async fn test_reset_removes_reading() {
        let registry = ReadingRegistry::new(10, 60);
        let id = registry.start(reading("a")).await.unwrap().reading_id;

        assert!(registry.reset(id).await);
        assert!(!registry.reset(id).await);
        assert!(matches!(registry.snapshot(id).await, Err(ReadingError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_redraw_clears_revealed_cards() {
        let registry = ReadingRegistry::new(10, 60);
        let id = registry.start(reading("a")).await.unwrap().reading_id;
        for i in 0..3 {
            registry.reveal(id, i).await.unwrap();
        }

        let fresh = registry.redraw(id, reading("b")).await.unwrap();
        assert!(fresh.revealed.is_empty());
        assert!(fresh.gate_open);
        assert!(fresh.interpretation.is_none());
    }

    #[tokio::test]
    async fn test_reading_expires_after_ttl_despite_activity() {
        let registry = ReadingRegistry::new(10, 1);
        let id = registry.start(reading("a")).await.unwrap().reading_id;

        tokio::time::sleep(Duration::from_millis(600)).await;
        registry.reveal(id, 0).await.unwrap();

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(matches!(registry.snapshot(id).await, Err(ReadingError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_out_of_bounds_reveal_is_rule_error() {
        let registry = ReadingRegistry::new(10, 60);
        let id = registry.start(reading("a")).await.unwrap().reading_id;

        let err = registry.reveal(id, 7).await.unwrap_err();
        assert!(matches!(err, ReadingError::Rule(RuleError::IndexOutOfBounds { .. })));
    }
}
