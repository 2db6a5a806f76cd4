use std::collections::BTreeSet;

use crate::core::error::RuleError;
use crate::models::{DrawableCard, ReadingPhase, RevealSnapshot};

/// Gates the reveal of a drawn set of cards
///
/// # States
/// - `Idle`: no cards, nothing can be revealed
/// - `InProgress`: some cards hidden, gate open
/// - `Complete`: every card revealed, gate closed, synthesis ready
///
/// Cards may be revealed in any order. The gate only closes once the last
/// card is revealed.
#[derive(Debug, Clone)]
pub struct RevealController<T = DrawableCard> {
    cards: Vec<T>,
    revealed: BTreeSet<usize>,
    gate_open: bool,
}

impl<T> RevealController<T> {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            revealed: BTreeSet::new(),
            gate_open: false,
        }
    }

    pub fn phase(&self) -> ReadingPhase {
        if self.cards.is_empty() {
            ReadingPhase::Idle
        } else if self.revealed.len() == self.cards.len() {
            ReadingPhase::Complete
        } else {
            ReadingPhase::InProgress
        }
    }

    /// Begin a new reading, replacing whatever came before
    pub fn start_reading(&mut self, cards: Vec<T>) -> Result<RevealSnapshot, RuleError> {
        if self.phase() == ReadingPhase::InProgress {
            return Err(RuleError::InvalidStateTransition(
                "cannot start a reading while one is in progress",
            ));
        }
        if cards.is_empty() {
            return Err(RuleError::EmptyReading);
        }

        self.cards = cards;
        self.revealed.clear();
        self.gate_open = true;

        tracing::debug!("Reading started with {} cards", self.cards.len());
        Ok(self.snapshot())
    }

    /// Reveal the card at `index`
    ///
    /// Re-revealing a card, or revealing after the gate has closed, leaves
    /// the state untouched.
    pub fn reveal(&mut self, index: usize) -> Result<RevealSnapshot, RuleError> {
        if self.phase() == ReadingPhase::Idle {
            return Err(RuleError::InvalidStateTransition(
                "cannot reveal before a reading has started",
            ));
        }
        if index >= self.cards.len() {
            return Err(RuleError::IndexOutOfBounds {
                index,
                total: self.cards.len(),
            });
        }

        if self.gate_open && self.revealed.insert(index) {
            tracing::debug!("Revealed card {} ({}/{})", index, self.revealed.len(), self.cards.len());

            if self.revealed.len() == self.cards.len() {
                self.gate_open = false;
                tracing::debug!("All cards revealed, synthesis ready");
            }
        }

        Ok(self.snapshot())
    }

    /// Discard all state and return to idle
    pub fn reset(&mut self) {
        self.cards.clear();
        self.revealed.clear();
        self.gate_open = false;
    }

    #[inline]
    pub fn synthesis_ready(&self) -> bool {
        !self.cards.is_empty() && self.revealed.len() == self.cards.len()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn cards(&self) -> &[T] {
        &self.cards
    }

    /// Revealed cards with their indices, in slot order
    pub fn revealed_cards(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.revealed.iter().map(move |&i| (i, &self.cards[i]))
    }

    pub fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot {
            phase: self.phase(),
            total: self.cards.len(),
            revealed: self.revealed.clone(),
            gate_open: self.gate_open,
            synthesis_ready: self.synthesis_ready(),
        }
    }
}

impl<T> Default for RevealController<T> {
    fn default() -> Self {
        Self::new()
    }
}
