use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::core::error::RuleError;

/// Classical element grouping; exactly one per sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    /// Row/column position in the affinity table
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Element::Fire => 0,
            Element::Earth => 1,
            Element::Air => 2,
            Element::Water => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical sign identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignId {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl SignId {
    pub const ALL: [SignId; 12] = [
        SignId::Aries,
        SignId::Taurus,
        SignId::Gemini,
        SignId::Cancer,
        SignId::Leo,
        SignId::Virgo,
        SignId::Libra,
        SignId::Scorpio,
        SignId::Sagittarius,
        SignId::Capricorn,
        SignId::Aquarius,
        SignId::Pisces,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SignId::Aries => "aries",
            SignId::Taurus => "taurus",
            SignId::Gemini => "gemini",
            SignId::Cancer => "cancer",
            SignId::Leo => "leo",
            SignId::Virgo => "virgo",
            SignId::Libra => "libra",
            SignId::Scorpio => "scorpio",
            SignId::Sagittarius => "sagittarius",
            SignId::Capricorn => "capricorn",
            SignId::Aquarius => "aquarius",
            SignId::Pisces => "pisces",
        }
    }

    /// Reference record for this sign
    pub fn sign(self) -> &'static ZodiacSign {
        crate::core::zodiac::sign(self)
    }

    pub fn element(self) -> Element {
        self.sign().element
    }
}

impl fmt::Display for SignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignId {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SignId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RuleError::UnknownSign(s.to_string()))
    }
}

/// Calendar position without a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

/// Immutable reference data for one sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacSign {
    pub id: SignId,
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub ruling_planet: &'static str,
    pub start: MonthDay,
    pub end: MonthDay,
    pub dates: &'static str,
    pub traits: &'static [&'static str],
    pub description: &'static str,
    pub lucky_colors: &'static [&'static str],
    pub lucky_numbers: &'static [u8],
}

impl ZodiacSign {
    /// Inclusive on both ends. A range whose start falls after its end wraps the year.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let date = MonthDay::new(month, day);
        if self.start <= self.end {
            self.start <= date && date <= self.end
        } else {
            date >= self.start || date <= self.end
        }
    }
}

/// Qualitative label for a compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    PerfectMatch,
    Great,
    Good,
    Challenging,
}

/// Scored pairing of two signs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub sign_a: SignId,
    pub sign_b: SignId,
    pub element_a: Element,
    pub element_b: Element,
    pub score: u8,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardOrientation {
    Upright,
    Reversed,
}

/// Slot a card occupies in a three-card reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardPosition {
    Past,
    Present,
    Future,
}

impl CardPosition {
    pub const ORDER: [CardPosition; 3] = [CardPosition::Past, CardPosition::Present, CardPosition::Future];
}

impl FromStr for CardPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "past" | "first" => Ok(CardPosition::Past),
            "present" | "second" => Ok(CardPosition::Present),
            "future" | "third" => Ok(CardPosition::Future),
            other => Err(format!("unknown card position '{}'", other)),
        }
    }
}

/// A validated card from the content service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawableCard {
    pub id: String,
    pub name: String,
    pub upright: String,
    pub reversed: String,
    pub image: Option<String>,
    pub suit: Option<String>,
    pub orientation: CardOrientation,
    pub position: CardPosition,
}

impl DrawableCard {
    /// Text for the orientation the card was drawn in
    pub fn display_text(&self) -> &str {
        match self.orientation {
            CardOrientation::Upright => &self.upright,
            CardOrientation::Reversed => &self.reversed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReadingPhase {
    Idle,
    InProgress,
    Complete,
}

/// Point-in-time view of a reveal controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealSnapshot {
    pub phase: ReadingPhase,
    pub total: usize,
    pub revealed: BTreeSet<usize>,
    pub gate_open: bool,
    pub synthesis_ready: bool,
}
