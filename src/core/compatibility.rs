use crate::core::error::RuleError;
use crate::models::{CompatibilityResult, Element, SignId, Verdict};

/// Elemental affinity, indexed by `Element::index()`
///
/// Same element 90, complementary (Fire/Air, Earth/Water) 80,
/// neutral (Fire/Earth, Air/Water) 60, challenging (Fire/Water, Earth/Air) 40.
const ELEMENT_AFFINITY: [[u8; 4]; 4] = [
    //  Fire Earth Air Water
    [90, 60, 80, 40], // Fire
    [60, 90, 40, 80], // Earth
    [80, 40, 90, 60], // Air
    [40, 80, 60, 90], // Water
];

/// Score for an unordered pair of elements
#[inline]
pub fn element_affinity(a: Element, b: Element) -> u8 {
    // Lookup always reads the upper triangle, so argument order cannot matter
    let (lo, hi) = if a.index() <= b.index() {
        (a.index(), b.index())
    } else {
        (b.index(), a.index())
    };
    ELEMENT_AFFINITY[lo][hi]
}

/// Verdict tier for a score; each lower bound is inclusive
#[inline]
pub fn verdict_for(score: u8) -> Verdict {
    match score {
        85..=u8::MAX => Verdict::PerfectMatch,
        70..=84 => Verdict::Great,
        50..=69 => Verdict::Good,
        _ => Verdict::Challenging,
    }
}

impl Verdict {
    /// Coarse level word used in the friendship and business lines
    pub fn level(self) -> &'static str {
        match self {
            Verdict::PerfectMatch | Verdict::Great => "high",
            Verdict::Good => "medium",
            Verdict::Challenging => "low",
        }
    }

    /// Short headline for the verdict
    pub fn message(self) -> &'static str {
        match self {
            Verdict::PerfectMatch => "Excellent compatibility! This is a match made in the stars.",
            Verdict::Great => "High compatibility indicates a strong potential for a harmonious relationship.",
            Verdict::Good => "Good compatibility with room for growth and understanding.",
            Verdict::Challenging => "Challenging compatibility that may require extra effort and understanding.",
        }
    }

    /// One-paragraph reading of the verdict
    pub fn summary(self) -> &'static str {
        match self {
            Verdict::PerfectMatch => "This is a perfect match! Your elements complement each other beautifully, creating a harmonious and passionate relationship.",
            Verdict::Great => "Great compatibility! You have strong potential for a loving and supportive relationship.",
            Verdict::Good => "Good compatibility with room for growth. Work on communication and understanding and this relationship can flourish.",
            Verdict::Challenging => "This match presents some challenges, but it can work with patience, open communication and respect for each other's differences.",
        }
    }

    pub fn tips(self) -> &'static [&'static str] {
        match self {
            Verdict::PerfectMatch | Verdict::Great => &[
                "Communicate openly and honestly",
                "Support each other's goals and dreams",
                "Celebrate your differences and similarities",
                "Maintain trust and loyalty",
                "Continue to grow together",
            ],
            Verdict::Good => &[
                "Focus on effective communication",
                "Be patient with each other's differences",
                "Find common ground and shared interests",
                "Practice active listening",
                "Work on building trust gradually",
            ],
            Verdict::Challenging => &[
                "Practice patience and understanding",
                "Focus on open and honest communication",
                "Respect each other's boundaries",
                "Seek professional guidance if needed",
                "Remember that challenges can lead to growth",
            ],
        }
    }
}

/// Scores sign pairings by element
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityEngine;

impl CompatibilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score two sign identifiers such as `"aries"` and `"Leo"`
    pub fn score(&self, sign_a: &str, sign_b: &str) -> Result<CompatibilityResult, RuleError> {
        let a: SignId = sign_a.parse()?;
        let b: SignId = sign_b.parse()?;
        Ok(self.score_signs(a, b))
    }

    pub fn score_signs(&self, sign_a: SignId, sign_b: SignId) -> CompatibilityResult {
        let element_a = sign_a.element();
        let element_b = sign_b.element();
        let score = element_affinity(element_a, element_b);

        CompatibilityResult {
            sign_a,
            sign_b,
            element_a,
            element_b,
            score,
            verdict: verdict_for(score),
        }
    }
}
