// Unit tests for Astro Rules

use astro_rules::core::{classify, days_in_month, verdict_for, CompatibilityEngine, RevealController, RuleError};
use astro_rules::models::{ReadingPhase, SignId, Verdict};

#[test]
fn test_score_is_symmetric_for_all_pairs() {
    let engine = CompatibilityEngine::new();
    for a in SignId::ALL {
        for b in SignId::ALL {
            assert_eq!(
                engine.score_signs(a, b).score,
                engine.score_signs(b, a).score,
                "{} vs {}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_score_depends_only_on_element() {
    let engine = CompatibilityEngine::new();
    for a in SignId::ALL {
        for a2 in SignId::ALL.into_iter().filter(|s| s.element() == a.element()) {
            for b in SignId::ALL {
                for b2 in SignId::ALL.into_iter().filter(|s| s.element() == b.element()) {
                    assert_eq!(engine.score_signs(a, b).score, engine.score_signs(a2, b2).score);
                }
            }
        }
    }
}

#[test]
fn test_scores_stay_in_range() {
    let engine = CompatibilityEngine::new();
    for a in SignId::ALL {
        for b in SignId::ALL {
            let result = engine.score_signs(a, b);
            assert!(result.score <= 100);
            assert_eq!(result.verdict, verdict_for(result.score));
        }
    }
}

#[test]
fn test_verdict_boundary_exactness() {
    assert_eq!(verdict_for(85), Verdict::PerfectMatch);
    assert_eq!(verdict_for(84), Verdict::Great);
    assert_eq!(verdict_for(70), Verdict::Great);
    assert_eq!(verdict_for(69), Verdict::Good);
    assert_eq!(verdict_for(50), Verdict::Good);
    assert_eq!(verdict_for(49), Verdict::Challenging);
}

#[test]
fn test_named_scenarios() {
    let engine = CompatibilityEngine::new();

    let same = engine.score("aries", "leo").unwrap();
    assert_eq!((same.score, same.verdict), (90, Verdict::PerfectMatch));

    let opposed = engine.score("aries", "cancer").unwrap();
    assert_eq!((opposed.score, opposed.verdict), (40, Verdict::Challenging));

    let complementary = engine.score("Gemini", "Sagittarius").unwrap();
    assert_eq!((complementary.score, complementary.verdict), (80, Verdict::Great));

    let neutral = engine.score("taurus", "aries").unwrap();
    assert_eq!((neutral.score, neutral.verdict), (60, Verdict::Good));
}

#[test]
fn test_classifier_partitions_non_leap_year() {
    let mut seen = 0;
    for month in 1..=12 {
        let max_day = if month == 2 { 28 } else { days_in_month(month).unwrap() };
        for day in 1..=max_day {
            assert!(classify(month, day).is_ok(), "{}/{} not classified", month, day);
            seen += 1;
        }
    }
    assert_eq!(seen, 365);
}

#[test]
fn test_classifier_boundaries() {
    assert_eq!(classify(12, 22).unwrap().id, SignId::Capricorn);
    assert_eq!(classify(1, 19).unwrap().id, SignId::Capricorn);
    assert_eq!(classify(1, 20).unwrap().id, SignId::Aquarius);
    assert_eq!(classify(3, 20).unwrap().id, SignId::Pisces);
    assert_eq!(classify(3, 21).unwrap().id, SignId::Aries);
    assert_eq!(classify(2, 18).unwrap().id, SignId::Aquarius);
    assert_eq!(classify(2, 19).unwrap().id, SignId::Pisces);
}

#[test]
fn test_every_sign_reachable_from_its_start_and_end() {
    for id in SignId::ALL {
        let sign = id.sign();
        assert_eq!(classify(sign.start.month, sign.start.day).unwrap().id, id);
        assert_eq!(classify(sign.end.month, sign.end.day).unwrap().id, id);
    }
}

#[test]
fn test_classifier_rejects_invalid_input() {
    assert!(classify(0, 1).unwrap_err().is_invalid_input());
    assert!(classify(2, 30).unwrap_err().is_invalid_input());
    assert!(classify(11, 31).is_err());
}

#[test]
fn test_completion_regardless_of_order() {
    let orders = [[0, 1, 2], [2, 1, 0], [1, 2, 0], [2, 0, 1]];

    for order in orders {
        let mut controller = RevealController::new();
        controller.start_reading(vec!["past", "present", "future"]).unwrap();

        for (step, &index) in order.iter().enumerate() {
            let snapshot = controller.reveal(index).unwrap();
            assert_eq!(snapshot.synthesis_ready, step == 2, "order {:?} step {}", order, step);
        }
        assert_eq!(controller.phase(), ReadingPhase::Complete);
    }
}

#[test]
fn test_reveal_idempotence() {
    let mut controller = RevealController::new();
    controller.start_reading(vec!["past", "present", "future"]).unwrap();

    let once = controller.reveal(0).unwrap();
    let again = controller.reveal(0).unwrap();
    assert_eq!(once, again);
}

#[test]
fn test_reset_then_start_after_complete() {
    let mut controller = RevealController::new();
    controller.start_reading(vec!["a", "b", "c"]).unwrap();
    for i in 0..3 {
        controller.reveal(i).unwrap();
    }
    assert!(controller.synthesis_ready());

    controller.reset();
    let snapshot = controller.start_reading(vec!["d", "e", "f"]).unwrap();

    assert!(snapshot.revealed.is_empty());
    assert!(snapshot.gate_open);
    assert!(!snapshot.synthesis_ready);
}

#[test]
fn test_reveal_without_reading_is_state_error() {
    let mut controller: RevealController<String> = RevealController::new();
    assert!(matches!(
        controller.reveal(0),
        Err(RuleError::InvalidStateTransition(_))
    ));
}
