//! Unit tests for EMA indicator

use crate::fixtures::{flat_closes, zigzag_closes};
use stockpulse::indicators::trend::{calculate_ema, ema_alpha};

#[test]
fn test_ema_alpha() {
    assert!((ema_alpha(12) - 2.0 / 13.0).abs() < f64::EPSILON);
    assert!((ema_alpha(26) - 2.0 / 27.0).abs() < f64::EPSILON);
    assert!((ema_alpha(9) - 0.2).abs() < f64::EPSILON);
}

#[test]
fn test_ema_recursion_holds() {
    let closes = zigzag_closes(252);
    for span in [9, 12, 26] {
        let alpha = ema_alpha(span);
        let ema = calculate_ema(&closes, span);
        assert_eq!(ema.len(), closes.len());
        assert_eq!(ema[0], closes[0]);
        for i in 1..closes.len() {
            let expected = closes[i] * alpha + ema[i - 1] * (1.0 - alpha);
            assert!(
                (ema[i] - expected).abs() < 1e-9,
                "span {} index {}: {} != {}",
                span,
                i,
                ema[i],
                expected
            );
        }
    }
}

#[test]
fn test_ema_flat_input_stays_flat() {
    let closes = flat_closes(100, 123.45);
    let ema = calculate_ema(&closes, 12);
    assert!(ema.iter().all(|&v| v == 123.45));
}

#[test]
fn test_ema_empty_input() {
    assert!(calculate_ema(&[], 12).is_empty());
}
