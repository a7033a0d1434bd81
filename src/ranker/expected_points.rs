/// Points for calling the exact result.
pub const EXACT_POINTS: f64 = 3.0;

/// Credit for a non-draw call that misses the exact score.
pub const NEAR_MISS_POINTS: f64 = 2.0;

pub fn implied_probability(odds: f64) -> f64 {
    1.0 / odds
}

/// Expected points of betting on one correct-score outcome.
///
/// A draw only scores on the exact result. Any other score is assumed to get
/// the partial credit whenever it is not exact.
pub fn expected_points(probability: f64, is_draw: bool) -> f64 {
    if is_draw {
        EXACT_POINTS * probability
    } else {
        EXACT_POINTS * probability + NEAR_MISS_POINTS * (1.0 - probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn probability_is_inverse_odds() {
        assert!(approx(implied_probability(4.0), 0.25));
        assert!(approx(implied_probability(1.25), 0.8));
    }

    #[test]
    fn draw_only_scores_exact() {
        assert!(approx(expected_points(0.25, true), 0.75));
        assert!(approx(expected_points(1.0 / 6.0, true), 0.5));
    }

    #[test]
    fn non_draw_gets_partial_credit() {
        assert!(approx(expected_points(0.2, false), 2.2));
        assert!(approx(expected_points(0.125, false), 2.125));
        for odds in [1.5, 3.0, 7.25, 151.0] {
            let p = implied_probability(odds);
            assert!(approx(expected_points(p, false), 3.0 / odds + 2.0 * (1.0 - 1.0 / odds)));
        }
    }
}
