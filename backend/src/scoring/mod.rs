//! Quarterly scoring
//!
//! After every transition the policymaker earns points for each indicator
//! that landed near its target. The rules form a small declarative table
//! (indicator value, target band, fallback band) driven by one loop, so
//! adding an indicator does not grow branching logic.
//!
//! Scoring is intentionally asymmetric for GDP growth: the fallback
//! rewards *any* growth above 1%, while inflation and unemployment only
//! earn partial credit inside a symmetric distance band around their
//! baseline.

use crate::models::indicators::{Band, Indicators, Targets};

/// Points for landing inside the target band
pub const FULL_AWARD: u32 = 10;

/// Points for landing inside the fallback band when the target is missed
pub const PARTIAL_AWARD: u32 = 5;

/// Largest possible award for a single quarter
pub const MAX_QUARTER_AWARD: u32 = 30;

/// Partial-credit condition applied when the target band is missed
#[derive(Debug, Clone, Copy)]
enum Fallback {
    /// Within `radius` of `center` (exclusive)
    Near { center: f64, radius: f64 },
    /// Strictly above the threshold
    Above(f64),
}

impl Fallback {
    fn holds(&self, value: f64) -> bool {
        match *self {
            Fallback::Near { center, radius } => (value - center).abs() < radius,
            Fallback::Above(threshold) => value > threshold,
        }
    }
}

fn award(value: f64, target: Band, fallback: Fallback) -> u32 {
    if target.contains(value) {
        FULL_AWARD
    } else if fallback.holds(value) {
        PARTIAL_AWARD
    } else {
        0
    }
}

/// Compute the award for one quarter from post-transition indicators
///
/// Returns a value in {0, 5, 10, 15, 20, 25, 30}.
pub fn score_quarter(indicators: &Indicators, targets: &Targets) -> u32 {
    let rules = [
        (
            indicators.inflation,
            targets.inflation,
            Fallback::Near {
                center: 2.0,
                radius: 1.0,
            },
        ),
        (
            indicators.unemployment,
            targets.unemployment,
            Fallback::Near {
                center: 5.0,
                radius: 1.5,
            },
        ),
        (
            indicators.gdp_growth,
            targets.gdp_growth,
            Fallback::Above(1.0),
        ),
    ];

    rules
        .iter()
        .map(|&(value, target, fallback)| award(value, target, fallback))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicators(inflation: f64, unemployment: f64, gdp_growth: f64) -> Indicators {
        Indicators {
            inflation,
            unemployment,
            gdp_growth,
            ..Indicators::initial()
        }
    }

    #[test]
    fn test_all_on_target_scores_max() {
        let targets = Targets::default();
        assert_eq!(
            score_quarter(&indicators(2.0, 5.0, 2.5), &targets),
            MAX_QUARTER_AWARD
        );
    }

    #[test]
    fn test_target_bands_are_inclusive() {
        let targets = Targets::default();
        assert_eq!(score_quarter(&indicators(1.8, 4.5, 2.0), &targets), 30);
        assert_eq!(score_quarter(&indicators(2.2, 5.5, 3.0), &targets), 30);
    }

    #[test]
    fn test_fallback_bands_award_partial_credit() {
        let targets = Targets::default();

        // inflation 2.9: off target, but |2.9 - 2.0| < 1.0
        assert_eq!(score_quarter(&indicators(2.9, 5.0, 2.5), &targets), 25);
        // unemployment 6.2: off target, but |6.2 - 5.0| < 1.5
        assert_eq!(score_quarter(&indicators(2.0, 6.2, 2.5), &targets), 25);
        // gdp 1.5: off target, but above 1.0
        assert_eq!(score_quarter(&indicators(2.0, 5.0, 1.5), &targets), 25);
    }

    #[test]
    fn test_fallback_distance_bands_are_exclusive() {
        let targets = Targets::default();

        // exactly 1.0 away from the inflation baseline: no credit
        assert_eq!(score_quarter(&indicators(3.0, 5.0, 2.5), &targets), 20);
        // exactly 1.5 away from the unemployment baseline: no credit
        assert_eq!(score_quarter(&indicators(2.0, 6.5, 2.5), &targets), 20);
    }

    #[test]
    fn test_gdp_fallback_is_one_sided() {
        let targets = Targets::default();

        // growth exactly at the threshold earns nothing
        assert_eq!(score_quarter(&indicators(2.0, 5.0, 1.0), &targets), 20);
        // shrinking economy earns nothing
        assert_eq!(score_quarter(&indicators(2.0, 5.0, -1.0), &targets), 20);
        // any growth above 1% earns partial credit, even far above target
        assert_eq!(score_quarter(&indicators(2.0, 5.0, 7.5), &targets), 25);
    }

    #[test]
    fn test_everything_missed_scores_zero() {
        let targets = Targets::default();
        assert_eq!(score_quarter(&indicators(9.0, 14.0, -2.0), &targets), 0);
    }
}
