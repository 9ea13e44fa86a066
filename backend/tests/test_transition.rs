//! Tests for the quarterly transition function
//!
//! All tests run with deterministic noise doubles so the economic model's
//! arithmetic can be pinned down exactly.

use economy_simulator_core_rs::{FixedNoise, Simulation};

const EPS: f64 = 1e-12;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_interest_hike_with_zero_noise() {
    let mut sim = Simulation::with_noise(Box::new(FixedNoise::zero()));
    sim.queue_delta("interest", 0.25).unwrap();
    sim.advance_quarter().unwrap();

    let indicators = sim.state().indicators();
    assert_close(indicators.interest_rate, 3.25);
    // inflation: 2.0 - 0.3 * 0.25
    assert_close(indicators.inflation, 1.925);
    // gdp carry-over effect is zero at trend growth, so unemployment only
    // reacts to the hike: 5.0 + 0.2 * 0.25
    assert_close(indicators.unemployment, 5.05);
    // gdp growth: 2.5 - 0.4 * 0.25
    assert_close(indicators.gdp_growth, 2.4);
    assert_close(indicators.reserve_ratio, 10.0);

    assert_eq!(sim.state().calendar().quarter(), 1);
    assert_eq!(sim.state().calendar().year(), 2023);
}

#[test]
fn test_pending_deltas_reset_after_transition() {
    let mut sim = Simulation::with_noise(Box::new(FixedNoise::zero()));
    sim.queue_delta("interest", 0.25).unwrap();
    sim.queue_delta("reserve", 0.5).unwrap();
    sim.advance_quarter().unwrap();

    assert_eq!(sim.state().pending_policy().interest, 0.0);
    assert_eq!(sim.state().pending_policy().reserve, 0.0);
}

#[test]
fn test_reserve_deltas_accumulate_across_queue_calls() {
    let mut sim = Simulation::with_noise(Box::new(FixedNoise::zero()));
    for _ in 0..3 {
        sim.queue_delta("reserve", 0.5).unwrap();
    }
    sim.advance_quarter().unwrap();

    // 10.0 + 3 * 0.5, well below the 20.0 ceiling
    assert_close(sim.state().indicators().reserve_ratio, 11.5);
}

#[test]
fn test_policy_instruments_clamp() {
    let mut sim = Simulation::with_noise(Box::new(FixedNoise::zero()));
    sim.queue_delta("reserve", 100.0).unwrap();
    sim.queue_delta("interest", -100.0).unwrap();
    sim.advance_quarter().unwrap();

    let indicators = sim.state().indicators();
    assert_close(indicators.reserve_ratio, 20.0);
    assert_close(indicators.interest_rate, 0.0);
}

#[test]
fn test_inflation_formula_uses_raw_delta_not_clamped_rate() {
    // The interest rate itself clamps at 10, but inflation reacts to the
    // queued delta, so a huge hike still deflates hard (to the floor).
    let mut sim = Simulation::with_noise(Box::new(FixedNoise::zero()));
    sim.queue_delta("interest", 50.0).unwrap();
    sim.advance_quarter().unwrap();

    let indicators = sim.state().indicators();
    assert_close(indicators.interest_rate, 10.0);
    assert_close(indicators.inflation, 0.1);
    assert_close(indicators.gdp_growth, -3.0);
}

#[test]
fn test_unemployment_reacts_to_previous_quarter_growth() {
    let mut sim = Simulation::with_noise(Box::new(FixedNoise::zero()));

    // Quarter 1: a hike pushes growth below trend (2.4)
    sim.queue_delta("interest", 0.25).unwrap();
    sim.advance_quarter().unwrap();

    // Quarter 2, no new policy: unemployment reacts to the 2.4 growth
    // rate from before this quarter's gdp update.
    // gdp_effect = 0.4 * (2.4 - 2.5) = -0.04
    // unemployment = 5.05 - 0.3 * (-0.04) = 5.062
    sim.advance_quarter().unwrap();

    let indicators = sim.state().indicators();
    assert_close(indicators.unemployment, 5.062);
    // Growth itself only moves with policy or noise; both are zero now
    assert_close(indicators.gdp_growth, 2.4);
}

#[test]
fn test_noise_is_clamped_at_indicator_bounds() {
    let mut high = Simulation::with_noise(Box::new(FixedNoise::new(100.0)));
    high.advance_quarter().unwrap();
    let indicators = high.state().indicators();
    assert_close(indicators.inflation, 10.0);
    assert_close(indicators.unemployment, 15.0);
    assert_close(indicators.gdp_growth, 8.0);

    let mut low = Simulation::with_noise(Box::new(FixedNoise::new(-100.0)));
    low.advance_quarter().unwrap();
    let indicators = low.state().indicators();
    assert_close(indicators.inflation, 0.1);
    assert_close(indicators.unemployment, 2.0);
    assert_close(indicators.gdp_growth, -3.0);
}

#[test]
fn test_history_appends_one_sample_per_quarter() {
    let mut sim = Simulation::with_noise(Box::new(FixedNoise::zero()));
    assert_eq!(sim.state().history().len(), 1);

    sim.queue_delta("interest", 0.25).unwrap();
    sim.advance_quarter().unwrap();
    assert_eq!(sim.state().history().len(), 2);

    sim.advance_quarter().unwrap();
    assert_eq!(sim.state().history().len(), 3);

    // History records post-transition values, oldest to newest
    let history = sim.history_snapshot();
    assert_close(history.interest_rate[0], 3.0);
    assert_close(history.interest_rate[1], 3.25);
    assert_close(history.interest_rate[2], 3.25);
    assert_close(history.inflation[1], 1.925);
}
