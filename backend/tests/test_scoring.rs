//! Tests for quarterly scoring through the engine
//!
//! The pure scoring table has its own unit tests; these cover the award
//! accumulating into the running score across transitions.

use economy_simulator_core_rs::scoring::MAX_QUARTER_AWARD;
use economy_simulator_core_rs::{Event, FixedNoise, Simulation};

#[test]
fn test_on_target_quarters_score_max() {
    // With zero noise and no policy, every indicator stays on target.
    let mut sim = Simulation::with_noise(Box::new(FixedNoise::zero()));

    let outcome = sim.advance_quarter().unwrap();
    assert_eq!(outcome.award, MAX_QUARTER_AWARD);
    assert_eq!(sim.state().score(), 30);

    sim.advance_quarter().unwrap();
    assert_eq!(sim.state().score(), 60);
}

#[test]
fn test_partial_credit_accumulates() {
    // A +0.9 shock on every draw pushes all three scored indicators off
    // target but inside their fallback bands:
    //   inflation 2.9 (|2.9 - 2.0| < 1.0), unemployment 5.9
    //   (|5.9 - 5.0| < 1.5), gdp growth 3.4 (> 1.0)
    let mut sim = Simulation::with_noise(Box::new(FixedNoise::new(0.9)));

    let outcome = sim.advance_quarter().unwrap();
    assert_eq!(outcome.award, 15);
    assert_eq!(sim.state().score(), 15);
}

#[test]
fn test_award_is_recorded_in_event_log() {
    let mut sim = Simulation::with_noise(Box::new(FixedNoise::zero()));
    sim.advance_quarter().unwrap();

    assert_eq!(
        sim.events(),
        &[Event::QuarterAdvanced {
            year: 2023,
            quarter: 1,
            award: 30,
        }]
    );
}

#[test]
fn test_score_is_monotone_even_when_everything_is_missed() {
    // A large positive shock lands inflation and unemployment outside all
    // bands; gdp growth clamps to 8.0, which still earns the one-sided
    // fallback credit.
    let mut sim = Simulation::with_noise(Box::new(FixedNoise::new(4.0)));

    let outcome = sim.advance_quarter().unwrap();
    assert_eq!(outcome.award, 5);

    // The second shock clamps inflation at 10.0 and tips the economy
    // into crisis; gdp growth clamps at 8.0 and still earns 5.
    let outcome = sim.advance_quarter().unwrap();
    assert_eq!(outcome.award, 5);
    assert!(outcome.terminal);
    assert_eq!(sim.state().score(), 10);

    // Terminal quarters are absorbed; the score stops moving.
    assert_eq!(sim.advance_quarter(), None);
    assert_eq!(sim.state().score(), 10);
}
