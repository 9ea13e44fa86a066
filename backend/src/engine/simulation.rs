//! Simulation engine - the quarterly loop
//!
//! Integrates all components around a single mutable [`EconomyState`]:
//! - Policy queueing (pending lever deltas)
//! - The quarterly transition function (deterministic core + injected noise)
//! - Scoring (per-quarter award, cumulative score)
//! - Termination evaluation (term complete or economic crisis)
//! - Event logging (complete session history)
//!
//! # Architecture
//!
//! Each `advance_quarter` call runs these phases in a fixed order:
//!
//! ```text
//! 1. Apply pending lever deltas to the policy instruments (clamped)
//! 2. Update inflation from the interest delta + noise
//! 3. Compute the GDP carry-over effect from the *pre-update* growth rate
//! 4. Update unemployment from that effect, the interest delta + noise
//! 5. Update GDP growth last, from the interest delta + noise
//! 6. Advance the calendar (quarter, year)
//! 7. Append all five indicators to history in lock-step
//! 8. Score the quarter and add the award
//! 9. Evaluate termination (term complete takes priority over crisis)
//! ```
//!
//! # Determinism
//!
//! All randomness flows through the injected [`NoiseSource`]. With a
//! seeded [`RngManager`], same seed + same command sequence = identical
//! results.
//!
//! # Example
//!
//! ```rust
//! use economy_simulator_core_rs::Simulation;
//!
//! let mut sim = Simulation::new(12345);
//! sim.queue_delta("interest", 0.25).unwrap();
//!
//! let outcome = sim.advance_quarter().expect("first quarter is never terminal");
//! println!("{} Q{}: +{} points", outcome.year, outcome.quarter + 1, outcome.award);
//! ```

use crate::models::event::{Event, EventLog};
use crate::models::indicators::{
    GDP_GROWTH_BOUNDS, INFLATION_BOUNDS, INTEREST_RATE_BOUNDS, RESERVE_RATIO_BOUNDS,
    UNEMPLOYMENT_BOUNDS,
};
use crate::models::state::{EconomyState, TerminationReason};
use crate::policy::{PendingPolicy, PolicyError, PolicyLever};
use crate::rng::{NoiseSource, RngManager};
use crate::scoring;
use crate::status::{self, StatusTag};

// ============================================================================
// Transition Model Constants
// ============================================================================

/// Inflation response to a one-point interest rate hike
const INFLATION_INTEREST_RESPONSE: f64 = -0.3;
/// Standard deviation of the quarterly inflation shock (%)
const INFLATION_NOISE_STD_DEV: f64 = 0.2;

/// Trend growth rate the carry-over effect is measured against (%)
const TREND_GDP_GROWTH: f64 = 2.5;
/// Share of above-trend growth that carries into the labor market
const GDP_CARRY_OVER: f64 = 0.4;

/// Unemployment response to the GDP carry-over effect (Okun-style)
const UNEMPLOYMENT_GDP_RESPONSE: f64 = -0.3;
/// Unemployment response to a one-point interest rate hike
const UNEMPLOYMENT_INTEREST_RESPONSE: f64 = 0.2;
/// Standard deviation of the quarterly unemployment shock (%)
const UNEMPLOYMENT_NOISE_STD_DEV: f64 = 0.15;

/// GDP growth response to a one-point interest rate hike
const GDP_INTEREST_RESPONSE: f64 = -0.4;
/// Standard deviation of the quarterly growth shock (%)
const GDP_NOISE_STD_DEV: f64 = 0.25;

/// Inflation above this ends the simulation in crisis (%)
const CRISIS_INFLATION: f64 = 8.0;
/// Unemployment above this ends the simulation in crisis (%)
const CRISIS_UNEMPLOYMENT: f64 = 12.0;

// ============================================================================
// Simulation
// ============================================================================

/// Result of a single applied quarter
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterOutcome {
    /// Quarter within the year after the transition (0-indexed)
    pub quarter: usize,

    /// Year after the transition
    pub year: i32,

    /// Points awarded for this quarter, in {0, 5, ..., 30}
    pub award: u32,

    /// Whether this quarter ended the simulation
    pub terminal: bool,
}

/// Simulation engine owning one economy session
///
/// The engine owns the mutable state; rendering and input collaborators
/// interact only through the command surface (`queue_delta`,
/// `advance_quarter`, `reset`) and read-only snapshots.
pub struct Simulation {
    /// Complete session state (calendar, indicators, history, score)
    state: EconomyState,

    /// Injected noise source for the stochastic transition terms
    noise: Box<dyn NoiseSource>,

    /// Event log (all session events)
    event_log: EventLog,
}

impl Simulation {
    /// Create a simulation with the default seeded noise source
    ///
    /// # Example
    /// ```
    /// use economy_simulator_core_rs::Simulation;
    ///
    /// let sim = Simulation::new(12345);
    /// assert!(!sim.state().terminal());
    /// ```
    pub fn new(rng_seed: u64) -> Self {
        Self::with_noise(Box::new(RngManager::new(rng_seed)))
    }

    /// Create a simulation with a caller-supplied noise source
    ///
    /// Deterministic tests inject [`crate::rng::FixedNoise`] or a scripted
    /// double here; the engine logic is identical either way.
    pub fn with_noise(noise: Box<dyn NoiseSource>) -> Self {
        Self {
            state: EconomyState::new(),
            noise,
            event_log: EventLog::new(),
        }
    }

    /// Read-only access to the session state
    pub fn state(&self) -> &EconomyState {
        &self.state
    }

    /// All events recorded since construction or the last reset
    pub fn events(&self) -> &[Event] {
        self.event_log.events()
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Queue a policy delta for the next transition
    ///
    /// `kind` must be `"interest"` or `"reserve"`; anything else fails
    /// with [`PolicyError::InvalidPolicyKind`] and leaves the pending
    /// deltas untouched. Deltas accumulate additively until the next
    /// `advance_quarter`.
    ///
    /// # Example
    /// ```
    /// use economy_simulator_core_rs::Simulation;
    ///
    /// let mut sim = Simulation::new(1);
    /// sim.queue_delta("interest", 0.25).unwrap();
    /// sim.queue_delta("interest", 0.25).unwrap();
    /// assert_eq!(sim.state().pending_policy().interest, 0.5);
    ///
    /// assert!(sim.queue_delta("rate", 1.0).is_err());
    /// ```
    pub fn queue_delta(&mut self, kind: &str, amount: f64) -> Result<(), PolicyError> {
        let lever: PolicyLever = kind.parse()?;
        self.queue_lever(lever, amount);
        Ok(())
    }

    /// Queue a policy delta through the typed lever enum
    pub fn queue_lever(&mut self, lever: PolicyLever, amount: f64) {
        self.state.queue_lever(lever, amount);
        self.event_log.log(Event::PolicyQueued {
            year: self.state.calendar().year(),
            quarter: self.state.calendar().quarter(),
            lever,
            amount,
        });
    }

    /// Advance the economy by one quarter
    ///
    /// Returns `None` once the simulation is terminal: the call is
    /// silently absorbed and the state is left untouched, so collaborators
    /// do not need to guard every call.
    pub fn advance_quarter(&mut self) -> Option<QuarterOutcome> {
        if self.state.terminal() {
            return None;
        }

        let pending = self.state.take_pending_policy();
        self.apply_transition(&pending);

        self.state.advance_calendar();
        self.state.record_history();

        let award = scoring::score_quarter(self.state.indicators(), self.state.targets());
        self.state.add_score(award);

        let year = self.state.calendar().year();
        let quarter = self.state.calendar().quarter();
        self.event_log.log(Event::QuarterAdvanced {
            year,
            quarter,
            award,
        });

        if let Some(reason) = self.evaluate_termination() {
            self.state.terminate(reason);
            self.event_log.log(Event::Terminated {
                year,
                quarter,
                reason,
            });
        }

        Some(QuarterOutcome {
            quarter,
            year,
            award,
            terminal: self.state.terminal(),
        })
    }

    /// Replace the session state wholesale with fresh defaults
    ///
    /// Clears the terminal flag, the score, the event log, and the
    /// history (back to a single initial sample). The noise source is
    /// retained; its stream continues where it left off.
    pub fn reset(&mut self) {
        self.state = EconomyState::new();
        self.event_log.clear();
    }

    /// Condition tags for the current indicators
    pub fn status_tags(&self) -> Vec<StatusTag> {
        status::status_tags(self.state.indicators())
    }

    // ------------------------------------------------------------------
    // Transition internals
    // ------------------------------------------------------------------

    /// Apply one quarter of the economic model
    ///
    /// Every formula reads the pending deltas taken before this call, and
    /// the update order is part of the model: unemployment reacts to the
    /// growth rate from *before* this quarter's GDP update, which is why
    /// `gdp_growth` is written last from an explicitly captured old value.
    fn apply_transition(&mut self, pending: &PendingPolicy) {
        let inflation_noise = self.noise.normal(0.0, INFLATION_NOISE_STD_DEV);
        let unemployment_noise = self.noise.normal(0.0, UNEMPLOYMENT_NOISE_STD_DEV);
        let gdp_noise = self.noise.normal(0.0, GDP_NOISE_STD_DEV);

        let indicators = self.state.indicators_mut();

        indicators.interest_rate =
            INTEREST_RATE_BOUNDS.clamp(indicators.interest_rate + pending.interest);
        indicators.reserve_ratio =
            RESERVE_RATIO_BOUNDS.clamp(indicators.reserve_ratio + pending.reserve);

        indicators.inflation = INFLATION_BOUNDS.clamp(
            indicators.inflation + INFLATION_INTEREST_RESPONSE * pending.interest + inflation_noise,
        );

        let gdp_growth_old = indicators.gdp_growth;
        let gdp_effect = GDP_CARRY_OVER * (gdp_growth_old - TREND_GDP_GROWTH);

        indicators.unemployment = UNEMPLOYMENT_BOUNDS.clamp(
            indicators.unemployment
                + UNEMPLOYMENT_GDP_RESPONSE * gdp_effect
                + UNEMPLOYMENT_INTEREST_RESPONSE * pending.interest
                + unemployment_noise,
        );

        indicators.gdp_growth = GDP_GROWTH_BOUNDS
            .clamp(gdp_growth_old + GDP_INTEREST_RESPONSE * pending.interest + gdp_noise);
    }

    /// Decide whether the quarter just applied ended the simulation
    ///
    /// Term completion takes priority over crisis within the same call.
    fn evaluate_termination(&self) -> Option<TerminationReason> {
        let indicators = self.state.indicators();

        if self.state.calendar().is_term_complete() {
            Some(TerminationReason::TermComplete)
        } else if indicators.inflation > CRISIS_INFLATION
            || indicators.unemployment > CRISIS_UNEMPLOYMENT
        {
            Some(TerminationReason::EconomicCrisis)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedNoise;

    #[test]
    fn test_advance_draws_noise_in_fixed_order() {
        // A scripted source proves the engine draws inflation,
        // unemployment, gdp - in that order, once each per quarter.
        struct Script(Vec<f64>);
        impl NoiseSource for Script {
            fn normal(&mut self, mean: f64, _std_dev: f64) -> f64 {
                mean + self.0.remove(0)
            }
        }

        let mut sim = Simulation::with_noise(Box::new(Script(vec![0.1, -0.2, 0.3])));
        sim.advance_quarter().unwrap();

        let indicators = sim.state().indicators();
        assert!((indicators.inflation - 2.1).abs() < 1e-12);
        assert!((indicators.unemployment - 4.8).abs() < 1e-12);
        assert!((indicators.gdp_growth - 2.8).abs() < 1e-12);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = Simulation::new(424242);
        let mut b = Simulation::new(424242);

        for _ in 0..4 {
            a.queue_delta("interest", 0.25).unwrap();
            b.queue_delta("interest", 0.25).unwrap();
            assert_eq!(a.advance_quarter(), b.advance_quarter());
        }
        assert_eq!(a.state().score(), b.state().score());
        assert_eq!(a.state().history(), b.state().history());
    }

    #[test]
    fn test_outcome_reports_post_transition_calendar() {
        let mut sim = Simulation::with_noise(Box::new(FixedNoise::zero()));
        let outcome = sim.advance_quarter().unwrap();

        assert_eq!(outcome.quarter, 1);
        assert_eq!(outcome.year, 2023);
        assert_eq!(outcome.award, 30);
        assert!(!outcome.terminal);
    }
}
