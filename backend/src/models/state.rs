//! Economy State
//!
//! Represents the complete state of one simulation session: calendar
//! position, the five indicators, their full history, the cumulative
//! score, and the terminal flag.
//!
//! # Critical Invariants
//!
//! 1. **Bounded Indicators**: every indicator stays inside its hard clamp
//!    band in all reachable states
//! 2. **Lock-Step History**: all five history series share the same
//!    length, `1 + transitions applied`
//! 3. **Monotone Score**: the cumulative score never decreases
//! 4. **Monotone Termination**: `terminal` flips false→true at most once,
//!    and the reason is set exactly then
//! 5. **Drained Policy Queue**: pending deltas are zero immediately after
//!    construction and after every transition

use serde::{Deserialize, Serialize};

use crate::core::Calendar;
use crate::models::indicators::{Indicators, Targets};
use crate::policy::{PendingPolicy, PolicyLever};

/// Why a simulation stopped accepting transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The one-year term was served in full
    TermComplete,
    /// Inflation or unemployment escaped into crisis territory
    EconomicCrisis,
}

/// Per-indicator value series, one sample per elapsed quarter
///
/// All five series are appended in lock-step and always include the
/// initial indicator values as their first sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    inflation: Vec<f64>,
    unemployment: Vec<f64>,
    gdp_growth: Vec<f64>,
    interest_rate: Vec<f64>,
    reserve_ratio: Vec<f64>,
}

impl History {
    fn new(initial: &Indicators) -> Self {
        Self {
            inflation: vec![initial.inflation],
            unemployment: vec![initial.unemployment],
            gdp_growth: vec![initial.gdp_growth],
            interest_rate: vec![initial.interest_rate],
            reserve_ratio: vec![initial.reserve_ratio],
        }
    }

    fn record(&mut self, indicators: &Indicators) {
        self.inflation.push(indicators.inflation);
        self.unemployment.push(indicators.unemployment);
        self.gdp_growth.push(indicators.gdp_growth);
        self.interest_rate.push(indicators.interest_rate);
        self.reserve_ratio.push(indicators.reserve_ratio);
    }

    /// Number of samples per series (identical across all five)
    pub fn len(&self) -> usize {
        self.inflation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inflation.is_empty()
    }

    pub fn inflation(&self) -> &[f64] {
        &self.inflation
    }

    pub fn unemployment(&self) -> &[f64] {
        &self.unemployment
    }

    pub fn gdp_growth(&self) -> &[f64] {
        &self.gdp_growth
    }

    pub fn interest_rate(&self) -> &[f64] {
        &self.interest_rate
    }

    pub fn reserve_ratio(&self) -> &[f64] {
        &self.reserve_ratio
    }
}

/// Complete state of one simulation session
///
/// Owned by the engine and mutated only through its operations; rendering
/// and input collaborators see it via read-only snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyState {
    calendar: Calendar,
    indicators: Indicators,
    history: History,
    targets: Targets,
    score: u32,
    terminal: bool,
    termination_reason: Option<TerminationReason>,
    pending_policy: PendingPolicy,
}

impl EconomyState {
    /// Create a fresh state with the fixed term-start defaults
    pub fn new() -> Self {
        let indicators = Indicators::initial();
        let history = History::new(&indicators);

        Self {
            calendar: Calendar::new(),
            indicators,
            history,
            targets: Targets::default(),
            score: 0,
            terminal: false,
            termination_reason: None,
            pending_policy: PendingPolicy::default(),
        }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    pub(crate) fn indicators_mut(&mut self) -> &mut Indicators {
        &mut self.indicators
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }

    pub fn termination_reason(&self) -> Option<TerminationReason> {
        self.termination_reason
    }

    pub fn pending_policy(&self) -> &PendingPolicy {
        &self.pending_policy
    }

    /// Queue a delta against one lever
    pub(crate) fn queue_lever(&mut self, lever: PolicyLever, amount: f64) {
        self.pending_policy.queue(lever, amount);
    }

    /// Drain the pending deltas, leaving the queue zeroed
    pub(crate) fn take_pending_policy(&mut self) -> PendingPolicy {
        std::mem::take(&mut self.pending_policy)
    }

    /// Move the calendar forward one quarter
    pub(crate) fn advance_calendar(&mut self) {
        self.calendar.advance();
    }

    /// Append the current indicator values to every history series
    pub(crate) fn record_history(&mut self) {
        self.history.record(&self.indicators);
    }

    /// Add a quarterly award to the cumulative score
    pub(crate) fn add_score(&mut self, award: u32) {
        self.score += award;
    }

    /// Mark the state terminal. Must be called at most once.
    pub(crate) fn terminate(&mut self, reason: TerminationReason) {
        debug_assert!(!self.terminal, "terminate() called on a terminal state");
        self.terminal = true;
        self.termination_reason = Some(reason);
    }
}

impl Default for EconomyState {
    fn default() -> Self {
        Self::new()
    }
}
