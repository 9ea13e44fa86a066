//! Read-only snapshots for rendering collaborators
//!
//! The rendering surface, input handler, and chart generator never touch
//! engine internals: they consume these serializable views, taken at call
//! time. Snapshots carry everything needed to draw a frame (indicators,
//! pending deltas, score, terminal state, status tags) or a chart (the
//! five history series).

use serde::{Deserialize, Serialize};

use crate::engine::simulation::Simulation;
use crate::models::state::{History, TerminationReason};
use crate::status::StatusTag;

/// Point-in-time view of the whole session for the rendering surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomySnapshot {
    /// Quarter within the year (0-indexed)
    pub quarter: usize,
    /// Current year
    pub year: i32,
    /// Human-readable calendar label, e.g. "2023 Q1"
    pub label: String,

    /// Inflation rate (%)
    pub inflation: f64,
    /// Unemployment rate (%)
    pub unemployment: f64,
    /// GDP growth rate (%)
    pub gdp_growth: f64,
    /// Benchmark interest rate (%)
    pub interest_rate: f64,
    /// Deposit reserve ratio (%)
    pub reserve_ratio: f64,

    /// Pending interest rate delta, not yet applied (%)
    pub pending_interest: f64,
    /// Pending reserve ratio delta, not yet applied (%)
    pub pending_reserve: f64,

    /// Cumulative score
    pub score: u32,
    /// Whether the simulation has ended
    pub terminal: bool,
    /// Why it ended, once terminal
    pub termination_reason: Option<TerminationReason>,
    /// Condition tags for the current indicators
    pub status_tags: Vec<StatusTag>,
}

impl From<&Simulation> for EconomySnapshot {
    fn from(sim: &Simulation) -> Self {
        let state = sim.state();
        let indicators = state.indicators();
        let calendar = state.calendar();

        EconomySnapshot {
            quarter: calendar.quarter(),
            year: calendar.year(),
            label: calendar.label(),
            inflation: indicators.inflation,
            unemployment: indicators.unemployment,
            gdp_growth: indicators.gdp_growth,
            interest_rate: indicators.interest_rate,
            reserve_ratio: indicators.reserve_ratio,
            pending_interest: state.pending_policy().interest,
            pending_reserve: state.pending_policy().reserve,
            score: state.score(),
            terminal: state.terminal(),
            termination_reason: state.termination_reason(),
            status_tags: sim.status_tags(),
        }
    }
}

/// The five indicator series, oldest-to-newest, for chart generation
///
/// All series always have the same length: one sample per elapsed quarter
/// plus the initial values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub inflation: Vec<f64>,
    pub unemployment: Vec<f64>,
    pub gdp_growth: Vec<f64>,
    pub interest_rate: Vec<f64>,
    pub reserve_ratio: Vec<f64>,
}

impl From<&History> for HistorySnapshot {
    fn from(history: &History) -> Self {
        HistorySnapshot {
            inflation: history.inflation().to_vec(),
            unemployment: history.unemployment().to_vec(),
            gdp_growth: history.gdp_growth().to_vec(),
            interest_rate: history.interest_rate().to_vec(),
            reserve_ratio: history.reserve_ratio().to_vec(),
        }
    }
}

impl Simulation {
    /// Take a read-only snapshot of the current state
    ///
    /// # Example
    /// ```
    /// use economy_simulator_core_rs::Simulation;
    ///
    /// let sim = Simulation::new(7);
    /// let snapshot = sim.snapshot();
    /// assert_eq!(snapshot.label, "2023 Q1");
    /// assert_eq!(snapshot.score, 0);
    /// ```
    pub fn snapshot(&self) -> EconomySnapshot {
        EconomySnapshot::from(self)
    }

    /// Take a snapshot of the full indicator history
    pub fn history_snapshot(&self) -> HistorySnapshot {
        HistorySnapshot::from(self.state().history())
    }
}
