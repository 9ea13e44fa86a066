//! Economy Simulator Core - Rust Engine
//!
//! Turn-based macroeconomic policy simulator with deterministic execution.
//! A player adjusts two monetary levers once per quarter; the engine
//! advances the economy by one step, scores how close the indicators land
//! to their target bands, and detects end of term or crisis.
//!
//! # Architecture
//!
//! - **core**: Calendar (quarter/year) management
//! - **models**: Domain types (Indicators, EconomyState, Event)
//! - **policy**: Policy levers and the pending-delta queue
//! - **rng**: Deterministic random number generation and noise injection
//! - **scoring**: Declarative per-quarter scoring table
//! - **status**: Pure condition-tag reporter
//! - **engine**: The quarterly simulation loop and read-only snapshots
//!
//! # Critical Invariants
//!
//! 1. Every indicator stays inside its hard clamp band; exceedance is
//!    truncated silently, never reported as an error
//! 2. All randomness is deterministic (seeded RNG, injectable for tests)
//! 3. The score is monotone and the terminal flag flips at most once

// Module declarations
pub mod core;
pub mod engine;
pub mod models;
pub mod policy;
pub mod rng;
pub mod scoring;
pub mod status;

// Re-exports for convenience
pub use crate::core::Calendar;
pub use engine::{EconomySnapshot, HistorySnapshot, QuarterOutcome, Simulation};
pub use models::{
    event::{Event, EventLog},
    indicators::{Band, Indicators, Targets},
    state::{EconomyState, History, TerminationReason},
};
pub use policy::{PendingPolicy, PolicyError, PolicyLever};
pub use rng::{FixedNoise, NoiseSource, RngManager};
pub use status::{status_tags, StatusTag};
