//! Simulation engine - quarterly loop and read-only snapshots
//!
//! See `simulation.rs` for the transition/scoring/termination loop and
//! `snapshot.rs` for the collaborator-facing views.

pub mod simulation;
pub mod snapshot;

// Re-export main types for convenience
pub use simulation::{QuarterOutcome, Simulation};
pub use snapshot::{EconomySnapshot, HistorySnapshot};
