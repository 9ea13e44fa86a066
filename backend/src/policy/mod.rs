//! Monetary policy levers and the pending-delta queue
//!
//! The player steers the economy through exactly two instruments: the
//! benchmark interest rate and the deposit reserve ratio. Adjustments are
//! queued as deltas and applied in one batch at the next quarterly
//! transition.
//!
//! The engine accepts any real delta magnitude. The input surface is
//! expected to submit the fixed increments ±0.25 (interest) and ±0.5
//! (reserve), but that convention is the UI's responsibility, not a
//! contract enforced here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when queueing policy adjustments
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// The caller named a lever the engine does not recognize.
    ///
    /// This is a contract violation by the input collaborator, reported
    /// immediately and never retried.
    #[error("Invalid policy kind: {kind}")]
    InvalidPolicyKind { kind: String },
}

/// An adjustable monetary policy instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyLever {
    /// Benchmark interest rate
    Interest,
    /// Deposit reserve ratio
    Reserve,
}

impl PolicyLever {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyLever::Interest => "interest",
            PolicyLever::Reserve => "reserve",
        }
    }
}

impl fmt::Display for PolicyLever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyLever {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interest" => Ok(PolicyLever::Interest),
            "reserve" => Ok(PolicyLever::Reserve),
            other => Err(PolicyError::InvalidPolicyKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// Accumulated, not-yet-applied lever adjustments for the current quarter
///
/// Deltas accumulate additively across any number of queue calls and are
/// reset to zero by every transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PendingPolicy {
    /// Pending change to the benchmark interest rate (%)
    pub interest: f64,
    /// Pending change to the deposit reserve ratio (%)
    pub reserve: f64,
}

impl PendingPolicy {
    /// Add a delta to the named lever
    pub fn queue(&mut self, lever: PolicyLever, amount: f64) {
        match lever {
            PolicyLever::Interest => self.interest += amount,
            PolicyLever::Reserve => self.reserve += amount,
        }
    }
}
