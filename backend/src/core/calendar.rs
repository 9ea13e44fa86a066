//! Calendar management for the simulation
//!
//! The simulation operates in discrete quarters. Four quarters form a year.
//! This module provides deterministic calendar advancement.

use serde::{Deserialize, Serialize};

/// Number of quarters in a simulated year
pub const QUARTERS_PER_YEAR: usize = 4;

/// Year the simulation starts in
pub const BASE_YEAR: i32 = 2023;

/// Length of the policymaker's term, in years
pub const TERM_YEARS: i32 = 1;

/// Tracks the current quarter and year
///
/// # Example
/// ```
/// use economy_simulator_core_rs::core::calendar::{Calendar, BASE_YEAR};
///
/// let mut calendar = Calendar::new();
/// assert_eq!(calendar.quarter(), 0);
/// assert_eq!(calendar.year(), BASE_YEAR);
///
/// calendar.advance();
/// assert_eq!(calendar.quarter(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Quarter within the current year, 0..4
    quarter: usize,
    /// Current calendar year
    year: i32,
    /// Year the simulation started in
    base_year: i32,
}

impl Calendar {
    /// Create a calendar positioned at the first quarter of the base year
    pub fn new() -> Self {
        Self {
            quarter: 0,
            year: BASE_YEAR,
            base_year: BASE_YEAR,
        }
    }

    /// Advance by one quarter, rolling into the next year after Q4
    ///
    /// # Example
    /// ```
    /// use economy_simulator_core_rs::core::calendar::{Calendar, BASE_YEAR};
    ///
    /// let mut calendar = Calendar::new();
    /// for _ in 0..4 {
    ///     calendar.advance();
    /// }
    /// assert_eq!(calendar.quarter(), 0);
    /// assert_eq!(calendar.year(), BASE_YEAR + 1);
    /// ```
    pub fn advance(&mut self) {
        self.quarter += 1;
        if self.quarter == QUARTERS_PER_YEAR {
            self.quarter = 0;
            self.year += 1;
        }
    }

    /// Get the quarter within the current year (0-indexed)
    pub fn quarter(&self) -> usize {
        self.quarter
    }

    /// Get the current year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Get the year the simulation started in
    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    /// Check whether the policymaker's term has been served in full
    ///
    /// True exactly when the calendar has wrapped back to Q1 of the year
    /// following the term.
    pub fn is_term_complete(&self) -> bool {
        self.quarter == 0 && self.year == self.base_year + TERM_YEARS
    }

    /// Human-readable label, e.g. "2023 Q1"
    pub fn label(&self) -> String {
        format!("{} Q{}", self.year, self.quarter + 1)
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}
