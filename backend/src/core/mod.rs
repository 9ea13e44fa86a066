//! Core simulation plumbing: calendar management

pub mod calendar;

pub use calendar::Calendar;
