//! Economy status reporting
//!
//! Derives human-readable condition tags from the current indicators.
//! Pure function of state: callable at any time, including after
//! termination, and never mutates anything.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::indicators::Indicators;

/// Inflation below this reads as deflation risk (%)
const DEFLATION_THRESHOLD: f64 = 1.0;
/// Inflation above this reads as inflationary pressure (%)
const INFLATION_PRESSURE_THRESHOLD: f64 = 3.0;
/// Unemployment below this reads as a labor shortage (%)
const LABOR_SHORTAGE_THRESHOLD: f64 = 4.0;
/// Unemployment above this reads as severe (%)
const SEVERE_UNEMPLOYMENT_THRESHOLD: f64 = 6.0;
/// Growth below this reads as recession (%)
const RECESSION_THRESHOLD: f64 = 1.0;
/// Growth above this reads as overheating (%)
const OVERHEATING_THRESHOLD: f64 = 4.0;

/// A condition the economy is currently exhibiting
///
/// Tags from different indicators may co-occur (e.g. `InflationPressure`
/// together with `Overheating`). `Stable` is reported alone, exactly when
/// no other condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTag {
    DeflationRisk,
    InflationPressure,
    LaborShortage,
    SevereUnemployment,
    Recession,
    Overheating,
    Stable,
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatusTag::DeflationRisk => "deflation risk",
            StatusTag::InflationPressure => "inflation pressure",
            StatusTag::LaborShortage => "labor shortage",
            StatusTag::SevereUnemployment => "severe unemployment",
            StatusTag::Recession => "recession",
            StatusTag::Overheating => "overheating",
            StatusTag::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Derive the ordered set of condition tags for the given indicators
pub fn status_tags(indicators: &Indicators) -> Vec<StatusTag> {
    let mut tags = Vec::new();

    if indicators.inflation < DEFLATION_THRESHOLD {
        tags.push(StatusTag::DeflationRisk);
    } else if indicators.inflation > INFLATION_PRESSURE_THRESHOLD {
        tags.push(StatusTag::InflationPressure);
    }

    if indicators.unemployment < LABOR_SHORTAGE_THRESHOLD {
        tags.push(StatusTag::LaborShortage);
    } else if indicators.unemployment > SEVERE_UNEMPLOYMENT_THRESHOLD {
        tags.push(StatusTag::SevereUnemployment);
    }

    if indicators.gdp_growth < RECESSION_THRESHOLD {
        tags.push(StatusTag::Recession);
    } else if indicators.gdp_growth > OVERHEATING_THRESHOLD {
        tags.push(StatusTag::Overheating);
    }

    if tags.is_empty() {
        tags.push(StatusTag::Stable);
    }
    tags
}
