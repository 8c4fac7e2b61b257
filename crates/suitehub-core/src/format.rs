//! Display formatting shared by every frontend

use chrono::{DateTime, Utc};

use crate::types::RunStatus;

/// Monthly amount, e.g. `"149.00 €/mo"`
pub fn money(value: f64) -> String {
    format!("{value:.2} €/mo")
}

/// Plain euro amount, e.g. `"1234.50 €"`
pub fn euros(value: f64) -> String {
    format!("{value:.2} €")
}

/// Human-readable UTC timestamp, minute precision
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Status badge label: `OK` or the server label uppercased
pub fn status_badge(status: &RunStatus) -> String {
    status.as_str().to_uppercase()
}

/// Score with one decimal place, trailing `.0` dropped
pub fn score(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
