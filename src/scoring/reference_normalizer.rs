//! Display rescaling for reference values.
//!
//! Reference statistics (GDP, population, ...) span many orders of magnitude
//! across countries. Values above a trillion are shown in trillions, values
//! above a billion in billions, and everything else passes through, so that
//! a single fixed display domain still separates small and large countries.
//!
//! This is cosmetic binning for the context channel only. A rescaled value
//! carries no unit information and must not be compared or aggregated
//! against raw values.

use crate::core::ReferenceValue;

pub const TRILLION: f64 = 1e12;
pub const BILLION: f64 = 1e9;

/// Value shown for references that are not numbers.
///
/// Keeps the country visible at the low end of the context scale instead of
/// dropping it.
pub const NON_NUMERIC_SENTINEL: f64 = 1.0;

/// Rescale a reference value for display.
pub fn normalize(value: &ReferenceValue) -> f64 {
    value
        .as_number()
        .map(normalize_number)
        .unwrap_or(NON_NUMERIC_SENTINEL)
}

/// Rescale a numeric reference value for display.
pub fn normalize_number(raw: f64) -> f64 {
    if raw > TRILLION {
        raw / TRILLION
    } else if raw > BILLION {
        raw / BILLION
    } else {
        raw
    }
}
