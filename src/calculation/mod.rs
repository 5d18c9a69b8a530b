//! Calculation logic for the Productivity Analysis Engine.
//!
//! This module contains the per-record calculation: standard and leave
//! hours, the expected-hours state, the productivity percentage and the
//! threshold classification.

mod expected_hours;
mod productivity;

pub use expected_hours::{ExpectedHours, HoursBreakdown, calculate_expected_hours};
pub use productivity::{
    PRODUCTIVITY_RULE_ID, ProductivityCalculation, calculate_productivity, classify, compute,
};
