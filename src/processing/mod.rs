//! Calculation and classification.
//!
//! - [`calculator`] - bitwise subnet arithmetic
//! - [`special`] - RFC special-use range table and classifier

mod calculator;
mod special;

// Re-export public functions
pub use calculator::{calculate, num_hosts};
pub use special::{classify, find_rule, find_rule_in, SpecialRangeRule, SPECIAL_RANGES};
