//! Common test utilities shared across all test modules
//!
//! Provides record builders and float comparison helpers used by the core
//! and export test suites.

use chart_annotator::state::Record;

/// Build a record with the given fields
pub fn record(date: &str, value: f64, note: &str) -> Record {
    Record::new(date, value, note)
}

/// The three-point scenario from the documentation: "Launch" and "Dip" are
/// annotated, the middle point is not
pub fn launch_dip_records() -> Vec<Record> {
    vec![
        record("2025-10-01", 1200.0, "Launch"),
        record("2025-11-01", 1800.0, ""),
        record("2025-12-01", 1400.0, "Dip"),
    ]
}

/// Float comparison helpers for testing
pub mod float_cmp {
    /// Check if two floats are approximately equal within a tolerance
    pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    /// Assert that two floats are approximately equal
    pub fn assert_approx_eq(a: f64, b: f64, tolerance: f64) {
        assert!(
            approx_eq(a, b, tolerance),
            "Values not approximately equal: {} vs {} (tolerance: {})",
            a,
            b,
            tolerance
        );
    }

    /// Default tolerance for float comparisons (0.0001)
    pub const DEFAULT_TOLERANCE: f64 = 0.0001;
}
