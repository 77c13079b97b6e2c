//! Core module tests for non-UI functionality
//!
//! Tests for:
//! - Record state, ids, and sorting
//! - Value formatting
//! - Annotation placement and bubble geometry

pub mod annotation_tests;
pub mod record_tests;
