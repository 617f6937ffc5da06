//! Property-based testing for the field acceptance rules
//!
//! This module provides generators for form input and verifies that the
//! rules hold across all generated values.

pub mod field_invariants;
