//! Test Module
//!
//! Crate-level test suite for the analysis engine.
//!
//! ## Test Categories
//! - `engine_tests`: contract properties across the whole public surface
//!   (symmetry, boundedness, degenerate inputs, ranking, idempotence)
