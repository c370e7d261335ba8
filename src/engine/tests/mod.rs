//! Tests for the engine
//!
//! Organized by feature area

mod helpers;
mod introspection_tests;
