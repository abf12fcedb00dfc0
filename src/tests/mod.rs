//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the dashboard through the harness or poke the core
//! directly, checking properties that span several modules.

mod property_tests;
