//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - Corner squares, crowded boards, king behavior
//! - `proptest.rs` - Property-based tests
