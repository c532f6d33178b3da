//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the TUI through the acceptance harness, which needs the
//! crate-private `TuiApp` test constructors.

// Harness-based acceptance tests
mod acceptance_flat;
