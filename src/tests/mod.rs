//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance tests drive `TuiApp` over `TestBackend` with a fixed clock.
