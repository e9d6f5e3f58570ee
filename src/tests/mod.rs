//! Internal test modules - whitebox tests with crate access
//!
//! Harness-driven acceptance tests run the real `TuiApp` against an in-memory
//! photo client on a `TestBackend`.

mod acceptance_navigation;
