//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp<TestBackend>` through the
//! same key, mouse and paste paths the event loop uses.

mod acceptance_form;
