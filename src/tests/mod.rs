//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests that drive `TuiApp<TestBackend>`
//! through keyboard and mouse events.

mod acceptance_mouse;
mod notification_flow;
mod view_rendering;
