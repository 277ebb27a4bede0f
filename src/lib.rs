//! gridcalc
//!
//! Terminal calculator with an on-screen keypad, session history and a
//! persisted light/dark theme.
//!
//! Layout follows a pure core / impure shell split:
//! - [`calc`], [`model`], [`state`]: pure transitions and evaluation
//! - [`store`], [`config`], [`logging`]: filesystem and environment
//! - [`view`]: terminal rendering and the event loop

pub mod calc;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
