//! liftlog
//!
//! Terminal workout logger: log exercises and sets, then see today's totals,
//! this week's daily volume, muscle balance and week-over-week change.
//!
//! Pure Core / Impure Shell: `model` and `state` are pure data and
//! functions of explicit inputs (including the current time); `view` owns
//! the terminal and the clock.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod tests;
