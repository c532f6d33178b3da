//! Baluster Layout Calculator (balcalc)
//!
//! Computes how many fixed-width balusters fit along a flat rail or the
//! base of a stair triangle, where each one goes, how tall each one is on
//! the slope, and how to draw the result on a bounded preview canvas.
//!
//! Follows a Pure Core / Impure Shell split: `geometry` and `calculation`
//! are pure functions of a [`model::ParameterSet`]; `state` is a pure UI
//! state machine; `view`, `config` and `logging` touch the outside world.

pub mod calculation;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod report;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
