//! This crate contains the insertion evaluation core of a ***Vehicle Routing Problem*** solver.
//!
//! It answers one question which a construction heuristic asks many times per iteration: where is
//! the cheapest feasible place to insert a job into a route. The main building blocks are:
//!
//! - [`TimeWindows`](models::common::TimeWindows): included and excluded time windows with
//!   context dependent applicability
//! - [`CategoryMatrixTransportCost`](models::problem::CategoryMatrixTransportCost): a dense routing
//!   matrix with separate channels per vehicle category
//! - [`BreakInsertionEvaluator`](construction::heuristics::BreakInsertionEvaluator): finds the cheapest
//!   gap for a driver break taking into account hard and soft constraints
//!
//! Evaluation never modifies a route: its result contains events which are applied separately.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod config;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod utils;
