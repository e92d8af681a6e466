//! A collection of models to represent problem and route data used by insertion evaluation.

pub mod common;
pub mod problem;
pub mod solution;
