//! The construction module contains building blocks to evaluate insertion of a job into a route.

pub mod constraints;
pub mod heuristics;
