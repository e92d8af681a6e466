//! Insertion heuristic building blocks: contexts, activity factories, evaluators and their results.

mod context;
pub use self::context::*;

mod evaluators;
pub use self::evaluators::*;

mod factories;
pub use self::factories::*;

mod insertions;
pub use self::insertions::*;
