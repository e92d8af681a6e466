//! Constraints applied to insertion of a job into a route.
//!
//! ## Constraint characteristics
//! Each constraint has two characteristic:
//!
//! - **hard or soft**: when hard constraint is violated, the job cannot be inserted at given place.
//!   In contrast to this, soft constraint allows insertion but applies some penalty to make it
//!   less attractive.
//!
//! - **route or activity**: route constraints are checked once per route, activity constraints
//!   are checked for every gap between two consecutive activities.
//!
//! Hard activity constraint can signal that no later gap is feasible either: time only moves
//! forward along the route, so the evaluation stops scanning gaps in that case.
//!
//! All constraints are organized inside one [`ConstraintPipeline`] which specifies the order
//! of their execution.

/// A violation code of time window constraints.
pub const TIME_CONSTRAINT_CODE: i32 = 10;

mod pipeline;
pub use self::pipeline::*;

mod timing;
pub use self::timing::*;

mod transport;
pub use self::transport::*;
