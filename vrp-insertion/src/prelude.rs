//! This module reimports commonly used types.

pub use crate::config::{InsertionConfig, read_config};
pub use crate::construction::constraints::{ConstraintPipeline, ConstraintVariant, create_transport_constraints};
pub use crate::construction::heuristics::{
    BreakInsertionEvaluator, InsertionEvaluator, InsertionEvent, InsertionResult, RouteCandidate, evaluate_in_routes,
};
pub use crate::models::common::{Location, TimeWindow, TimeWindowMode, TimeWindows};
pub use crate::models::problem::{
    Break, CategoryMatrixBuilder, CategoryMatrixTransportCost, CategoryPolicy, Costs, Driver, Job, Service,
    SimpleActivityCost, Vehicle, VehicleBuilder,
};
pub use crate::models::solution::{Activity, Route};
pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
