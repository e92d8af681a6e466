#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/pipeline_test.rs"]
mod pipeline_test;

use crate::construction::heuristics::{ActivityContext, InsertionContext};
use crate::models::common::Cost;
use std::sync::Arc;

/// Specifies hard constraint which operates on route level.
pub trait HardRouteConstraint {
    /// Estimates job insertion in specific route.
    /// Returns violation error if constraint is violated.
    fn evaluate_job(&self, ctx: &InsertionContext) -> Option<RouteConstraintViolation>;
}

/// Specifies soft constraint which operates on route level.
pub trait SoftRouteConstraint {
    /// Estimates job insertion in specific route.
    /// Returns non-zero penalty if constraint is violated: positive makes insertion less attractive,
    /// negative - more.
    fn estimate_job(&self, ctx: &InsertionContext) -> Cost;
}

/// Specifies hard constraint which operates on activity level.
pub trait HardActivityConstraint {
    /// Estimates activity insertion in specific route leg.
    /// Returns violation error if constraint is violated.
    fn evaluate_activity(
        &self,
        ctx: &InsertionContext,
        activity_ctx: &ActivityContext,
    ) -> Option<ActivityConstraintViolation>;
}

/// Specifies soft constraint which operates on activity level.
pub trait SoftActivityConstraint {
    /// Estimates activity insertion in specific route leg.
    fn estimate_activity(&self, ctx: &InsertionContext, activity_ctx: &ActivityContext) -> Cost;
}

/// Specifies result of hard route constraint check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteConstraintViolation {
    /// Violation code which is used as marker of specific constraint violated.
    pub code: i32,
}

/// Specifies result of hard activity constraint check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityConstraintViolation {
    /// Violation code which is used as marker of specific constraint violated.
    pub code: i32,
    /// True if further insertions should not be attempted.
    pub stopped: bool,
}

impl ActivityConstraintViolation {
    /// A constraint violation failure with stopped set to true.
    pub fn fail(code: i32) -> Option<Self> {
        Some(Self { code, stopped: true })
    }

    /// A constraint violation failure with stopped set to false.
    pub fn skip(code: i32) -> Option<Self> {
        Some(Self { code, stopped: false })
    }

    /// No constraint violation.
    pub fn success() -> Option<Self> {
        None
    }
}

/// A variant type for constraint types.
#[derive(Clone)]
pub enum ConstraintVariant {
    HardRoute(Arc<dyn HardRouteConstraint + Send + Sync>),
    HardActivity(Arc<dyn HardActivityConstraint + Send + Sync>),
    SoftRoute(Arc<dyn SoftRouteConstraint + Send + Sync>),
    SoftActivity(Arc<dyn SoftActivityConstraint + Send + Sync>),
}

/// Provides the way to work with multiple constraints.
#[derive(Default)]
pub struct ConstraintPipeline {
    hard_route_constraints: Vec<Arc<dyn HardRouteConstraint + Send + Sync>>,
    hard_activity_constraints: Vec<Arc<dyn HardActivityConstraint + Send + Sync>>,
    soft_route_constraints: Vec<Arc<dyn SoftRouteConstraint + Send + Sync>>,
    soft_activity_constraints: Vec<Arc<dyn SoftActivityConstraint + Send + Sync>>,
}

impl ConstraintPipeline {
    /// Adds constraint to the pipeline. Constraints of the same type are checked in order of addition.
    pub fn add_constraint(&mut self, constraint: ConstraintVariant) -> &mut Self {
        match constraint {
            ConstraintVariant::HardRoute(c) => self.hard_route_constraints.push(c),
            ConstraintVariant::HardActivity(c) => self.hard_activity_constraints.push(c),
            ConstraintVariant::SoftRoute(c) => self.soft_route_constraints.push(c),
            ConstraintVariant::SoftActivity(c) => self.soft_activity_constraints.push(c),
        }

        self
    }

    /// Adds multiple constraints to the pipeline.
    pub fn add_constraints(&mut self, constraints: impl IntoIterator<Item = ConstraintVariant>) -> &mut Self {
        constraints.into_iter().for_each(|constraint| {
            self.add_constraint(constraint);
        });

        self
    }

    /// Checks whether all hard route constraints are fulfilled.
    /// Returns result of first failed constraint or empty value.
    pub fn evaluate_hard_route(&self, ctx: &InsertionContext) -> Option<RouteConstraintViolation> {
        self.hard_route_constraints.iter().find_map(|c| c.evaluate_job(ctx))
    }

    /// Checks whether all activity route constraints are fulfilled.
    /// Returns result of first failed constraint or empty value.
    pub fn evaluate_hard_activity(
        &self,
        ctx: &InsertionContext,
        activity_ctx: &ActivityContext,
    ) -> Option<ActivityConstraintViolation> {
        self.hard_activity_constraints.iter().find_map(|c| c.evaluate_activity(ctx, activity_ctx))
    }

    /// Checks soft route constraints and aggregates associated actual and penalty costs.
    pub fn evaluate_soft_route(&self, ctx: &InsertionContext) -> Cost {
        self.soft_route_constraints.iter().map(|c| c.estimate_job(ctx)).sum()
    }

    /// Checks soft activity constraints and aggregates associated actual and penalty costs.
    pub fn evaluate_soft_activity(&self, ctx: &InsertionContext, activity_ctx: &ActivityContext) -> Cost {
        self.soft_activity_constraints.iter().map(|c| c.estimate_activity(ctx, activity_ctx)).sum()
    }
}
