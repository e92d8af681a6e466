#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/timing_test.rs"]
mod timing_test;

use crate::construction::constraints::*;
use crate::construction::heuristics::{ActivityContext, InsertionContext};
use crate::models::common::Timestamp;
use crate::models::problem::{ActivityCost, TransportCost, Vehicle};
use crate::models::solution::{Activity, ActivityKind};
use std::sync::Arc;

/// Checks time windows of the vehicle, target and next activities.
pub struct TimingConstraint {
    code: i32,
    activity: Arc<dyn ActivityCost + Send + Sync>,
    transport: Arc<dyn TransportCost + Send + Sync>,
}

impl TimingConstraint {
    /// Creates a new instance of `TimingConstraint`.
    pub fn new(
        code: i32,
        transport: Arc<dyn TransportCost + Send + Sync>,
        activity: Arc<dyn ActivityCost + Send + Sync>,
    ) -> Self {
        Self { code, activity, transport }
    }

    fn is_reachable(ctx: &InsertionContext, vehicle: &Vehicle, next: &Activity, arrival: Timestamp) -> bool {
        match &next.kind {
            ActivityKind::End => arrival <= vehicle.latest_arrival(),
            ActivityKind::Service(service) => {
                arrival <= next.latest() && service.times.effective_windows(ctx).iter().any(|tw| arrival <= tw.end)
            }
            ActivityKind::Start | ActivityKind::Break(_) => arrival <= next.latest(),
        }
    }
}

impl HardActivityConstraint for TimingConstraint {
    fn evaluate_activity(
        &self,
        ctx: &InsertionContext,
        activity_ctx: &ActivityContext,
    ) -> Option<ActivityConstraintViolation> {
        let vehicle = ctx.vehicle.as_ref();

        let prev = activity_ctx.prev;
        let target = activity_ctx.target;
        let next = activity_ctx.next;

        let departure = activity_ctx.prev_departure;

        if vehicle.latest_arrival() < target.earliest() {
            return ActivityConstraintViolation::fail(self.code);
        }

        let arr_time_at_target =
            departure + self.transport.duration(Some(vehicle), &prev.location, &target.location, departure);

        // departure from prev never decreases along the route, so later gaps are late too
        if arr_time_at_target > target.latest() {
            return ActivityConstraintViolation::fail(self.code);
        }

        let end_time_at_target = self.activity.estimate_departure(vehicle, target, arr_time_at_target);
        let arr_time_at_next = end_time_at_target
            + self.transport.duration(Some(vehicle), &target.location, &next.location, end_time_at_target);

        if Self::is_reachable(ctx, vehicle, next, arr_time_at_next) {
            ActivityConstraintViolation::success()
        } else {
            ActivityConstraintViolation::skip(self.code)
        }
    }
}
