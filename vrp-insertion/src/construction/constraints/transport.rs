#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/transport_test.rs"]
mod transport_test;

use crate::construction::constraints::*;
use crate::construction::heuristics::{ActivityContext, InsertionContext};
use crate::models::common::{Cost, Timestamp};
use crate::models::problem::{ActivityCost, Driver, TransportCost, Vehicle};
use crate::models::solution::Activity;
use std::sync::Arc;

/// Estimates extra cost of placing target activity between two activities.
pub trait ActivityInsertionCost {
    /// Returns cost difference between route leg with target activity and without it.
    fn estimate(&self, ctx: &InsertionContext, activity_ctx: &ActivityContext) -> Cost;
}

/// Creates constraints which keep route feasible in time and apply vehicle costs.
pub fn create_transport_constraints(
    transport: Arc<dyn TransportCost + Send + Sync>,
    activity: Arc<dyn ActivityCost + Send + Sync>,
) -> Vec<ConstraintVariant> {
    vec![
        ConstraintVariant::HardActivity(Arc::new(TimingConstraint::new(TIME_CONSTRAINT_CODE, transport, activity))),
        ConstraintVariant::SoftRoute(Arc::new(RouteCostSoftConstraint {})),
    ]
}

/// Applies fixed cost difference when the route gets another vehicle.
pub struct RouteCostSoftConstraint {}

impl SoftRouteConstraint for RouteCostSoftConstraint {
    fn estimate_job(&self, ctx: &InsertionContext) -> Cost {
        if ctx.is_vehicle_switched() { ctx.vehicle.costs.fixed - ctx.route.vehicle.costs.fixed } else { 0. }
    }
}

/// Calculates transport and activity costs change on one route leg.
pub struct LocalActivityInsertionCost {
    activity: Arc<dyn ActivityCost + Send + Sync>,
    transport: Arc<dyn TransportCost + Send + Sync>,
}

impl LocalActivityInsertionCost {
    /// Creates a new instance of `LocalActivityInsertionCost`.
    pub fn new(transport: Arc<dyn TransportCost + Send + Sync>, activity: Arc<dyn ActivityCost + Send + Sync>) -> Self {
        Self { activity, transport }
    }

    fn analyze_route_leg(
        &self,
        vehicle: &Vehicle,
        driver: &Driver,
        start: &Activity,
        end: &Activity,
        time: Timestamp,
    ) -> (Cost, Cost, Timestamp) {
        let arrival = time + self.transport.duration(Some(vehicle), &start.location, &end.location, time);
        let departure = self.activity.estimate_departure(vehicle, end, arrival);

        let transport_cost = self.transport.cost(Some(vehicle), Some(driver), &start.location, &end.location, time);
        let activity_cost = self.activity.cost(vehicle, end, arrival);

        (transport_cost, activity_cost, departure)
    }
}

impl ActivityInsertionCost for LocalActivityInsertionCost {
    fn estimate(&self, ctx: &InsertionContext, activity_ctx: &ActivityContext) -> Cost {
        let vehicle = ctx.vehicle.as_ref();
        let driver = ctx.driver.as_ref();

        let prev = activity_ctx.prev;
        let target = activity_ctx.target;
        let next = activity_ctx.next;

        let (tp_cost_left, act_cost_left, dep_time_left) =
            self.analyze_route_leg(vehicle, driver, prev, target, activity_ctx.prev_departure);
        let (tp_cost_right, act_cost_right, _) = self.analyze_route_leg(vehicle, driver, target, next, dep_time_left);

        let (tp_cost_old, act_cost_old, _) =
            self.analyze_route_leg(vehicle, driver, prev, next, activity_ctx.prev_departure);

        (tp_cost_left + tp_cost_right + act_cost_left + act_cost_right) - (tp_cost_old + act_cost_old)
    }
}

/// Estimates cost change of driving from a vehicle's start to the first activity and from the last
/// activity to the vehicle's end when route is served by another vehicle or departs at another time.
pub struct AccessEgressCost {
    transport: Arc<dyn TransportCost + Send + Sync>,
}

impl AccessEgressCost {
    /// Creates a new instance of `AccessEgressCost`.
    pub fn new(transport: Arc<dyn TransportCost + Send + Sync>) -> Self {
        Self { transport }
    }

    /// Returns access and egress cost difference. It is zero for empty routes.
    pub fn estimate(&self, ctx: &InsertionContext) -> Cost {
        let route = ctx.route;
        let (first, last) = match (route.activities().first(), route.activities().last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.,
        };

        let (new_vehicle, new_driver) = (ctx.vehicle.as_ref(), ctx.driver.as_ref());
        let (old_vehicle, old_driver) = (route.vehicle.as_ref(), route.driver.as_ref());

        let access = self.transport.cost(
            Some(new_vehicle),
            Some(new_driver),
            &new_vehicle.start,
            &first.location,
            ctx.departure_time,
        ) - self.transport.cost(
            Some(old_vehicle),
            Some(old_driver),
            &old_vehicle.start,
            &first.location,
            route.departure_time,
        );

        if !new_vehicle.return_to_depot {
            return access;
        }

        let old_end_time = last.schedule.departure;
        let new_end_time = (old_end_time + ctx.departure_time - route.departure_time).max(0.);

        let old_egress = if old_vehicle.return_to_depot {
            self.transport.cost(Some(old_vehicle), Some(old_driver), &last.location, &old_vehicle.end, old_end_time)
        } else {
            0.
        };
        let new_egress =
            self.transport.cost(Some(new_vehicle), Some(new_driver), &last.location, &new_vehicle.end, new_end_time);

        access + new_egress - old_egress
    }
}
