#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/evaluators_test.rs"]
mod evaluators_test;

use crate::config::InsertionConfig;
use crate::construction::constraints::*;
use crate::construction::heuristics::*;
use crate::models::common::{Cost, Distance, Duration, Location, Timestamp, TransitInfo};
use crate::models::problem::{ActivityCost, Driver, Job, TransportCost, Vehicle};
use crate::models::solution::{Activity, Route};
use crate::utils::{Environment, GenericResult, parallel_collect};
use std::iter::once;
use std::ops::ControlFlow;
use std::sync::Arc;

/// Evaluates insertion of a job into a route served by a candidate vehicle.
pub trait InsertionEvaluator {
    /// Returns the cheapest insertion which costs less than `best_known_cost` or a failure.
    /// The route is not modified: successful result carries events to be applied later.
    fn evaluate(
        &self,
        route: &Route,
        job: &Job,
        vehicle: &Arc<Vehicle>,
        departure_time: Timestamp,
        driver: &Arc<Driver>,
        best_known_cost: Cost,
    ) -> InsertionResult;
}

/// A default minimal time offset from previous activity which makes break to travel some distance.
pub const DEFAULT_BREAK_OFFSET_THRESHOLD: Duration = 1.;

/// Evaluates insertion of a driver break. Break has no location: it is anchored at the previous
/// activity of every analyzed gap with travel distance interpolated by its time offset.
pub struct BreakInsertionEvaluator {
    pipeline: Arc<ConstraintPipeline>,
    transport: Arc<dyn TransportCost + Send + Sync>,
    activity: Arc<dyn ActivityCost + Send + Sync>,
    insertion_cost: Arc<dyn ActivityInsertionCost + Send + Sync>,
    access_egress: AccessEgressCost,
    factory: Arc<dyn JobActivityFactory + Send + Sync>,
    offset_threshold: Duration,
}

impl BreakInsertionEvaluator {
    /// Creates a new instance of `BreakInsertionEvaluator` with default insertion cost and activity factory.
    pub fn new(
        pipeline: Arc<ConstraintPipeline>,
        transport: Arc<dyn TransportCost + Send + Sync>,
        activity: Arc<dyn ActivityCost + Send + Sync>,
    ) -> Self {
        Self {
            pipeline,
            insertion_cost: Arc::new(LocalActivityInsertionCost::new(transport.clone(), activity.clone())),
            access_egress: AccessEgressCost::new(transport.clone()),
            factory: Arc::new(DefaultJobActivityFactory::default()),
            offset_threshold: DEFAULT_BREAK_OFFSET_THRESHOLD,
            transport,
            activity,
        }
    }

    /// Creates a new instance of `BreakInsertionEvaluator` configured by `config`.
    pub fn from_config(
        config: &InsertionConfig,
        pipeline: Arc<ConstraintPipeline>,
        transport: Arc<dyn TransportCost + Send + Sync>,
        activity: Arc<dyn ActivityCost + Send + Sync>,
        environment: &Environment,
    ) -> GenericResult<Self> {
        let threshold = config.break_offset_threshold;
        if !threshold.is_finite() || threshold < 0. {
            return Err(format!("break offset threshold should be non-negative number, got: {threshold}").into());
        }

        (environment.logger)(&format!(
            "break insertion: offset threshold {threshold}, time window mode {:?}, category policy {:?}",
            config.time_window_mode, config.category_policy
        ));

        Ok(Self::new(pipeline, transport, activity).with_offset_threshold(threshold))
    }

    /// Sets time offset from previous activity above which break distance is interpolated.
    pub fn with_offset_threshold(mut self, offset_threshold: Duration) -> Self {
        self.offset_threshold = offset_threshold;
        self
    }

    /// Sets a custom activity factory.
    pub fn with_factory(mut self, factory: Arc<dyn JobActivityFactory + Send + Sync>) -> Self {
        self.factory = factory;
        self
    }

    /// Sets a custom estimation of extra transport cost.
    pub fn with_insertion_cost(mut self, insertion_cost: Arc<dyn ActivityInsertionCost + Send + Sync>) -> Self {
        self.insertion_cost = insertion_cost;
        self
    }

    fn get_transit(
        &self,
        prev: &Activity,
        time_from_prev: Duration,
        segment_time: Duration,
        segment_distance: Distance,
    ) -> TransitInfo {
        let time_from_previous_non_break = time_from_prev + prev.location.transit.time_from_previous_non_break.max(0.);

        if time_from_prev > self.offset_threshold {
            let distance = if segment_time > 0. { segment_distance * time_from_prev / segment_time } else { 0. };

            TransitInfo {
                time_from_previous: time_from_prev,
                distance_from_previous: distance,
                time_from_previous_non_break,
                distance_from_previous_non_break: distance
                    + prev.location.transit.distance_from_previous_non_break.max(0.),
            }
        } else {
            TransitInfo {
                time_from_previous: time_from_prev,
                distance_from_previous: 0.,
                time_from_previous_non_break,
                distance_from_previous_non_break: 0.,
            }
        }
    }
}

/// Keeps the state of the gap scan.
struct GapScan {
    prev_departure: Timestamp,
    best: Option<(Cost, usize, Location)>,
    best_cost: Cost,
    violation: Option<ActivityConstraintViolation>,
}

impl InsertionEvaluator for BreakInsertionEvaluator {
    fn evaluate(
        &self,
        route: &Route,
        job: &Job,
        vehicle: &Arc<Vehicle>,
        departure_time: Timestamp,
        driver: &Arc<Driver>,
        best_known_cost: Cost,
    ) -> InsertionResult {
        let break_job = match job.as_break() {
            Some(break_job) if vehicle.has_break(break_job.id.as_str()) => break_job,
            _ => return InsertionResult::make_failure_with_code(BREAK_NOT_DECLARED_CODE, false),
        };

        if route.is_empty() {
            return InsertionResult::make_failure_with_code(EMPTY_ROUTE_CODE, false);
        }

        let ctx = InsertionContext::new(route, job, vehicle, driver, departure_time)
            .with_activities(self.factory.create_activities(job));

        if let Some(violation) = self.pipeline.evaluate_hard_route(&ctx) {
            return InsertionResult::make_failure_with_code(violation.code, false);
        }

        let mut target = match ctx.activities.first() {
            Some(activity) => activity.clone(),
            None => return InsertionResult::make_failure_with_code(UNKNOWN_CODE, false),
        };

        let route_cost = self.pipeline.evaluate_soft_route(&ctx) + self.access_egress.estimate(&ctx);
        let location_id = format!("break_{}", break_job.id);

        let routing_vehicle = Some(vehicle.as_ref());
        let start = Activity::new_start(vehicle, departure_time);
        let end = Activity::new_end(vehicle, route.activities().last());

        let legs = once(&start).chain(route.activities().iter()).zip(route.activities().iter().chain(once(&end)));
        let init = GapScan { prev_departure: departure_time, best: None, best_cost: best_known_cost, violation: None };

        let scan = legs.enumerate().try_fold(init, |mut scan, (index, (prev, next))| {
            let prev_departure = scan.prev_departure;

            let segment_time = self.transport.duration(routing_vehicle, &prev.location, &next.location, prev_departure);
            let segment_distance =
                self.transport.distance(routing_vehicle, &prev.location, &next.location, prev_departure);

            target.time = break_job.time.clone();
            let time_from_prev = (target.time.start - prev_departure).max(0.);
            target.location = Location {
                id: location_id.clone(),
                transit: self.get_transit(prev, time_from_prev, segment_time, segment_distance),
                ..prev.location.anchored()
            };

            let activity_ctx = ActivityContext { index, prev, target: &target, next, prev_departure };

            match self.pipeline.evaluate_hard_activity(&ctx, &activity_ctx) {
                Some(violation) if violation.stopped => {
                    scan.violation = Some(violation);
                    return ControlFlow::Break(scan);
                }
                Some(violation) => scan.violation = Some(violation),
                None => {
                    let total_cost = route_cost
                        + self.pipeline.evaluate_soft_activity(&ctx, &activity_ctx)
                        + self.insertion_cost.estimate(&ctx, &activity_ctx);

                    if total_cost < scan.best_cost {
                        scan.best_cost = total_cost;
                        scan.best = Some((total_cost, index, target.location.clone()));
                    }
                }
            }

            let arrival = prev_departure + segment_time;
            scan.prev_departure = self.activity.estimate_departure(vehicle, next, arrival);

            ControlFlow::Continue(scan)
        });

        let scan = match scan {
            ControlFlow::Continue(scan) | ControlFlow::Break(scan) => scan,
        };

        match scan.best {
            Some((cost, index, location)) => {
                let mut activity = target;
                activity.location = location;

                InsertionResult::Success(InsertionData {
                    cost,
                    index,
                    vehicle: vehicle.clone(),
                    driver: driver.clone(),
                    departure_time,
                    events: vec![
                        InsertionEvent::InsertActivity { activity, index },
                        InsertionEvent::SwitchVehicle {
                            vehicle: vehicle.clone(),
                            driver: driver.clone(),
                            departure_time,
                        },
                    ],
                })
            }
            None => {
                let (code, stopped) = scan
                    .violation
                    .map_or((NO_FEASIBLE_GAP_CODE, false), |violation| (violation.code, violation.stopped));
                InsertionResult::make_failure_with_code(code, stopped)
            }
        }
    }
}

/// A route with a vehicle, driver and departure time to be evaluated for insertion.
pub struct RouteCandidate<'a> {
    pub route: &'a Route,
    pub vehicle: Arc<Vehicle>,
    pub driver: Arc<Driver>,
    pub departure_time: Timestamp,
}

impl<'a> RouteCandidate<'a> {
    /// Creates a candidate which keeps vehicle, driver and departure time of the route.
    pub fn from_route(route: &'a Route) -> Self {
        Self {
            route,
            vehicle: route.vehicle.clone(),
            driver: route.driver.clone(),
            departure_time: route.departure_time,
        }
    }
}

/// Evaluates insertion of the job into independent routes in parallel and returns the cheapest one.
/// On equal costs, the candidate which comes first wins.
pub fn evaluate_in_routes<E>(
    evaluator: &E,
    candidates: &[RouteCandidate<'_>],
    job: &Job,
    best_known_cost: Cost,
) -> InsertionResult
where
    E: InsertionEvaluator + Sync,
{
    parallel_collect(candidates, |candidate| {
        evaluator.evaluate(
            candidate.route,
            job,
            &candidate.vehicle,
            candidate.departure_time,
            &candidate.driver,
            best_known_cost,
        )
    })
    .into_iter()
    .fold(InsertionResult::make_failure_with_code(UNKNOWN_CODE, false), InsertionResult::choose_best_result)
}
