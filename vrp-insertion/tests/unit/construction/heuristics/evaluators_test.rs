use super::*;
use crate::helpers::construction::*;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::create_route;
use crate::models::common::{TimeWindow, TimeWindows};
use crate::models::problem::{Costs, VehicleBuilder};

struct FixedRouteConstraint(i32);

impl HardRouteConstraint for FixedRouteConstraint {
    fn evaluate_job(&self, _: &InsertionContext) -> Option<RouteConstraintViolation> {
        Some(RouteConstraintViolation { code: self.0 })
    }
}

/// Turns every violation of inner constraint into non terminal one which forces scanning of all gaps.
struct NonTerminalConstraint(Arc<dyn HardActivityConstraint + Send + Sync>);

impl HardActivityConstraint for NonTerminalConstraint {
    fn evaluate_activity(
        &self,
        ctx: &InsertionContext,
        activity_ctx: &ActivityContext,
    ) -> Option<ActivityConstraintViolation> {
        self.0
            .evaluate_activity(ctx, activity_ctx)
            .map(|violation| ActivityConstraintViolation { stopped: false, ..violation })
    }
}

struct EmptyActivityFactory;

impl JobActivityFactory for EmptyActivityFactory {
    fn create_activities(&self, _: &Job) -> Vec<Activity> {
        vec![]
    }
}

/// Creates break activities with an unlimited time window.
struct UnlimitedBreakFactory;

impl JobActivityFactory for UnlimitedBreakFactory {
    fn create_activities(&self, job: &Job) -> Vec<Activity> {
        DefaultJobActivityFactory::default()
            .create_activities(job)
            .into_iter()
            .map(|mut activity| {
                activity.time = TimeWindow::max();
                activity
            })
            .collect()
    }
}

fn create_default_evaluator() -> BreakInsertionEvaluator {
    create_break_evaluator(create_constraint_pipeline_with_transport())
}

/// A route with one service far from depot which opens late, so the break fits only before it.
fn create_late_service_route(vehicle: Arc<Vehicle>) -> Route {
    create_route(vehicle, 0., vec![(10, 100., 200., 0.)])
}

fn evaluate_break(
    evaluator: &BreakInsertionEvaluator,
    route: &Route,
    vehicle: &Arc<Vehicle>,
    job: &Job,
    best_known_cost: Cost,
) -> InsertionResult {
    evaluator.evaluate(route, job, vehicle, route.departure_time, &route.driver, best_known_cost)
}

fn get_failure(result: &InsertionResult) -> Option<(i32, bool)> {
    result.as_failure().map(|failure| (failure.constraint, failure.stopped))
}

#[test]
fn can_insert_break_before_late_service() {
    let route = create_late_service_route(test_vehicle("v1"));

    let job = test_break(5., 50., 10.);
    let result = evaluate_break(&create_default_evaluator(), &route, &route.vehicle, &job, f64::MAX);

    let success = result.as_success().expect("should insert break");
    assert_eq!(success.index, 0);
    assert_eq!(success.cost, 0.);
    assert_eq!(success.vehicle.id, "v1");
    let activity = success.activity().expect("should have activity");
    assert!(activity.is_break());
    assert_eq!(activity.location.index, Some(0));
    assert_eq!(activity.location.transit.time_from_previous, 5.);
    assert_eq!(activity.location.transit.distance_from_previous, 5.);
    assert!(activity.location.transit.distance_from_previous < 10.);
}

#[test]
fn can_report_terminal_violation_when_no_gap_is_cheaper() {
    let route = create_late_service_route(test_vehicle("v1"));

    let result = evaluate_break(&create_default_evaluator(), &route, &route.vehicle, &test_break(5., 50., 10.), 0.);

    assert_eq!(get_failure(&result), Some((TIME_CONSTRAINT_CODE, true)));
}

#[test]
fn can_return_the_same_result_for_the_same_input() {
    let route = create_late_service_route(test_vehicle("v1"));
    let evaluator = create_default_evaluator();
    let job = test_break(5., 50., 10.);

    let results = (0..2)
        .map(|_| evaluate_break(&evaluator, &route, &route.vehicle, &job, f64::MAX))
        .map(|result| {
            let success = result.as_success().cloned().expect("should insert break");
            let location = success.activity().map(|activity| activity.location.clone());
            (success.cost.to_bits(), success.index, location)
        })
        .collect::<Vec<_>>();

    assert_eq!(results[0], results[1]);
}

#[test]
fn can_fail_on_empty_route() {
    let route = Route::new(test_vehicle("v1"), test_driver(), 0.);

    let job = test_break(0., 100., 1.);
    let result = evaluate_break(&create_default_evaluator(), &route, &route.vehicle, &job, f64::MAX);

    assert_eq!(get_failure(&result), Some((EMPTY_ROUTE_CODE, false)));
}

#[test]
fn can_fail_when_break_is_not_declared_by_vehicle() {
    let vehicle = Arc::new(VehicleBuilder::new("v1", test_location(0)).add_break("lunch").build());
    let route = create_late_service_route(vehicle);
    let evaluator = create_default_evaluator();
    let service = Job::Service(test_service("job", 3, TimeWindows::default(), 0.));

    let undeclared = evaluate_break(&evaluator, &route, &route.vehicle, &test_break(5., 50., 10.), f64::MAX);
    let not_break = evaluate_break(&evaluator, &route, &route.vehicle, &service, f64::MAX);

    assert_eq!(get_failure(&undeclared), Some((BREAK_NOT_DECLARED_CODE, false)));
    assert_eq!(get_failure(&not_break), Some((BREAK_NOT_DECLARED_CODE, false)));
}

#[test]
fn can_fail_on_hard_route_violation() {
    let route = create_late_service_route(test_vehicle("v1"));
    let mut pipeline = create_constraint_pipeline_with_transport();
    pipeline.add_constraint(ConstraintVariant::HardRoute(Arc::new(FixedRouteConstraint(42))));

    let job = test_break(5., 50., 10.);
    let result = evaluate_break(&create_break_evaluator(pipeline), &route, &route.vehicle, &job, f64::MAX);

    assert_eq!(get_failure(&result), Some((42, false)));
}

#[test]
fn can_fail_when_factory_creates_no_activity() {
    let route = create_late_service_route(test_vehicle("v1"));
    let evaluator = create_default_evaluator().with_factory(Arc::new(EmptyActivityFactory));
    let job = test_break(5., 50., 10.);

    let result = evaluate_break(&evaluator, &route, &route.vehicle, &job, f64::MAX);

    assert_eq!(get_failure(&result), Some((UNKNOWN_CODE, false)));
}

#[test]
fn can_use_break_time_window_and_own_location_id() {
    let route = create_late_service_route(test_vehicle("v1"));
    let evaluator = create_default_evaluator().with_factory(Arc::new(UnlimitedBreakFactory));
    let job = test_break(5., 50., 10.);

    let success = evaluate_break(&evaluator, &route, &route.vehicle, &job, f64::MAX);
    let failure = evaluate_break(&evaluator, &route, &route.vehicle, &job, 0.);

    let activity = success.as_success().and_then(|success| success.activity()).expect("should insert break");
    assert_eq!(activity.time, TimeWindow::new(5., 50.));
    assert_eq!(activity.location.id, "break_break");
    assert_eq!(activity.location.index, Some(0));
    assert_eq!(get_failure(&failure), Some((TIME_CONSTRAINT_CODE, true)));
}

#[test]
fn can_stop_scanning_after_terminal_violation() {
    let services = (1..=4).map(|index| (index, 0., 1000., 0.)).collect();
    let route = create_route(test_vehicle("v1"), 0., services);
    let job = test_break(0., 2., 1.);

    let counting = Arc::new(CountingConstraint::default());
    let mut pruning = ConstraintPipeline::default();
    pruning.add_constraint(ConstraintVariant::HardActivity(counting.clone()));
    pruning.add_constraints(create_transport_constraints(TestTransportCost::new_shared(), test_activity_cost()));

    let timing = TimingConstraint::new(TIME_CONSTRAINT_CODE, TestTransportCost::new_shared(), test_activity_cost());
    let mut exhaustive = ConstraintPipeline::default();
    exhaustive.add_constraint(ConstraintVariant::HardActivity(Arc::new(NonTerminalConstraint(Arc::new(timing)))));
    exhaustive.add_constraint(ConstraintVariant::SoftRoute(Arc::new(RouteCostSoftConstraint {})));

    let pruned = evaluate_break(&create_break_evaluator(pruning), &route, &route.vehicle, &job, f64::MAX);
    let full = evaluate_break(&create_break_evaluator(exhaustive), &route, &route.vehicle, &job, f64::MAX);

    assert_eq!(counting.count(), 4);
    assert_eq!(pruned.as_success().map(|success| success.cost), full.as_success().map(|success| success.cost));
    assert_eq!(pruned.as_success().map(|success| success.index), Some(0));
}

#[test]
fn can_fail_when_no_gap_is_cheaper_than_best_known() {
    let route = create_route(test_vehicle("v1"), 0., vec![(10, 0., 1000., 0.)]);

    let result = evaluate_break(&create_default_evaluator(), &route, &route.vehicle, &test_break(0., 1000., 0.), 0.);

    assert_eq!(get_failure(&result), Some((NO_FEASIBLE_GAP_CODE, false)));
}

#[test]
fn can_report_last_non_terminal_violation() {
    let route = create_route(test_vehicle("v1"), 0., vec![(10, 0., 1000., 0.)]);
    let mut pipeline = ConstraintPipeline::default();
    pipeline.add_constraint(ConstraintVariant::HardActivity(Arc::new(GapConstraint {
        results: vec![ActivityConstraintViolation::skip(7), ActivityConstraintViolation::skip(8)],
    })));

    let job = test_break(0., 1000., 0.);
    let result = evaluate_break(&create_break_evaluator(pipeline), &route, &route.vehicle, &job, f64::MAX);

    assert_eq!(get_failure(&result), Some((8, false)));
}

#[test]
fn can_use_feasible_gap_after_skipped_one() {
    let route = create_route(test_vehicle("v1"), 0., vec![(10, 0., 1000., 0.)]);
    let mut pipeline = ConstraintPipeline::default();
    pipeline.add_constraint(ConstraintVariant::HardActivity(Arc::new(GapConstraint {
        results: vec![ActivityConstraintViolation::skip(7), ActivityConstraintViolation::success()],
    })));

    let job = test_break(0., 1000., 0.);
    let result = evaluate_break(&create_break_evaluator(pipeline), &route, &route.vehicle, &job, f64::MAX);

    let success = result.as_success().expect("should insert break");
    assert_eq!(success.index, 1);
    assert_eq!(success.activity().and_then(|activity| activity.location.index), Some(10));
}

#[test]
fn can_switch_vehicle_with_fixed_cost() {
    let route = create_late_service_route(test_vehicle("v1"));
    let vehicle = Arc::new(
        VehicleBuilder::new("v2", test_location(0))
            .costs(Costs { fixed: 5., per_distance: 1., ..Costs::default() })
            .add_break(DEFAULT_BREAK_ID)
            .build(),
    );

    let result = evaluate_break(&create_default_evaluator(), &route, &vehicle, &test_break(5., 50., 10.), f64::MAX);

    let success = result.as_success().expect("should insert break");
    assert_eq!(success.cost, 5.);
    assert_eq!(success.vehicle.id, "v2");
    assert!(success.events.iter().any(|event| matches!(
        event,
        InsertionEvent::SwitchVehicle { vehicle, .. } if vehicle.id == "v2"
    )));
}

#[test]
fn can_skip_distance_interpolation_below_threshold() {
    let route = create_late_service_route(test_vehicle("v1"));
    let evaluator = create_default_evaluator().with_offset_threshold(10.);

    let result = evaluate_break(&evaluator, &route, &route.vehicle, &test_break(5., 50., 10.), f64::MAX);

    let transit =
        result.as_success().and_then(|success| success.activity()).map(|activity| activity.location.transit.clone());
    assert_eq!(transit.as_ref().map(|transit| transit.time_from_previous), Some(5.));
    assert_eq!(transit.as_ref().map(|transit| transit.distance_from_previous), Some(0.));
}

#[test]
fn can_apply_insertion_result_to_route() {
    let mut route = create_late_service_route(test_vehicle("v1"));
    let job = test_break(5., 50., 10.);
    let result = evaluate_break(&create_default_evaluator(), &route, &route.vehicle, &job, f64::MAX);
    let success = result.as_success().cloned().expect("should insert break");

    success.apply(&mut route, TestTransportCost::new_shared().as_ref(), test_activity_cost().as_ref());

    assert_eq!(route.job_count(), 2);
    assert!(route.get(0).is_some_and(|activity| activity.is_break()));
    assert_eq!(route.get(0).map(|activity| (activity.schedule.arrival, activity.schedule.departure)), Some((0., 15.)));
}

fn create_switching_candidates(route: &Route) -> (RouteCandidate<'_>, RouteCandidate<'_>) {
    let expensive = RouteCandidate {
        route,
        vehicle: Arc::new(
            VehicleBuilder::new("v2", test_location(0))
                .costs(Costs { fixed: 5., per_distance: 1., ..Costs::default() })
                .add_break(DEFAULT_BREAK_ID)
                .build(),
        ),
        driver: test_driver(),
        departure_time: 0.,
    };

    (expensive, RouteCandidate::from_route(route))
}

#[test]
fn can_evaluate_in_routes_choosing_cheapest() {
    let route = create_late_service_route(test_vehicle("v1"));
    let (expensive, cheap) = create_switching_candidates(&route);

    let job = test_break(5., 50., 10.);
    let result = evaluate_in_routes(&create_default_evaluator(), &[expensive, cheap], &job, f64::MAX);

    let success = result.as_success().expect("should insert break");
    assert_eq!(success.vehicle.id, "v1");
    assert_eq!(success.cost, 0.);
}

parameterized_test! {can_evaluate_in_routes_keeping_candidate_order_on_tie, (first, second), {
    can_evaluate_in_routes_keeping_candidate_order_on_tie_impl(first, second);
}}

can_evaluate_in_routes_keeping_candidate_order_on_tie! {
    case01_v1_first: ("v1", "v3"),
    case02_v3_first: ("v3", "v1"),
}

fn can_evaluate_in_routes_keeping_candidate_order_on_tie_impl(first: &str, second: &str) {
    let first = create_late_service_route(test_vehicle(first));
    let second = create_late_service_route(test_vehicle(second));
    let candidates = vec![RouteCandidate::from_route(&first), RouteCandidate::from_route(&second)];

    let result = evaluate_in_routes(&create_default_evaluator(), &candidates, &test_break(5., 50., 10.), f64::MAX);

    assert_eq!(result.as_success().map(|success| success.vehicle.id.clone()), Some(first.vehicle.id.clone()));
}

#[test]
fn can_evaluate_in_routes_returning_known_failure() {
    let routes = ["v1", "v2"].map(|id| Route::new(test_vehicle(id), test_driver(), 0.));
    let candidates = routes.iter().map(RouteCandidate::from_route).collect::<Vec<_>>();
    let evaluator = create_default_evaluator();
    let job = test_break(0., 100., 1.);

    let failed = evaluate_in_routes(&evaluator, &candidates, &job, f64::MAX);
    let nothing = evaluate_in_routes(&evaluator, &[], &job, f64::MAX);

    assert_eq!(get_failure(&failed), Some((EMPTY_ROUTE_CODE, false)));
    assert_eq!(get_failure(&nothing), Some((UNKNOWN_CODE, false)));
}
