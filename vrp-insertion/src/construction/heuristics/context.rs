use crate::models::common::Timestamp;
use crate::models::problem::{Driver, Job, Vehicle};
use crate::models::solution::{Activity, Route};
use crate::utils::compare_shared;
use std::sync::Arc;

/// Correlates a route with a job and a candidate vehicle during one insertion evaluation.
pub struct InsertionContext<'a> {
    /// A route snapshot, it is not modified during evaluation.
    pub route: &'a Route,
    /// A job to be inserted.
    pub job: &'a Job,
    /// A candidate vehicle.
    pub vehicle: &'a Arc<Vehicle>,
    /// A candidate driver.
    pub driver: &'a Arc<Driver>,
    /// A candidate departure time.
    pub departure_time: Timestamp,
    /// Activities created for the job.
    pub activities: Vec<Activity>,
}

impl<'a> InsertionContext<'a> {
    /// Creates a new instance of `InsertionContext` without associated activities.
    pub fn new(
        route: &'a Route,
        job: &'a Job,
        vehicle: &'a Arc<Vehicle>,
        driver: &'a Arc<Driver>,
        departure_time: Timestamp,
    ) -> Self {
        Self { route, job, vehicle, driver, departure_time, activities: vec![] }
    }

    /// Sets activities associated with the job.
    pub fn with_activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = activities;
        self
    }

    /// Returns true if candidate vehicle differs from the one assigned to the route.
    pub fn is_vehicle_switched(&self) -> bool {
        !compare_shared(self.vehicle, &self.route.vehicle)
    }
}

/// Describes insertion context for one gap between two activities.
pub struct ActivityContext<'a> {
    /// Activity insertion index.
    pub index: usize,

    /// Previous activity.
    pub prev: &'a Activity,

    /// Target activity.
    pub target: &'a Activity,

    /// Next activity, it is the route end for the last gap.
    pub next: &'a Activity,

    /// Departure time from the previous activity.
    pub prev_departure: Timestamp,
}
