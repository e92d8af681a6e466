#[cfg(test)]
#[path = "../../../tests/unit/models/solution/route_test.rs"]
mod route_test;

use crate::models::common::{Location, Timestamp, TransitInfo};
use crate::models::problem::{ActivityCost, Driver, TransportCost, Vehicle};
use crate::models::solution::Activity;
use std::sync::Arc;

/// Represents a route: a vehicle with driver and the ordered list of activities served by it.
/// Start and end activities are not stored: they are derived from the vehicle.
#[derive(Clone, Debug)]
pub struct Route {
    pub vehicle: Arc<Vehicle>,
    pub driver: Arc<Driver>,
    pub departure_time: Timestamp,
    activities: Vec<Activity>,
}

impl Route {
    /// Creates an empty route.
    pub fn new(vehicle: Arc<Vehicle>, driver: Arc<Driver>, departure_time: Timestamp) -> Self {
        Self { vehicle, driver, departure_time, activities: vec![] }
    }

    /// Creates a route with given activities in the given order.
    pub fn with_activities(
        vehicle: Arc<Vehicle>,
        driver: Arc<Driver>,
        departure_time: Timestamp,
        activities: Vec<Activity>,
    ) -> Self {
        Self { vehicle, driver, departure_time, activities }
    }

    pub fn activities(&self) -> &[Activity] {
        self.activities.as_slice()
    }

    pub fn get(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Returns amount of activities excluding start and end.
    pub fn job_count(&self) -> usize {
        self.activities.len()
    }

    /// Returns a start activity of the route's vehicle.
    pub fn start(&self) -> Activity {
        Activity::new_start(&self.vehicle, self.departure_time)
    }

    /// Returns an end activity of the route's vehicle.
    pub fn end(&self) -> Activity {
        Activity::new_end(&self.vehicle, self.activities.last())
    }

    /// Inserts activity at given position: zero means right after the start.
    pub fn insert(&mut self, index: usize, activity: Activity) {
        self.activities.insert(index.min(self.activities.len()), activity);
    }

    /// Recalculates arrival, departure and transit information of all activities.
    pub fn reschedule(
        &mut self,
        transport: &(dyn TransportCost + Send + Sync),
        activity: &(dyn ActivityCost + Send + Sync),
    ) {
        let vehicle = self.vehicle.clone();
        let init: (Location, TransitInfo, bool, Timestamp) =
            (vehicle.start.clone(), TransitInfo::default(), false, self.departure_time);

        self.activities.iter_mut().fold(init, |(prev_location, prev_transit, prev_is_break, departure), act| {
            let time = transport.duration(Some(vehicle.as_ref()), &prev_location, &act.location, departure);
            let distance = transport.distance(Some(vehicle.as_ref()), &prev_location, &act.location, departure);

            let (time_acc, distance_acc) = if prev_is_break {
                (prev_transit.time_from_previous_non_break, prev_transit.distance_from_previous_non_break)
            } else {
                (0., 0.)
            };

            act.location.transit = TransitInfo {
                time_from_previous: time,
                distance_from_previous: distance,
                time_from_previous_non_break: time + time_acc,
                distance_from_previous_non_break: distance + distance_acc,
            };

            act.schedule.arrival = departure + time;
            act.schedule.departure = activity.estimate_departure(&vehicle, act, act.schedule.arrival);

            (act.location.clone(), act.location.transit.clone(), act.is_break(), act.schedule.departure)
        });
    }
}
