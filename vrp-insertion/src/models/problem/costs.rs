#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::{Cost, Distance, Duration, Location, Timestamp};
use crate::models::problem::{Driver, Vehicle};
use crate::models::solution::Activity;

/// Provides the way to get cost information for specific activities done by specific vehicle.
pub trait ActivityCost {
    /// Returns cost to perform activity.
    fn cost(&self, vehicle: &Vehicle, activity: &Activity, arrival: Timestamp) -> Cost {
        let waiting = if activity.time.start > arrival { activity.time.start - arrival } else { 0. };
        let service = self.duration(vehicle, activity, arrival);

        waiting * vehicle.costs.per_waiting_time + service * vehicle.costs.per_service_time
    }

    /// Returns operation duration of the activity started at given arrival time.
    fn duration(&self, _vehicle: &Vehicle, activity: &Activity, _arrival: Timestamp) -> Duration {
        activity.duration
    }

    /// Estimates departure time for activity and vehicle at given arrival time.
    fn estimate_departure(&self, vehicle: &Vehicle, activity: &Activity, arrival: Timestamp) -> Timestamp {
        arrival.max(activity.time.start) + self.duration(vehicle, activity, arrival)
    }
}

/// A vehicle independent activity costs.
#[derive(Default)]
pub struct SimpleActivityCost {}

impl ActivityCost for SimpleActivityCost {}

/// Provides the way to get routing information for specific locations and vehicle.
pub trait TransportCost {
    /// Returns transport cost between two locations. Without vehicle, the cost is a plain distance.
    fn cost(
        &self,
        vehicle: Option<&Vehicle>,
        _driver: Option<&Driver>,
        from: &Location,
        to: &Location,
        departure: Timestamp,
    ) -> Cost {
        let distance = self.distance(vehicle, from, to, departure);

        match vehicle {
            Some(vehicle) => {
                let duration = self.duration(Some(vehicle), from, to, departure);
                distance * vehicle.costs.per_distance + duration * vehicle.costs.per_driving_time
            }
            None => distance,
        }
    }

    /// Returns travel duration between locations specific for given vehicle.
    fn duration(&self, vehicle: Option<&Vehicle>, from: &Location, to: &Location, departure: Timestamp) -> Duration;

    /// Returns travel distance between locations specific for given vehicle.
    fn distance(&self, vehicle: Option<&Vehicle>, from: &Location, to: &Location, departure: Timestamp) -> Distance;
}
