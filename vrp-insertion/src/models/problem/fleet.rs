#[cfg(test)]
#[path = "../../../tests/unit/models/problem/fleet_test.rs"]
mod fleet_test;

use crate::models::common::{Cost, Location, TimeWindow, Timestamp};
use rustc_hash::FxHashSet;

/// Represents operating costs of a vehicle.
#[derive(Clone, Debug, Default)]
pub struct Costs {
    /// A fixed cost to use a vehicle.
    pub fixed: Cost,
    /// Cost per distance unit.
    pub per_distance: Cost,
    /// Cost per driving time unit.
    pub per_driving_time: Cost,
    /// Cost per waiting time unit.
    pub per_waiting_time: Cost,
    /// Cost per service time unit.
    pub per_service_time: Cost,
}

/// Represents a driver, person who drives a vehicle.
#[derive(Debug)]
pub struct Driver {
    pub id: String,
}

impl Driver {
    /// Creates a driver which is used when no specific driver is assigned.
    pub fn empty() -> Self {
        Self { id: "no_driver".to_string() }
    }
}

/// Represents a vehicle.
#[derive(Debug)]
pub struct Vehicle {
    pub id: String,
    /// Location where vehicle starts.
    pub start: Location,
    /// Location where vehicle ends, used only when vehicle returns to depot.
    pub end: Location,
    /// Earliest departure and latest arrival.
    pub time: TimeWindow,
    /// A routing matrix category.
    pub category: Option<usize>,
    /// Specifies operating costs for vehicle.
    pub costs: Costs,
    /// Ids of breaks which driver of the vehicle has to take.
    pub breaks: FxHashSet<String>,
    /// False for open routes which finish at the last served activity.
    pub return_to_depot: bool,
}

impl Vehicle {
    /// Returns earliest departure time.
    pub fn earliest_departure(&self) -> Timestamp {
        self.time.start
    }

    /// Returns latest arrival time.
    pub fn latest_arrival(&self) -> Timestamp {
        self.time.end
    }

    /// Checks whether vehicle declares break with given id.
    pub fn has_break(&self, break_id: &str) -> bool {
        self.breaks.contains(break_id)
    }
}

/// A vehicle builder which keeps the most common defaults.
pub struct VehicleBuilder(Vehicle);

impl VehicleBuilder {
    /// Creates a new builder for a vehicle which starts and ends at the same location.
    pub fn new(id: &str, depot: Location) -> Self {
        Self(Vehicle {
            id: id.to_string(),
            start: depot.clone(),
            end: depot,
            time: TimeWindow::max(),
            category: None,
            costs: Costs { per_distance: 1., ..Costs::default() },
            breaks: FxHashSet::default(),
            return_to_depot: true,
        })
    }

    pub fn end(mut self, end: Location) -> Self {
        self.0.end = end;
        self
    }

    pub fn time(mut self, start: Timestamp, end: Timestamp) -> Self {
        self.0.time = TimeWindow::new(start, end);
        self
    }

    pub fn category(mut self, category: usize) -> Self {
        self.0.category = Some(category);
        self
    }

    pub fn costs(mut self, costs: Costs) -> Self {
        self.0.costs = costs;
        self
    }

    pub fn add_break(mut self, break_id: &str) -> Self {
        self.0.breaks.insert(break_id.to_string());
        self
    }

    pub fn open(mut self) -> Self {
        self.0.return_to_depot = false;
        self
    }

    pub fn build(self) -> Vehicle {
        self.0
    }
}
