#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/insertions_test.rs"]
mod insertions_test;

use crate::models::common::{Cost, Timestamp};
use crate::models::problem::{ActivityCost, Driver, TransportCost, Vehicle};
use crate::models::solution::{Activity, Route};
use crate::utils::compare_floats;
use std::cmp::Ordering;
use std::sync::Arc;

/// A code used when no specific constraint is responsible for the failure.
pub const UNKNOWN_CODE: i32 = -1;
/// A code used when break is not declared by the vehicle.
pub const BREAK_NOT_DECLARED_CODE: i32 = 1;
/// A code used when route has no activities to anchor a break.
pub const EMPTY_ROUTE_CODE: i32 = 2;
/// A code used when every gap is either infeasible or not cheaper than the cost ceiling.
pub const NO_FEASIBLE_GAP_CODE: i32 = 3;

/// A deferred route modification produced by insertion evaluation.
#[derive(Clone, Debug)]
pub enum InsertionEvent {
    /// Inserts activity at given index of the route.
    InsertActivity { activity: Activity, index: usize },
    /// Assigns a new vehicle, driver and departure time to the route.
    SwitchVehicle { vehicle: Arc<Vehicle>, driver: Arc<Driver>, departure_time: Timestamp },
}

/// Specifies insertion success result needed to insert job into route.
#[derive(Clone, Debug)]
pub struct InsertionData {
    /// Specifies total cost change for the insertion.
    pub cost: Cost,
    /// An index of the gap where activity is inserted.
    pub index: usize,
    pub vehicle: Arc<Vehicle>,
    pub driver: Arc<Driver>,
    pub departure_time: Timestamp,
    /// Commands to be applied to the route in given order.
    pub events: Vec<InsertionEvent>,
}

impl InsertionData {
    /// Applies insertion events to the route and reschedules it.
    pub fn apply(
        &self,
        route: &mut Route,
        transport: &(dyn TransportCost + Send + Sync),
        activity: &(dyn ActivityCost + Send + Sync),
    ) {
        self.events.iter().for_each(|event| match event {
            InsertionEvent::InsertActivity { activity, index } => route.insert(*index, activity.clone()),
            InsertionEvent::SwitchVehicle { vehicle, driver, departure_time } => {
                route.vehicle = vehicle.clone();
                route.driver = driver.clone();
                route.departure_time = *departure_time;
            }
        });

        route.reschedule(transport, activity);
    }

    /// Returns inserted activity.
    pub fn activity(&self) -> Option<&Activity> {
        self.events.iter().find_map(|event| match event {
            InsertionEvent::InsertActivity { activity, .. } => Some(activity),
            InsertionEvent::SwitchVehicle { .. } => None,
        })
    }
}

/// Specifies insertion failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertionFailure {
    /// Failed constraint code.
    pub constraint: i32,
    /// A flag which signalizes that evaluation was stopped before all gaps were analyzed.
    pub stopped: bool,
}

/// Specifies insertion result variant.
#[derive(Clone, Debug)]
pub enum InsertionResult {
    /// Successful insertion result.
    Success(InsertionData),
    /// Insertion failure.
    Failure(InsertionFailure),
}

impl InsertionResult {
    /// Creates result which represents insertion failure with given code.
    pub fn make_failure_with_code(code: i32, stopped: bool) -> Self {
        Self::Failure(InsertionFailure { constraint: code, stopped })
    }

    /// Compares two insertion results and returns the cheapest by cost, left one wins on tie.
    pub fn choose_best_result(left: Self, right: Self) -> Self {
        match (&left, &right) {
            (Self::Success(_), Self::Failure(_)) => left,
            (Self::Failure(_), Self::Success(_)) => right,
            (Self::Success(lhs), Self::Success(rhs)) => {
                if compare_floats(lhs.cost, rhs.cost) == Ordering::Greater {
                    right
                } else {
                    left
                }
            }
            (Self::Failure(lhs), Self::Failure(rhs)) => {
                if lhs.constraint == UNKNOWN_CODE && rhs.constraint != UNKNOWN_CODE {
                    right
                } else {
                    left
                }
            }
        }
    }

    /// Returns insertion result as success.
    pub fn as_success(&self) -> Option<&InsertionData> {
        match self {
            Self::Success(success) => Some(success),
            Self::Failure(_) => None,
        }
    }

    /// Returns insertion result as failure.
    pub fn as_failure(&self) -> Option<&InsertionFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
