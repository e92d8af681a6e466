use crate::models::common::{Duration, Location, Schedule, TimeWindow, Timestamp};
use crate::models::problem::{Break, Service, Vehicle};
use std::sync::Arc;

/// Specifies what kind of work an activity represents.
#[derive(Clone, Debug)]
pub enum ActivityKind {
    /// Vehicle departure from its start location.
    Start,
    /// Vehicle arrival to its end location.
    End,
    /// A driver break.
    Break(Arc<Break>),
    /// A service job.
    Service(Arc<Service>),
}

/// Specifies activity on vehicle's route.
#[derive(Clone, Debug)]
pub struct Activity {
    pub kind: ActivityKind,
    /// Activity location.
    pub location: Location,
    /// Earliest and latest operation start.
    pub time: TimeWindow,
    /// Operation duration.
    pub duration: Duration,
    /// Actual arrival and departure.
    pub schedule: Schedule,
}

impl Activity {
    /// Creates a start activity of given vehicle.
    pub fn new_start(vehicle: &Vehicle, departure: Timestamp) -> Self {
        Self {
            kind: ActivityKind::Start,
            location: vehicle.start.clone(),
            time: TimeWindow::new(vehicle.earliest_departure(), vehicle.latest_arrival()),
            duration: 0.,
            schedule: Schedule::new(departure, departure),
        }
    }

    /// Creates an end activity of given vehicle. For open routes, the end is the last activity's location.
    pub fn new_end(vehicle: &Vehicle, last: Option<&Activity>) -> Self {
        let location = match (vehicle.return_to_depot, last) {
            (false, Some(last)) => last.location.anchored(),
            (false, None) => vehicle.start.clone(),
            (true, _) => vehicle.end.clone(),
        };

        Self {
            kind: ActivityKind::End,
            location,
            time: TimeWindow::new(vehicle.earliest_departure(), vehicle.latest_arrival()),
            duration: 0.,
            schedule: Schedule::default(),
        }
    }

    /// Creates a service activity which has to start within given time window.
    pub fn new_service(service: Arc<Service>, time: TimeWindow) -> Self {
        Self {
            location: service.location.clone(),
            duration: service.duration,
            time,
            schedule: Schedule::default(),
            kind: ActivityKind::Service(service),
        }
    }

    /// Creates a break activity at given location.
    pub fn new_break(job: Arc<Break>, location: Location) -> Self {
        Self {
            location,
            duration: job.duration,
            time: job.time.clone(),
            schedule: Schedule::default(),
            kind: ActivityKind::Break(job),
        }
    }

    /// Returns earliest operation start.
    pub fn earliest(&self) -> Timestamp {
        self.time.start
    }

    /// Returns latest operation start.
    pub fn latest(&self) -> Timestamp {
        self.time.end
    }

    pub fn is_break(&self) -> bool {
        matches!(self.kind, ActivityKind::Break(_))
    }
}
