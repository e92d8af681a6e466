#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::models::common::{Distance, Duration, Timestamp};
use crate::utils::compare_floats;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Represents a half-open time window `[start, end)`.
#[derive(Clone, Debug)]
pub struct TimeWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns unlimited time window.
    pub fn max() -> Self {
        Self { start: 0., end: f64::MAX }
    }

    /// Checks whether time window has a non-empty intersection with another one.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns intersection of two time windows if it is not empty.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if self.overlaps(other) {
            Some(Self::new(self.start.max(other.start), self.end.min(other.end)))
        } else {
            None
        }
    }

    /// Returns parts of this time window which are left after the `cut` window is removed from it.
    pub fn subtract(&self, cut: &Self) -> Vec<Self> {
        match (cut.start <= self.start, cut.end >= self.end) {
            // cut fully contains the window
            (true, true) => vec![],
            _ if !self.overlaps(cut) => vec![self.clone()],
            // cut overlaps left edge
            (true, false) => vec![Self::new(cut.end, self.end)],
            // cut overlaps right edge
            (false, true) => vec![Self::new(self.start, cut.start)],
            // cut is strictly inside
            (false, false) => vec![Self::new(self.start, cut.start), Self::new(cut.end, self.end)],
        }
    }
}

impl PartialEq<TimeWindow> for TimeWindow {
    fn eq(&self, other: &TimeWindow) -> bool {
        compare_floats(self.start, other.start) == Ordering::Equal
            && compare_floats(self.end, other.end) == Ordering::Equal
    }
}

impl Eq for TimeWindow {}

impl Hash for TimeWindow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let start = self.start.to_bits() as i64;
        let end = self.end.to_bits() as i64;

        start.hash(state);
        end.hash(state);
    }
}

/// Represents a schedule.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    /// Arrival time.
    pub arrival: Timestamp,
    /// Departure time.
    pub departure: Timestamp,
}

impl Schedule {
    pub fn new(arrival: Timestamp, departure: Timestamp) -> Self {
        Self { arrival, departure }
    }
}

impl PartialEq<Schedule> for Schedule {
    fn eq(&self, other: &Schedule) -> bool {
        compare_floats(self.arrival, other.arrival) == Ordering::Equal
            && compare_floats(self.departure, other.departure) == Ordering::Equal
    }
}

impl Eq for Schedule {}

/// A geographical coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

/// Travel information from the previous activity in the route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitInfo {
    pub time_from_previous: Duration,
    pub distance_from_previous: Distance,
    /// Time accumulated since the last activity which is not a break.
    pub time_from_previous_non_break: Duration,
    /// Distance accumulated since the last activity which is not a break.
    pub distance_from_previous_non_break: Distance,
}

/// Represents a location. A location without index cannot be used with matrix backed routing.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub index: Option<usize>,
    pub id: String,
    pub coordinate: Option<Coordinate>,
    pub transit: TransitInfo,
}

impl Location {
    /// Creates a new location backed by the routing matrix index.
    pub fn new(index: usize, id: &str) -> Self {
        Self { index: Some(index), id: id.to_string(), coordinate: None, transit: TransitInfo::default() }
    }

    /// Creates a location which is not known to the routing matrix.
    pub fn unindexed(id: &str) -> Self {
        Self { index: None, id: id.to_string(), coordinate: None, transit: TransitInfo::default() }
    }

    /// Sets location's coordinate.
    pub fn with_coordinate(mut self, x: f64, y: f64) -> Self {
        self.coordinate = Some(Coordinate { x, y });
        self
    }

    /// Creates a copy of the location which shares its identity and coordinate, but has no transit info.
    pub fn anchored(&self) -> Self {
        Self {
            index: self.index,
            id: self.id.clone(),
            coordinate: self.coordinate.clone(),
            transit: TransitInfo::default(),
        }
    }
}
