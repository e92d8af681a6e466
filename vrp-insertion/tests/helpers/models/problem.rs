use crate::models::common::*;
use crate::models::problem::*;
use std::sync::Arc;

pub const DEFAULT_BREAK_ID: &str = "break";

/// Routing where travel time and distance are equal to the difference between location indices.
#[derive(Default)]
pub struct TestTransportCost {}

impl TestTransportCost {
    pub fn new_shared() -> Arc<dyn TransportCost + Sync + Send> {
        Arc::new(Self::default())
    }
}

impl TransportCost for TestTransportCost {
    fn duration(&self, _: Option<&Vehicle>, from: &Location, to: &Location, _: Timestamp) -> Duration {
        fake_routing(from, to)
    }

    fn distance(&self, _: Option<&Vehicle>, from: &Location, to: &Location, _: Timestamp) -> Distance {
        fake_routing(from, to)
    }
}

pub fn fake_routing(from: &Location, to: &Location) -> f64 {
    let from = from.index.expect("test location has no index");
    let to = to.index.expect("test location has no index");

    from.abs_diff(to) as f64
}

pub fn test_activity_cost() -> Arc<dyn ActivityCost + Sync + Send> {
    Arc::new(SimpleActivityCost::default())
}

pub fn test_location(index: usize) -> Location {
    Location::new(index, format!("l{index}").as_str())
}

pub fn test_driver() -> Arc<Driver> {
    Arc::new(Driver::empty())
}

pub fn test_vehicle(id: &str) -> Arc<Vehicle> {
    Arc::new(VehicleBuilder::new(id, test_location(0)).add_break(DEFAULT_BREAK_ID).build())
}

pub fn test_break(start: Timestamp, end: Timestamp, duration: Duration) -> Job {
    Job::Break(Arc::new(Break { id: DEFAULT_BREAK_ID.to_string(), time: TimeWindow::new(start, end), duration }))
}

pub fn test_service(id: &str, index: usize, times: TimeWindows, duration: Duration) -> Arc<Service> {
    Arc::new(Service { id: id.to_string(), location: test_location(index), duration, times })
}
