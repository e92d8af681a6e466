use crate::models::common::{Location, TimeWindow};
use crate::models::problem::Job;
use crate::models::solution::Activity;

/// Creates route activities for a job.
pub trait JobActivityFactory {
    /// Returns activities which represent given job on a route.
    fn create_activities(&self, job: &Job) -> Vec<Activity>;
}

/// Creates one activity per job.
#[derive(Default)]
pub struct DefaultJobActivityFactory {}

impl JobActivityFactory for DefaultJobActivityFactory {
    fn create_activities(&self, job: &Job) -> Vec<Activity> {
        match job {
            // NOTE break location is defined by the place where it is inserted
            Job::Break(job) => vec![Activity::new_break(job.clone(), Location::unindexed(job.id.as_str()))],
            Job::Service(service) => {
                let time = service.times.windows().next().cloned().unwrap_or_else(TimeWindow::max);
                vec![Activity::new_service(service.clone(), time)]
            }
        }
    }
}
