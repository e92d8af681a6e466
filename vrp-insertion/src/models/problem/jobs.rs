use crate::models::common::{Duration, Location, TimeWindow, TimeWindows};
use std::sync::Arc;

/// A mandatory driver break. It has no location: it happens wherever the vehicle is at the time.
#[derive(Debug)]
pub struct Break {
    pub id: String,
    /// A time window when break can start.
    pub time: TimeWindow,
    pub duration: Duration,
}

/// A regular job which has to be served at specific location.
#[derive(Debug)]
pub struct Service {
    pub id: String,
    pub location: Location,
    pub duration: Duration,
    pub times: TimeWindows,
}

/// Represents a job variant.
#[derive(Clone, Debug)]
pub enum Job {
    /// A vehicle scoped break.
    Break(Arc<Break>),
    /// A job served at some location.
    Service(Arc<Service>),
}

impl Job {
    /// Returns job's id.
    pub fn id(&self) -> &str {
        match self {
            Job::Break(job) => job.id.as_str(),
            Job::Service(job) => job.id.as_str(),
        }
    }

    /// Returns break if the job is a break.
    pub fn as_break(&self) -> Option<&Arc<Break>> {
        match self {
            Job::Break(job) => Some(job),
            Job::Service(_) => None,
        }
    }
}
