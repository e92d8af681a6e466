//! Configuration of insertion evaluation which can be read from json.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::construction::heuristics::DEFAULT_BREAK_OFFSET_THRESHOLD;
use crate::models::common::{Duration, TimeWindowMode, TimeWindows};
use crate::models::problem::{CategoryMatrixTransportCost, CategoryPolicy, Vehicle};
use crate::utils::{Environment, GenericResult};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An insertion evaluation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertionConfig {
    /// Specifies how time windows of jobs are combined.
    #[serde(default)]
    pub time_window_mode: TimeWindowMode,
    /// Specifies how vehicles with category unknown to routing matrix are treated.
    #[serde(default)]
    pub category_policy: CategoryPolicy,
    /// A minimal break offset from previous activity which makes break to interpolate traveled distance.
    #[serde(default = "default_break_offset_threshold")]
    pub break_offset_threshold: Duration,
}

impl InsertionConfig {
    /// Creates an empty set of time windows using configured mode.
    pub fn create_time_windows(&self) -> TimeWindows {
        TimeWindows::new(self.time_window_mode)
    }

    /// Checks vehicle categories against the routing matrix using configured category policy.
    pub fn validate_fleet(
        &self,
        matrix: &CategoryMatrixTransportCost,
        vehicles: &[Arc<Vehicle>],
        environment: &Environment,
    ) -> GenericResult<()> {
        matrix.validate_fleet(vehicles, self.category_policy, &environment.logger)
    }
}

impl Default for InsertionConfig {
    fn default() -> Self {
        Self {
            time_window_mode: TimeWindowMode::default(),
            category_policy: CategoryPolicy::default(),
            break_offset_threshold: DEFAULT_BREAK_OFFSET_THRESHOLD,
        }
    }
}

fn default_break_offset_threshold() -> Duration {
    DEFAULT_BREAK_OFFSET_THRESHOLD
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<InsertionConfig> {
    Ok(serde_json::from_reader(reader)?)
}
