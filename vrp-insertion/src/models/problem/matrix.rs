#[cfg(test)]
#[path = "../../../tests/unit/models/problem/matrix_test.rs"]
mod matrix_test;

use crate::models::common::{Distance, Duration, Location, Timestamp};
use crate::models::problem::{TransportCost, Vehicle};
use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const DISTANCE_CHANNEL: usize = 0;
const TIME_CHANNEL: usize = 1;

/// Specifies how vehicle categories unknown to the matrix are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryPolicy {
    /// Unknown category silently falls back to the first one.
    #[default]
    Lenient,
    /// Unknown category is a configuration error.
    Strict,
}

/// Keeps dense matrix storage layout: `[from][to][channel]` where `channel = 2 * category + kind`.
/// Symmetric storage keeps only the upper triangle including the diagonal.
#[derive(Clone, Debug)]
struct MatrixLayout {
    size: usize,
    is_symmetric: bool,
    category_count: usize,
}

impl MatrixLayout {
    fn channels(&self) -> usize {
        self.category_count * 2
    }

    fn cells(&self) -> usize {
        let pairs = if self.is_symmetric { self.size * (self.size + 1) / 2 } else { self.size * self.size };
        pairs * self.channels()
    }

    fn offset(&self, from: usize, to: usize, category: usize, kind: usize) -> usize {
        let pair = if self.is_symmetric {
            let (row, column) = if from <= to { (from, to) } else { (to, from) };
            row * (2 * self.size - row + 1) / 2 + (column - row)
        } else {
            from * self.size + to
        };

        pair * self.channels() + 2 * category + kind
    }
}

/// Builds [`CategoryMatrixTransportCost`] from distance and time values.
pub struct CategoryMatrixBuilder {
    layout: MatrixLayout,
    values: Vec<f64>,
}

impl CategoryMatrixBuilder {
    /// Creates a new builder for `size` locations and `category_count` vehicle categories.
    pub fn new(size: usize, is_symmetric: bool, category_count: usize) -> GenericResult<Self> {
        if category_count == 0 {
            return Err("matrix requires at least one vehicle category".into());
        }

        let layout = MatrixLayout { size, is_symmetric, category_count };
        let values = vec![0.; layout.cells()];

        Ok(Self { layout, values })
    }

    /// Sets distance between two locations for given category.
    pub fn add_transport_distance(
        &mut self,
        from: usize,
        to: usize,
        distance: Distance,
        category: usize,
    ) -> GenericResult<&mut Self> {
        self.set(from, to, category, DISTANCE_CHANNEL, distance)
    }

    /// Sets travel time between two locations for given category.
    pub fn add_transport_time(
        &mut self,
        from: usize,
        to: usize,
        time: Duration,
        category: usize,
    ) -> GenericResult<&mut Self> {
        self.set(from, to, category, TIME_CHANNEL, time)
    }

    /// Sets both travel time and distance between two locations for given category.
    pub fn add_transport_time_and_distance(
        &mut self,
        from: usize,
        to: usize,
        time: Duration,
        distance: Distance,
        category: usize,
    ) -> GenericResult<&mut Self> {
        self.add_transport_time(from, to, time, category)?;
        self.add_transport_distance(from, to, distance, category)
    }

    /// Builds a read-only matrix.
    pub fn build(self, environment: &Environment) -> CategoryMatrixTransportCost {
        let MatrixLayout { size, is_symmetric, category_count } = self.layout;
        (environment.logger)(&format!(
            "routing matrix: {size} locations, {category_count} categories, symmetric: {is_symmetric}"
        ));

        CategoryMatrixTransportCost { layout: self.layout, values: self.values }
    }

    fn set(&mut self, from: usize, to: usize, category: usize, kind: usize, value: f64) -> GenericResult<&mut Self> {
        let MatrixLayout { size, category_count, .. } = self.layout;

        if from >= size || to >= size {
            return Err(format!("location index out of matrix range: from={from}, to={to}, size={size}").into());
        }

        if category >= category_count {
            return Err(format!("unknown vehicle category: {category}, categories: {category_count}").into());
        }

        if !value.is_finite() || value < 0. {
            return Err(format!("invalid matrix value {value} for from={from}, to={to}").into());
        }

        let offset = self.layout.offset(from, to, category, kind);
        self.values[offset] = value;

        Ok(self)
    }
}

/// A dense routing matrix with separate distance and time channels per vehicle category.
pub struct CategoryMatrixTransportCost {
    layout: MatrixLayout,
    values: Vec<f64>,
}

impl CategoryMatrixTransportCost {
    /// Returns amount of locations.
    pub fn size(&self) -> usize {
        self.layout.size
    }

    /// Returns true if matrix stores only one direction per location pair.
    pub fn is_symmetric(&self) -> bool {
        self.layout.is_symmetric
    }

    /// Returns amount of vehicle categories.
    pub fn category_count(&self) -> usize {
        self.layout.category_count
    }

    /// Returns category which is used for given vehicle lookups.
    pub fn resolve_category(&self, vehicle: Option<&Vehicle>) -> usize {
        vehicle
            .and_then(|vehicle| vehicle.category)
            .filter(|&category| category < self.layout.category_count)
            .unwrap_or(0)
    }

    /// Checks vehicles categories against the matrix.
    pub fn validate_fleet(
        &self,
        vehicles: &[Arc<Vehicle>],
        policy: CategoryPolicy,
        logger: &InfoLogger,
    ) -> GenericResult<()> {
        let unknown = vehicles
            .iter()
            .filter(|vehicle| vehicle.category.is_some_and(|category| category >= self.layout.category_count))
            .map(|vehicle| GenericError::from(format!("'{}'", vehicle.id)))
            .collect::<Vec<_>>();

        if unknown.is_empty() {
            return Ok(());
        }

        let ids = GenericError::join_many(unknown.as_slice(), ", ");
        match policy {
            CategoryPolicy::Lenient => {
                logger(&format!("vehicles with unknown category use category 0: {ids}"));
                Ok(())
            }
            CategoryPolicy::Strict => Err(format!("vehicles have category unknown to routing matrix: {ids}").into()),
        }
    }

    fn get_value(&self, vehicle: Option<&Vehicle>, from: &Location, to: &Location, kind: usize) -> f64 {
        let from = self.get_index(from);
        let to = self.get_index(to);
        let category = self.resolve_category(vehicle);

        self.values[self.layout.offset(from, to, category, kind)]
    }

    fn get_index(&self, location: &Location) -> usize {
        match location.index {
            Some(index) if index < self.layout.size => index,
            Some(index) => panic!("location '{}' has index {index} outside of routing matrix", location.id),
            None => panic!("location '{}' has no routing matrix index", location.id),
        }
    }
}

impl TransportCost for CategoryMatrixTransportCost {
    fn duration(&self, vehicle: Option<&Vehicle>, from: &Location, to: &Location, _: Timestamp) -> Duration {
        self.get_value(vehicle, from, to, TIME_CHANNEL)
    }

    fn distance(&self, vehicle: Option<&Vehicle>, from: &Location, to: &Location, _: Timestamp) -> Distance {
        self.get_value(vehicle, from, to, DISTANCE_CHANNEL)
    }
}
