#[cfg(test)]
#[path = "../../../tests/unit/models/common/time_windows_test.rs"]
mod time_windows_test;

use crate::construction::heuristics::InsertionContext;
use crate::models::common::TimeWindow;
use crate::utils::{GenericResult, compare_floats};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A predicate which decides whether time window is applicable in given insertion context.
pub type WindowCondition = Arc<dyn Fn(&InsertionContext<'_>) -> bool + Send + Sync>;

/// A time window which can be excluding and which applicability depends on insertion context.
#[derive(Clone)]
pub struct ConditionalTimeWindow {
    /// An actual time interval.
    pub window: TimeWindow,
    /// True if the window specifies time when an operation cannot start.
    pub is_excluding: bool,
    condition: Option<WindowCondition>,
}

impl ConditionalTimeWindow {
    /// Creates an included window which always applies.
    pub fn included(window: TimeWindow) -> Self {
        Self { window, is_excluding: false, condition: None }
    }

    /// Creates an excluding window which always applies.
    pub fn excluded(window: TimeWindow) -> Self {
        Self { window, is_excluding: true, condition: None }
    }

    /// Restricts window to insertion contexts accepted by the condition.
    pub fn with_condition(mut self, condition: WindowCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Checks whether the window applies in given insertion context.
    pub fn is_applicable(&self, ctx: &InsertionContext<'_>) -> bool {
        self.condition.as_ref().is_none_or(|condition| condition(ctx))
    }
}

impl Debug for ConditionalTimeWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionalTimeWindow")
            .field("window", &self.window)
            .field("is_excluding", &self.is_excluding)
            .field("is_conditional", &self.condition.is_some())
            .finish()
    }
}

/// Specifies how a set of time windows is turned into effective windows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindowMode {
    /// Excluded windows are cut out of included ones.
    #[default]
    Exclusion,
    /// Overlapping windows of the same kind are rejected, the earliest applicable window wins.
    Strict,
    /// Overlapping windows are intersected, nothing is rejected.
    Merge,
}

/// Keeps included and excluded time windows of one entity.
#[derive(Clone, Debug, Default)]
pub struct TimeWindows {
    mode: TimeWindowMode,
    included: Vec<ConditionalTimeWindow>,
    excluded: Vec<ConditionalTimeWindow>,
}

impl TimeWindows {
    /// Creates an empty set of time windows which uses given mode.
    pub fn new(mode: TimeWindowMode) -> Self {
        Self { mode, included: vec![], excluded: vec![] }
    }

    /// Creates an exclusion mode set from unconditional included windows.
    pub fn from_windows(windows: Vec<TimeWindow>) -> Self {
        let included = windows.into_iter().map(ConditionalTimeWindow::included).collect();

        Self { mode: TimeWindowMode::Exclusion, included, excluded: vec![] }
    }

    /// Returns the mode used by this set.
    pub fn mode(&self) -> TimeWindowMode {
        self.mode
    }

    /// Registers a window. Its kind is defined by `is_excluding` flag.
    /// In strict mode, fails when the window overlaps with another window of the same kind.
    pub fn add(&mut self, window: ConditionalTimeWindow) -> GenericResult<()> {
        if self.mode == TimeWindowMode::Strict {
            let same_kind = if window.is_excluding { &self.excluded } else { &self.included };
            if let Some(other) = same_kind.iter().find(|other| other.window.overlaps(&window.window)) {
                return Err(format!(
                    "time windows cannot overlap each other: [{}, {}) and [{}, {})",
                    other.window.start, other.window.end, window.window.start, window.window.end
                )
                .into());
            }
        }

        if window.is_excluding {
            self.excluded.push(window);
        } else {
            self.included.push(window);
        }

        Ok(())
    }

    /// Registers an included window.
    pub fn add_included(&mut self, window: TimeWindow) -> GenericResult<()> {
        self.add(ConditionalTimeWindow::included(window))
    }

    /// Registers an excluded window.
    pub fn add_excluded(&mut self, window: TimeWindow) -> GenericResult<()> {
        self.add(ConditionalTimeWindow::excluded(window))
    }

    /// Returns all included windows regardless of their applicability.
    pub fn windows(&self) -> impl Iterator<Item = &TimeWindow> + '_ {
        self.included.iter().map(|tw| &tw.window)
    }

    /// Returns all excluded windows regardless of their applicability.
    pub fn excluded_windows(&self) -> impl Iterator<Item = &TimeWindow> + '_ {
        self.excluded.iter().map(|tw| &tw.window)
    }

    /// Returns time windows when an operation can start in given insertion context.
    /// The result is sorted by start time and windows are pairwise disjoint: overlapping ones are joined.
    /// An empty result means that no start time is possible.
    pub fn effective_windows(&self, ctx: &InsertionContext<'_>) -> Vec<TimeWindow> {
        let windows = match self.mode {
            TimeWindowMode::Exclusion => self.get_exclusion_windows(ctx),
            TimeWindowMode::Strict => self.get_strict_windows(ctx),
            TimeWindowMode::Merge => self.get_merged_windows(ctx),
        };

        join_overlapping(windows)
    }

    fn get_exclusion_windows(&self, ctx: &InsertionContext<'_>) -> Vec<TimeWindow> {
        let included = get_applicable(self.included.iter(), ctx);
        let included = if included.is_empty() { vec![TimeWindow::max()] } else { included };

        let excluded = get_applicable(self.excluded.iter(), ctx);
        if excluded.is_empty() {
            return included;
        }

        excluded.iter().fold(included, |acc, cut| acc.iter().flat_map(|window| window.subtract(cut)).collect())
    }

    fn get_strict_windows(&self, ctx: &InsertionContext<'_>) -> Vec<TimeWindow> {
        self.included
            .iter()
            .filter(|tw| tw.is_applicable(ctx))
            .min_by(|a, b| compare_floats(a.window.start, b.window.start))
            .map(|tw| vec![tw.window.clone()])
            .unwrap_or_else(|| vec![TimeWindow::max()])
    }

    fn get_merged_windows(&self, ctx: &InsertionContext<'_>) -> Vec<TimeWindow> {
        let included = get_applicable(self.included.iter(), ctx);
        let excluded = get_applicable(self.excluded.iter(), ctx);

        let mut all = included.iter().chain(excluded.iter()).cloned().collect::<Vec<_>>();
        all.sort_by(|a, b| compare_floats(a.start, b.start));

        let merged = all
            .iter()
            .enumerate()
            .flat_map(|(idx, window)| all.iter().skip(idx + 1).filter_map(|other| window.intersection(other)))
            .collect::<Vec<_>>();

        match (merged.is_empty(), included.is_empty(), excluded.is_empty()) {
            (false, _, _) => merged,
            (true, false, _) => included,
            (true, true, false) => excluded,
            (true, true, true) => vec![TimeWindow::max()],
        }
    }
}

fn get_applicable<'a>(
    windows: impl Iterator<Item = &'a ConditionalTimeWindow>,
    ctx: &InsertionContext<'_>,
) -> Vec<TimeWindow> {
    windows.filter(|tw| tw.is_applicable(ctx)).map(|tw| tw.window.clone()).collect()
}

fn join_overlapping(mut windows: Vec<TimeWindow>) -> Vec<TimeWindow> {
    windows.sort_by(|a, b| compare_floats(a.start, b.start));

    windows.into_iter().fold(Vec::new(), |mut acc: Vec<TimeWindow>, window| {
        match acc.last_mut() {
            Some(last) if window.start < last.end => last.end = last.end.max(window.end),
            _ => acc.push(window),
        }

        acc
    })
}
