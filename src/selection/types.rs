//! Solve results reported to the host.

use crate::search::{SearchOutcome, SearchState, SearchStats, StopReason};

/// Terminal status of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    /// The tree was exhausted and the activation is the last accepted
    /// assignment.
    Solved,
    /// No assignment satisfies every constraint. The activation is all
    /// `false`.
    NoSolutionFound,
    /// A budget ran out or cancellation was requested. The activation is
    /// the incumbent at that point, or all `false` if there was none.
    Cancelled,
}

/// The activation vector and how it was obtained.
///
/// `activation[p]` belongs to strategy `ids[p]`; positions follow
/// ascending strategy id.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub activation: Vec<bool>,
    pub ids: Vec<u32>,
    pub status: SolveStatus,
    /// Objective chain values of `activation` when it is an accepted
    /// assignment.
    pub objective_values: Option<Vec<i64>>,
    pub stop_reason: Option<StopReason>,
    pub stats: SearchStats,
}

impl Selection {
    pub(crate) fn from_outcome(ids: Vec<u32>, outcome: SearchOutcome) -> Self {
        let status = match (outcome.state, &outcome.best) {
            (SearchState::Cancelled, _) => SolveStatus::Cancelled,
            (_, Some(_)) => SolveStatus::Solved,
            (_, None) => SolveStatus::NoSolutionFound,
        };
        let (activation, objective_values) = match outcome.best {
            Some(best) => (best.assignment, Some(best.objective_values)),
            None => (vec![false; ids.len()], None),
        };
        Self {
            activation,
            ids,
            status,
            objective_values,
            stop_reason: outcome.stop_reason,
            stats: outcome.stats,
        }
    }

    /// Whether `activation` is an accepted feasible assignment (possibly
    /// from a cancelled run).
    pub fn is_solution_found(&self) -> bool {
        self.objective_values.is_some()
    }

    /// Ids of the activated strategies, ascending.
    pub fn active_ids(&self) -> Vec<u32> {
        self.ids
            .iter()
            .zip(&self.activation)
            .filter_map(|(&id, &on)| on.then_some(id))
            .collect()
    }

    /// Whether strategy `id` is activated. Unknown ids are not.
    pub fn is_active(&self, id: u32) -> bool {
        self.ids
            .binary_search(&id)
            .map(|p| self.activation[p])
            .unwrap_or(false)
    }

    /// Number of decision positions.
    pub fn len(&self) -> usize {
        self.activation.len()
    }

    /// Whether no strategy was registered.
    pub fn is_empty(&self) -> bool {
        self.activation.is_empty()
    }
}
