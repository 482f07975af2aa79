//! The objective chain and the dominance rules that filter solutions.

use std::cmp::Ordering;

/// Optimization direction of a chain entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Minimize,
    Maximize,
}

impl Direction {
    /// Compares `candidate` against `reference` by quality:
    /// `Greater` means the candidate is better in this direction.
    pub fn compare(self, candidate: i64, reference: i64) -> Ordering {
        match self {
            Direction::Minimize => reference.cmp(&candidate),
            Direction::Maximize => candidate.cmp(&reference),
        }
    }
}

/// What a chain entry measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectiveKind {
    /// Scaled consumption of resource `j`.
    ResourceUsage(usize),
    /// Scaled utility summed over every class.
    TotalUtility,
    /// Number of active strategies with positive utility for class `k`.
    ClassActivations(usize),
}

/// One linear objective over the decision vector.
#[derive(Debug, Clone)]
pub struct ObjectiveTerm {
    pub kind: ObjectiveKind,
    pub direction: Direction,
    /// One coefficient per decision variable.
    pub coefficients: Vec<i64>,
}

impl ObjectiveTerm {
    /// Value of the term for a full assignment.
    pub fn value(&self, assignment: &[bool]) -> i64 {
        self.coefficients
            .iter()
            .zip(assignment)
            .filter_map(|(&c, &on)| on.then_some(c))
            .sum()
    }
}

/// How a candidate's objective vector must compare to the incumbent's to
/// replace it.
///
/// Every rule is monotone: if a candidate is accepted, any vector that is
/// at least as good on every term is accepted too. The search relies on
/// this to discard subtrees whose optimistic bound is not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DominanceRule {
    /// No term worse, at least one term strictly better.
    #[default]
    Pareto,
    /// Every term strictly better. Stacking one improvement bound per term
    /// behaves this way.
    Strict,
    /// Strictly better in chain order, earlier terms first.
    Lexicographic,
}

/// Ordered objectives: resource usage per resource (minimize), total
/// utility (maximize), then activation count per class (maximize).
#[derive(Debug, Clone, Default)]
pub struct ObjectiveChain {
    terms: Vec<ObjectiveTerm>,
}

impl ObjectiveChain {
    /// Creates a chain from terms in priority order.
    pub fn new(terms: Vec<ObjectiveTerm>) -> Self {
        Self { terms }
    }

    /// Terms in priority order.
    pub fn terms(&self) -> &[ObjectiveTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the chain has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Objective vector of a full assignment, in chain order.
    pub fn evaluate(&self, assignment: &[bool]) -> Vec<i64> {
        self.terms.iter().map(|t| t.value(assignment)).collect()
    }

    /// Whether `candidate` improves on `incumbent` under `rule`.
    ///
    /// An empty chain never improves: the first accepted solution stands.
    pub fn improves(&self, rule: DominanceRule, candidate: &[i64], incumbent: &[i64]) -> bool {
        if self.terms.is_empty() {
            return false;
        }
        let mut cmp = self
            .terms
            .iter()
            .zip(candidate.iter().zip(incumbent))
            .map(|(t, (&c, &i))| t.direction.compare(c, i));

        match rule {
            DominanceRule::Pareto => {
                let mut better_in_some = false;
                for ord in cmp {
                    match ord {
                        Ordering::Less => return false,
                        Ordering::Greater => better_in_some = true,
                        Ordering::Equal => {}
                    }
                }
                better_in_some
            }
            DominanceRule::Strict => cmp.all(|ord| ord == Ordering::Greater),
            DominanceRule::Lexicographic => {
                cmp.find(|&ord| ord != Ordering::Equal) == Some(Ordering::Greater)
            }
        }
    }
}
