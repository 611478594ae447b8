//! Greedy redundancy elimination over the test-keyed adjacency map.
//!
//! Each step ranks the remaining points, keeps the one with the most
//! above-threshold neighbors and evicts both it and those neighbors from the
//! map. The loop ends once no remaining point has a neighbor above the
//! threshold. Whatever is still in the map at that point was never close
//! enough to anything to be clustered and passes through untouched.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::adjacency::AdjacencyMap;
use crate::degree::{Degree, DegreeTable};
use crate::types::Tag;

/// How to choose between points that share the maximum G-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The tied point that comes last in the adjacency map's key order.
    /// Same result as inverting the degree table into G-value -> point with
    /// later entries overwriting earlier ones.
    #[default]
    LastInserted,
    /// The lexicographically smallest tag among the tied points.
    SmallestTag,
}

impl TieBreak {
    fn pick<'a>(self, tied: impl Iterator<Item = &'a Degree>) -> Option<&'a Degree> {
        match self {
            TieBreak::LastInserted => tied.last(),
            TieBreak::SmallestTag => tied.min_by(|a, b| a.point.cmp(&b.point)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    Running,
    Terminated,
}

/// Result of a single selection step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Selected {
        survivor: Tag,
        g_value: usize,
        /// Neighbors removed from the map by this step.
        evicted: Vec<Tag>,
        /// Neighbors that had already left the map.
        missing: Vec<Tag>,
    },
    Terminated,
}

/// Final result of a selection run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    /// Selected points, in selection order.
    pub survivors: Vec<Tag>,
    /// Points left in the map at termination, in key order.
    pub remaining: Vec<Tag>,
    /// Points in the map before the first step.
    pub initial_points: usize,
    pub iterations: usize,
    /// Neighbors evicted across all steps.
    pub evicted: usize,
    /// Evictions skipped because the neighbor was already gone.
    pub missing_evictions: usize,
}

pub struct GreedySelector {
    adjacency: AdjacencyMap,
    threshold: f64,
    tie_break: TieBreak,
    state: SelectorState,
    survivors: Vec<Tag>,
    initial_points: usize,
    iterations: usize,
    evicted: usize,
    missing_evictions: usize,
}

impl GreedySelector {
    /// Take ownership of the adjacency map for the duration of the loop.
    pub fn new(adjacency: AdjacencyMap, threshold: f64, tie_break: TieBreak) -> Self {
        let initial_points = adjacency.len();
        Self {
            adjacency,
            threshold,
            tie_break,
            state: SelectorState::Running,
            survivors: Vec::new(),
            initial_points,
            iterations: 0,
            evicted: 0,
            missing_evictions: 0,
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn survivors(&self) -> &[Tag] {
        &self.survivors
    }

    /// Points still in the map.
    pub fn remaining(&self) -> usize {
        self.adjacency.len()
    }

    /// Current G-values of the remaining points.
    pub fn degrees(&self) -> DegreeTable {
        DegreeTable::rank(&self.adjacency, self.threshold)
    }

    /// Perform one iteration of the loop.
    pub fn step(&mut self) -> StepOutcome {
        if self.state == SelectorState::Terminated {
            return StepOutcome::Terminated;
        }

        let table = self.degrees();
        let max = match table.max_degree() {
            Some(max) if max > 0 => max,
            _ => {
                self.state = SelectorState::Terminated;
                return StepOutcome::Terminated;
            }
        };

        let best = match self
            .tie_break
            .pick(table.iter().filter(|d| d.g_value == max))
        {
            Some(best) => best,
            None => {
                self.state = SelectorState::Terminated;
                return StepOutcome::Terminated;
            }
        };
        debug!("maximum G value is {} for {}", max, best.point);
        debug!("G-points include: {:?}", best.neighbors);

        let survivor = best.point.clone();
        self.adjacency.remove(&survivor);
        self.survivors.push(survivor.clone());

        let mut evicted = Vec::new();
        let mut missing = Vec::new();
        for neighbor in &best.neighbors {
            if self.adjacency.remove(neighbor).is_some() {
                evicted.push(neighbor.clone());
            } else {
                warn!("point {} to be removed not found", neighbor);
                missing.push(neighbor.clone());
            }
        }
        debug!("removed {} points", best.neighbors.len());

        self.iterations += 1;
        self.evicted += evicted.len();
        self.missing_evictions += missing.len();

        StepOutcome::Selected {
            survivor,
            g_value: max,
            evicted,
            missing,
        }
    }

    /// Run the loop to termination.
    pub fn run(mut self) -> Selection {
        debug!("initially, all G values are: {:?}", self.degrees().g_values());
        while let StepOutcome::Selected { .. } = self.step() {}
        self.into_selection()
    }

    fn into_selection(self) -> Selection {
        Selection {
            remaining: self.adjacency.points().cloned().collect(),
            survivors: self.survivors,
            initial_points: self.initial_points,
            iterations: self.iterations,
            evicted: self.evicted,
            missing_evictions: self.missing_evictions,
        }
    }
}

/// Convenience wrapper around [`GreedySelector::run`].
pub fn select_survivors(adjacency: AdjacencyMap, threshold: f64, tie_break: TieBreak) -> Selection {
    GreedySelector::new(adjacency, threshold, tie_break).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchValue;

    fn chain() -> AdjacencyMap {
        // A - B - C - D with strong links, E isolated.
        let mut adj = AdjacencyMap::new();
        for (a, b) in [("A", "B"), ("B", "C"), ("C", "D")] {
            adj.record(&Tag::from(a), &Tag::from(b), MatchValue::new(0.99));
            adj.record(&Tag::from(b), &Tag::from(a), MatchValue::new(0.99));
        }
        adj.record(&Tag::from("E"), &Tag::from("A"), MatchValue::new(0.1));
        adj
    }

    #[test]
    fn step_terminates_and_stays_terminated() {
        let mut sel = GreedySelector::new(AdjacencyMap::new(), 0.97, TieBreak::default());
        assert_eq!(sel.step(), StepOutcome::Terminated);
        assert_eq!(sel.state(), SelectorState::Terminated);
        assert_eq!(sel.step(), StepOutcome::Terminated);
    }

    #[test]
    fn chain_is_covered_by_two_survivors() {
        let selection = select_survivors(chain(), 0.97, TieBreak::LastInserted);
        // B and C both have G = 2; C comes later in key order.
        assert_eq!(selection.survivors, vec![Tag::from("C"), Tag::from("A")]);
        assert_eq!(selection.remaining, vec![Tag::from("E")]);
        assert_eq!(selection.iterations, 2);
        assert_eq!(selection.missing_evictions, 1);
    }

    #[test]
    fn smallest_tag_breaks_ties_lexicographically() {
        let selection = select_survivors(chain(), 0.97, TieBreak::SmallestTag);
        assert_eq!(selection.survivors, vec![Tag::from("B"), Tag::from("D")]);
        assert_eq!(selection.remaining, vec![Tag::from("E")]);
    }
}
