//! G-value ranking: how many neighbors of each point lie above the
//! minimal-match threshold.

use crate::adjacency::AdjacencyMap;
use crate::types::Tag;

/// Degree of a single point.
#[derive(Debug, Clone, PartialEq)]
pub struct Degree {
    pub point: Tag,
    /// Number of neighbors whose match strictly exceeds the threshold.
    pub g_value: usize,
    /// Those neighbors, in the order they were recorded.
    pub neighbors: Vec<Tag>,
}

/// Degrees for every point of an adjacency map, in the map's key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DegreeTable {
    entries: Vec<Degree>,
}

impl DegreeTable {
    /// Rank every point of `adjacency` against `threshold`.
    pub fn rank(adjacency: &AdjacencyMap, threshold: f64) -> Self {
        let entries = adjacency
            .iter()
            .map(|(point, neighbors)| {
                let above: Vec<Tag> = neighbors
                    .iter()
                    .filter(|(_, value)| value.exceeds(threshold))
                    .map(|(tag, _)| tag.clone())
                    .collect();
                Degree {
                    point: point.clone(),
                    g_value: above.len(),
                    neighbors: above,
                }
            })
            .collect();
        DegreeTable { entries }
    }

    /// Largest G-value over all points, `None` when there are no points.
    pub fn max_degree(&self) -> Option<usize> {
        self.entries.iter().map(|d| d.g_value).max()
    }

    pub fn get(&self, point: &Tag) -> Option<&Degree> {
        self.entries.iter().find(|d| &d.point == point)
    }

    pub fn g_value(&self, point: &Tag) -> Option<usize> {
        self.get(point).map(|d| d.g_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Degree> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// G-values in key order.
    pub fn g_values(&self) -> Vec<usize> {
        self.entries.iter().map(|d| d.g_value).collect()
    }

    /// Count of points per G-value, ascending by G-value.
    pub fn histogram(&self) -> Vec<(usize, usize)> {
        let mut counts = std::collections::BTreeMap::new();
        for d in &self.entries {
            *counts.entry(d.g_value).or_insert(0usize) += 1;
        }
        counts.into_iter().collect()
    }
}
