use crate::ordered::OrderedMap;
use crate::types::{MatchValue, Tag};

/// Neighbors of a single point with their match values, in the order they
/// were first recorded.
pub type Neighbors = OrderedMap<Tag, MatchValue>;

/// Mapping from a point to every point it has been matched against.
///
/// Both the outer keys and each neighbor list iterate in first-insertion
/// order, which keeps ranking and tie-breaking reproducible for a given
/// sequence of match files.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    points: OrderedMap<Tag, Neighbors>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `point -> neighbor` unless a value for that pair
    /// is already present.
    pub fn record(&mut self, point: &Tag, neighbor: &Tag, value: MatchValue) -> bool {
        self.points
            .get_or_insert_with(point.clone(), Neighbors::new)
            .insert_if_absent(neighbor.clone(), value)
    }

    /// Drop every point's entry for itself. Points whose only match was
    /// against themselves stay as keys with no neighbors.
    pub fn remove_self_matches(&mut self) -> usize {
        let mut removed = 0;
        for (point, neighbors) in self.points.iter_mut() {
            if neighbors.remove(point).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Remove a point's whole entry. Other points' neighbor lists are left
    /// untouched.
    pub fn remove(&mut self, point: &Tag) -> Option<Neighbors> {
        self.points.remove(point)
    }

    pub fn neighbors(&self, point: &Tag) -> Option<&Neighbors> {
        self.points.get(point)
    }

    pub fn contains(&self, point: &Tag) -> bool {
        self.points.contains_key(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &Tag> {
        self.points.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &Neighbors)> {
        self.points.iter()
    }

    /// Total number of recorded (point, neighbor) pairs.
    pub fn edge_count(&self) -> usize {
        self.points.iter().map(|(_, n)| n.len()).sum()
    }
}
