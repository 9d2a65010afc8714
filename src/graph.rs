use crate::collections::FxIndexMap;

use std::hash::Hash;


/// Weighted undirected graph of locations
/// Connections are stored as two directed entries with identical weight,
/// so every query sees a symmetric edge set.
/// Weights are assumed positive by the routing algorithms; validating that
/// is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Graph<N, C> {
    adj: FxIndexMap<N, FxIndexMap<N, C>>,
}

impl<N, C> Default for Graph<N, C> {
    fn default() -> Self {
        Graph { adj: FxIndexMap::default() }
    }
}

impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy,
{
    pub fn new() -> Self {
        Graph { adj: FxIndexMap::default() }
    }

    /// Register a location, no-op if it already exists
    pub fn add_location(&mut self, name: N) {
        self.adj.entry(name).or_default();
    }

    /// Connect two registered locations with a weight
    /// Returns false if either endpoint is unregistered
    /// Re-adding a connection overwrites the weight on both directions
    pub fn add_connection(&mut self, a: N, b: N, weight: C) -> bool {
        if !self.adj.contains_key(&a) || !self.adj.contains_key(&b) {
            return false;
        }
        self.adj[&a].insert(b.clone(), weight);
        self.adj[&b].insert(a, weight);
        true
    }

    /// Neighbors of a location with their edge weights
    /// Empty for an unregistered location
    pub fn neighbors(&self, location: &N) -> impl Iterator<Item = (N, C)> + '_ {
        self.adj
            .get(location)
            .into_iter()
            .flatten()
            .map(|(neighbor, weight)| (neighbor.clone(), *weight))
    }

    /// True if a is registered and has a direct connection to b
    pub fn has_connection(&self, a: &N, b: &N) -> bool {
        self.adj.get(a).is_some_and(|edges| edges.contains_key(b))
    }

    /// Weight of the direct connection a-b, if one exists
    pub fn connection_weight(&self, a: &N, b: &N) -> Option<C> {
        self.adj.get(a).and_then(|edges| edges.get(b)).copied()
    }

    /// True if the location is registered
    pub fn contains(&self, location: &N) -> bool {
        self.adj.contains_key(location)
    }

    /// Registered locations in insertion order
    /// The order is stable for display purposes but not part of the contract
    pub fn locations(&self) -> impl Iterator<Item = &N> {
        self.adj.keys()
    }

    /// Number of registered locations
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Forget all locations and connections
    pub fn clear(&mut self) {
        self.adj.clear();
    }
}
