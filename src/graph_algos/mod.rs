
pub mod dijkstra;
mod frontier;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

use std::hash::Hash;

/// Node map produced by a single-source shortest path run
/// N: Node - a location on the graph
/// C: Cost of reaching the node from the origin
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the origin
/// Nodes absent from the map were never reached (infinite distance)
type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Distances and predecessors from one origin, as computed by
/// [`dijkstra::shortest_paths`]
/// Owned by the caller and never mutated after being returned
#[derive(Debug, Clone)]
pub struct ShortestPaths<N, C> {
    nodes: GraphNodeMap<N, C>,
}

impl<N, C> ShortestPaths<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy,
{
    pub(crate) fn new(nodes: GraphNodeMap<N, C>) -> Self {
        ShortestPaths { nodes }
    }

    /// Cost of the best path from the origin, None if unreachable
    pub fn distance(&self, node: &N) -> Option<C> {
        self.nodes.get(node).map(|&(_, cost)| cost)
    }

    /// Ordered path from the origin to the destination, None if unreachable
    /// A destination equal to the origin yields the single-element path
    pub fn path_to(&self, destination: &N) -> Option<Vec<N>> {
        let index = self.nodes.get_index_of(destination)?;
        shortest_path(&self.nodes, index)
    }
}
