use crate::graph::Graph;
use super::{GraphNodeMap, ShortestPaths};
use super::frontier::Frontier;

use std::{hash::Hash, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};




/// Single-source shortest paths using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Runs to completion over every reachable node - no early exit - so the
/// result can answer distance and path queries for many destinations.
/// Relaxation uses strict less-than: the first minimal-cost predecessor
/// found for a node is kept.
/// An unregistered origin yields an empty result where every node is
/// unreachable, rather than an error.
pub fn shortest_paths<N, C>(graph: &Graph<N, C>, origin: &N) -> ShortestPaths<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
    {

    // visited nodes - best known cost and the parent it was reached from
    // The tuple contains (parent_index, cost) where parent_index is the index
    // of the parent node in the map
    // for the origin, parent_index is set to usize::MAX to indicate it has no parent
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    // Nothing is reachable from an unknown origin, not even the origin itself
    if !graph.contains(origin) {
        return ShortestPaths::new(nodes_map);
    }

    // Frontier of nodes to expand, cheapest first
    let mut frontier: Frontier<C> = Frontier::new();

    // Add origin node to the map and frontier
    let origin_index = nodes_map.insert_full(origin.clone(), (usize::MAX, Zero::zero())).0;
    frontier.push(origin_index, Zero::zero());

    // Expand the cheapest frontier entry until the frontier drains
    while let Some((index, cost)) = frontier.pop_min() {

        // fetch current best cost for node
        let (node, &(_, best)) = nodes_map.get_index(index).unwrap();

        // If the popped cost is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if cost > best {
            continue;
        }

        let node = node.clone();

        // loop over neighbors
        for (neighbor, weight) in graph.neighbors(&node) {

            // new cost to reach this node = edge weight + node cost
            let new_cost = best + weight;

            // Check if we've found a better path to this neighbor
            let neighbor_index;

            match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    neighbor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
                        // We've found a strictly better path to this neighbor
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        // The existing path is at least as good, do nothing
                        continue;
                    }
                }
            }

            // Only add to the frontier if we've found a better path
            frontier.push(neighbor_index, new_cost);
        }
    }

    ShortestPaths::new(nodes_map)
}
