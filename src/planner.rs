use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::RoutePlannerError;
use crate::graph::Graph;
use crate::graph_algos::ShortestPaths;
use crate::graph_algos::dijkstra::shortest_paths;

use std::{
    hash::Hash,
    fmt::{Debug, Display},
};
use num_traits::Zero;


/// A planned multi-stop route
/// cost is the sum of the direct connection weights between each pair of
/// consecutive tour elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<N, C> {
    pub tour: Vec<N>,
    pub cost: C,
}

/// Build one tour from the origin through every requested stop
///
/// Greedy nearest-remaining-stop heuristic: each leg follows an optimal
/// shortest path, but stops are visited nearest-first from wherever the tour
/// currently is, so the overall tour is not guaranteed to be the cheapest
/// ordering. This is deliberate - it is not a travelling salesman solver.
///
/// Duplicate stops and repeats of the origin are collapsed; an empty stop
/// list yields an empty tour with zero cost. Ties for the nearest stop go to
/// the earliest requested one, so planning is deterministic.
///
/// Fails with [`RoutePlannerError::UnreachableStop`] if at some point no
/// remaining stop can be reached; no partial tour is returned.
pub fn plan_route<N, C>(graph: &Graph<N, C>, origin: &N, stops: &[N]) -> Result<Route<N, C>, RoutePlannerError>
where
    N: Eq + Hash + Clone + Debug + Display,
    C: Zero + Ord + Copy + Debug,
    {

    // Deduplicated stops in request order, origin excluded
    let mut remaining: FxIndexSet<N> = stops.iter().filter(|s| *s != origin).cloned().collect();

    // One shortest path run per node a leg can depart from, cached for the
    // greedy loop below
    let mut paths_from: FxIndexMap<N, ShortestPaths<N, C>> = FxIndexMap::default();
    paths_from.insert(origin.clone(), shortest_paths(graph, origin));
    for stop in &remaining {
        paths_from.insert(stop.clone(), shortest_paths(graph, stop));
    }

    let mut tour: Vec<N> = Vec::new();
    let mut current = origin.clone();

    while !remaining.is_empty() {
        let paths = &paths_from[&current];

        // Nearest remaining stop; ties go to the earliest requested
        let mut nearest: Option<(N, C)> = None;
        for stop in &remaining {
            if let Some(distance) = paths.distance(stop) {
                if nearest.as_ref().is_none_or(|&(_, best)| distance < best) {
                    nearest = Some((stop.clone(), distance));
                }
            }
        }

        // No remaining stop has a finite distance - abort the whole plan
        let Some((next, _)) = nearest else {
            return Err(RoutePlannerError::UnreachableStop(current.to_string()));
        };

        let Some(segment) = paths.path_to(&next) else {
            // A finite distance with no path means the graph changed under
            // us or the engine is inconsistent
            log::error!("no path from {current} to {next} despite a finite distance");
            return Err(RoutePlannerError::NoPathBetween(current.to_string(), next.to_string()));
        };

        // Join the segment onto the tour, suppressing the junction node
        // shared with the previous leg
        for node in segment {
            if tour.last() != Some(&node) {
                tour.push(node);
            }
        }

        remaining.shift_remove(&next);
        current = next;
    }

    let cost = tour_cost(graph, &tour)?;

    Ok(Route { tour, cost })
}


/// Sum the direct connection weights between consecutive tour elements
/// Every consecutive pair is a direct connection because the tour is built
/// from reconstructed shortest path segments
fn tour_cost<N, C>(graph: &Graph<N, C>, tour: &[N]) -> Result<C, RoutePlannerError>
where
    N: Eq + Hash + Clone + Display,
    C: Zero + Copy,
    {

    let mut cost = C::zero();

    for pair in tour.windows(2) {
        match graph.connection_weight(&pair[0], &pair[1]) {
            Some(weight) => cost = cost + weight,
            None => {
                log::error!("tour contains non-adjacent hop {} -> {}", pair[0], pair[1]);
                return Err(RoutePlannerError::NoPathBetween(
                    pair[0].to_string(),
                    pair[1].to_string(),
                ));
            }
        }
    }

    Ok(cost)
}
