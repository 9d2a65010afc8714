//! Delivery route planning over weighted location graphs
//!
//! Builds an in-memory graph of locations joined by weighted two-way
//! connections, computes single-source shortest paths with Dijkstra's
//! algorithm, and assembles multi-stop delivery tours with a greedy
//! nearest-remaining-stop heuristic.
//!
//! Each tour leg is an optimal shortest path, but the visiting order is
//! chosen greedily, so the overall tour is not guaranteed to be the cheapest
//! possible ordering - this is not a travelling salesman solver.
//!
//! All planning is synchronous and single-threaded; a [`Dispatcher`] owns
//! one graph and one pending stop list per planning context.

pub mod graph;
pub mod graph_algos;
pub mod planner;
pub mod dispatch;
pub mod errors;
mod collections;

pub use graph::Graph;
pub use graph_algos::ShortestPaths;
pub use graph_algos::dijkstra::shortest_paths;
pub use planner::{Route, plan_route};
pub use dispatch::Dispatcher;
pub use errors::RoutePlannerError;
