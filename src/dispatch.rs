use crate::errors::RoutePlannerError;
use crate::graph::Graph;
use crate::planner::{Route, plan_route};

use std::{
    hash::Hash,
    fmt::{Debug, Display},
};
use num_traits::Zero;


/// Owns the location graph and the list of pending delivery stops
/// One dispatcher per planning context - there is no process-wide state.
/// Mutating the graph while a plan is being computed is not supported;
/// the dispatcher borrows itself for the duration of a plan call, which
/// the borrow checker enforces for single-threaded use.
#[derive(Debug, Clone)]
pub struct Dispatcher<N, C> {
    graph: Graph<N, C>,
    stops: Vec<N>,
}

impl<N, C> Dispatcher<N, C>
where
    N: Eq + Hash + Clone + Debug + Display,
    C: Zero + Ord + Copy + Debug,
{
    pub fn new() -> Self {
        Dispatcher { graph: Graph::new(), stops: Vec::new() }
    }

    pub fn graph(&self) -> &Graph<N, C> {
        &self.graph
    }

    /// Register a location, no-op if it already exists
    pub fn add_location(&mut self, name: N) {
        self.graph.add_location(name);
    }

    /// Connect two registered locations, false if either is unregistered
    pub fn add_connection(&mut self, a: N, b: N, weight: C) -> bool {
        self.graph.add_connection(a, b, weight)
    }

    /// Queue a delivery stop, false if the location is unregistered
    /// Repeat requests for the same location are kept in the list but
    /// collapse to a single visit when planning
    pub fn add_stop(&mut self, stop: N) -> bool {
        if !self.graph.contains(&stop) {
            return false;
        }
        self.stops.push(stop);
        true
    }

    /// Drop the first pending request for this stop, false if none is queued
    pub fn remove_stop(&mut self, stop: &N) -> bool {
        match self.stops.iter().position(|s| s == stop) {
            Some(index) => {
                self.stops.remove(index);
                true
            }
            None => false,
        }
    }

    /// Pending stops in request order
    pub fn stops(&self) -> &[N] {
        &self.stops
    }

    /// Forget the graph and all pending stops
    pub fn clear(&mut self) {
        self.graph.clear();
        self.stops.clear();
    }

    /// Plan one tour from the origin through every pending stop
    /// Pending stops stay queued; callers decide when to clear them
    pub fn plan(&self, origin: &N) -> Result<Route<N, C>, RoutePlannerError> {
        plan_route(&self.graph, origin, &self.stops)
    }
}

impl<N, C> Default for Dispatcher<N, C>
where
    N: Eq + Hash + Clone + Debug + Display,
    C: Zero + Ord + Copy + Debug,
{
    fn default() -> Self {
        Dispatcher::new()
    }
}

impl Dispatcher<String, u32> {
    /// Replace the current state with the six-town demo network
    pub fn load_sample(&mut self) {
        self.clear();
        for name in ["A", "B", "C", "D", "E", "F"] {
            self.add_location(name.to_string());
        }
        for (a, b, w) in [
            ("A", "B", 7), ("A", "C", 9), ("A", "F", 14),
            ("B", "C", 10), ("B", "D", 15),
            ("C", "D", 11), ("C", "F", 2),
            ("D", "E", 6), ("E", "F", 9),
        ] {
            self.add_connection(a.to_string(), b.to_string(), w);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_stop_requires_registered_location() {
        let mut dispatcher: Dispatcher<String, u32> = Dispatcher::new();
        dispatcher.add_location("A".to_string());

        assert!(dispatcher.add_stop("A".to_string()));
        assert!(!dispatcher.add_stop("Z".to_string()));
        assert_eq!(dispatcher.stops(), ["A".to_string()]);
    }

    #[test]
    fn test_repeat_stops_stay_queued() {
        let mut dispatcher: Dispatcher<String, u32> = Dispatcher::new();
        dispatcher.add_location("A".to_string());

        dispatcher.add_stop("A".to_string());
        dispatcher.add_stop("A".to_string());
        assert_eq!(dispatcher.stops().len(), 2);
    }

    #[test]
    fn test_remove_stop_drops_one_request() {
        let mut dispatcher: Dispatcher<String, u32> = Dispatcher::new();
        dispatcher.add_location("A".to_string());
        dispatcher.add_location("B".to_string());

        dispatcher.add_stop("A".to_string());
        dispatcher.add_stop("B".to_string());
        dispatcher.add_stop("A".to_string());

        assert!(dispatcher.remove_stop(&"A".to_string()));
        assert_eq!(dispatcher.stops(), ["B".to_string(), "A".to_string()]);
        assert!(!dispatcher.remove_stop(&"Z".to_string()));
    }

    #[test]
    fn test_clear_forgets_graph_and_stops() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.load_sample();
        dispatcher.add_stop("D".to_string());

        dispatcher.clear();

        assert!(dispatcher.graph().is_empty());
        assert!(dispatcher.stops().is_empty());
    }

    #[test]
    fn test_plan_over_sample_network() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.load_sample();
        dispatcher.add_stop("D".to_string());

        let route = dispatcher.plan(&"A".to_string()).unwrap();
        assert_eq!(
            route.tour,
            vec!["A".to_string(), "C".to_string(), "D".to_string()]
        );
        assert_eq!(route.cost, 20);

        // Planning does not consume the pending stops
        assert_eq!(dispatcher.stops(), ["D".to_string()]);
    }

    #[test]
    fn test_plan_with_no_stops_is_empty() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.load_sample();

        let route = dispatcher.plan(&"A".to_string()).unwrap();
        assert!(route.tour.is_empty());
        assert_eq!(route.cost, 0);
    }

    #[test]
    fn test_load_sample_replaces_previous_state() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_location("Old".to_string());
        dispatcher.add_stop("Old".to_string());

        dispatcher.load_sample();

        assert_eq!(dispatcher.graph().len(), 6);
        assert!(dispatcher.stops().is_empty());
        assert!(!dispatcher.graph().contains(&"Old".to_string()));
    }
}
