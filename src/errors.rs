
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePlannerError {
    UnreachableStop(String), // No pending stop is reachable from this location
    NoPathBetween(String, String), // Reconstruction failed despite a finite distance
}
