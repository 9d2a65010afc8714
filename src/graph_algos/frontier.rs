use std::{collections::BinaryHeap, cmp::Ordering};


/// Minimum-priority frontier used by the shortest path traversal
/// Entries are (node index, cost) pairs; pop_min removes the entry with the
/// smallest cost. Ties go to the entry pushed earliest, so popped order is
/// deterministic.
/// No decrease-key: an improved cost is pushed as a fresh entry and the
/// stale one stays behind. Callers must re-check each popped cost against
/// the live best cost and skip entries that lost the race.
#[derive(Debug)]
pub(crate) struct Frontier<C> {
    heap: BinaryHeap<Entry<C>>,
    pushes: u64, // insertion counter for the tie-break
}

impl<C: Ord + Copy> Frontier<C> {
    pub(crate) fn new() -> Self {
        Frontier { heap: BinaryHeap::new(), pushes: 0 }
    }

    pub(crate) fn push(&mut self, index: usize, cost: C) {
        let seq = self.pushes;
        self.pushes += 1;
        self.heap.push(Entry { index, cost, seq });
    }

    /// Remove and return the (index, cost) entry with the smallest cost
    pub(crate) fn pop_min(&mut self) -> Option<(usize, C)> {
        self.heap.pop().map(|entry| (entry.index, entry.cost))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}


/// Frontier entry
/// - ordering only needs the cost and the insertion sequence
/// - the index identifies the node in the caller's node map
#[derive(Debug)]
struct Entry<C> {
    index: usize,
    cost: C,
    seq: u64,
}

// BinaryHeap is a max-heap, so the ordering is reversed: the smallest cost
// compares greatest, and among equal costs the earliest insertion wins
impl<C: Ord> Ord for Entry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost).then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<C: Ord> PartialOrd for Entry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Ord> PartialEq for Entry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}
impl<C: Ord> Eq for Entry<C> {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_smallest_cost_first() {
        let mut frontier = Frontier::new();
        frontier.push(0, 9u32);
        frontier.push(1, 2);
        frontier.push(2, 5);

        assert_eq!(frontier.pop_min(), Some((1, 2)));
        assert_eq!(frontier.pop_min(), Some((2, 5)));
        assert_eq!(frontier.pop_min(), Some((0, 9)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_equal_costs_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        frontier.push(3, 4u32);
        frontier.push(1, 4);
        frontier.push(2, 4);

        assert_eq!(frontier.pop_min(), Some((3, 4)));
        assert_eq!(frontier.pop_min(), Some((1, 4)));
        assert_eq!(frontier.pop_min(), Some((2, 4)));
    }

    #[test]
    fn test_empty_frontier_pops_nothing() {
        let mut frontier: Frontier<u32> = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop_min(), None);
    }
}
