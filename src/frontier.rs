use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use rustc_hash::FxHashSet;
use crate::puzzle::{Puzzle, PuzzleKey};
use crate::traits::search::OrderingPolicy;

/// A board reached during search, with its heuristic value (computed once,
/// against the run's goal) and the number of moves taken to reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub puzzle: Puzzle,
    pub heuristic: u32,
    pub moves: u32,
}

impl SearchNode {
    pub fn new(puzzle: Puzzle, heuristic: u32, moves: u32) -> Self {
        Self { puzzle, heuristic, moves }
    }
}

/// Boards whose successors have already been generated in this run.
pub type VisitedSet = FxHashSet<PuzzleKey>;

#[derive(Debug)]
struct Entry {
    priority: i64,
    seq: Reverse<u64>,
    node: SearchNode,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // equal priorities pop in insertion order
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Max-heap of search nodes keyed by an ordering policy.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    pushed: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode, policy: &dyn OrderingPolicy) {
        let priority = policy.priority(&node);
        self.heap.push(Entry { priority, seq: Reverse(self.pushed), node });
        self.pushed += 1;
    }

    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.pushed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{CostPlusHeuristic, Greedy};

    fn node(heuristic: u32, moves: u32) -> SearchNode {
        SearchNode::new(Puzzle::solved(3).unwrap(), heuristic, moves)
    }

    #[test]
    fn greedy_pops_lowest_heuristic_first() {
        let mut frontier = Frontier::new();
        frontier.push(node(5, 0), &Greedy);
        frontier.push(node(1, 9), &Greedy);
        frontier.push(node(3, 1), &Greedy);

        let order: Vec<u32> = std::iter::from_fn(|| frontier.pop()).map(|n| n.heuristic).collect();
        assert_eq!(order, vec![1, 3, 5]);
    }

    #[test]
    fn cost_plus_heuristic_pops_lowest_sum_first() {
        let mut frontier = Frontier::new();
        frontier.push(node(1, 9), &CostPlusHeuristic);
        frontier.push(node(5, 0), &CostPlusHeuristic);
        frontier.push(node(3, 4), &CostPlusHeuristic);

        let order: Vec<(u32, u32)> = std::iter::from_fn(|| frontier.pop())
            .map(|n| (n.heuristic, n.moves))
            .collect();
        assert_eq!(order, vec![(5, 0), (3, 4), (1, 9)]);
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        for moves in 0..5 {
            frontier.push(node(2, moves), &Greedy);
        }

        let order: Vec<u32> = std::iter::from_fn(|| frontier.pop()).map(|n| n.moves).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        assert!(frontier.is_empty());
    }
}
