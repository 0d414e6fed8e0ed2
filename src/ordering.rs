use serde::{Deserialize, Serialize};
use crate::frontier::SearchNode;
use crate::traits::search::OrderingPolicy;

/// Greedy best-first: expand whatever looks closest to the goal, ignoring the
/// moves already spent. Fast on easy boards but neither complete within a
/// budget nor optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl OrderingPolicy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn priority(&self, node: &SearchNode) -> i64 {
        -i64::from(node.heuristic)
    }
}

/// A*-style ordering with unit step costs: `moves + heuristic`, lowest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostPlusHeuristic;

impl OrderingPolicy for CostPlusHeuristic {
    fn name(&self) -> &'static str {
        "cost-plus-heuristic"
    }

    fn priority(&self, node: &SearchNode) -> i64 {
        -(i64::from(node.heuristic) + i64::from(node.moves))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingKind {
    Greedy,
    #[default]
    #[value(alias = "astar")]
    #[serde(alias = "astar")]
    CostPlusHeuristic,
}

impl OrderingKind {
    pub fn build(self) -> Box<dyn OrderingPolicy> {
        match self {
            OrderingKind::Greedy => Box::new(Greedy),
            OrderingKind::CostPlusHeuristic => Box::new(CostPlusHeuristic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Puzzle;

    #[test]
    fn keys_invert_raw_cost() {
        let node = SearchNode::new(Puzzle::solved(3).unwrap(), 4, 6);

        assert_eq!(Greedy.priority(&node), -4);
        assert_eq!(CostPlusHeuristic.priority(&node), -10);
        assert_eq!(OrderingKind::Greedy.build().name(), "greedy");
        assert_eq!(OrderingKind::CostPlusHeuristic.build().priority(&node), -10);
    }
}
