use serde::{Deserialize, Serialize};
use crate::puzzle::Puzzle;
use crate::traits::search::Heuristic;

/// Sum over every non-blank tile of its row and column distance to the cell
/// it occupies in the goal. Admissible: each move shifts one tile by one cell.
#[derive(Debug, Clone)]
pub struct ManhattanDistance {
    size: usize,
    // goal position of each tile value, indexed by value
    positions: Vec<(usize, usize)>,
}

impl ManhattanDistance {
    pub fn new(goal: &Puzzle) -> Self {
        let size = goal.size();
        let mut positions = vec![(0, 0); size * size];

        for (idx, tile) in goal.tiles().iter().enumerate() {
            positions[tile.value() as usize] = (idx / size, idx % size);
        }

        Self { size, positions }
    }
}

impl Heuristic for ManhattanDistance {
    fn name(&self) -> &'static str {
        "manhattan"
    }

    fn estimate(&self, puzzle: &Puzzle) -> u32 {
        let size = puzzle.size();
        debug_assert_eq!(size, self.size, "board and goal sizes differ");

        puzzle
            .tiles()
            .iter()
            .enumerate()
            .filter(|(_, tile)| !tile.is_blank())
            .map(|(idx, tile)| {
                let (goal_row, goal_col) = self.positions[tile.value() as usize];
                (idx / size).abs_diff(goal_row) + (idx % size).abs_diff(goal_col)
            })
            .sum::<usize>() as u32
    }
}

/// Number of non-blank tiles not sitting on their goal cell.
#[derive(Debug, Clone)]
pub struct MisplacedTiles {
    goal: Puzzle,
}

impl MisplacedTiles {
    pub fn new(goal: &Puzzle) -> Self {
        Self { goal: goal.clone() }
    }
}

impl Heuristic for MisplacedTiles {
    fn name(&self) -> &'static str {
        "misplaced"
    }

    fn estimate(&self, puzzle: &Puzzle) -> u32 {
        debug_assert_eq!(puzzle.size(), self.goal.size(), "board and goal sizes differ");

        puzzle
            .tiles()
            .iter()
            .zip(self.goal.tiles())
            .filter(|(tile, goal)| !tile.is_blank() && tile != goal)
            .count() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    Misplaced,
}

impl HeuristicKind {
    pub fn build(self, goal: &Puzzle) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Manhattan => Box::new(ManhattanDistance::new(goal)),
            HeuristicKind::Misplaced => Box::new(MisplacedTiles::new(goal)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Puzzle {
        s.parse().unwrap()
    }

    #[test]
    fn manhattan_counts_each_tile_distance() {
        let goal = board("1 2 3 4 5 6 7 8 0");
        let heuristic = ManhattanDistance::new(&goal);

        assert_eq!(heuristic.estimate(&board("1 2 3 4 5 6 7 0 8")), 1);
        assert_eq!(heuristic.estimate(&board("1 2 3 4 0 6 7 5 8")), 2);
        // 8, 3 and 6 are three cells away, the rest one
        assert_eq!(heuristic.estimate(&board("8 1 2 3 4 5 6 7 0")), 14);
    }

    #[test]
    fn manhattan_uses_arbitrary_goal() {
        let goal = board("0 1 2 3 4 5 6 7 8");
        let heuristic = ManhattanDistance::new(&goal);

        assert_eq!(heuristic.estimate(&goal), 0);
        assert_eq!(heuristic.estimate(&board("1 0 2 3 4 5 6 7 8")), 1);
    }

    #[test]
    fn misplaced_ignores_blank() {
        let goal = board("1 2 3 4 5 6 7 8 0");
        let heuristic = MisplacedTiles::new(&goal);

        assert_eq!(heuristic.estimate(&board("1 2 3 4 5 6 7 0 8")), 1);
        assert_eq!(heuristic.estimate(&board("1 2 3 4 0 6 7 5 8")), 2);
        assert_eq!(heuristic.estimate(&board("0 1 2 3 4 5 6 7 8")), 8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "board and goal sizes differ")]
    fn manhattan_rejects_board_of_other_size() {
        let heuristic = ManhattanDistance::new(&Puzzle::solved(3).unwrap());
        heuristic.estimate(&Puzzle::solved(4).unwrap());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "board and goal sizes differ")]
    fn misplaced_rejects_board_of_other_size() {
        let heuristic = MisplacedTiles::new(&Puzzle::solved(3).unwrap());
        heuristic.estimate(&Puzzle::solved(4).unwrap());
    }

    #[test]
    fn kind_builds_matching_heuristic() {
        let goal = board("1 2 3 4 5 6 7 8 0");

        assert_eq!(HeuristicKind::Manhattan.build(&goal).name(), "manhattan");
        assert_eq!(HeuristicKind::Misplaced.build(&goal).name(), "misplaced");
    }
}
