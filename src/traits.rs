pub mod search {
    use crate::frontier::SearchNode;
    use crate::puzzle::{Puzzle, PuzzleError};

    /// Estimate of the number of moves left between a board and the goal the
    /// heuristic was built for.
    pub trait Heuristic {
        fn name(&self) -> &'static str;

        /// `puzzle` must have the same size as the goal. Debug builds assert it.
        fn estimate(&self, puzzle: &Puzzle) -> u32;
    }

    /// Maps a node to its frontier key. The frontier always pops the highest key.
    pub trait OrderingPolicy {
        fn name(&self) -> &'static str;

        fn priority(&self, node: &SearchNode) -> i64;
    }

    /// Supplies a fresh start board whenever a run has to be abandoned.
    pub trait StartGenerator {
        fn next_start(&mut self, size: usize) -> Result<Puzzle, PuzzleError>;
    }

    impl<G: StartGenerator + ?Sized> StartGenerator for &mut G {
        fn next_start(&mut self, size: usize) -> Result<Puzzle, PuzzleError> {
            (**self).next_start(size)
        }
    }
}

pub mod puzzle {
    use std::fmt::Write;
    use colored::Colorize;
    use crate::puzzle::Puzzle;
    use crate::traits::search::Heuristic;

    pub trait DebugPrintable {
        /// Box-drawn rendering of the board. When a heuristic is given, its
        /// estimate for the board is appended below the grid.
        fn render(&self, heuristic: Option<&dyn Heuristic>) -> String;

        fn debug_print(&self, heuristic: Option<&dyn Heuristic>) {
            print!("{}", self.render(heuristic));
        }
    }

    fn border(out: &mut String, size: usize, left: char, mid: char, right: char) {
        out.push(left);
        for col in 0..size {
            out.push_str("───");
            if col < size - 1 {
                out.push(mid);
            }
        }
        out.push(right);
        out.push('\n');
    }

    impl DebugPrintable for Puzzle {
        fn render(&self, heuristic: Option<&dyn Heuristic>) -> String {
            let size = self.size();
            let mut out = String::new();

            border(&mut out, size, '┌', '┬', '┐');

            for row in 0..size {
                out.push('│');
                for col in 0..size {
                    let tile = self.get(row, col);
                    if tile.is_blank() {
                        let _ = write!(out, " {} ", " ".on_green());
                    } else {
                        let _ = write!(out, "{:^3}", tile.value());
                    }
                    out.push('│');
                }
                out.push('\n');

                if row < size - 1 {
                    border(&mut out, size, '├', '┼', '┤');
                }
            }

            border(&mut out, size, '└', '┴', '┘');

            if let Some(heuristic) = heuristic {
                let _ = writeln!(out, "{}: {}", heuristic.name(), heuristic.estimate(self));
            }

            out
        }
    }
}
