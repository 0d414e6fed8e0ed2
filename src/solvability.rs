use crate::puzzle::Puzzle;

/// Pairs `i < j` of non-blank tiles, row-major, whose values are out of order.
pub fn inversions(puzzle: &Puzzle) -> usize {
    let values: Vec<u8> = puzzle
        .tiles()
        .iter()
        .filter(|tile| !tile.is_blank())
        .map(|tile| tile.value())
        .collect();

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| values[i + 1..].iter().filter(|&&next| next < value).count())
        .sum()
}

/// Parity test deciding whether `goal` is reachable from `start`.
///
/// A horizontal move never changes the inversion count. A vertical move jumps
/// one tile over `N - 1` others, which is even on odd-width boards, so there the
/// inversion parity of a board is invariant and both boards must share it. On
/// even-width boards the blank's row flips parity together with the inversion
/// count, so the row index joins the sum.
pub fn is_solvable(start: &Puzzle, goal: &Puzzle) -> bool {
    if start.size() != goal.size() {
        return false;
    }

    let mut parity = inversions(start) + inversions(goal);

    if start.size() % 2 == 0 {
        parity += start.blank_position().0 + goal.blank_position().0;
    }

    parity % 2 == 0
}
