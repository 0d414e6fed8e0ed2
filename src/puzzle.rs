use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::tile::Tile;

/// Smallest board the engine accepts. A 1x1 board has no moves at all.
pub const MIN_SIZE: usize = 2;
/// Largest board whose tile values still fit in a `u8`.
pub const MAX_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("Illegal move: {0}")]
    IllegalMove(String),
    #[error("board size {0} is not supported (expected 2 to 16)")]
    UnsupportedSize(usize),
    #[error("expected a {expected}x{expected} board, found {found}")]
    WrongDimension { expected: usize, found: String },
    #[error("tile {value} is out of range for a {size}x{size} board")]
    TileOutOfRange { value: u8, size: usize },
    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),
    #[error("board has no blank (0) tile")]
    MissingBlank,
    #[error("cannot parse board: {0}")]
    Parse(String),
}

/// Direction the blank travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Successor emission order. Equal-priority successors enter the frontier in this order.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Canonical row-major byte sequence identifying a board's contents.
pub type PuzzleKey = Box<[u8]>;

/// An N x N sliding puzzle board, stored row-major.
///
/// Every `Puzzle` is a permutation of `0..N*N` with exactly one blank; the
/// constructors reject anything else so the blank position is always defined.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Puzzle {
    size: usize,
    tiles: Vec<Tile>,
    blank: usize,
}

impl Puzzle {
    pub fn from_tiles(size: usize, values: Vec<u8>) -> Result<Self, PuzzleError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(PuzzleError::UnsupportedSize(size));
        }
        if values.len() != size * size {
            return Err(PuzzleError::WrongDimension {
                expected: size,
                found: format!("{} tiles", values.len()),
            });
        }

        let mut seen = vec![false; size * size];
        for &value in &values {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(PuzzleError::TileOutOfRange { value, size })?;
            if *slot {
                return Err(PuzzleError::DuplicateTile(value));
            }
            *slot = true;
        }

        // a permutation of 0..N*N always holds the blank; MissingBlank is a backstop
        let tiles: Vec<Tile> = values.into_iter().map(Tile::new).collect();
        let blank = tiles
            .iter()
            .position(|t| t.is_blank())
            .ok_or(PuzzleError::MissingBlank)?;

        Ok(Self { size, tiles, blank })
    }

    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, PuzzleError> {
        let size = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(PuzzleError::WrongDimension {
                expected: size,
                found: format!("a row of {} tiles", row.len()),
            });
        }

        Self::from_tiles(size, rows.into_iter().flatten().collect())
    }

    /// The conventional goal: `1..N*N-1` in order with the blank last.
    pub fn solved(size: usize) -> Result<Self, PuzzleError> {
        let cells = size * size;
        let values = (1..cells)
            .chain(std::iter::once(0))
            .map(|v| u8::try_from(v).map_err(|_| PuzzleError::UnsupportedSize(size)))
            .collect::<Result<Vec<u8>, _>>()?;

        Self::from_tiles(size, values)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.tiles[row * self.size + col]
    }

    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.tiles
            .chunks(self.size)
            .map(|row| row.iter().map(Tile::value).collect())
            .collect()
    }

    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    pub fn key(&self) -> PuzzleKey {
        self.tiles.iter().map(Tile::value).collect()
    }

    fn target_of(&self, dir: Direction) -> Option<usize> {
        let (row, col) = self.blank_position();
        let (dr, dc) = dir.offset();

        let row = row.checked_add_signed(dr).filter(|&r| r < self.size)?;
        let col = col.checked_add_signed(dc).filter(|&c| c < self.size)?;

        Some(row * self.size + col)
    }

    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.target_of(dir).is_some())
            .collect()
    }

    /// Returns a new board with the blank swapped with its neighbour in `dir`.
    pub fn move_blank(&self, dir: Direction) -> Result<Puzzle, PuzzleError> {
        let target = self.target_of(dir).ok_or_else(|| {
            let (row, col) = self.blank_position();
            PuzzleError::IllegalMove(format!("cannot move blank {:?} from ({}, {})", dir, row, col))
        })?;

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);

        Ok(Puzzle { size: self.size, tiles, blank: target })
    }

    /// All boards one move away, emitted in `Direction::ALL` order.
    pub fn successors(&self) -> Vec<Puzzle> {
        let mut result = Vec::with_capacity(4);

        for dir in Direction::ALL {
            if let Ok(successor) = self.move_blank(dir) {
                result.push(successor);
            }
        }

        result
    }
}

impl TryFrom<Vec<Vec<u8>>> for Puzzle {
    type Error = PuzzleError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Puzzle::from_rows(rows)
    }
}

impl From<Puzzle> for Vec<Vec<u8>> {
    fn from(puzzle: Puzzle) -> Self {
        puzzle.rows()
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    /// Accepts integers separated by whitespace and/or commas, row-major.
    /// The board size is inferred from the tile count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|e| PuzzleError::Parse(format!("{:?}: {}", token, e)))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let size = (0..=MAX_SIZE).find(|n| n * n == values.len()).ok_or_else(|| {
            PuzzleError::Parse(format!("{} tiles do not form a square board", values.len()))
        })?;

        Self::from_tiles(size, values)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size) {
            for tile in row {
                write!(f, "{} ", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
