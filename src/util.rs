use std::collections::VecDeque;
use std::io::BufRead;
use crate::puzzle::{Puzzle, PuzzleError};

/// Pulls whitespace-separated tile values from a line-oriented reader, one
/// board at a time. Values left over on a line carry into the next board.
pub struct BoardReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> BoardReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new() }
    }

    fn next_token(&mut self) -> Result<String, PuzzleError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| PuzzleError::Parse(format!("error reading board: {}", e)))?;

            if read == 0 {
                return Err(PuzzleError::Parse("unexpected end of input".into()));
            }

            self.pending.extend(
                line.split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|token| !token.is_empty())
                    .map(str::to_owned),
            );
        }

        self.pending
            .pop_front()
            .ok_or_else(|| PuzzleError::Parse("unexpected end of input".into()))
    }

    pub fn read_board(&mut self, size: usize) -> Result<Puzzle, PuzzleError> {
        let mut values = Vec::with_capacity(size * size);

        for _ in 0..size * size {
            let token = self.next_token()?;
            let value = token
                .parse::<u8>()
                .map_err(|e| PuzzleError::Parse(format!("{:?}: {}", token, e)))?;
            values.push(value);
        }

        Puzzle::from_tiles(size, values)
    }
}

/// Reads a start board followed by a goal board.
pub fn read_puzzles<R: BufRead>(reader: R, size: usize) -> Result<(Puzzle, Puzzle), PuzzleError> {
    let mut boards = BoardReader::new(reader);
    let start = boards.read_board(size)?;
    let goal = boards.read_board(size)?;

    Ok((start, goal))
}
