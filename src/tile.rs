use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rune {
    Value,
    Space,
}

impl Rune {
    pub fn from_value(value: u8) -> Self {
        match value {
            0 => Rune::Space,
            _ => Rune::Value,
        }
    }
}

/// A single cell of the board. The value `0` is the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u8);

impl Tile {
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn rune(&self) -> Rune {
        Rune::from_value(self.0)
    }

    pub fn is_blank(&self) -> bool {
        self.rune() == Rune::Space
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rune() {
            Rune::Space => write!(f, " "),
            Rune::Value => write!(f, "{}", self.0),
        }
    }
}

/// Compact form used in log lines, e.g. `1,2,3,4,0,6,7,5,8`.
pub fn serialize_tiles(tiles: &[Tile]) -> String {
    tiles.iter().map(|t| t.value().to_string()).collect::<Vec<_>>().join(",")
}
