//! Core domain types for Filler.

use serde::{Deserialize, Serialize};

/// A color from the fixed six-color palette.
///
/// Colors carry no numeric meaning beyond identity. The index order
/// (red = 0 through orange = 5) decides which colors a smaller palette
/// uses: a palette of size `n` is the first `n` colors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    /// Index 0.
    Red,
    /// Index 1.
    Green,
    /// Index 2.
    Yellow,
    /// Index 3.
    Blue,
    /// Index 4.
    Purple,
    /// Index 5.
    Orange,
}

impl Color {
    /// Number of colors in the full palette.
    pub const COUNT: usize = 6;

    /// All colors in index order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Orange,
    ];

    /// Returns the palette index of this color.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a color from its palette index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the first `size` colors of the palette.
    ///
    /// Sizes larger than the full palette are clamped.
    pub fn palette(size: usize) -> &'static [Color] {
        &Self::ALL[..size.min(Self::COUNT)]
    }

    /// Single-letter label used in text renderings.
    pub fn initial(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::Purple => 'P',
            Color::Orange => 'O',
        }
    }
}

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// Player A (moves first by default, homed bottom-left by default).
    A,
    /// Player B (homed top-right by default).
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// A cell coordinate, zero-based from the top-left corner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    /// Row index (0 is the top row).
    pub row: usize,
    /// Column index (0 is the left column).
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the 4-directional neighbours that lie inside a `rows × cols` grid.
    pub fn neighbors(self, rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            (row + 1 < rows).then(|| Coord::new(row + 1, col)),
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            (col + 1 < cols).then(|| Coord::new(row, col + 1)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
        ]
        .into_iter()
        .flatten()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
