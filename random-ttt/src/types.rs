/// Index into the logical board (row-major, see [`Geometry::to_2d`])
pub type Index = usize;
/// (x, y) on the logical board, x = column, y = row
pub type Coord = (Index, Index);
/// consecutive same-player marks along one axis
pub type RunLength = u32;

/// 0 = Player1 (moves first, "P0" in the report), 1 = Player2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Player1 = 0,
    Player2 = 1,
}
impl Player {
    /// the player acting at `ply` (0-indexed placement order)
    pub const fn from_ply(ply: usize) -> Self {
        if ply % 2 == 0 {
            Self::Player1
        } else {
            Self::Player2
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// Side length and win condition of the logical board.
///
/// The grids built from this carry one extra cell of padding on every side,
/// see [`Geometry::padded_side`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    side: Index,
    win_condition: RunLength,
}

impl Geometry {
    pub const fn new(side: Index, win_condition: RunLength) -> Self {
        debug_assert!(side > 0, "board needs at least one cell");
        debug_assert!(win_condition > 0, "a win needs at least one mark");
        Self {
            side,
            win_condition,
        }
    }

    pub const fn side(&self) -> Index {
        self.side
    }
    pub const fn win_condition(&self) -> RunLength {
        self.win_condition
    }
    pub const fn n_cells(&self) -> usize {
        self.side * self.side
    }
    pub const fn padded_side(&self) -> Index {
        self.side + 2 * crate::consts::BOARD_PADDING
    }

    /// false if no line of `win_condition` marks fits on the board,
    /// every game on such a board is a draw
    pub const fn line_fits(&self) -> bool {
        self.win_condition as usize <= self.side
    }

    /// row major
    pub const fn to_2d(&self, one_d_idx: Index) -> Coord {
        debug_assert!(one_d_idx < self.n_cells());
        (one_d_idx % self.side, one_d_idx / self.side)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(
            crate::consts::DEFAULT_BOARD_SIZE,
            crate::consts::DEFAULT_WIN_CONDITION,
        )
    }
}
