use crate::{
    board::Board,
    consts::BOARD_PADDING,
    types::{Geometry, Index, RunLength},
};

/// Lengths of the runs of marks adjacent to an unmarked cell, not counting
/// the cell itself. Directions are compass style, east = +x and south = +y.
///
/// Only meaningful while the cell is unmarked, a marked cell is never read again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunCell {
    pub s: RunLength,
    pub n: RunLength,
    pub e: RunLength,
    pub w: RunLength,
    pub se: RunLength,
    pub nw: RunLength,
    pub ne: RunLength,
    pub sw: RunLength,
}

/// Amortized O(1) win detection.
///
/// Instead of scanning outward from every new mark, each unmarked cell caches
/// how long a run it would extend on each side. Marking a cell combines both
/// sides of an axis and hands the combined length to the two cells just past
/// the ends of the run, which are the only cells that can extend it further.
/// That is at most 8 writes per placement independent of the run length.
///
/// # Layout
/// row major `(side + 2)²` grid, the logical board sits at `[1, side]` in both
/// dimensions. The border is never marked, it only absorbs the writes for
/// runs that reach an edge.
#[derive(Debug, Clone)]
pub struct RunCacheBoard {
    geometry: Geometry,
    cells: Vec<RunCell>,
}

impl RunCacheBoard {
    /// both coordinates padded
    fn padded_idx(&self, px: Index, py: Index) -> usize {
        let padded_side = self.geometry.padded_side();
        debug_assert!(
            px < padded_side && py < padded_side,
            "({px}, {py}) is outside of the padded {padded_side}x{padded_side} grid"
        );
        py * padded_side + px
    }

    fn at_mut(&mut self, px: Index, py: Index) -> &mut RunCell {
        let idx = self.padded_idx(px, py);
        &mut self.cells[idx]
    }

    /// cache of a cell in padded coordinates, 0 and `side + 1` are the border
    pub fn padded_cell(&self, px: Index, py: Index) -> RunCell {
        self.cells[self.padded_idx(px, py)]
    }

    /// cache of a cell on the logical board
    pub fn cell(&self, x: Index, y: Index) -> RunCell {
        self.padded_cell(x + BOARD_PADDING, y + BOARD_PADDING)
    }
}

impl Board for RunCacheBoard {
    fn new(geometry: Geometry) -> Self {
        let padded_side = geometry.padded_side();
        Self {
            geometry,
            cells: vec![RunCell::default(); padded_side * padded_side],
        }
    }

    fn place(&mut self, x: Index, y: Index) -> bool {
        debug_assert!(x < self.geometry.side() && y < self.geometry.side());
        let (x, y) = (x + BOARD_PADDING, y + BOARD_PADDING);
        let q = self.padded_cell(x, y);

        let col = q.s + 1 + q.n;
        let row = q.w + 1 + q.e;
        let diag = q.nw + 1 + q.se;
        let anti = q.ne + 1 + q.sw;

        let win_condition = self.geometry.win_condition();
        if col >= win_condition
            || row >= win_condition
            || diag >= win_condition
            || anti >= win_condition
        {
            // the game ends here, the cache is not needed anymore
            return true;
        }

        // one past the end of the run, the cached length covers marked cells only
        // so the target is at most the border cell
        let past = |run: RunLength| run as Index + 1;

        self.at_mut(x, y + past(q.s)).n = col;
        self.at_mut(x, y - past(q.n)).s = col;
        self.at_mut(x + past(q.e), y).w = row;
        self.at_mut(x - past(q.w), y).e = row;
        self.at_mut(x + past(q.se), y + past(q.se)).nw = diag;
        self.at_mut(x - past(q.nw), y - past(q.nw)).se = diag;
        self.at_mut(x + past(q.ne), y - past(q.ne)).sw = anti;
        self.at_mut(x - past(q.sw), y + past(q.sw)).ne = anti;

        false
    }
}
