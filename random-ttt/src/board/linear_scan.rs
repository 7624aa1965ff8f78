use crate::{
    board::Board,
    types::{Geometry, Index, RunLength},
};

/// column, row, diagonal, anti-diagonal
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Reference detector that counts the run through every new mark by walking
/// outward, O(win_condition) per placement. Only used to check
/// [`super::RunCacheBoard`].
#[derive(Debug, Clone)]
pub(crate) struct LinearScanBoard {
    geometry: Geometry,
    marked: Vec<bool>,
}

impl LinearScanBoard {
    fn is_marked(&self, x: isize, y: isize) -> bool {
        let side = self.geometry.side() as isize;
        (0..side).contains(&x) && (0..side).contains(&y) && self.marked[(y * side + x) as usize]
    }

    /// marks strictly past `(x, y)` in direction `(dx, dy)`
    fn count_from(&self, (x, y): (isize, isize), (dx, dy): (isize, isize)) -> RunLength {
        (1..)
            .map(|step| (x + dx * step, y + dy * step))
            .take_while(|&(x, y)| self.is_marked(x, y))
            .count() as RunLength
    }
}

impl Board for LinearScanBoard {
    fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            marked: vec![false; geometry.n_cells()],
        }
    }

    fn place(&mut self, x: Index, y: Index) -> bool {
        let idx = y * self.geometry.side() + x;
        debug_assert!(!self.marked[idx], "({x}, {y}) placed twice");
        self.marked[idx] = true;

        let origin = (x as isize, y as isize);
        AXES.iter().any(|&(dx, dy)| {
            let run = self.count_from(origin, (dx, dy)) + 1 + self.count_from(origin, (-dx, -dy));
            run >= self.geometry.win_condition()
        })
    }
}
