use crate::types::{Geometry, Index};

#[cfg(test)]
pub(crate) mod linear_scan;
pub mod run_cache;

pub use run_cache::{RunCacheBoard, RunCell};

/// The marks of a single player.
///
/// Each player owns one board, a cell taken by the opponent is simply never
/// placed on this one.
pub trait Board {
    fn new(geometry: Geometry) -> Self;

    /// Marks the logical cell (x, y), every cell may be placed at most once.
    /// # Returns
    /// - true if the new mark completes a line of at least `win_condition`
    ///   marks along a column, row, diagonal or anti-diagonal
    ///
    /// The board is not meant to be used after a win was reported.
    fn place(&mut self, x: Index, y: Index) -> bool;
}
