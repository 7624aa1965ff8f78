use crate::types::{Index, RunLength};

pub const DEFAULT_BOARD_SIZE: Index = 20;
pub const DEFAULT_WIN_CONDITION: RunLength = 10;
pub const DEFAULT_GAMES: u64 = 10_000;
pub const DEFAULT_SEED: u64 = 1729163;
/// each worker holds two padded grids of 32 byte cells, ~34 MB apiece at this size
pub const MAX_BOARD_SIZE: Index = 1024;

/// unmarked border around the logical board, propagation writes land at most
/// one cell past the last marked cell of a run
pub const BOARD_PADDING: Index = 1;
