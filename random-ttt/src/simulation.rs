use rand::{Rng, seq::SliceRandom};

use crate::{
    board::{Board, RunCacheBoard},
    types::{Coord, Geometry, Index, Outcome, Player},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningMove {
    pub coord: Coord,
    /// 0-indexed position in the placement order
    pub ply: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: Outcome,
    /// `None` for a draw
    pub winning_move: Option<WinningMove>,
}

/// Plays `cells` in order on two fresh boards, Player1 places on even plies.
/// Stops at the first win, running out of cells is a draw.
///
/// `cells` must not contain a coordinate twice.
pub fn replay(geometry: Geometry, cells: impl IntoIterator<Item = Coord>) -> GameRecord {
    replay_on::<RunCacheBoard>(geometry, cells)
}

pub(crate) fn replay_on<B: Board>(
    geometry: Geometry,
    cells: impl IntoIterator<Item = Coord>,
) -> GameRecord {
    let mut boards = [B::new(geometry), B::new(geometry)];
    for (ply, (x, y)) in cells.into_iter().enumerate() {
        let player = Player::from_ply(ply);
        if boards[player as usize].place(x, y) {
            return GameRecord {
                outcome: Outcome::Win(player),
                winning_move: Some(WinningMove { coord: (x, y), ply }),
            };
        }
    }
    GameRecord {
        outcome: Outcome::Draw,
        winning_move: None,
    }
}

/// Plays random games on one geometry.
///
/// Keeps the cell order of the previous game around and reshuffles it, a
/// uniform shuffle of any permutation is again uniform.
#[derive(Debug, Clone)]
pub struct Simulator {
    geometry: Geometry,
    cells: Vec<Index>,
}

impl Simulator {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: (0..geometry.n_cells()).collect(),
        }
    }

    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        self.play_recorded(rng).outcome
    }

    pub fn play_recorded<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameRecord {
        self.cells.shuffle(rng);
        let geometry = self.geometry;
        replay(geometry, self.cells.iter().map(|&idx| geometry.to_2d(idx)))
    }
}

#[cfg(test)]
mod test {
    use itertools::iproduct;
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::board::linear_scan::LinearScanBoard;

    /// opens with the fixed five moves, then Player2 completes column 1
    fn regression_permutation() -> Vec<Coord> {
        let opening = [(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)];
        let rest = iproduct!(0..4, 0..4)
            .map(|(y, x)| (x, y))
            .filter(|coord| !opening.contains(coord));
        opening.into_iter().chain(rest).collect()
    }

    #[test]
    fn test_regression_vector() {
        let cells = regression_permutation();
        assert_eq!(cells.len(), 16);

        let record = replay(Geometry::new(4, 3), cells.iter().copied());
        assert_eq!(record.outcome, Outcome::Win(Player::Player2));
        assert_eq!(
            record.winning_move,
            Some(WinningMove {
                coord: (1, 2),
                ply: 5
            })
        );
    }

    #[test]
    fn test_no_win_in_opening() {
        // Player1: (0,0) (0,1) (2,2), Player2: (1,0) (1,1)
        let opening = [(0, 0), (1, 0), (0, 1), (1, 1), (2, 2)];
        let record = replay(Geometry::new(4, 3), opening);
        assert_eq!(record.outcome, Outcome::Draw);
        assert_eq!(record.winning_move, None);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let geometry = Geometry::new(10, 4);
        let mut simulator = Simulator::new(geometry);
        let mut rng = SmallRng::seed_from_u64(1729163);
        for _ in 0..200 {
            simulator.cells.shuffle(&mut rng);
            let cells: Vec<Coord> = simulator.cells.iter().map(|&idx| geometry.to_2d(idx)).collect();
            let first = replay(geometry, cells.iter().copied());
            let second = replay(geometry, cells.iter().copied());
            assert_eq!(first, second);
            assert_eq!(first, replay_on::<LinearScanBoard>(geometry, cells.iter().copied()));
        }
    }

    #[test]
    fn test_same_seed_same_games() {
        let geometry = Geometry::default();
        let (mut a, mut b) = (Simulator::new(geometry), Simulator::new(geometry));
        let (mut rng_a, mut rng_b) = (SmallRng::seed_from_u64(3), SmallRng::seed_from_u64(3));
        for _ in 0..50 {
            assert_eq!(a.play_recorded(&mut rng_a), b.play_recorded(&mut rng_b));
        }
    }

    #[test]
    fn test_line_too_long_always_draws() {
        let mut simulator = Simulator::new(Geometry::new(4, 5));
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            assert_eq!(simulator.play(&mut rng), Outcome::Draw);
        }
    }

    #[test]
    fn test_single_mark_line_first_player_wins() {
        let mut simulator = Simulator::new(Geometry::new(5, 1));
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            let record = simulator.play_recorded(&mut rng);
            assert_eq!(record.outcome, Outcome::Win(Player::Player1));
            assert_eq!(record.winning_move.map(|winning| winning.ply), Some(0));
        }
    }

    #[test]
    fn test_classic_board_reaches_every_outcome() {
        let mut simulator = Simulator::new(Geometry::new(3, 3));
        let mut rng = SmallRng::seed_from_u64(0xfeebdaed_deadbeef);
        let outcomes: Vec<Outcome> = (0..2_000).map(|_| simulator.play(&mut rng)).collect();
        for expected in [
            Outcome::Win(Player::Player1),
            Outcome::Win(Player::Player2),
            Outcome::Draw,
        ] {
            assert!(outcomes.contains(&expected), "{expected:?} never happened");
        }
    }
}
