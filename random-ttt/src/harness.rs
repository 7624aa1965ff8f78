use std::{
    fmt,
    iter::Sum,
    num::NonZeroUsize,
    ops::{Add, AddAssign},
    time::{Duration, Instant},
};

use anyhow::Context;
use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;

use crate::{
    config::Config,
    rng,
    simulation::Simulator,
    types::{Geometry, Outcome, Player},
};

/// Outcome counts of a batch of games, displayed as `player1/player2/draws`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub player1_wins: u64,
    pub player2_wins: u64,
    pub draws: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::Player1) => self.player1_wins += 1,
            Outcome::Win(Player::Player2) => self.player2_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub const fn total(&self) -> u64 {
        self.player1_wins + self.player2_wins + self.draws
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Self) -> Self::Output {
        Tally {
            player1_wins: self.player1_wins + rhs.player1_wins,
            player2_wins: self.player2_wins + rhs.player2_wins,
            draws: self.draws + rhs.draws,
        }
    }
}
impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Tally::default(), Add::add)
    }
}
impl FromIterator<Outcome> for Tally {
    fn from_iter<T: IntoIterator<Item = Outcome>>(iter: T) -> Self {
        let mut tally = Tally::default();
        iter.into_iter().for_each(|outcome| tally.record(outcome));
        tally
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.player1_wins, self.player2_wins, self.draws
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub tally: Tally,
    pub elapsed: Duration,
    pub workers: NonZeroUsize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "P0/P1/Draw: {}", self.tally)?;
        writeln!(f, "Time taken: {} ms", self.elapsed.as_millis())?;
        write!(f, "Workers: {}", self.workers)
    }
}

/// Games per worker, `total_games / workers` each and the remainder on worker 0.
pub fn partition(total_games: u64, workers: NonZeroUsize) -> Vec<u64> {
    let n_workers = workers.get() as u64;
    let (share, remainder) = (total_games / n_workers, total_games % n_workers);
    (0..workers.get())
        .map(|worker_idx| if worker_idx == 0 { share + remainder } else { share })
        .collect()
}

/// Plays `games` independent games in sequence.
pub fn run_worker<R: Rng + ?Sized>(geometry: Geometry, games: u64, rng: &mut R) -> Tally {
    let mut simulator = Simulator::new(geometry);
    (0..games).map(|_| simulator.play(rng)).collect()
}

/// Runs `config.games` games on `config.workers` threads.
///
/// Every worker owns its share of the games, its generator and its boards,
/// the threads only meet when the tallies are summed. The total is therefore
/// the same for a given seed and worker count no matter in which order the
/// workers finish.
pub fn run(config: &Config) -> anyhow::Result<Report> {
    let Config {
        workers,
        games,
        geometry,
        seed,
    } = *config;
    info!(
        "{games} games on {workers} workers, {side}x{side} board, {k} in a row, seed {seed}",
        side = geometry.side(),
        k = geometry.win_condition(),
    );

    let start = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.get())
        .thread_name(|worker_idx| format!("ttt-worker-{worker_idx}"))
        .build()
        .with_context(|| format!("failed to start {workers} worker threads"))?;

    let shares = partition(games, workers);
    debug!("games per worker: [{}]", shares.iter().format(", "));

    let tally = pool.install(|| {
        shares
            .par_iter()
            .enumerate()
            .map(|(worker_idx, &games)| {
                let mut rng = rng::worker_rng(seed, worker_idx);
                let tally = run_worker(geometry, games, &mut rng);
                debug!("worker {worker_idx} finished {games} games: {tally}");
                tally
            })
            .sum::<Tally>()
    });
    let elapsed = start.elapsed();

    debug_assert_eq!(tally.total(), games);
    Ok(Report {
        tally,
        elapsed,
        workers,
    })
}
