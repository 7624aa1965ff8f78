//! Environment configuration of the simulator binary.
//!
//! | variable        | default                   |
//! |-----------------|---------------------------|
//! | `CPUS`          | available parallelism     |
//! | `GAMES`         | [`consts::DEFAULT_GAMES`] |
//! | `BOARD_SIZE`    | [`consts::DEFAULT_BOARD_SIZE`] |
//! | `WIN_CONDITION` | [`consts::DEFAULT_WIN_CONDITION`] |
//! | `SEED`          | [`consts::DEFAULT_SEED`]  |
//!
//! Empty and whitespace-only values count as unset.

use std::{
    num::{NonZeroU32, NonZeroUsize},
    str::FromStr,
};

use anyhow::{Context, bail};
use log::warn;

use crate::{consts, types::Geometry};

pub const WORKERS_VAR: &str = "CPUS";
pub const GAMES_VAR: &str = "GAMES";
pub const BOARD_SIZE_VAR: &str = "BOARD_SIZE";
pub const WIN_CONDITION_VAR: &str = "WIN_CONDITION";
pub const SEED_VAR: &str = "SEED";

const DEFAULT_SIDE: NonZeroUsize = NonZeroUsize::new(consts::DEFAULT_BOARD_SIZE).unwrap();
const DEFAULT_WIN_CONDITION: NonZeroU32 = NonZeroU32::new(consts::DEFAULT_WIN_CONDITION).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// may exceed the hardware parallelism, workers then share cores
    pub workers: NonZeroUsize,
    pub games: u64,
    pub geometry: Geometry,
    /// worker `i` is seeded with `seed + i`
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: available_workers(),
            games: consts::DEFAULT_GAMES,
            geometry: Geometry::default(),
            seed: consts::DEFAULT_SEED,
        }
    }
}

pub fn available_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `lookup` returns the raw value of a variable, `None` if unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let hardware = defaults.workers;

        let workers = parse_var(&lookup, WORKERS_VAR, defaults.workers, || {
            format!("1 <= {WORKERS_VAR} <= {hardware}")
        })?;
        let games = parse_var(&lookup, GAMES_VAR, defaults.games, || {
            format!("{GAMES_VAR} must be a non-negative integer")
        })?;
        let side = parse_var(
            &lookup,
            BOARD_SIZE_VAR,
            DEFAULT_SIDE,
            || format!("{BOARD_SIZE_VAR} must be a positive integer"),
        )?;
        if side.get() > consts::MAX_BOARD_SIZE {
            bail!(
                "{BOARD_SIZE_VAR} must be a positive integer <= {}, got {BOARD_SIZE_VAR}='{side}'",
                consts::MAX_BOARD_SIZE
            );
        }
        let win_condition = parse_var(
            &lookup,
            WIN_CONDITION_VAR,
            DEFAULT_WIN_CONDITION,
            || format!("{WIN_CONDITION_VAR} must be a positive integer"),
        )?;
        let seed = parse_var(&lookup, SEED_VAR, defaults.seed, || {
            format!("{SEED_VAR} must be an unsigned 64 bit integer")
        })?;

        let geometry = Geometry::new(side.get(), win_condition.get());
        if !geometry.line_fits() {
            warn!(
                "{WIN_CONDITION_VAR}={win_condition} does not fit on a {side}x{side} board, every game will be a draw"
            );
        }

        Ok(Self {
            workers,
            games,
            geometry,
            seed,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    usage: impl FnOnce() -> String,
) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key).filter(|raw| !raw.trim().is_empty()) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{}, got {key}='{raw}'", usage())),
    }
}
