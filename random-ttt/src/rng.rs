use rand::{SeedableRng, rngs::SmallRng};

/// the generator every worker owns, one per worker and never shared
pub type GameRng = SmallRng;

/// Seeds the private stream of worker `worker_idx`.
///
/// `seed_from_u64` scrambles the seed before use, so adjacent worker
/// indices still produce unrelated sequences.
pub fn worker_rng(base_seed: u64, worker_idx: usize) -> GameRng {
    GameRng::seed_from_u64(base_seed.wrapping_add(worker_idx as u64))
}
