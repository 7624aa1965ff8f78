use std::hint::black_box;

use random_ttt::{harness, rng, types::Geometry};

fn main() {
    let mut rng = rng::worker_rng(black_box(1729163), 0);

    let n = 10_000;

    black_box(harness::run_worker(Geometry::default(), n, &mut rng));
}
