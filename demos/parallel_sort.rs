//! Sorts a batch of random vectors on a fixed-size worker pool and reports
//! which worker handled each one.
//!
//! Run with `RUST_LOG=debug cargo run --example parallel_sort` to see the
//! per-task worker logging.

use std::thread;
use std::time::{Duration, Instant};

use rand::prelude::*;
use workpool::ThreadPool;

fn main() {
    env_logger::init();

    let pool = ThreadPool::with_default_size().expect("failed to start worker pool");
    println!("pool started with {} workers", pool.worker_count());

    let mut rng = thread_rng();
    let vectors: Vec<Vec<i32>> = (0..16)
        .map(|_| (0..100_000).map(|_| rng.gen()).collect())
        .collect();

    let start = Instant::now();
    let handles: Vec<_> = vectors
        .into_iter()
        .enumerate()
        .map(|(i, mut vec)| {
            pool.submit(move |worker| {
                thread::sleep(Duration::from_millis(1));
                vec.sort_unstable();
                (i, worker, vec.len())
            })
        })
        .collect();

    for handle in handles {
        match handle.wait() {
            Ok((i, worker, len)) => {
                println!("task {i:2}: {len} elements sorted by worker {worker}")
            }
            Err(err) => eprintln!("task failed: {err}"),
        }
    }

    println!("done in {:?}", start.elapsed());
    pool.stop();
}
