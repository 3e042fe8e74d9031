use std::{
    num::NonZeroUsize,
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc,
    },
    thread,
    time::{Duration, Instant},
};

use anyhow::{anyhow, Context as _, Result};
use expo_mapping::{float::SIGNIFICAND_WIDTH, tables::derive_thresholds};
use num_bigint::BigUint;
use num_traits::{CheckedSub as _, One as _, ToPrimitive as _};
use tracing::{debug, info};

use crate::{config::Method, progress::ProgressReporter};

/// Generates the table of significand thresholds for the given scale.
pub fn generate(scale: i32, method: Method, workers: NonZeroUsize, progress_interval: Duration) -> Result<Vec<u64>> {
    let start = Instant::now();
    let thresholds = match method {
        Method::Exact => generate_exact(scale, workers, progress_interval)?,
        Method::Native => {
            derive_thresholds(scale).with_context(|| format!("Failed to derive table for scale {}.", scale))?
        }
    };

    info!(
        scale,
        method = ?method,
        entries = thresholds.len(),
        elapsed = ?start.elapsed(),
        "Generated table."
    );

    Ok(thresholds)
}

/// Computes every entry with arbitrary-precision integers, splitting the table into one contiguous slice per worker.
fn generate_exact(scale: i32, workers: NonZeroUsize, progress_interval: Duration) -> Result<Vec<u64>> {
    let squarings = u32::try_from(scale).with_context(|| format!("Invalid scale {}.", scale))?;
    let total = 1usize << squarings;
    let mut thresholds = vec![0u64; total];
    let slice_len = total.div_ceil(workers.get());
    let completed = AtomicUsize::new(0);

    debug!(scale, workers = workers.get(), slice_len, "Spawning table workers.");

    thread::scope(|scope| {
        let (stop_tx, stop_rx) = mpsc::channel();
        let reporter = ProgressReporter::new(&completed, total, progress_interval);
        let reporter_handle = scope.spawn(move || reporter.run(stop_rx));

        let completed = &completed;
        let worker_handles = thresholds
            .chunks_mut(slice_len)
            .enumerate()
            .map(|(worker, slice)| {
                scope.spawn(move || -> Result<()> {
                    let first_position = worker * slice_len;
                    for (offset, threshold) in slice.iter_mut().enumerate() {
                        *threshold = exact_threshold(squarings, first_position + offset)?;
                        completed.fetch_add(1, Ordering::Relaxed);
                    }
                    Ok(())
                })
            })
            .collect::<Vec<_>>();

        let results = worker_handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| anyhow!("Table worker panicked.")))
            .collect::<Vec<_>>();

        drop(stop_tx);
        reporter_handle
            .join()
            .map_err(|_| anyhow!("Progress reporter panicked."))?;

        results.into_iter().try_for_each(|result| result.and_then(|worker_result| worker_result))
    })?;

    Ok(thresholds)
}

/// Computes a single entry: the smallest `M` with `M^(2^squarings) >= 2^(52 * 2^squarings + position)`, without its
/// implicit leading bit.
pub fn exact_threshold(squarings: u32, position: usize) -> Result<u64> {
    let size = 1u32 << squarings;
    let target = BigUint::one() << (SIGNIFICAND_WIDTH as usize * size as usize + position);

    // Repeated integer square roots land at or just below the true root.
    let mut candidate = target.clone();
    for _ in 0..squarings {
        candidate = candidate.sqrt();
    }

    loop {
        while candidate.pow(size) < target {
            candidate += 1u32;
        }

        let below = &candidate - 1u32;
        if below.pow(size) < target {
            break;
        }
        candidate = below;
    }

    let implicit_bit = BigUint::one() << SIGNIFICAND_WIDTH;
    let significand = candidate
        .checked_sub(&implicit_bit)
        .and_then(|significand| significand.to_u64())
        .with_context(|| format!("Threshold at position {} lies outside of [1, 2).", position))?;

    Ok(significand)
}

#[cfg(test)]
mod tests {
    use expo_mapping::tables::embedded_thresholds;

    use super::*;

    fn workers(count: usize) -> NonZeroUsize {
        NonZeroUsize::new(count).unwrap()
    }

    #[test]
    fn exact_matches_embedded_tables() {
        for scale in 1..=6 {
            let thresholds = generate(scale, Method::Exact, workers(3), Duration::from_secs(60)).unwrap();
            assert_eq!(Some(&thresholds[..]), embedded_thresholds(scale), "scale {}", scale);
        }
    }

    #[test]
    fn native_matches_embedded_tables() {
        for scale in 1..=10 {
            let thresholds = generate(scale, Method::Native, workers(1), Duration::from_secs(60)).unwrap();
            assert_eq!(Some(&thresholds[..]), embedded_thresholds(scale), "scale {}", scale);
        }
    }

    #[test]
    fn worker_count_does_not_change_output() {
        let single = generate(5, Method::Exact, workers(1), Duration::from_secs(60)).unwrap();
        let many = generate(5, Method::Exact, workers(64), Duration::from_secs(60)).unwrap();
        assert_eq!(single, many);
    }

    #[test]
    fn exact_entries() {
        assert_eq!(exact_threshold(1, 0).unwrap(), 0);
        assert_eq!(exact_threshold(1, 1).unwrap(), 0x6a09e667f3bcd);
        assert_eq!(exact_threshold(12, 1100).unwrap(), 0x3460b1b9fd712);
    }

    #[test]
    fn matches_native_derivation_at_sampled_positions() {
        let native = derive_thresholds(13).unwrap();
        for position in [1, 777, 4096, 8191] {
            assert_eq!(exact_threshold(13, position).unwrap(), native[position]);
        }
    }
}
