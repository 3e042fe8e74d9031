use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc::{Receiver, RecvTimeoutError},
    },
    time::{Duration, Instant},
};

use tracing::info;

/// Periodically reports how many table entries have been computed.
pub struct ProgressReporter<'a> {
    completed: &'a AtomicUsize,
    total: usize,
    interval: Duration,
}

impl<'a> ProgressReporter<'a> {
    pub fn new(completed: &'a AtomicUsize, total: usize, interval: Duration) -> Self {
        Self {
            completed,
            total,
            interval,
        }
    }

    /// Reports progress every interval until `stop` receives a message or is disconnected.
    pub fn run(self, stop: Receiver<()>) {
        let start = Instant::now();
        while let Err(RecvTimeoutError::Timeout) = stop.recv_timeout(self.interval) {
            self.report(start.elapsed());
        }
    }

    fn report(&self, elapsed: Duration) {
        let completed = self.completed.load(Ordering::Relaxed);
        let percent = completed as f64 * 100.0 / self.total as f64;
        match estimate_remaining(completed, self.total, elapsed) {
            Some(remaining) => info!(
                completed,
                total = self.total,
                elapsed = ?elapsed,
                remaining = ?remaining,
                "Computed {:.1}% of table entries.",
                percent
            ),
            None => info!(
                completed,
                total = self.total,
                elapsed = ?elapsed,
                "Computed {:.1}% of table entries.",
                percent
            ),
        }
    }
}

/// Estimates the time left, assuming the remaining entries take as long as the completed ones did on average.
fn estimate_remaining(completed: usize, total: usize, elapsed: Duration) -> Option<Duration> {
    if completed == 0 {
        return None;
    }

    let remaining = total.saturating_sub(completed);
    Some(elapsed.mul_f64(remaining as f64 / completed as f64))
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn remaining_time() {
        let elapsed = Duration::from_secs(60);
        assert_eq!(estimate_remaining(0, 100, elapsed), None);
        assert_eq!(estimate_remaining(25, 100, elapsed), Some(Duration::from_secs(180)));
        assert_eq!(estimate_remaining(50, 100, elapsed), Some(Duration::from_secs(60)));
        assert_eq!(estimate_remaining(100, 100, elapsed), Some(Duration::ZERO));
    }

    #[test]
    fn stops_when_disconnected() {
        let completed = AtomicUsize::new(0);
        let reporter = ProgressReporter::new(&completed, 10, Duration::from_millis(1));
        let (stop_tx, stop_rx) = mpsc::channel();
        drop(stop_tx);
        reporter.run(stop_rx);
    }

    #[test]
    fn stops_when_signalled() {
        let completed = AtomicUsize::new(3);
        let (stop_tx, stop_rx) = mpsc::channel();
        std::thread::scope(|scope| {
            let reporter = ProgressReporter::new(&completed, 10, Duration::from_millis(1));
            let handle = scope.spawn(move || reporter.run(stop_rx));
            std::thread::sleep(Duration::from_millis(5));
            stop_tx.send(()).unwrap();
            handle.join().unwrap();
        });
    }
}
