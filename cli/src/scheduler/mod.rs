//! Cancellable periodic task runner.
//!
//! Runs a unit of blocking work, then waits on a cancellable timer, checking
//! the shutdown signal only between iterations. A started iteration always
//! completes before a shutdown request takes effect, so a workflow run is
//! never interrupted mid-sequence (its stash restore included).

use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{debug, error, info};

/// Creates a shutdown channel for [`run_periodic`].
///
/// Send `true` on the returned sender to stop the loop at the next
/// between-iterations checkpoint.
#[must_use]
pub fn shutdown_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Runs `work` once per interval until shutdown is requested.
///
/// Each iteration executes on the blocking thread pool; `on_result` is
/// invoked with its output. Iterations never overlap. Returns the number of
/// completed iterations.
pub async fn run_periodic<W, R, H>(
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
    work: W,
    mut on_result: H,
) -> u64
where
    W: Fn() -> R + Clone + Send + 'static,
    R: Send + 'static,
    H: FnMut(R),
{
    let mut iterations: u64 = 0;

    'running: loop {
        let job = work.clone();
        match tokio::task::spawn_blocking(job).await {
            Ok(result) => {
                iterations += 1;
                on_result(result);
            }
            Err(e) => {
                error!("scheduled iteration aborted: {e}");
                break;
            }
        }

        if *shutdown.borrow() {
            info!("shutdown requested; stopping after completed iteration");
            break;
        }

        debug!(secs = interval.as_secs(), "sleeping until next run");
        let sleep = time::sleep(interval);
        tokio::pin!(sleep);
        loop {
            tokio::select! {
                () = &mut sleep => break,
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("shutdown requested during sleep; stopping");
                        break 'running;
                    }
                    // A signal that does not request shutdown keeps waiting
                    // out the same interval.
                }
            }
        }
    }

    iterations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn preset_shutdown_still_completes_one_iteration() {
        let (tx, rx) = shutdown_channel();
        tx.send(true).unwrap();

        let runs = Arc::new(AtomicU64::new(0));
        let work_runs = Arc::clone(&runs);

        let iterations = run_periodic(
            Duration::from_millis(1),
            rx,
            move || work_runs.fetch_add(1, Ordering::SeqCst),
            |_| {},
        )
        .await;

        // Cancellation is observed between iterations, never before the
        // first one starts.
        assert_eq!(iterations, 1);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn shutdown_during_sleep_stops_before_next_iteration() {
        let (tx, rx) = shutdown_channel();
        let runs = Arc::new(AtomicU64::new(0));
        let work_runs = Arc::clone(&runs);

        let handle = tokio::spawn(run_periodic(
            Duration::from_secs(3600),
            rx,
            move || work_runs.fetch_add(1, Ordering::SeqCst),
            |_| {},
        ));

        // Wait for the first iteration, then cancel during the long sleep.
        while runs.load(Ordering::SeqCst) == 0 {
            time::sleep(Duration::from_millis(5)).await;
        }
        tx.send(true).unwrap();

        let iterations = handle.await.unwrap();
        assert_eq!(iterations, 1);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_shutdown_signal_does_not_cut_the_sleep_short() {
        let (tx, rx) = shutdown_channel();
        let runs = Arc::new(AtomicU64::new(0));
        let work_runs = Arc::clone(&runs);

        let handle = tokio::spawn(run_periodic(
            Duration::from_secs(3600),
            rx,
            move || work_runs.fetch_add(1, Ordering::SeqCst),
            |_| {},
        ));

        while runs.load(Ordering::SeqCst) == 0 {
            time::sleep(Duration::from_millis(5)).await;
        }

        // A false signal wakes the sleep but must not start an early
        // iteration.
        tx.send(false).unwrap();
        time::sleep(Duration::from_millis(50)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        tx.send(true).unwrap();
        let iterations = handle.await.unwrap();
        assert_eq!(iterations, 1);
    }

    #[tokio::test]
    async fn results_are_reported_per_iteration() {
        let (tx, rx) = shutdown_channel();
        tx.send(true).unwrap();

        let mut reported = Vec::new();
        let iterations =
            run_periodic(Duration::from_millis(1), rx, || 42_u32, |r| reported.push(r)).await;

        assert_eq!(iterations, 1);
        assert_eq!(reported, vec![42]);
    }

    #[tokio::test]
    async fn dropped_sender_stops_the_loop() {
        let (tx, rx) = shutdown_channel();

        let handle = tokio::spawn(run_periodic(Duration::from_secs(3600), rx, || (), |()| {}));

        time::sleep(Duration::from_millis(20)).await;
        drop(tx);

        let iterations = handle.await.unwrap();
        assert!(iterations >= 1);
    }
}
