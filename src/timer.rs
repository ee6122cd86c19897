//! Cancellable one-shot timers.
//!
//! A minimal "run this callback after N milliseconds" facility. Each timer
//! parks a background thread on a channel; cancelling sends on that channel
//! before the delay elapses. This is the scheduling primitive consumed by
//! [`crate::debounce`].

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use tracing::trace;

/// Handle to a scheduled callback.
///
/// Dropping the handle detaches the timer: the callback still fires at the
/// deadline. Only an explicit [`cancel`](TimerHandle::cancel) prevents it
/// from running.
#[derive(Debug)]
pub struct TimerHandle {
    cancel_tx: Sender<()>,
}

impl TimerHandle {
    /// Cancels the timer so the callback never runs.
    ///
    /// A no-op if the callback has already fired.
    pub fn cancel(self) {
        // Send failure means the timer thread already finished.
        let _ = self.cancel_tx.send(());
    }
}

/// Runs `callback` after `delay` on a background thread.
///
/// Returns a [`TimerHandle`] that can cancel the callback before the delay
/// elapses. Panics inside the callback unwind the timer thread only.
///
/// # Examples
/// ```
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use primkit::timer::schedule;
///
/// let (tx, rx) = mpsc::channel();
/// let handle = schedule(Duration::from_millis(10), move || {
///     tx.send(42).unwrap();
/// });
/// assert_eq!(rx.recv_timeout(Duration::from_secs(1)), Ok(42));
/// drop(handle);
/// ```
pub fn schedule<F>(delay: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
    let armed_at = Instant::now();
    thread::spawn(move || match cancel_rx.recv_timeout(delay) {
        Ok(()) => {
            trace!(?delay, "timer cancelled");
        }
        Err(RecvTimeoutError::Timeout) => {
            trace!(?delay, "timer fired");
            callback();
        }
        Err(RecvTimeoutError::Disconnected) => {
            // Handle dropped: detach and still honor the original deadline.
            thread::sleep(delay.saturating_sub(armed_at.elapsed()));
            trace!(?delay, "detached timer fired");
            callback();
        }
    });
    trace!(?delay, "timer armed");
    TimerHandle { cancel_tx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired2 = Arc::clone(&fired);
        let _handle = schedule(Duration::from_millis(20), move || {
            fired2.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(200));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired2 = Arc::clone(&fired);
        let handle = schedule(Duration::from_millis(100), move || {
            fired2.fetch_add(1, Ordering::SeqCst);
        });
        handle.cancel();
        thread::sleep(Duration::from_millis(300));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_cancel_after_firing_is_noop() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired2 = Arc::clone(&fired);
        let handle = schedule(Duration::from_millis(10), move || {
            fired2.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(200));
        handle.cancel();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropped_handle_detaches() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired2 = Arc::clone(&fired);
        drop(schedule(Duration::from_millis(20), move || {
            fired2.fetch_add(1, Ordering::SeqCst);
        }));
        thread::sleep(Duration::from_millis(300));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
