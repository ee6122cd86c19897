//! Edge-triggered invocation collapsing.
//!
//! Wraps a callable so that rapid repeated invocations collapse into at
//! most one effective call per quiescence window. The [`Edge`] chosen at
//! construction decides whether the action fires at the start or the end
//! of a burst.
//!
//! Trailing-edge firings run on a timer thread; only the latest call's
//! argument is used, and at most one deferred execution is outstanding per
//! wrapper (each call cancels and reschedules the pending timer).

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::trace;

use crate::timer::{schedule, TimerHandle};

/// Which end of a burst of invocations triggers the wrapped action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Fire immediately on the first call of a burst, then suppress until
    /// the wrapper has been quiescent for the full delay.
    Leading,
    /// Fire once, with the latest argument, after the wrapper has been
    /// quiescent for the full delay.
    Trailing,
}

/// A debounced wrapper around an action.
///
/// Built with [`Debounce::new`]; invoked through [`call`](Debounce::call).
/// The wrapper is `Send + Sync` — calls may arrive from any thread, though
/// the intended use is a single caller.
///
/// The action must not call back into the same wrapper; it runs while the
/// wrapper's internal lock is held.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use primkit::debounce::{Debounce, Edge};
///
/// let double = Debounce::new(|x: i32| x * 2, Duration::from_millis(50), Edge::Leading);
/// assert_eq!(double.call(21), Some(42)); // leading edge fires immediately
/// assert_eq!(double.call(21), None); // absorbed: inside the window
/// ```
pub struct Debounce<T, R, F> {
    shared: Arc<Mutex<Shared<F>>>,
    delay: Duration,
    edge: Edge,
    _call: PhantomData<fn(T) -> R>,
}

struct Shared<F> {
    action: F,
    pending: Option<TimerHandle>,
    // Bumped on every call and cancel; a timer callback whose generation
    // no longer matches is stale and must not fire.
    generation: u64,
}

impl<T, R, F> Debounce<T, R, F>
where
    F: FnMut(T) -> R + Send + 'static,
    T: Send + 'static,
{
    /// Wraps `action` with the given quiescence delay and triggering edge.
    pub fn new(action: F, delay: Duration, edge: Edge) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                action,
                pending: None,
                generation: 0,
            })),
            delay,
            edge,
            _call: PhantomData,
        }
    }

    /// The quiescence delay fixed at construction.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The triggering edge fixed at construction.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Invokes the debounced wrapper.
    ///
    /// - [`Edge::Leading`]: the first call of a burst runs the action
    ///   synchronously and returns `Some` of its result; calls inside the
    ///   suppression window are absorbed, return `None`, and restart the
    ///   window.
    /// - [`Edge::Trailing`]: always returns `None`. The pending timer is
    ///   cancelled and rescheduled with this call's argument; once the
    ///   delay passes without further calls, the action fires on the timer
    ///   thread with the latest argument.
    pub fn call(&self, arg: T) -> Option<R> {
        let mut shared = self.shared.lock().expect("debounce state poisoned");
        shared.generation += 1;
        let generation = shared.generation;
        let was_pending = shared.pending.take();
        let quiescent = was_pending.is_none();
        if let Some(handle) = was_pending {
            handle.cancel();
        }

        match self.edge {
            Edge::Leading => {
                let output = if quiescent {
                    trace!("leading edge fired");
                    Some((shared.action)(arg))
                } else {
                    trace!("call absorbed, suppression window restarted");
                    None
                };
                shared.pending = Some(self.arm_window(generation));
                output
            }
            Edge::Trailing => {
                trace!("trailing timer rescheduled");
                shared.pending = Some(self.arm_fire(generation, arg));
                None
            }
        }
    }

    /// Clears any pending timer without firing.
    ///
    /// The next call starts fresh, as if no prior calls occurred.
    pub fn cancel(&self) {
        let mut shared = self.shared.lock().expect("debounce state poisoned");
        shared.generation += 1;
        if let Some(handle) = shared.pending.take() {
            handle.cancel();
            trace!("pending timer cancelled");
        }
    }

    /// Arms the leading-edge suppression window: on expiry the wrapper
    /// returns to its armed state.
    fn arm_window(&self, generation: u64) -> TimerHandle {
        let shared = Arc::clone(&self.shared);
        schedule(self.delay, move || {
            let mut shared = shared.lock().expect("debounce state poisoned");
            if shared.generation == generation {
                shared.pending = None;
            }
        })
    }

    /// Arms the trailing-edge timer: on expiry the action fires with `arg`.
    fn arm_fire(&self, generation: u64, arg: T) -> TimerHandle {
        let shared = Arc::clone(&self.shared);
        schedule(self.delay, move || {
            let mut shared = shared.lock().expect("debounce state poisoned");
            // A call or cancel racing this expiry wins; the argument is stale.
            if shared.generation != generation {
                return;
            }
            shared.pending = None;
            (shared.action)(arg);
        })
    }
}
