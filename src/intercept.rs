//! Call interception with veto/replace semantics.
//!
//! Wraps a callable (the "victim") so that every invocation is first routed
//! through an interceptor callback. The interceptor receives a single-use
//! [`CallRecord`] and may veto the call, swap its input, or supply the
//! output directly — or kill the wrapper for good.

use std::marker::PhantomData;

/// Lifecycle of a [`CallRecord`].
///
/// Exactly one of the record's actions may resolve it; every action
/// attempted afterwards is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordState {
    Pending,
    Resolved,
}

/// What the wrapper should do once the interceptor returns.
enum Outcome<T, R> {
    /// No action taken: invoke the victim with the original input.
    Proceed,
    /// Do not invoke the victim; the call yields nothing.
    Prevent,
    /// Invoke the victim with this input instead of the original.
    ReplaceInput(T),
    /// Do not invoke the victim; yield this value directly.
    ReplaceOutput(R),
}

/// Ephemeral, single-use token describing one intercepted call.
///
/// Carries the call's input and the one-shot control actions. The first of
/// [`prevent_call`](CallRecord::prevent_call),
/// [`replace_input`](CallRecord::replace_input), or
/// [`replace_output`](CallRecord::replace_output) consumes the record's
/// single action slot; later action calls are silently ignored.
/// [`kill`](CallRecord::kill) is independent of the slot and idempotent.
pub struct CallRecord<T, R> {
    input: T,
    state: RecordState,
    outcome: Outcome<T, R>,
    kill: bool,
}

impl<T, R> CallRecord<T, R> {
    fn new(input: T) -> Self {
        Self {
            input,
            state: RecordState::Pending,
            outcome: Outcome::Proceed,
            kill: false,
        }
    }

    /// The input argument the wrapper was invoked with.
    pub fn input(&self) -> &T {
        &self.input
    }

    /// Whether an action has already consumed this record.
    pub fn is_resolved(&self) -> bool {
        self.state == RecordState::Resolved
    }

    /// Vetoes the call: the victim will not be invoked and the wrapper
    /// yields nothing.
    pub fn prevent_call(&mut self) {
        if self.resolve() {
            self.outcome = Outcome::Prevent;
        }
    }

    /// Replaces the victim's input: it will be invoked with `input`
    /// instead of the original argument.
    pub fn replace_input(&mut self, input: T) {
        if self.resolve() {
            self.outcome = Outcome::ReplaceInput(input);
        }
    }

    /// Supplies the wrapper's output directly; the victim will not be
    /// invoked.
    pub fn replace_output(&mut self, output: R) {
        if self.resolve() {
            self.outcome = Outcome::ReplaceOutput(output);
        }
    }

    /// Permanently disables the wrapper: this call and every future call
    /// become no-ops. Irreversible; repeated kills are harmless.
    pub fn kill(&mut self) {
        self.kill = true;
    }

    /// Transitions `Pending → Resolved`; returns whether this caller won
    /// the single action slot.
    fn resolve(&mut self) -> bool {
        match self.state {
            RecordState::Pending => {
                self.state = RecordState::Resolved;
                true
            }
            RecordState::Resolved => false,
        }
    }
}

/// A victim callable wrapped with an interceptor.
///
/// Built with [`intercept`]. See [`call`](Intercepted::call) for the
/// per-invocation protocol.
pub struct Intercepted<T, R, F, I> {
    victim: F,
    interceptor: I,
    killed: bool,
    _call: PhantomData<fn(T) -> R>,
}

/// Wraps `victim` so every invocation is routed through `interceptor`.
///
/// # Examples
/// ```
/// use primkit::intercept::intercept;
///
/// let mut guarded = intercept(
///     |x: i32| x * 10,
///     |record| {
///         if *record.input() < 0 {
///             record.prevent_call();
///         }
///     },
/// );
/// assert_eq!(guarded.call(3), Some(30));
/// assert_eq!(guarded.call(-3), None); // vetoed
/// ```
pub fn intercept<T, R, F, I>(victim: F, interceptor: I) -> Intercepted<T, R, F, I>
where
    F: FnMut(T) -> R,
    I: FnMut(&mut CallRecord<T, R>),
{
    Intercepted {
        victim,
        interceptor,
        killed: false,
        _call: PhantomData,
    }
}

impl<T, R, F, I> Intercepted<T, R, F, I>
where
    F: FnMut(T) -> R,
    I: FnMut(&mut CallRecord<T, R>),
{
    /// Whether [`CallRecord::kill`] has permanently disabled this wrapper.
    pub fn is_killed(&self) -> bool {
        self.killed
    }

    /// Invokes the wrapper with `input`.
    ///
    /// A fresh [`CallRecord`] is handed to the interceptor, then the call
    /// resolves in this order:
    ///
    /// 1. killed → `None`, now and on every future call;
    /// 2. prevented → `None`, victim not invoked;
    /// 3. replaced input → victim invoked with the replacement, its return
    ///    value yielded;
    /// 4. replaced output → that value yielded, victim not invoked;
    /// 5. no action → victim invoked with the original input.
    ///
    /// The victim's own panics propagate unchanged to the caller.
    pub fn call(&mut self, input: T) -> Option<R> {
        if self.killed {
            return None;
        }

        let mut record = CallRecord::new(input);
        (self.interceptor)(&mut record);

        if record.kill {
            self.killed = true;
            return None;
        }
        let CallRecord { input, outcome, .. } = record;
        match outcome {
            Outcome::Proceed => Some((self.victim)(input)),
            Outcome::Prevent => None,
            Outcome::ReplaceInput(replacement) => Some((self.victim)(replacement)),
            Outcome::ReplaceOutput(output) => Some(output),
        }
    }
}
