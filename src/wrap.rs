//! One-shot invocation and argument/output taps.
//!
//! Small combinators that wrap a callable without changing its result:
//! run it at most once, or observe its arguments/output on the way through.

/// Wraps `action` so only the first invocation runs it.
///
/// The first call yields `Some` of the action's result; every later call
/// is a no-op yielding `None`.
///
/// # Examples
/// ```
/// use primkit::wrap::once;
///
/// let mut init = once(|name: &str| format!("hello, {name}"));
/// assert_eq!(init("ada"), Some("hello, ada".to_string()));
/// assert_eq!(init("grace"), None);
/// ```
pub fn once<T, R, F>(action: F) -> impl FnMut(T) -> Option<R>
where
    F: FnOnce(T) -> R,
{
    let mut action = Some(action);
    move |arg| action.take().map(|f| f(arg))
}

/// Runs `tap` with a copy of the argument before every invocation of
/// `victim`. The victim's return value is always the result.
///
/// # Examples
/// ```
/// use primkit::wrap::tap_before;
///
/// let mut log = Vec::new();
/// {
///     let mut traced = tap_before(|x: i32| x * x, |x| log.push(x));
///     assert_eq!(traced(3), 9);
///     assert_eq!(traced(4), 16);
/// }
/// assert_eq!(log, vec![3, 4]);
/// ```
pub fn tap_before<T, R, F, G>(mut victim: F, mut tap: G) -> impl FnMut(T) -> R
where
    T: Clone,
    F: FnMut(T) -> R,
    G: FnMut(T),
{
    move |arg: T| {
        tap(arg.clone());
        victim(arg)
    }
}

/// Runs `tap` with a copy of the argument after every invocation of
/// `victim`. The victim's return value is always the result.
pub fn tap_after<T, R, F, G>(mut victim: F, mut tap: G) -> impl FnMut(T) -> R
where
    T: Clone,
    F: FnMut(T) -> R,
    G: FnMut(T),
{
    move |arg: T| {
        let output = victim(arg.clone());
        tap(arg);
        output
    }
}

/// Runs `tap` with a borrow of the victim's output, then yields the output.
///
/// # Examples
/// ```
/// use primkit::wrap::tap_output;
///
/// let mut outputs = Vec::new();
/// {
///     let mut traced = tap_output(|x: i32| x + 1, |out| outputs.push(*out));
///     assert_eq!(traced(1), 2);
///     assert_eq!(traced(5), 6);
/// }
/// assert_eq!(outputs, vec![2, 6]);
/// ```
pub fn tap_output<T, R, F, G>(mut victim: F, mut tap: G) -> impl FnMut(T) -> R
where
    F: FnMut(T) -> R,
    G: FnMut(&R),
{
    move |arg| {
        let output = victim(arg);
        tap(&output);
        output
    }
}
