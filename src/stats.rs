//! Descriptive aggregates with numerical stability guarantees.
//!
//! All functions in this module handle edge cases explicitly and use
//! numerically stable algorithms where rounding error would otherwise
//! accumulate.
//!
//! # Algorithms
//!
//! - **Sum/Mean**: Neumaier compensated summation for O(ε) error
//!   independent of n.
//!   Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik
//!   und Mechanik* 54(1).
//! - **Median/Mode**: sort-based; the input is cloned, never mutated.

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// # Algorithm
/// Maintains a running compensation variable `c`. At each step, the
/// branch ensures the smaller operand's low-order bits are captured.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *Zeitschrift für Angewandte
/// Mathematik und Mechanik* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Adds all values together; the empty sum is `0.0`.
///
/// Compensated, so the result is accurate to O(ε) regardless of length.
/// Non-finite inputs propagate into the result as usual for IEEE 754.
///
/// # Examples
/// ```
/// use primkit::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    kahan_sum(data)
}

/// Multiplies all values together; the empty product is `1.0`.
///
/// # Examples
/// ```
/// use primkit::stats::product;
/// assert_eq!(product(&[2.0, 3.0, 4.0]), 24.0);
/// assert_eq!(product(&[]), 1.0);
/// ```
pub fn product(data: &[f64]) -> f64 {
    data.iter().product()
}

/// Clamps `value` inclusively between `min` and `max`.
///
/// Bounds default to unbounded when callers pass infinities. When the
/// bounds cross (`min > max`), the upper bound wins — this never panics,
/// unlike [`f64::clamp`].
///
/// # Examples
/// ```
/// use primkit::stats::clamp;
/// assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
/// assert_eq!(clamp(-1.0, 0.0, 3.0), 0.0);
/// assert_eq!(clamp(2.0, f64::NEG_INFINITY, f64::INFINITY), 2.0);
/// ```
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Computes the arithmetic mean using compensated summation.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use primkit::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the median of `data` without mutating the input.
///
/// Internally clones and sorts the data, then returns the middle element
/// (or the average of the two middle elements for even-length data).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use primkit::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("NaN filtered above"));
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Computes the mode — the most frequent value — of `data`.
///
/// # Algorithm
/// Clones and sorts the data, then scans for the longest run of equal
/// values. Sorting sidesteps the pitfalls of hashing floats while keeping
/// frequency tracking a single pass.
///
/// Ties are resolved toward the smallest value.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use primkit::stats::mode;
/// assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mode(&[3.0, 1.0]), Some(1.0)); // tie: smallest wins
/// ```
pub fn mode(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("NaN filtered above"));

    let mut best = sorted[0];
    let mut best_run = 1;
    let mut current = sorted[0];
    let mut run = 1;
    for &x in &sorted[1..] {
        if x == current {
            run += 1;
        } else {
            current = x;
            run = 1;
        }
        if run > best_run {
            best_run = run;
            best = current;
        }
    }
    Some(best)
}

// ---------------------------------------------------------------------------
// Precomputed-base logarithm
// ---------------------------------------------------------------------------

/// Logarithm with a fixed, precomputed base.
///
/// Construction validates the base and caches `1 / ln(base)`, so every
/// subsequent [`log`](LogBase::log) query is a single `ln` and multiply.
/// Use this when taking many logarithms in the same base; for a one-off,
/// see [`log_base`].
///
/// # Examples
/// ```
/// use primkit::stats::LogBase;
/// let log2 = LogBase::new(2.0).unwrap();
/// assert!((log2.log(8.0) - 3.0).abs() < 1e-12);
/// assert!((log2.log(1024.0) - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogBase {
    base: f64,
    inv_ln_base: f64,
}

impl LogBase {
    /// Creates a logarithm for the given base.
    ///
    /// # Returns
    /// - `None` if `base` is not finite, not positive, or equal to 1
    ///   (whose logarithm is undefined).
    pub fn new(base: f64) -> Option<Self> {
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return None;
        }
        Some(Self {
            base,
            inv_ln_base: base.ln().recip(),
        })
    }

    /// The base this logarithm was constructed with.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Computes `log_base(x)`.
    ///
    /// Follows `f64::ln` conventions for edge inputs: negative `x` yields
    /// NaN, zero yields a signed infinity.
    pub fn log(&self, x: f64) -> f64 {
        x.ln() * self.inv_ln_base
    }
}

/// One-shot logarithm of `x` in the given `base`.
///
/// # Returns
/// - `None` for a base that is not finite, not positive, or equal to 1.
///
/// # Examples
/// ```
/// use primkit::stats::log_base;
/// assert!((log_base(10.0, 1000.0).unwrap() - 3.0).abs() < 1e-12);
/// assert!(log_base(1.0, 5.0).is_none());
/// ```
pub fn log_base(base: f64, x: f64) -> Option<f64> {
    LogBase::new(base).map(|l| l.log(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_basic() {
        assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
    }

    #[test]
    fn test_sum_compensation() {
        // Naive left-to-right addition loses the small terms entirely.
        let data = [1e16, 1.0, 1.0, 1.0, 1.0, -1e16];
        assert_eq!(sum(&data), 4.0);
    }

    #[test]
    fn test_product_basic() {
        assert_eq!(product(&[1.5, 2.0, 4.0]), 12.0);
        assert_eq!(product(&[]), 1.0);
    }

    #[test]
    fn test_clamp_inside_and_outside() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(9.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_crossed_bounds_upper_wins() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_mean_rejects_empty_and_nonfinite() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, f64::NAN]), None);
        assert_eq!(mean(&[1.0, f64::INFINITY]), None);
    }

    #[test]
    fn test_median_odd_even() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), Some(5.0));
        assert_eq!(median(&[9.0, 1.0, 5.0, 3.0]), Some(4.0));
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_median_unsorted_input_untouched() {
        let data = vec![3.0, 1.0, 2.0];
        let before = data.clone();
        let _ = median(&data);
        assert_eq!(data, before);
    }

    #[test]
    fn test_mode_frequency() {
        assert_eq!(mode(&[1.0, 7.0, 7.0, 2.0, 7.0, 2.0]), Some(7.0));
    }

    #[test]
    fn test_mode_all_unique_smallest_wins() {
        assert_eq!(mode(&[5.0, 3.0, 4.0]), Some(3.0));
    }

    #[test]
    fn test_mode_rejects_nan() {
        assert_eq!(mode(&[1.0, f64::NAN]), None);
        assert_eq!(mode(&[]), None);
    }

    #[test]
    fn test_log_base_powers() {
        let log2 = LogBase::new(2.0).unwrap();
        for k in 0..20 {
            let x = (1_u64 << k) as f64;
            assert!((log2.log(x) - k as f64).abs() < 1e-10);
        }
    }

    #[test]
    fn test_log_base_invalid() {
        assert!(LogBase::new(1.0).is_none());
        assert!(LogBase::new(0.0).is_none());
        assert!(LogBase::new(-2.0).is_none());
        assert!(LogBase::new(f64::NAN).is_none());
        assert!(LogBase::new(f64::INFINITY).is_none());
        assert!(log_base(1.0, 10.0).is_none());
    }

    #[test]
    fn test_log_base_fractional() {
        let log_half = LogBase::new(0.5).unwrap();
        assert!((log_half.log(0.25) - 2.0).abs() < 1e-12);
    }
}
