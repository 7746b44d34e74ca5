//! Keep track of time, both in native and web platforms!
pub use web_time::Duration;
pub use web_time::Instant;

/// Creates a [`Duration`] from an amount of milliseconds.
///
/// Negative and NaN amounts are treated as zero, and amounts too large to
/// represent saturate.
pub fn milliseconds(amount: f64) -> Duration {
    if amount.is_nan() || amount <= 0.0 {
        return Duration::ZERO;
    }

    Duration::try_from_secs_f64(amount / 1000.0).unwrap_or(Duration::MAX)
}
