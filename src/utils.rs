use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// Character set for random item keys.
const KEY_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random alphanumeric key of the given length.
pub fn random_key<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| KEY_CHARS[rng.random_range(0..KEY_CHARS.len())] as char)
        .collect()
}

/// Pick one element of a non-empty slice uniformly at random.
///
/// Works for any element type, so every vocabulary (strings, ratings)
/// shares the same strongly-typed draw.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Draw a duplicate-free subset of `items`, between `min_items` and
/// `max_items` elements (inclusive), in random order.
///
/// The whole slice is Fisher-Yates shuffled before taking the prefix, so
/// every element of the subset (including the first) is a uniform draw
/// without replacement.
pub fn random_subset<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
    min_items: usize,
    max_items: usize,
) -> Vec<T> {
    let count = rng.random_range(min_items..=max_items);
    let mut shuffled: Vec<T> = items.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// A random timestamp within the past 365 days, at whole-day granularity.
pub fn random_recent_timestamp<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
    Utc::now() - Duration::days(rng.random_range(0..365))
}

/// Truncate `value` to `decimals` fractional digits (toward zero).
pub fn truncate_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).trunc() / factor
}

/// Draw a uniform value in `[min, max)` truncated to `decimals` digits.
pub fn random_value<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, decimals: u32) -> f64 {
    truncate_decimals(rng.random_range(min..max), decimals)
}
