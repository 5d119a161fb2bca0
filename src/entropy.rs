//! Uncertainty of a belief state, assuming every surviving board is equally
//! likely.

/// `log2(count)`, with an empty set floored to `0.0` bits.
pub fn entropy_bits(count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    libm::log2(count as f64)
}

/// Bits resolved by shrinking a belief state from `before` to `after` boards.
pub fn information_gain(before: usize, after: usize) -> f64 {
    entropy_bits(before) - entropy_bits(after)
}
