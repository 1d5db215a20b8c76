//! Benchmark tuning constants
//!
//! Mirrors the reference constants from the original disruptor-style
//! benchmark: a 1024-slot ring (`RingBits = 10`) with an 8-way (`2^3`)
//! cache-line permutation.

/// Default ring capacity in slots (must be a power of two, >= 16).
pub const RING_CAPACITY: usize = 1024;

/// Width, in bits, of the low field swapped by the index permutation.
/// `2^CACHE_LINE_BITS * 8 bytes == 64 bytes`, one cache line.
pub const CACHE_LINE_BITS: u32 = 3;

/// Bootstrapping slot value. Every slot starts here rather than at 0 so
/// that the first `expected_empty` check never underflows an unsigned
/// comparison.
pub const INITIAL_SLOT_VALUE: u64 = 4;

/// Minimum ring capacity: the index permutation needs `log2(N) > CACHE_LINE_BITS`
/// so the high field is non-empty.
pub const MIN_RING_CAPACITY: usize = 16;

/// Messages per million, for the `<count_in_millions> (<count>)` report format.
pub const MESSAGES_PER_MILLION: f64 = 1_000_000.0;

/// Number of writes/reads per burst in a mixed read/write worker's hot loop.
pub const MIXED_BURST_SIZE: u64 = 10;

static_assertions::const_assert!(RING_CAPACITY >= MIN_RING_CAPACITY);
static_assertions::const_assert!(MIN_RING_CAPACITY.trailing_zeros() > CACHE_LINE_BITS);
static_assertions::const_assert_eq!(INITIAL_SLOT_VALUE % 2, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_capacity_is_power_of_two() {
        assert!(RING_CAPACITY.is_power_of_two());
        assert!(RING_CAPACITY >= MIN_RING_CAPACITY);
    }

    #[test]
    fn cache_line_bits_fit_within_min_capacity() {
        assert!((MIN_RING_CAPACITY.trailing_zeros()) > CACHE_LINE_BITS);
    }

    #[test]
    fn initial_slot_value_is_even_and_nonzero() {
        assert_ne!(INITIAL_SLOT_VALUE, 0);
        assert_eq!(INITIAL_SLOT_VALUE % 2, 0);
    }
}
