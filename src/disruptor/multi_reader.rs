//! Fan-in aggregator: one consumer reading across every producer's [`Ring`]

use super::reader::{Reader, NOTHING_TO_READ};
use super::ring::Ring;
use crate::cpu::pause;

/// One [`Reader`] per producer ring, probed in a rotated order so that
/// consumer `c`'s reader `k` starts at producer ring `(k + c) mod W`. This
/// spreads first-probe contention across consumers instead of having every
/// consumer hammer ring 0 first.
pub struct MultiReader<'ring> {
    readers: Vec<(Reader<'ring>, u64)>,
}

impl<'ring> MultiReader<'ring> {
    pub fn new(rings: &'ring [Ring], preferred_ring: usize) -> Self {
        let width = rings.len();
        if width == 0 {
            return Self { readers: Vec::new() };
        }
        let readers = (0..width)
            .map(|k| (Reader::new(&rings[(k + preferred_ring) % width]), 0u64))
            .collect();
        Self { readers }
    }

    /// Probe every inner `Reader` once, in stored rotated order. Returns
    /// the first claimed value and charges that reader's count, or the
    /// sentinel if every ring was empty this round.
    pub fn read(&mut self) -> u64 {
        for (reader, count) in self.readers.iter_mut() {
            let value = reader.read();
            if value != NOTHING_TO_READ {
                *count += 1;
                return value;
            }
        }
        NOTHING_TO_READ
    }

    /// Loop [`Self::read`] with a pause hint between rounds until a value
    /// is returned. Never times out.
    pub fn blocking_read(&mut self) -> u64 {
        loop {
            let value = self.read();
            if value != NOTHING_TO_READ {
                return value;
            }
            pause();
        }
    }

    /// Per-inner-reader `(claimed count, retry1, retry2, multiskip)`, in
    /// rotated order, for the final console report.
    pub fn reader_stats(&self) -> impl Iterator<Item = (u64, u64, u64, u64)> + '_ {
        self.readers
            .iter()
            .map(|(reader, count)| (*count, reader.retry1, reader.retry2, reader.multiskip))
    }
}
