//! Contains [FrequencyTable], the per-symbol occurrence counts
//! a Huffman tree is built from.

use crate::common::NUM_SYMBOLS;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// A symbol that occurs at least once, and how often it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub symbol: u8,
    pub count: u64,
}

/// Occurrence counts for every byte value. Index is the symbol.
#[derive(Clone)]
pub struct FrequencyTable {
    counts: [u64; NUM_SYMBOLS],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.entries().map(|e| (e.symbol, e.count)))
            .finish()
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; NUM_SYMBOLS],
        }
    }

    /// Count every byte in `data`. This is the first of the two passes over the input.
    pub fn from_data(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &symbol in data {
            table.add(symbol);
        }
        table
    }

    pub fn add(&mut self, symbol: u8) {
        self.counts[symbol as usize] += 1;
    }

    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// How many symbols occur at least once.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// All symbols that occur at least once, ascending by symbol value.
    pub fn entries(&self) -> impl Iterator<Item = FrequencyEntry> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(symbol, &count)| FrequencyEntry {
                symbol: symbol as u8,
                count,
            })
    }

    /// All symbols that occur at least once, ascending by count.
    /// Equal counts are ordered by symbol value, so the result never
    /// depends on anything but the counts themselves.
    pub fn sorted_entries(&self) -> Vec<FrequencyEntry> {
        let mut sorted: Vec<FrequencyEntry> = self.entries().collect();
        sorted.sort_by(|left, right| match left.count.cmp(&right.count) {
            Ordering::Equal => left.symbol.cmp(&right.symbol),
            other => other,
        });
        sorted
    }
}
