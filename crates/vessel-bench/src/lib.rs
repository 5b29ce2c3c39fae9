//! Benchmark fixtures for the Vessel containers.
//!
//! - [`filled`]: a vector of `n` sequential values, capacity exactly `n`
//! - [`insert_positions`]: deterministic pseudo-random insertion indices

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vessel_buf::{Transfer, Vector};

/// Build a full vector of `n` strings `"0"`, `"1"`, ...
///
/// Capacity equals length, so the next append reallocates.
pub fn filled<P: Transfer<String>>(n: usize) -> Vector<String, P> {
    let mut v = Vector::with_capacity(n);
    for i in 0..n {
        v.push(i.to_string());
    }
    v
}

/// Generate `count` insertion indices for a vector that starts at
/// `start_len` and grows by one per insertion.
///
/// Index `k` is valid for a vector of length `start_len + k`. Uses a fixed
/// LCG step so every run inserts at the same positions for the same seed.
pub fn insert_positions(start_len: usize, count: usize, seed: u64) -> Vec<usize> {
    let mut state = seed;
    (0..count)
        .map(|k| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as usize) % (start_len + k + 1)
        })
        .collect()
}
