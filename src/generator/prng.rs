/*
prng.rs

Copyright 2025 The Hexpath authors

This file is part of Hexpath.

Hexpath is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexpath is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexpath. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Seeded pseudo-random numbers.
//!
//! The generator draws its numbers from the fractional part of `sin(seed) * 10000`, incrementing
//! the seed after each draw. The sequence is poor as far as randomness goes, but it is trivial to
//! reproduce, and it lets every player get the same daily board.

use log::debug;
use rand::Rng;

/// Largest seed (excluded) for the unlimited mode.
const UNLIMITED_SEED_MAX: f64 = 1_000_000.0;

/// Source of random numbers in `[0, 1)`.
///
/// The generator only needs uniform reals. Integer draws are derived from them with the
/// `floor(random() * n)` arithmetic so that a given seed always produces the same board.
pub trait RandomSource {
    /// Next real number in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Random index in `0..n`. Return 0 when `n` is 0.
    fn below(&mut self, n: usize) -> usize {
        let v: usize = (self.next_f64() * n as f64).floor() as usize;
        v.min(n.saturating_sub(1))
    }

    /// Random integer in `low..=high`. The caller ensures that `low <= high`.
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        let span: i32 = high - low + 1;
        let v: i32 = (self.next_f64() * span as f64).floor() as i32;
        low + v.min(span - 1)
    }
}

/// Return the pseudo-random value for the given seed, in `[0, 1)`.
pub fn seeded_random(seed: f64) -> f64 {
    let x: f64 = seed.sin() * 10000.0;
    x - x.floor()
}

/// Deterministic generator.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededRandom {
    seed: f64,
}

impl SeededRandom {
    /// Create a [`SeededRandom`] object that starts at the given seed.
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    /// Create a [`SeededRandom`] object from a fresh random seed.
    pub fn unlimited() -> Self {
        let seed: f64 = rand::rng().random_range(0.0..UNLIMITED_SEED_MAX);
        debug!("Unlimited seed = {seed}");
        Self::new(seed)
    }

    /// Seed for the next draw.
    pub fn seed(&self) -> f64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        let v: f64 = seeded_random(self.seed);
        self.seed += 1.0;
        v
    }
}
