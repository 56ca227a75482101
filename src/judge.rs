//! Generator judge
//!
//! Two multiplicative linear-congruential generators run side by side; the
//! judge counts how many output pairs agree in their lowest bits.

use serde::{Deserialize, Serialize};

use crate::consts::{DIVISOR, FACTOR_A, FACTOR_B};

/// A multiplicative LCG: `current = current * factor % divisor`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generator {
    start: u64,
    current: u64,
    factor: u64,
    divisor: u64,
}

impl Generator {
    pub fn new(start: u64, factor: u64, divisor: u64) -> Self {
        Self {
            start,
            current: start,
            factor,
            divisor,
        }
    }

    /// Generator A with the standard factor and modulus
    pub fn a(start: u64) -> Self {
        Self::new(start, FACTOR_A, DIVISOR)
    }

    /// Generator B with the standard factor and modulus
    pub fn b(start: u64) -> Self {
        Self::new(start, FACTOR_B, DIVISOR)
    }

    /// Advance and return the new value
    pub fn generate(&mut self) -> u64 {
        // Widen so factor * current cannot overflow for any u64 modulus
        let next = u128::from(self.current) * u128::from(self.factor) % u128::from(self.divisor);
        self.current = next as u64;
        self.current
    }

    /// Back to the start value
    pub fn reset(&mut self) {
        self.current = self.start;
    }

    pub fn current(&self) -> u64 {
        self.current
    }
}

impl Iterator for Generator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.generate())
    }
}

/// Lowest `bits` bits of `n`
#[inline]
pub fn lower_bits(n: u64, bits: u32) -> u64 {
    if bits >= u64::BITS {
        n
    } else {
        n & ((1u64 << bits) - 1)
    }
}

/// Count how many of the next `pairs` outputs agree in their lowest `bits` bits
pub fn count_matches(a: &mut Generator, b: &mut Generator, pairs: u64, bits: u32) -> u64 {
    let mut matches = 0;
    for _ in 0..pairs {
        if lower_bits(a.generate(), bits) == lower_bits(b.generate(), bits) {
            matches += 1;
        }
    }
    log::debug!("{} of {} pairs matched on {} bits", matches, pairs, bits);
    matches
}
