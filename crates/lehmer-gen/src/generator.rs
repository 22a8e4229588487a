//! Recurrence evaluation and first-repetition tracking.

use std::collections::HashMap;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{LehmerError, Result};
use crate::sequence::{LehmerSequence, Period};

/// Parameters of `X(n+1) = (A * X(n) + C) mod M`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LehmerParams {
    /// Multiplier `A`.
    pub a: u64,
    /// Increment `C`.
    pub c: u64,
    /// Modulus `M`, must be non-zero.
    pub m: u64,
    /// Seed `X0`.
    pub x0: u64,
    /// Number of values to produce, seed included.
    pub count: usize,
}

impl Default for LehmerParams {
    fn default() -> Self {
        Self {
            a: 32,
            c: 2,
            m: 1023,
            x0: 23,
            count: 16,
        }
    }
}

/// Deterministic generator for a validated parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LehmerGenerator {
    params: LehmerParams,
}

impl LehmerGenerator {
    /// Validates `params` and builds a generator.
    pub fn new(params: LehmerParams) -> Result<Self> {
        if params.m == 0 {
            return Err(LehmerError::ZeroModulus);
        }
        Ok(Self { params })
    }

    /// Builds a generator whose modulus is non-zero by construction.
    pub const fn with_modulus(a: u64, c: u64, m: NonZeroU64, x0: u64, count: usize) -> Self {
        Self {
            params: LehmerParams {
                a,
                c,
                m: m.get(),
                x0,
                count,
            },
        }
    }

    /// Parameters this generator was built with.
    pub fn params(&self) -> &LehmerParams {
        &self.params
    }

    /// Applies the recurrence once. Intermediate products are computed in
    /// 128 bits, so no parameter combination overflows.
    #[inline]
    pub fn step(&self, current: u64) -> u64 {
        let LehmerParams { a, c, m, .. } = self.params;
        let next = (u128::from(a) * u128::from(current) + u128::from(c)) % u128::from(m);
        // next < m <= u64::MAX
        next as u64
    }

    /// Unbounded iterator over the sequence, starting at the seed.
    pub fn values(&self) -> Values {
        Values {
            generator: *self,
            next: Some(self.params.x0),
        }
    }

    /// Generates `count` values and detects the first repetition.
    pub fn generate(&self) -> LehmerSequence {
        self.generate_with_progress(|_| {})
    }

    /// Same as [`generate`](Self::generate), reporting progress in percent.
    ///
    /// `progress` receives non-decreasing values below 100 as elements are
    /// produced and exactly one final 100 once generation completes.
    pub fn generate_with_progress<F>(&self, mut progress: F) -> LehmerSequence
    where
        F: FnMut(u8),
    {
        let count = self.params.count;
        let mut values = Vec::with_capacity(count);
        let mut repetition = None;

        if count > 0 {
            let mut first_seen: HashMap<u64, usize> = HashMap::new();
            let mut current = self.params.x0;
            values.push(current);
            first_seen.insert(current, 0);

            for index in 1..count {
                current = self.step(current);
                values.push(current);
                progress(percent(index, count));

                if repetition.is_some() {
                    continue;
                }
                match first_seen.get(&current) {
                    Some(&first_index) => {
                        let found = Period {
                            length: index - first_index,
                            first_index,
                            detected_at: index,
                        };
                        debug!(
                            length = found.length,
                            first_index,
                            detected_at = index,
                            "Lehmer period detected"
                        );
                        repetition = Some(found);
                        first_seen.clear();
                    }
                    None => {
                        first_seen.insert(current, index);
                    }
                }
            }
        }

        trace!(count, periodic = repetition.is_some(), "Lehmer sequence generated");
        progress(100);

        LehmerSequence { values, repetition }
    }
}

/// Unbounded iterator returned by [`LehmerGenerator::values`].
#[derive(Clone, Debug)]
pub struct Values {
    generator: LehmerGenerator,
    next: Option<u64>,
}

impl Iterator for Values {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = Some(self.generator.step(current));
        Some(current)
    }
}

fn percent(done: usize, total: usize) -> u8 {
    // done < total, so the quotient stays below 100
    (done as u128 * 100 / total as u128) as u8
}
