// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::error::Error;
use crate::error::ErrorKind;

/// Table geometry derived from the error bounds `(epsilon, delta)`.
///
/// The width `m = floor(2/epsilon) + 1` controls the overestimate magnitude,
/// the depth `k = floor(log2(1/delta))` controls the failure probability, and
/// the modulus `p` is the least prime at or above `m`, used by the affine
/// hash rows. Invariants: `p >= m >= 1` and `k >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: usize,
    modulus: u64,
    depth: usize,
}

impl Dimensions {
    /// Derives the geometry for the given error bounds.
    ///
    /// Returns [`ErrorKind::InvalidParameter`] if `epsilon <= 0`, if `delta`
    /// is outside `(0, 1)`, or if `delta` is too large to yield at least one
    /// hash row. Returns [`ErrorKind::DimensionOverflow`] if the least-prime
    /// scan exhausts `[m, 2m)` without a hit, which for `m >= 2` is
    /// unreachable by Bertrand's postulate but is still checked.
    ///
    /// The depth formula truncates rather than rounding up. This looks like a
    /// bug next to the textbook `ceil(ln(1/delta))` but it is a deliberate
    /// parameter choice of this design and must not be "corrected".
    pub fn derive(epsilon: f64, delta: f64) -> Result<Self, Error> {
        if epsilon.is_nan() || epsilon <= 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                "epsilon must be positive",
            )
            .with_context("epsilon", epsilon));
        }
        if delta.is_nan() || delta <= 0.0 || delta >= 1.0 {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                "delta must be in (0, 1)",
            )
            .with_context("delta", delta));
        }

        let width = (2.0 / epsilon) as usize + 1;
        let depth = (1.0 / delta).log2().floor() as usize;
        if depth < 1 {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                "delta too large: a sketch with zero rows cannot bound error",
            )
            .with_context("delta", delta));
        }

        let modulus = least_prime_at_or_above(width as u64)?;
        Ok(Self {
            width,
            modulus,
            depth,
        })
    }

    /// Returns the table width `m`.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the prime modulus `p` of the affine hash rows.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns the number of hash rows `k`.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Finds the least prime `p >= m` by linear scan over `[m, 2m)`.
///
/// The upper bound is defensive: Bertrand's postulate guarantees a hit for
/// `m >= 2`, but exhausting the scan must surface an error rather than a
/// degenerate modulus.
fn least_prime_at_or_above(m: u64) -> Result<u64, Error> {
    for candidate in m..m.saturating_mul(2) {
        if is_prime(candidate) {
            return Ok(candidate);
        }
    }
    Err(Error::new(
        ErrorKind::DimensionOverflow,
        "no prime found below twice the table width",
    )
    .with_context("width", m))
}

/// Trial-division primality check using the fact that every prime above 3 is
/// of the form `6j - 1` or `6j + 1`.
fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
