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

use std::collections::HashSet;

use crate::common::RandomSource;
use crate::common::XorShift64;
use crate::countmin::dimension::Dimensions;
use crate::error::Error;
use crate::hash::prehash;

/// Sentinel used to pad short keys in the per-row key transform.
const PAD_CHAR: char = '$';

/// One affine hash function `h(v) = (a*v + b) mod p` with `a` in `[1, p-1]`
/// and `b` in `[0, p-1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashRow {
    a: u64,
    b: u64,
}

impl HashRow {
    fn sample<R: RandomSource>(modulus: u64, rng: &mut R) -> Self {
        let a = 1 + rng.next_u64_below(modulus - 1);
        let b = rng.next_u64_below(modulus);
        Self { a, b }
    }

    /// Returns the multiplier `a`.
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Returns the offset `b`.
    pub fn b(&self) -> u64 {
        self.b
    }

    fn bucket(&self, value: u64, modulus: u64) -> usize {
        // Widen to u128 so a*v+b cannot wrap before the reduction.
        let affine = (self.a as u128) * (value as u128) + self.b as u128;
        (affine % modulus as u128) as usize
    }
}

/// Count-Min sketch over a multiset of string keys.
///
/// Built once from a batch of items; read-only afterwards. Queries take
/// `&self` and touch no interior mutability, so a built sketch may be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct CountMinSketch {
    dims: Dimensions,
    rows: Vec<HashRow>,
    /// Row-major `depth * modulus` counter grid.
    table: Vec<u64>,
    /// Distinct keys seen during the build. Drives heavy-hitter enumeration
    /// only; the frequency query never reads it.
    universe: HashSet<String>,
    total_weight: u64,
}

impl CountMinSketch {
    /// Builds a sketch from error bounds and a batch of items, drawing the
    /// hash family from an entropy-seeded generator.
    pub fn build<I, S>(epsilon: f64, delta: f64, items: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with_rng(epsilon, delta, items, &mut XorShift64::default())
    }

    /// Builds a sketch with a fixed seed, for reproducible hash families.
    pub fn build_seeded<I, S>(epsilon: f64, delta: f64, items: I, seed: u64) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with_rng(epsilon, delta, items, &mut XorShift64::seeded(seed))
    }

    /// Builds a sketch, sampling the hash family from the provided source.
    ///
    /// Construction either completes or fails; no partially built sketch is
    /// ever returned. Returns [`ErrorKind::InvalidParameter`] for bounds the
    /// dimensioner rejects.
    ///
    /// [`ErrorKind::InvalidParameter`]: crate::error::ErrorKind::InvalidParameter
    pub fn build_with_rng<I, S, R>(
        epsilon: f64,
        delta: f64,
        items: I,
        rng: &mut R,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: RandomSource,
    {
        let dims = Dimensions::derive(epsilon, delta)?;
        let modulus = dims.modulus();
        let depth = dims.depth();
        let rows: Vec<HashRow> = (0..depth).map(|_| HashRow::sample(modulus, rng)).collect();

        let mut table = vec![0u64; depth * modulus as usize];
        let mut universe = HashSet::new();
        let mut total_weight = 0u64;
        for item in items {
            let key = item.as_ref();
            for (i, row) in rows.iter().enumerate() {
                let cell = row.bucket(prehash(&transform_key(key, i, depth)), modulus);
                table[i * modulus as usize + cell] += 1;
            }
            total_weight += 1;
            if !universe.contains(key) {
                universe.insert(key.to_string());
            }
        }

        Ok(Self {
            dims,
            rows,
            table,
            universe,
            total_weight,
        })
    }

    /// Returns the approximate frequency of `key` in the original multiset.
    ///
    /// The answer is the minimum of the addressed counters across all rows.
    /// It never underestimates the true multiplicity and overestimates by at
    /// most `epsilon * n` with probability at least `1 - delta` over the
    /// random choice of hash rows. Keys never inserted may still report a
    /// nonzero count due to collisions.
    pub fn approximate_frequency(&self, key: &str) -> u64 {
        let modulus = self.dims.modulus();
        let depth = self.dims.depth();
        let mut count = u64::MAX;
        for (i, row) in self.rows.iter().enumerate() {
            let cell = row.bucket(prehash(&transform_key(key, i, depth)), modulus);
            count = count.min(self.table[i * modulus as usize + cell]);
        }
        count
    }

    /// Returns the approximate `(q, r)`-heavy hitters: every distinct key
    /// whose estimated frequency is at least `q * n`.
    ///
    /// Callers are expected to choose `q >= r + epsilon`; with that gap the
    /// one-sided error bound gives the two-sided guarantee that keys with
    /// true frequency `>= q*n` are included and keys below `r*n` excluded.
    /// The precondition is the caller's responsibility and is not enforced
    /// in release builds. Iteration order of the result is unspecified.
    pub fn approximate_heavy_hitter(&self, q: f64, r: f64) -> HashSet<String> {
        debug_assert!(q >= r, "q must be at least r");
        let threshold = q * self.total_weight as f64;
        self.universe
            .iter()
            .filter(|key| self.approximate_frequency(key) as f64 >= threshold)
            .cloned()
            .collect()
    }

    /// Returns the number of hash rows `k`.
    pub fn depth(&self) -> usize {
        self.dims.depth()
    }

    /// Returns the table width `m`.
    pub fn width(&self) -> usize {
        self.dims.width()
    }

    /// Returns the prime modulus `p` used by the hash rows.
    pub fn modulus(&self) -> u64 {
        self.dims.modulus()
    }

    /// Returns the total number of items inserted at build time.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Returns the number of distinct keys observed at build time.
    pub fn num_distinct(&self) -> usize {
        self.universe.len()
    }

    /// Returns true if the sketch was built from an empty multiset.
    pub fn is_empty(&self) -> bool {
        self.total_weight == 0
    }

    /// Returns the sampled hash rows.
    pub fn rows(&self) -> &[HashRow] {
        &self.rows
    }
}

/// Per-row key transform that de-correlates the single pre-hash across rows.
///
/// The key is padded on the right with `$` until its length reaches the
/// sketch depth, then the character at index `row` of the padded key is
/// appended. Padding guarantees `row < depth <= len`, so the index is always
/// in range. The padding length depends on the depth `k`, not on the table
/// width.
fn transform_key(key: &str, row: usize, depth: usize) -> String {
    let mut padded: Vec<char> = key.chars().collect();
    while padded.len() < depth {
        padded.push(PAD_CHAR);
    }
    let mut out = String::with_capacity(key.len() + depth + 4);
    out.extend(padded.iter());
    out.push(padded[row]);
    out
}
