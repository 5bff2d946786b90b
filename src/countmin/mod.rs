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

//! Count-Min sketch built from a batch of string keys.
//!
//! The sketch answers point frequency queries and heavy-hitter enumeration
//! over the original multiset using a `k x p` counter grid, where `k` rows of
//! affine hashes over `Z_p` are sampled once at construction. Estimates are
//! one-sided: never below the true count, above it by at most `epsilon * n`
//! with probability at least `1 - delta`.
//!
//! # Usage
//!
//! ```rust
//! use countmin_heavy_hitters::countmin::CountMinSketch;
//!
//! let items = ["a", "a", "a", "b", "b", "c"];
//! let sketch = CountMinSketch::build_seeded(0.5, 0.5, items, 1).unwrap();
//!
//! assert!(sketch.approximate_frequency("a") >= 3);
//! assert!(sketch.approximate_heavy_hitter(0.4, 0.1).contains("a"));
//! ```
//!
//! # Notes
//!
//! - The sketch is immutable once built; there is no incremental update path.
//! - Distinct keys seen at build time are retained to drive heavy-hitter
//!   enumeration. This trades the sub-linear space ideal for exact candidate
//!   coverage in the batch setting.

mod dimension;
mod sketch;

pub use self::dimension::Dimensions;
pub use self::sketch::CountMinSketch;
pub use self::sketch::HashRow;
