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

//! Count-Min sketch with approximate heavy-hitter queries over string multisets.
//!
//! The sketch is built once from a batch of string keys and afterwards answers
//! point frequency queries and heavy-hitter enumeration without retaining the
//! multiset itself. Estimates never underestimate the true count and
//! overestimate by at most `epsilon * n` with probability at least `1 - delta`.
//!
//! # Usage
//!
//! ```rust
//! use countmin_heavy_hitters::countmin::CountMinSketch;
//!
//! let items = ["rust", "rust", "sketch"];
//! let sketch = CountMinSketch::build_seeded(0.1, 0.1, items, 7).unwrap();
//!
//! assert!(sketch.approximate_frequency("rust") >= 2);
//!
//! let hitters = sketch.approximate_heavy_hitter(0.5, 0.4);
//! assert!(hitters.contains("rust"));
//! ```

pub mod common;
pub mod corpus;
pub mod countmin;
pub mod error;
pub mod hash;
