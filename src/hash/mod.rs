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

//! String pre-hashing for the affine hash family.
//!
//! Keys are mapped to 64-bit integers before being fed to the per-row affine
//! functions. The mapping is fixed (MurmurHash3 x64_128 with seed 0, first
//! 64-bit word) so that frequency estimates for a given key and hash row are
//! deterministic and portable across platforms.

/// Seed for the pre-hash. Fixed so test vectors are stable.
const PREHASH_SEED: u32 = 0;

/// Maps a key to a 64-bit integer with good avalanche behavior.
pub fn prehash(key: &str) -> u64 {
    let (h1, _) = mur3::murmurhash3_x64_128(key.as_bytes(), PREHASH_SEED);
    h1
}
