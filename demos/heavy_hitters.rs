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

//! End-to-end heavy-hitter run over a text corpus.
//!
//! Loads the corpus, builds `CMS(0.01, 2^-20)`, extracts the
//! `(0.04, 0.03)`-heavy hitters, writes the intermediate files, and prints a
//! quality report against the exact frequency table.
//!
//! ```text
//! cargo run --example heavy_hitters -- shakespeare.txt
//! ```

use std::env;
use std::fmt::Write as _;
use std::fs;

use countmin_heavy_hitters::corpus;
use countmin_heavy_hitters::countmin::CountMinSketch;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "shakespeare.txt".to_string());

    let tokens = corpus::load_tokens_from_path(&path)?;
    fs::write("originalS.txt", tokens.join(" "))?;

    let exact = corpus::exact_frequencies(&tokens);
    let mut distinct = String::new();
    writeln!(distinct, "{}", exact.len())?;
    for (key, count) in &exact {
        writeln!(distinct, "{key} {count}")?;
    }
    fs::write("distinctS.txt", distinct)?;

    let sketch = CountMinSketch::build(0.01, 2f64.powi(-20), &tokens)?;
    let hitters = sketch.approximate_heavy_hitter(0.04, 0.03);
    let mut reported: Vec<&str> = hitters.iter().map(String::as_str).collect();
    reported.sort_unstable();
    fs::write("HeavyHitterL.txt", reported.join(" "))?;

    let report = corpus::report(&hitters, &exact, sketch.total_weight());
    println!("{report}");
    println!(
        "sketch geometry: depth {} x modulus {} (width {})",
        sketch.depth(),
        sketch.modulus(),
        sketch.width()
    );
    Ok(())
}
