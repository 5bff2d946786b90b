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

//! Corpus collaborators around the sketch: token loading, exact reference
//! counting, and heavy-hitter quality reporting.
//!
//! None of this feeds back into the sketch. The loader supplies the input
//! multiset, the exact counter and reporter only validate what the
//! heavy-hitter query returned.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use crate::error::Error;
use crate::error::ErrorKind;

/// Tokens shorter than this are dropped by the loader.
const MIN_TOKEN_CHARS: usize = 3;

/// Reads whitespace-separated tokens from a text source.
///
/// Tokens with fewer than three characters are dropped, as are the literal
/// tokens `"the"` and `"The"`. The latter is an exact case-sensitive match,
/// not a general stop-word filter: `"THE"` and `"then"` are both kept.
pub fn load_tokens<R: Read>(source: R) -> io::Result<Vec<String>> {
    let reader = BufReader::new(source);
    let mut tokens = Vec::new();
    for line in reader.lines() {
        for token in line?.split_whitespace() {
            if keep_token(token) {
                tokens.push(token.to_string());
            }
        }
    }
    Ok(tokens)
}

/// Reads tokens from a file path, applying the same filter as [`load_tokens`].
pub fn load_tokens_from_path(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| {
        Error::new(ErrorKind::Io, "failed to open corpus file")
            .with_context("path", path.display())
            .set_source(err)
    })?;
    load_tokens(file).map_err(|err| {
        Error::new(ErrorKind::Io, "failed to read corpus file")
            .with_context("path", path.display())
            .set_source(err)
    })
}

fn keep_token(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_CHARS && token != "the" && token != "The"
}

/// Computes the exact frequency of every key in the multiset.
///
/// This is the reference the sketch is validated against; the sketch itself
/// never consumes it.
pub fn exact_frequencies<I, S>(items: I) -> HashMap<String, u64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Tally of a heavy-hitter result against the exact frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdReport {
    /// Reported keys whose exact frequency is at least `0.04 * n`.
    pub at_or_above_4pct: usize,
    /// Reported keys whose exact frequency is at least `0.025 * n`.
    pub at_or_above_2_5pct: usize,
    /// Reported keys whose exact frequency is below `0.04 * n`.
    pub below_4pct: usize,
    /// Reported keys whose exact frequency is below `0.025 * n`.
    pub below_2_5pct: usize,
    /// Total number of tokens fed to the sketch.
    pub total_items: u64,
    /// Number of distinct tokens fed to the sketch.
    pub distinct_items: usize,
}

/// Tallies how the reported heavy hitters fall against the `0.04 * n` and
/// `0.025 * n` exact-frequency thresholds.
///
/// A reported key missing from the exact table counts as frequency zero; with
/// a correctly built sketch that cannot happen, since candidates come from
/// the observed key universe.
pub fn report(
    hitters: &HashSet<String>,
    exact: &HashMap<String, u64>,
    total_items: u64,
) -> ThresholdReport {
    let upper = 0.04 * total_items as f64;
    let lower = 0.025 * total_items as f64;
    let mut tally = ThresholdReport {
        at_or_above_4pct: 0,
        at_or_above_2_5pct: 0,
        below_4pct: 0,
        below_2_5pct: 0,
        total_items,
        distinct_items: exact.len(),
    };
    for key in hitters {
        let count = exact.get(key).copied().unwrap_or(0) as f64;
        if count >= upper {
            tally.at_or_above_4pct += 1;
        } else {
            tally.below_4pct += 1;
        }
        if count >= lower {
            tally.at_or_above_2_5pct += 1;
        } else {
            tally.below_2_5pct += 1;
        }
    }
    tally
}

impl fmt::Display for ThresholdReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "reported keys with exact frequency >= 0.04*n:  {}",
            self.at_or_above_4pct
        )?;
        writeln!(
            f,
            "reported keys with exact frequency >= 0.025*n: {}",
            self.at_or_above_2_5pct
        )?;
        writeln!(
            f,
            "reported keys with exact frequency <  0.04*n:  {}",
            self.below_4pct
        )?;
        writeln!(
            f,
            "reported keys with exact frequency <  0.025*n: {}",
            self.below_2_5pct
        )?;
        writeln!(f, "total tokens:    {}", self.total_items)?;
        write!(f, "distinct tokens: {}", self.distinct_items)
    }
}
