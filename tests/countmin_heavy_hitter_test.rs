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

use countmin_heavy_hitters::countmin::CountMinSketch;

/// 50 copies of "hot" plus 50 singleton cold keys; n = 100.
fn skewed_multiset() -> Vec<String> {
    let mut items = vec!["hot".to_string(); 50];
    for i in 0..50 {
        items.push(format!("cold{i:02}"));
    }
    items
}

#[test]
fn includes_key_at_half_of_total() {
    for seed in [2u64, 71, 123456] {
        let sketch = CountMinSketch::build_seeded(0.01, 0.1, skewed_multiset(), seed).unwrap();
        let hitters = sketch.approximate_heavy_hitter(0.3, 0.2);
        assert!(hitters.contains("hot"));
    }
}

#[test]
fn small_multiset_includes_dominant_key() {
    let items = ["a", "a", "a", "b", "b", "c"];
    let sketch = CountMinSketch::build_seeded(0.5, 0.5, items, 17).unwrap();
    let hitters = sketch.approximate_heavy_hitter(0.4, 0.1);
    // "a" has frequency 3 >= 0.4 * 6; "b" or "c" may ride along on
    // collisions but nothing outside the multiset can.
    assert!(hitters.contains("a"));
    for key in &hitters {
        assert!(["a", "b", "c"].contains(&key.as_str()));
    }
}

#[test]
fn never_inserted_keys_are_never_reported() {
    let sketch = CountMinSketch::build_seeded(0.1, 0.1, skewed_multiset(), 31).unwrap();
    for (q, r) in [(0.0, 0.0), (0.01, 0.005), (0.3, 0.2), (0.9, 0.5)] {
        let hitters = sketch.approximate_heavy_hitter(q, r);
        assert!(!hitters.contains("never-inserted"));
        assert!(!hitters.contains(""));
    }
}

#[test]
fn result_is_subset_of_observed_keys() {
    let sketch = CountMinSketch::build_seeded(0.1, 0.1, skewed_multiset(), 4).unwrap();
    let hitters = sketch.approximate_heavy_hitter(0.0, 0.0);
    // Threshold zero admits the whole candidate set and nothing more.
    assert_eq!(hitters.len(), sketch.num_distinct());
}

#[test]
fn rare_key_is_excluded_with_deep_sketch() {
    // Twenty rows over a 211-bucket modulus; a singleton surviving the
    // minimum at 30 requires a collision in every row, which no seed here
    // comes close to producing.
    let mut items = skewed_multiset();
    items.push("rare".to_string());
    let sketch = CountMinSketch::build_seeded(0.01, 2f64.powi(-20), items, 55).unwrap();
    let hitters = sketch.approximate_heavy_hitter(0.3, 0.2);
    assert!(hitters.contains("hot"));
    assert!(!hitters.contains("rare"));
}

#[test]
fn empty_sketch_reports_nothing() {
    let sketch = CountMinSketch::build_seeded(0.5, 0.5, Vec::<String>::new(), 2).unwrap();
    assert!(sketch.approximate_heavy_hitter(0.4, 0.1).is_empty());
    assert!(sketch.approximate_heavy_hitter(0.01, 0.001).is_empty());
}

#[test]
fn heavy_hitter_output_is_stable_for_one_sketch() {
    let sketch = CountMinSketch::build_seeded(0.1, 0.1, skewed_multiset(), 8).unwrap();
    let first = sketch.approximate_heavy_hitter(0.3, 0.2);
    let second = sketch.approximate_heavy_hitter(0.3, 0.2);
    assert_eq!(first, second);
}
