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

use countmin_heavy_hitters::countmin::Dimensions;
use countmin_heavy_hitters::error::ErrorKind;

#[test]
fn geometry_for_coarse_bounds() {
    let dims = Dimensions::derive(0.5, 0.5).unwrap();
    assert_eq!(dims.width(), 5);
    assert_eq!(dims.modulus(), 5);
    assert_eq!(dims.depth(), 1);
}

#[test]
fn geometry_for_corpus_driver_parameters() {
    // CMS(0.01, 2^-20), the parameters of the heavy_hitters driver.
    let dims = Dimensions::derive(0.01, 2f64.powi(-20)).unwrap();
    assert_eq!(dims.width(), 201);
    assert_eq!(dims.modulus(), 211);
    assert_eq!(dims.depth(), 20);
}

#[test]
fn geometry_for_mid_bounds() {
    let dims = Dimensions::derive(0.1, 0.1).unwrap();
    assert_eq!(dims.width(), 21);
    assert_eq!(dims.modulus(), 23);
    assert_eq!(dims.depth(), 3);
}

#[test]
fn modulus_is_a_prime_at_or_above_width() {
    for epsilon in [0.001, 0.005, 0.02, 0.07, 0.25, 0.5, 1.0] {
        for delta in [0.5, 0.1, 0.01, 2f64.powi(-10)] {
            let dims = Dimensions::derive(epsilon, delta).unwrap();
            assert!(dims.width() >= 1);
            assert!(dims.modulus() >= dims.width() as u64);
            assert!(dims.depth() >= 1);
            assert!(trial_division_prime(dims.modulus()));
        }
    }
}

#[test]
fn depth_formula_truncates() {
    // 1/0.3 gives log2 of about 1.74; the depth formula truncates, never rounds.
    assert_eq!(Dimensions::derive(0.5, 0.3).unwrap().depth(), 1);
    assert_eq!(Dimensions::derive(0.5, 0.25).unwrap().depth(), 2);
    assert_eq!(Dimensions::derive(0.5, 0.2).unwrap().depth(), 2);
}

#[test]
fn rejects_nonpositive_epsilon() {
    for epsilon in [0.0, -0.5, f64::NEG_INFINITY] {
        let err = Dimensions::derive(epsilon, 0.1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }
}

#[test]
fn rejects_delta_outside_unit_interval() {
    for delta in [0.0, -0.1, 1.0, 1.5] {
        let err = Dimensions::derive(0.1, delta).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }
}

#[test]
fn rejects_delta_that_yields_zero_rows() {
    // log2(1/0.6) truncates to zero rows, which cannot bound error.
    let err = Dimensions::derive(0.1, 0.6).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

#[test]
fn nan_bounds_are_rejected() {
    assert!(Dimensions::derive(f64::NAN, 0.1).is_err());
    assert!(Dimensions::derive(0.1, f64::NAN).is_err());
}

fn trial_division_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}
