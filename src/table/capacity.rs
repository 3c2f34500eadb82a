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

//! Prime capacity selection.

use crate::error::Error;
use crate::error::ErrorKind;
use crate::table::DEFAULT_CAPACITY;
use crate::table::MAX_CAPACITY;

/// Returns whether `number` is prime, by trial division up to its integer square root.
pub fn is_prime(number: usize) -> bool {
    if number < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor <= number / divisor {
        if number % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Returns the smallest prime strictly greater than `number`.
///
/// # Panics
///
/// Panics if no such prime fits in `usize`.
pub fn next_prime(number: usize) -> usize {
    let mut candidate = number
        .checked_add(1)
        .expect("no prime above usize::MAX");
    while !is_prime(candidate) {
        candidate = candidate
            .checked_add(1)
            .expect("next prime overflows usize");
    }
    candidate
}

/// Selects the slot count for a table.
///
/// * `None`, or any request not above [`DEFAULT_CAPACITY`], yields [`DEFAULT_CAPACITY`].
/// * A prime request is returned unchanged.
/// * A composite request is raised to the next prime.
///
/// Requests above [`MAX_CAPACITY`] are rejected with [`ErrorKind::ConfigInvalid`].
///
/// # Examples
///
/// ```
/// use doublehash::table::select_capacity;
///
/// assert_eq!(select_capacity(None).unwrap(), 41);
/// assert_eq!(select_capacity(Some(10)).unwrap(), 41);
/// assert_eq!(select_capacity(Some(50)).unwrap(), 53);
/// assert_eq!(select_capacity(Some(53)).unwrap(), 53);
/// ```
pub fn select_capacity(requested: Option<usize>) -> Result<usize, Error> {
    let Some(requested) = requested else {
        return Ok(DEFAULT_CAPACITY);
    };
    if requested > MAX_CAPACITY {
        return Err(
            Error::new(ErrorKind::ConfigInvalid, "requested capacity is too large")
                .with_context("requested", requested)
                .with_context("max_capacity", MAX_CAPACITY),
        );
    }
    Ok(capacity_for(requested))
}

/// Infallible sizing used by [`DoubleHashTable::with_capacity`](crate::table::DoubleHashTable):
/// requests above [`MAX_CAPACITY`] are lowered to it before the prime is selected.
pub(crate) fn capacity_for(requested: usize) -> usize {
    let requested = requested.min(MAX_CAPACITY);
    if requested <= DEFAULT_CAPACITY {
        DEFAULT_CAPACITY
    } else if is_prime(requested) {
        requested
    } else {
        next_prime(requested)
    }
}
