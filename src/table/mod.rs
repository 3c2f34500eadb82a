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

//! Fixed-capacity open-addressing table with double hashing.
//!
//! # Slots
//!
//! The table keeps two parallel arrays, `keys` and `values`, of the same prime length. A slot is
//! empty when its key equals [`EMPTY_KEY`]; an empty slot always holds [`EMPTY_VALUE`]. Both
//! sentinels are therefore reserved and can never be stored: writes using them are ignored.
//!
//! # Probing
//!
//! A key starts probing at `key mod capacity` and advances by a step of `5 - (key mod 5)`, which
//! lies in `1..=5`. Every capacity is a prime no smaller than [`DEFAULT_CAPACITY`], so the step is
//! coprime with the capacity and the probe sequence visits every slot before repeating.
//!
//! # Closure
//!
//! The fill threshold is `floor(capacity * 0.75)`. Once the number of entries reaches it, the
//! table is closed: neither new keys nor updates to existing keys are accepted. There is no
//! deletion and no in-place growth. [`DoubleHashTable::rebuild`] copies the entries into a new,
//! larger table.

mod capacity;
mod map;

pub use capacity::is_prime;
pub use capacity::next_prime;
pub use capacity::select_capacity;
pub use map::DoubleHashTable;
pub use map::PutOutcome;

/// Key sentinel marking an empty slot.
pub const EMPTY_KEY: i32 = i32::MAX;

/// Value sentinel marking an empty slot, also returned by [`DoubleHashTable::get`] on a miss.
pub const EMPTY_VALUE: i64 = i64::MAX;

/// Built-in minimum capacity; must be a prime larger than [`MAX_PROBE_STEP`].
pub const DEFAULT_CAPACITY: usize = 41;

/// Largest capacity request accepted by [`select_capacity`].
pub const MAX_CAPACITY: usize = 1 << 30;

/// Fraction of the capacity that may be filled before the table closes.
pub const LOAD_FACTOR: f64 = 0.75;

/// Modulus of the secondary hash; probe steps range over `1..=MAX_PROBE_STEP`.
const MAX_PROBE_STEP: i64 = 5;
