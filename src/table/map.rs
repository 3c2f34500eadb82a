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

//! Double hashing table for `i32` keys and `i64` values.

use crate::error::Error;
use crate::error::ErrorKind;
use crate::table::DEFAULT_CAPACITY;
use crate::table::EMPTY_KEY;
use crate::table::EMPTY_VALUE;
use crate::table::LOAD_FACTOR;
use crate::table::MAX_PROBE_STEP;
use crate::table::capacity::capacity_for;
use crate::table::select_capacity;

/// Effect of a successful [`DoubleHashTable::try_put`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PutOutcome {
    /// The key was absent and now occupies a previously empty slot.
    Inserted,
    /// The key was present and its value was overwritten in place.
    Updated,
}

/// Fixed-capacity open-addressing table with double hashing.
///
/// The capacity is fixed for the lifetime of the table. Entries cannot be removed, and once
/// [`size`](Self::size) reaches [`threshold`](Self::threshold) every further write is ignored,
/// including updates of keys already present.
///
/// The table is not synchronized. Wrap it in a lock to share it between threads, treating
/// [`put`](Self::put) as a writer and the accessors as readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleHashTable {
    keys: Vec<i32>,
    values: Vec<i64>,
    size: usize,
    threshold: usize,
}

impl Default for DoubleHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DoubleHashTable {
    /// Creates a table with the default capacity of 41 slots.
    pub fn new() -> Self {
        Self::with_prime_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table whose capacity is selected from `requested`.
    ///
    /// Requests not above the default capacity yield the default; composite requests are
    /// raised to the next prime. Requests above [`MAX_CAPACITY`](crate::table::MAX_CAPACITY)
    /// are lowered to it; use [`try_with_capacity`](Self::try_with_capacity) to reject them
    /// instead.
    pub fn with_capacity(requested: usize) -> Self {
        Self::with_prime_capacity(capacity_for(requested))
    }

    /// Creates a table whose capacity is selected from `requested`, failing with
    /// [`ErrorKind::ConfigInvalid`] when the request is too large.
    pub fn try_with_capacity(requested: usize) -> Result<Self, Error> {
        let capacity = select_capacity(Some(requested))?;
        Ok(Self::with_prime_capacity(capacity))
    }

    fn with_prime_capacity(capacity: usize) -> Self {
        let threshold = (capacity as f64 * LOAD_FACTOR) as usize;
        Self {
            keys: vec![EMPTY_KEY; capacity],
            values: vec![EMPTY_VALUE; capacity],
            size: 0,
            threshold,
        }
    }

    /// Inserts or updates `key`.
    ///
    /// The call is silently ignored if the table is closed, if `key` is [`EMPTY_KEY`], or if
    /// `value` is [`EMPTY_VALUE`]. Use [`try_put`](Self::try_put) to learn whether the write
    /// took effect. Ignored writes do not allocate.
    pub fn put(&mut self, key: i32, value: i64) {
        let _ = self.write(key, value);
    }

    /// Inserts or updates `key`, reporting what happened.
    ///
    /// On error the table is left unchanged. Closure is checked first, so writing a sentinel to
    /// a closed table reports [`ErrorKind::TableClosed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use doublehash::error::ErrorKind;
    /// use doublehash::table::DoubleHashTable;
    /// use doublehash::table::EMPTY_KEY;
    /// use doublehash::table::PutOutcome;
    ///
    /// let mut table = DoubleHashTable::new();
    /// assert_eq!(table.try_put(8, 80).unwrap(), PutOutcome::Inserted);
    /// assert_eq!(table.try_put(8, 800).unwrap(), PutOutcome::Updated);
    /// assert_eq!(table.try_put(EMPTY_KEY, 1).unwrap_err().kind(), ErrorKind::ReservedKey);
    /// ```
    pub fn try_put(&mut self, key: i32, value: i64) -> Result<PutOutcome, Error> {
        self.write(key, value).map_err(|kind| match kind {
            ErrorKind::TableClosed => Error::new(kind, "hash table is filled")
                .with_context("key", key)
                .with_context("size", self.size)
                .with_context("threshold", self.threshold),
            ErrorKind::ReservedKey => Error::new(kind, "the empty-slot key cannot be stored"),
            _ => Error::new(kind, "the empty-slot value cannot be stored").with_context("key", key),
        })
    }

    /// Shared write path of `put` and `try_put`; reports rejections as a bare [`ErrorKind`].
    fn write(&mut self, key: i32, value: i64) -> Result<PutOutcome, ErrorKind> {
        if self.is_closed() {
            tracing::info!(
                key,
                size = self.size,
                threshold = self.threshold,
                "hash table is filled, write ignored"
            );
            return Err(ErrorKind::TableClosed);
        }
        if key == EMPTY_KEY {
            tracing::debug!(key, "ignoring write of the reserved empty key");
            return Err(ErrorKind::ReservedKey);
        }
        if value == EMPTY_VALUE {
            tracing::debug!(key, value, "ignoring write of the reserved empty value");
            return Err(ErrorKind::ReservedValue);
        }

        let probe = self.hash_probe(key);
        if self.keys[probe] == key {
            self.values[probe] = value;
            Ok(PutOutcome::Updated)
        } else {
            self.keys[probe] = key;
            self.values[probe] = value;
            self.size += 1;
            Ok(PutOutcome::Inserted)
        }
    }

    /// Returns the value stored for `key`, or [`EMPTY_VALUE`] if the key is absent.
    pub fn get(&self, key: i32) -> i64 {
        self.lookup(key).unwrap_or(EMPTY_VALUE)
    }

    /// Returns the value stored for `key`, or `None` if the key is absent.
    pub fn lookup(&self, key: i32) -> Option<i64> {
        if key == EMPTY_KEY {
            return None;
        }
        let probe = self.hash_probe(key);
        if self.keys[probe] == key {
            Some(self.values[probe])
        } else {
            None
        }
    }

    /// Returns whether `key` is stored in the table.
    pub fn contains_key(&self, key: i32) -> bool {
        self.lookup(key).is_some()
    }

    /// Returns the number of stored entries.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of entries at which the table closes.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the number of slots.
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    /// Returns whether no entry has been stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns whether the table has reached its threshold and ignores all writes.
    pub fn is_closed(&self) -> bool {
        self.size == self.threshold
    }

    /// Returns how many more keys can be inserted before the table closes.
    pub fn remaining(&self) -> usize {
        self.threshold - self.size
    }

    /// Copies every entry into a new table sized from `requested`.
    ///
    /// The new capacity is selected exactly as in [`with_capacity`](Self::with_capacity). This
    /// table is left untouched, so a closed table can be replaced by a larger open one.
    ///
    /// Fails with [`ErrorKind::ConfigInvalid`] if the request is too large or if the new table's
    /// threshold cannot hold the current entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use doublehash::table::DoubleHashTable;
    ///
    /// let mut table = DoubleHashTable::new();
    /// for key in 0..30 {
    ///     table.put(key, i64::from(key) * 10);
    /// }
    /// assert!(table.is_closed());
    ///
    /// let mut grown = table.rebuild(100).unwrap();
    /// assert_eq!(grown.capacity(), 101);
    /// grown.put(30, 300);
    /// assert_eq!(grown.get(30), 300);
    /// assert_eq!(grown.get(29), 290);
    /// ```
    pub fn rebuild(&self, requested: usize) -> Result<Self, Error> {
        let mut table = Self::try_with_capacity(requested)?;
        if table.threshold < self.size {
            return Err(Error::new(
                ErrorKind::ConfigInvalid,
                "rebuilt table cannot hold the current entries",
            )
            .with_context("requested", requested)
            .with_context("threshold", table.threshold)
            .with_context("size", self.size));
        }
        for (&key, &value) in self.keys.iter().zip(self.values.iter()) {
            if key != EMPTY_KEY {
                table.try_put(key, value)?;
            }
        }
        tracing::debug!(
            from = self.capacity(),
            to = table.capacity(),
            size = table.size,
            "rebuilt hash table"
        );
        Ok(table)
    }

    /// Walks the probe sequence of `key` and returns the first slot that either holds `key` or is
    /// empty.
    ///
    /// Terminates because the step is coprime with the prime capacity and `size <= threshold <
    /// capacity` keeps at least one slot empty.
    fn hash_probe(&self, key: i32) -> usize {
        let capacity = self.keys.len();
        let step = probe_step(key);
        let mut probe = primary_hash(key, capacity);
        let mut drift: usize = 1;
        while self.keys[probe] != EMPTY_KEY && self.keys[probe] != key {
            probe = (probe + step) % capacity;
            drift += 1;
            debug_assert!(drift <= capacity, "probe sequence revisited a slot");
        }
        probe
    }
}

/// Starting slot: `key mod capacity`, non-negative for negative keys.
#[inline]
fn primary_hash(key: i32, capacity: usize) -> usize {
    i64::from(key).rem_euclid(capacity as i64) as usize
}

/// Probe increment in `1..=MAX_PROBE_STEP`.
#[inline]
fn probe_step(key: i32) -> usize {
    (MAX_PROBE_STEP - i64::from(key).rem_euclid(MAX_PROBE_STEP)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hash_is_non_negative() {
        assert_eq!(primary_hash(0, 41), 0);
        assert_eq!(primary_hash(45, 41), 4);
        assert_eq!(primary_hash(-1, 41), 40);
        assert_eq!(primary_hash(i32::MIN, 41), i64::from(i32::MIN).rem_euclid(41) as usize);
    }

    #[test]
    fn test_probe_step_range() {
        assert_eq!(probe_step(0), 5);
        assert_eq!(probe_step(4), 1);
        assert_eq!(probe_step(-1), 1);
        assert_eq!(probe_step(-5), 5);
        for key in -100..100 {
            let step = probe_step(key);
            assert!((1..=5).contains(&step), "step {step} for key {key}");
        }
    }

    #[test]
    fn test_colliding_keys_follow_the_step() {
        // 8 and 49 both start at slot 8; 49 mod 5 == 4 gives a step of 1.
        let mut table = DoubleHashTable::new();
        table.put(8, 80);
        table.put(49, 490);
        assert_eq!(table.keys[8], 8);
        assert_eq!(table.keys[9], 49);
        assert_eq!(table.get(49), 490);
    }

    #[test]
    fn test_probe_wraps_around() {
        // 40 starts at the last slot, 81 collides there and wraps with a step of 4.
        let mut table = DoubleHashTable::new();
        table.put(40, 1);
        table.put(81, 2);
        assert_eq!(table.keys[40], 40);
        assert_eq!(table.keys[3], 81);
    }

    #[test]
    fn test_empty_slots_hold_both_sentinels() {
        let mut table = DoubleHashTable::with_capacity(100);
        table.put(3, 30);
        for (key, value) in table.keys.iter().zip(table.values.iter()) {
            assert_eq!(*key == EMPTY_KEY, *value == EMPTY_VALUE);
        }
    }
}
