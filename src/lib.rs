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

//! A fixed-capacity hash table mapping `i32` keys to `i64` values.
//!
//! The table resolves collisions with open addressing and double hashing. Its slot count is a
//! prime chosen once at construction, and it never grows: once the number of entries reaches the
//! fill threshold (75% of the capacity) the table stops accepting writes. Callers that need more
//! room build a larger table with [`table::DoubleHashTable::rebuild`].
//!
//! # Usage
//!
//! ```rust
//! use doublehash::table::DoubleHashTable;
//! use doublehash::table::EMPTY_VALUE;
//!
//! let mut table = DoubleHashTable::new();
//! table.put(8, 80);
//! table.put(13, 130);
//!
//! assert_eq!(table.get(8), 80);
//! assert_eq!(table.get(25), EMPTY_VALUE);
//! assert_eq!(table.size(), 2);
//! assert_eq!(table.threshold(), 30);
//! ```

pub mod error;
pub mod table;
