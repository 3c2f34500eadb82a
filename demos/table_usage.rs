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

//! Fills a table until it closes, then rebuilds it with room to spare.
//!
//! Run with `cargo run --example table_usage`.

use doublehash::table::DoubleHashTable;
use doublehash::table::EMPTY_VALUE;

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let mut table = DoubleHashTable::new();
    println!(
        "capacity: {}, threshold: {}",
        table.capacity(),
        table.threshold()
    );

    for key in 0..32 {
        table.put(key, i64::from(key * key));
    }
    println!("size after 32 writes: {}", table.size());
    println!("31 missing from the closed table: {}", table.get(31) == EMPTY_VALUE);

    match table.rebuild(table.capacity() * 2) {
        Ok(mut grown) => {
            grown.put(31, 961);
            println!(
                "rebuilt to capacity {}: get(31) = {}",
                grown.capacity(),
                grown.get(31)
            );
        }
        Err(err) => eprintln!("rebuild failed: {err}"),
    }
}
