// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Serialize;

use crate::schedule::is_due;
use crate::types::difficulty::Difficulty;
use crate::types::item::Item;
use crate::types::timestamp::Timestamp;
use crate::view::TabCounts;

/// Summary figures for the collection.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Stats {
    /// Number of items in the collection.
    pub total: usize,
    /// Active items whose review date has passed.
    pub due: usize,
    /// Items added as Hard.
    pub hard: usize,
    /// The highest retry count of any item, or zero.
    pub max_retries: u32,
    pub tabs: TabCounts,
}

impl Stats {
    pub fn compute(items: &[Item], now: Timestamp) -> Self {
        Stats {
            total: items.len(),
            due: items.iter().filter(|item| is_due(item, now)).count(),
            hard: items
                .iter()
                .filter(|item| item.difficulty == Difficulty::Hard)
                .count(),
            max_retries: items.iter().map(|item| item.retry_count).max().unwrap_or(0),
            tabs: TabCounts::count(items, now),
        }
    }
}
