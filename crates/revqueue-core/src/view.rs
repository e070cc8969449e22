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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

use crate::error::ErrorReport;
use crate::schedule::is_due;
use crate::schedule::is_upcoming;
use crate::types::item::Item;
use crate::types::timestamp::Timestamp;

/// The three buckets every item falls into.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Due,
    Upcoming,
    Completed,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Due, Tab::Upcoming, Tab::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Due => "due",
            Tab::Upcoming => "upcoming",
            Tab::Completed => "completed",
        }
    }

    /// Whether `item` belongs in this tab at `now`.
    pub fn contains(self, item: &Item, now: Timestamp) -> bool {
        match self {
            Tab::Due => is_due(item, now),
            Tab::Upcoming => is_upcoming(item, now),
            Tab::Completed => item.is_completed(),
        }
    }

    /// The tab an item falls into at `now`.
    pub fn of(item: &Item, now: Timestamp) -> Tab {
        if item.is_completed() {
            Tab::Completed
        } else if is_due(item, now) {
            Tab::Due
        } else {
            Tab::Upcoming
        }
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Tab {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "due" => Ok(Tab::Due),
            "upcoming" => Ok(Tab::Upcoming),
            "completed" | "solved" => Ok(Tab::Completed),
            _ => Err(ErrorReport::new(format!("invalid tab: {value}"))),
        }
    }
}

/// Case-insensitive substring match against name or topic. An empty term
/// matches everything.
pub fn matches_search(item: &Item, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    item.name.to_lowercase().contains(&term)
        || item
            .topic
            .as_ref()
            .is_some_and(|topic| topic.to_lowercase().contains(&term))
}

/// The items shown for `tab` at `now`, after the search filter, in display
/// order.
pub fn project<'a>(
    items: &'a [Item],
    now: Timestamp,
    tab: Tab,
    search: Option<&str>,
) -> Vec<&'a Item> {
    let term = search.unwrap_or("");
    let mut list: Vec<&Item> = items
        .iter()
        .filter(|item| matches_search(item, term))
        .filter(|item| tab.contains(item, now))
        .collect();
    match tab {
        Tab::Due | Tab::Upcoming => list.sort_by_key(|item| item.next_review_date),
        Tab::Completed => list.sort_by(|a, b| b.added_date.cmp(&a.added_date)),
    }
    list
}

/// Number of items per tab over the whole collection, ignoring search.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct TabCounts {
    pub due: usize,
    pub upcoming: usize,
    pub completed: usize,
}

impl TabCounts {
    pub fn count(items: &[Item], now: Timestamp) -> Self {
        let mut counts = TabCounts::default();
        for item in items {
            match Tab::of(item, now) {
                Tab::Due => counts.due += 1,
                Tab::Upcoming => counts.upcoming += 1,
                Tab::Completed => counts.completed += 1,
            }
        }
        counts
    }

    pub fn get(&self, tab: Tab) -> usize {
        match tab {
            Tab::Due => self.due,
            Tab::Upcoming => self.upcoming,
            Tab::Completed => self.completed,
        }
    }
}
