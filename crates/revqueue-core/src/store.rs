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

use std::collections::HashSet;

use crate::error::Fallible;
use crate::error::fail;
use crate::schedule::next_review;
use crate::types::difficulty::Difficulty;
use crate::types::item::Item;
use crate::types::item::ItemId;
use crate::types::item::Status;
use crate::types::timestamp::Timestamp;

/// User input for a new item, before it has an id or any dates.
#[derive(Clone, Debug, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub link: String,
    pub difficulty: Difficulty,
    pub topic: Option<String>,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        link: impl Into<String>,
        difficulty: Difficulty,
        topic: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            difficulty,
            topic,
        }
    }

    /// Name and link are required; a blank topic counts as no topic.
    pub fn validate(&self) -> Fallible<()> {
        if self.name.trim().is_empty() {
            return fail("name must not be blank.");
        }
        if self.link.trim().is_empty() {
            return fail("link must not be blank.");
        }
        Ok(())
    }
}

/// The ordered collection of items. Every operation leaves `self` untouched
/// and returns the next collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Store {
    items: Vec<Item>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-validated items. Fails on duplicate ids.
    pub fn from_items(items: Vec<Item>) -> Fallible<Self> {
        let mut seen: HashSet<&ItemId> = HashSet::new();
        for item in items.iter() {
            if !seen.insert(&item.id) {
                return fail(format!("duplicate item id: {}", item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Append a new active item scheduled one interval after `now`.
    pub fn add(&self, new: NewItem, id: ItemId, now: Timestamp) -> Fallible<(Store, Item)> {
        new.validate()?;
        if self.contains(&id) {
            return fail(format!("duplicate item id: {id}"));
        }
        let NewItem {
            name,
            link,
            difficulty,
            topic,
        } = new;
        let topic = topic
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let item = Item {
            id,
            name: name.trim().to_string(),
            link: link.trim().to_string(),
            topic,
            difficulty,
            added_date: now,
            next_review_date: next_review(now),
            retry_count: 0,
            status: Status::Active,
        };
        let mut items = self.items.clone();
        items.push(item.clone());
        Ok((Store { items }, item))
    }

    /// Mark an item completed. Dates and retry count are left alone.
    pub fn mark_solved(&self, id: &ItemId) -> Store {
        self.map_item(id, |item| Item {
            status: Status::Completed,
            ..item.clone()
        })
    }

    /// Put an item back in the queue, whatever its status, one interval after
    /// `now`.
    pub fn retry(&self, id: &ItemId, now: Timestamp) -> Store {
        self.map_item(id, |item| Item {
            status: Status::Active,
            next_review_date: next_review(now),
            retry_count: item.retry_count.saturating_add(1),
            ..item.clone()
        })
    }

    pub fn delete(&self, id: &ItemId) -> Store {
        Store {
            items: self
                .items
                .iter()
                .filter(|item| &item.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Discard everything and take `items` instead.
    pub fn replace_all(items: Vec<Item>) -> Fallible<Store> {
        Store::from_items(items)
    }

    fn map_item(&self, id: &ItemId, f: impl Fn(&Item) -> Item) -> Store {
        Store {
            items: self
                .items
                .iter()
                .map(|item| if &item.id == id { f(item) } else { item.clone() })
                .collect(),
        }
    }
}
