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

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::types::difficulty::Difficulty;
use crate::types::timestamp::Timestamp;

/// Opaque identifier of an item. Unique within a collection.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Lifecycle of an item. Records written before the field existed have no
/// status and load as active.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Completed => "completed",
        }
    }
}

/// A tracked practice problem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub link: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub topic: Option<String>,
    pub difficulty: Difficulty,
    /// When the item was added. Never changes.
    pub added_date: Timestamp,
    /// When the item should be looked at again.
    pub next_review_date: Timestamp,
    /// How many times the item has been retried.
    pub retry_count: u32,
    #[serde(default)]
    pub status: Status,
}

/// Older records store a missing topic as `""`.
fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let topic: Option<String> = Option::deserialize(deserializer)?;
    Ok(topic.filter(|t| !t.trim().is_empty()))
}

impl Item {
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }
}
