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

//! The JSON form of a collection: a bare array of item records. Used both
//! for the data file and for backups.

use serde_json::Value;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::store::Store;
use crate::types::date::Date;
use crate::types::item::Item;

/// Pretty-printed JSON array of `items`.
pub fn serialize_items(items: &[Item]) -> Fallible<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Parse a collection. The document must be an array of well-formed items
/// with distinct ids; anything else is an error and nothing is returned.
pub fn deserialize_items(text: &str) -> Fallible<Vec<Item>> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(records) = value else {
        return fail("expected a JSON array of items.");
    };
    let mut items = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let item: Item = serde_json::from_value(record)
            .map_err(|e| ErrorReport::new(format!("invalid item at index {index}: {e}")))?;
        items.push(item);
    }
    // Reuse the store's uniqueness check.
    Ok(Store::from_items(items)?.into_items())
}

/// File name of a backup taken on `date`.
pub fn export_file_name(date: Date) -> String {
    format!("revqueue-backup-{date}.json")
}
