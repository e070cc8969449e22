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

use std::fs::copy;
use std::fs::read;
use std::fs::rename;
use std::fs::write;
use std::path::PathBuf;

use revqueue_core::codec::deserialize_items;
use revqueue_core::codec::serialize_items;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::item::Item;

/// Durable home of a collection. Implementations only ever see whole
/// collections; they never edit items in place.
pub trait Storage: Send {
    /// The saved items, or `None` if nothing has been saved yet.
    fn load(&self) -> Fallible<Option<Vec<Item>>>;

    fn save(&self, items: &[Item]) -> Fallible<()>;
}

/// Stores the collection as a pretty-printed JSON array in a single file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Fallible<Option<Vec<Item>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = read(&self.path)?;
        let parsed = String::from_utf8(bytes)
            .map_err(ErrorReport::from)
            .and_then(|text| deserialize_items(&text));
        match parsed {
            Ok(items) => Ok(Some(items)),
            Err(e) => {
                // The next save overwrites the file, so keep the unreadable
                // copy around.
                let backup = self.backup_path();
                copy(&self.path, &backup)?;
                log::warn!(
                    "Copied unreadable {} to {}",
                    self.path.display(),
                    backup.display()
                );
                Err(e)
            }
        }
    }

    fn save(&self, items: &[Item]) -> Fallible<()> {
        let text = serialize_items(items)?;
        let temp = self.temp_path();
        write(&temp, text)?;
        rename(&temp, &self.path)?;
        Ok(())
    }
}
