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

use revqueue_core::Applied;
use revqueue_core::Clock;
use revqueue_core::Command;
use revqueue_core::Store;
use revqueue_core::apply;
use revqueue_core::rng::IdGenerator;

use crate::error::Fallible;
use crate::storage::Storage;
use crate::types::item::Item;
use crate::types::timestamp::Timestamp;

/// What a dispatched command did.
#[derive(Debug)]
pub struct Outcome {
    /// False when the command named an id that does not exist.
    pub changed: bool,
    /// The item created by an add.
    pub added: Option<Item>,
}

/// Owns the collection for the lifetime of a process. All changes go
/// through [`Session::dispatch`], which saves after every change.
pub struct Session {
    store: Store,
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,
    ids: IdGenerator,
}

impl Session {
    /// Load the collection from `storage`. Unreadable data is logged and
    /// replaced with an empty collection.
    pub fn open(storage: Box<dyn Storage>, clock: Box<dyn Clock>, seed: u64) -> Self {
        let store = match storage.load() {
            Ok(Some(items)) => match Store::from_items(items) {
                Ok(store) => store,
                Err(e) => {
                    log::error!("Saved items are invalid, starting empty: {e}");
                    Store::new()
                }
            },
            Ok(None) => Store::new(),
            Err(e) => {
                log::error!("Failed to load saved items, starting empty: {e}");
                Store::new()
            }
        };
        log::debug!("Opened session with {} items", store.len());
        Self {
            store,
            storage,
            clock,
            ids: IdGenerator::from_seed(seed),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    /// Read the clock. Call once per operation and pass the value along.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn dispatch(&mut self, command: Command) -> Fallible<Outcome> {
        let now = self.now();
        let name = command.name();
        let Applied {
            store,
            changed,
            added,
        } = apply(&self.store, command, now, &mut self.ids)?;
        if changed {
            log::debug!("Applied {name}, collection has {} items", store.len());
            self.store = store;
            self.persist();
        } else {
            log::debug!("Ignored {name} for an unknown id");
        }
        Ok(Outcome { changed, added })
    }

    /// Write the collection out. Failures are logged, never raised: the
    /// in-memory collection stays authoritative.
    fn persist(&self) {
        if let Err(e) = self.storage.save(self.store.items()) {
            log::error!("Failed to save items: {e}");
        }
    }
}
