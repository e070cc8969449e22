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

//! User actions as values. A [`Command`] is applied to a [`Store`] and
//! yields the next store; the caller decides what to do with it.

use crate::error::Fallible;
use crate::rng::IdGenerator;
use crate::store::NewItem;
use crate::store::Store;
use crate::types::item::Item;
use crate::types::item::ItemId;
use crate::types::timestamp::Timestamp;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Add(NewItem),
    MarkSolved(ItemId),
    Retry(ItemId),
    Delete(ItemId),
    ReplaceAll(Vec<Item>),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::MarkSolved(_) => "solve",
            Command::Retry(_) => "retry",
            Command::Delete(_) => "delete",
            Command::ReplaceAll(_) => "replace-all",
        }
    }
}

/// The result of applying a command.
#[derive(Debug)]
pub struct Applied {
    pub store: Store,
    /// False when the command targeted an id that is not in the store.
    pub changed: bool,
    /// The item created by [`Command::Add`].
    pub added: Option<Item>,
}

pub fn apply(
    store: &Store,
    command: Command,
    now: Timestamp,
    ids: &mut IdGenerator,
) -> Fallible<Applied> {
    let applied = match command {
        Command::Add(new) => {
            new.validate()?;
            let id = ids.next_id(|id| store.contains(id));
            let (store, item) = store.add(new, id, now)?;
            Applied {
                store,
                changed: true,
                added: Some(item),
            }
        }
        Command::MarkSolved(id) => Applied {
            changed: store.contains(&id),
            store: store.mark_solved(&id),
            added: None,
        },
        Command::Retry(id) => Applied {
            changed: store.contains(&id),
            store: store.retry(&id, now),
            added: None,
        },
        Command::Delete(id) => Applied {
            changed: store.contains(&id),
            store: store.delete(&id),
            added: None,
        },
        Command::ReplaceAll(items) => Applied {
            store: Store::replace_all(items)?,
            changed: true,
            added: None,
        },
    };
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::difficulty::Difficulty;
    use crate::types::item::Status;

    const T: Timestamp = Timestamp::from_millis(1_700_000_000_000);

    #[test]
    fn test_add_generates_id() -> Fallible<()> {
        let mut ids = IdGenerator::from_seed(5);
        let new = NewItem::new("Two Sum", "https://x", Difficulty::Easy, None);
        let applied = apply(&Store::new(), Command::Add(new), T, &mut ids)?;
        let item = applied.added.unwrap();
        assert!(applied.changed);
        assert_eq!(applied.store.get(&item.id), Some(&item));
        Ok(())
    }

    #[test]
    fn test_blank_add_creates_nothing() {
        let mut ids = IdGenerator::from_seed(5);
        let new = NewItem::new("", "https://x", Difficulty::Easy, None);
        assert!(apply(&Store::new(), Command::Add(new), T, &mut ids).is_err());
    }

    #[test]
    fn test_unknown_id_reports_unchanged() -> Fallible<()> {
        let mut ids = IdGenerator::from_seed(5);
        let store = Store::new();
        for command in [
            Command::MarkSolved(ItemId::new("x")),
            Command::Retry(ItemId::new("x")),
            Command::Delete(ItemId::new("x")),
        ] {
            let applied = apply(&store, command, T, &mut ids)?;
            assert!(!applied.changed);
            assert_eq!(applied.store, store);
        }
        Ok(())
    }

    #[test]
    fn test_solve_then_retry() -> Fallible<()> {
        let mut ids = IdGenerator::from_seed(5);
        let new = NewItem::new("Two Sum", "https://x", Difficulty::Easy, None);
        let applied = apply(&Store::new(), Command::Add(new), T, &mut ids)?;
        let id = applied.added.unwrap().id;
        let applied = apply(&applied.store, Command::MarkSolved(id.clone()), T, &mut ids)?;
        assert_eq!(applied.store.get(&id).unwrap().status, Status::Completed);
        let applied = apply(&applied.store, Command::Retry(id.clone()), T, &mut ids)?;
        let item = applied.store.get(&id).unwrap();
        assert_eq!(item.status, Status::Active);
        assert_eq!(item.retry_count, 1);
        Ok(())
    }
}
