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

use revqueue_core::Command;
use revqueue_core::NewItem;

use crate::collection::Collection;
use crate::display::format_date;
use crate::error::Fallible;
use crate::session::Session;
use crate::types::difficulty::Difficulty;
use crate::types::item::ItemId;

/// Actions that take an existing item id.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ItemAction {
    Solve,
    Retry,
    Delete,
}

impl ItemAction {
    pub fn command(self, id: ItemId) -> Command {
        match self {
            ItemAction::Solve => Command::MarkSolved(id),
            ItemAction::Retry => Command::Retry(id),
            ItemAction::Delete => Command::Delete(id),
        }
    }
}

pub fn add_item(
    directory: Option<String>,
    name: String,
    link: String,
    difficulty: Difficulty,
    topic: Option<String>,
) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let mut session = collection.open_session();
    let message = add_to_session(&mut session, NewItem::new(name, link, difficulty, topic))?;
    println!("{message}");
    Ok(())
}

pub fn run_item_action(directory: Option<String>, action: ItemAction, id: String) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let mut session = collection.open_session();
    println!("{}", act_on_session(&mut session, action, ItemId::new(id))?);
    Ok(())
}

fn add_to_session(session: &mut Session, new: NewItem) -> Fallible<String> {
    let outcome = session.dispatch(Command::Add(new))?;
    Ok(match outcome.added {
        Some(item) => format!(
            "Added {} ({}). Next review: {}.",
            item.name,
            item.id,
            format_date(item.next_review_date)
        ),
        None => "Nothing added.".to_string(),
    })
}

fn act_on_session(session: &mut Session, action: ItemAction, id: ItemId) -> Fallible<String> {
    let outcome = session.dispatch(action.command(id.clone()))?;
    if !outcome.changed {
        return Ok(format!("No item with id {id}."));
    }
    let message = match (action, session.store().get(&id)) {
        (ItemAction::Solve, Some(item)) => format!("Marked {} as solved.", item.name),
        (ItemAction::Retry, Some(item)) => format!(
            "{} is back in the queue (retry #{}). Next review: {}.",
            item.name,
            item.retry_count,
            format_date(item.next_review_date)
        ),
        _ => format!("Deleted {id}."),
    };
    Ok(message)
}
