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

use std::fmt::Write;

use revqueue_core::Tab;
use revqueue_core::TabCounts;
use revqueue_core::project;

use crate::collection::Collection;
use crate::display::format_date;
use crate::display::status_label;
use crate::error::Fallible;
use crate::types::item::Item;
use crate::types::timestamp::Timestamp;

pub fn list_items(directory: Option<String>, tab: Tab, search: Option<String>) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let session = collection.open_session();
    let now = session.now();
    print!("{}", render_list(session.items(), now, tab, search.as_deref()));
    Ok(())
}

fn tab_title(tab: Tab) -> &'static str {
    match tab {
        Tab::Due => "Due",
        Tab::Upcoming => "Upcoming",
        Tab::Completed => "Solved",
    }
}

pub fn render_list(items: &[Item], now: Timestamp, tab: Tab, search: Option<&str>) -> String {
    let counts = TabCounts::count(items, now);
    let mut out = String::new();
    let header: Vec<String> = Tab::ALL
        .iter()
        .map(|t| {
            let title = format!("{} ({})", tab_title(*t), counts.get(*t));
            if *t == tab { format!("[{title}]") } else { title }
        })
        .collect();
    let _ = writeln!(out, "{}", header.join("  "));
    let list = project(items, now, tab, search);
    if list.is_empty() {
        let _ = writeln!(out, "Nothing here.");
        return out;
    }
    for item in list {
        let _ = writeln!(out, "{}  {}  [{}]", item.id, item.name, item.difficulty);
        let mut details = vec![item.link.clone()];
        if let Some(topic) = &item.topic {
            details.push(format!("topic: {topic}"));
        }
        if item.retry_count > 0 {
            details.push(format!("retries: {}", item.retry_count));
        }
        if !item.is_completed() {
            details.push(format!("next review: {}", format_date(item.next_review_date)));
        }
        details.push(status_label(item, now));
        let _ = writeln!(out, "         {}", details.join(" | "));
    }
    out
}
