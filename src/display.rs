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

use revqueue_core::schedule::days_remaining;
use revqueue_core::schedule::is_due;

use crate::types::item::Item;
use crate::types::timestamp::Timestamp;

/// `DD Mon YYYY` in local time.
pub fn format_date(ts: Timestamp) -> String {
    match ts.local_date() {
        Ok(date) => date.to_display_string(),
        Err(_) => ts.to_string(),
    }
}

/// Short description of where an item stands at `now`.
pub fn status_label(item: &Item, now: Timestamp) -> String {
    if item.is_completed() {
        "Solved".to_string()
    } else if is_due(item, now) {
        "Due now".to_string()
    } else {
        match days_remaining(item.next_review_date, now) {
            1 => "In 1 day".to_string(),
            n => format!("In {n} days"),
        }
    }
}
