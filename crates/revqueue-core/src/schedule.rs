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

//! Fixed-interval scheduling. Every review, first or retried, is pushed out
//! by the same constant.

use crate::types::item::Item;
use crate::types::timestamp::Timestamp;

/// The review interval in days.
pub const INTERVAL_DAYS: i64 = 5;

/// Milliseconds in a day.
pub const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// The review interval in milliseconds.
pub const INTERVAL_MILLIS: i64 = INTERVAL_DAYS * DAY_MILLIS;

/// When an item scheduled at `now` should next be reviewed.
pub fn next_review(now: Timestamp) -> Timestamp {
    now.add_millis(INTERVAL_MILLIS)
}

/// Whole days from `now` until `target`, rounded up. Zero or negative once
/// the target has passed. For display only; bucketing uses [`is_due`].
pub fn days_remaining(target: Timestamp, now: Timestamp) -> i64 {
    let diff = now.millis_until(target);
    // ceil(diff / DAY_MILLIS) for a positive divisor.
    -(diff.saturating_neg().div_euclid(DAY_MILLIS))
}

pub fn is_due(item: &Item, now: Timestamp) -> bool {
    item.is_active() && item.next_review_date <= now
}

pub fn is_upcoming(item: &Item, now: Timestamp) -> bool {
    item.is_active() && item.next_review_date > now
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::difficulty::Difficulty;
    use crate::types::item::ItemId;
    use crate::types::item::Status;

    fn make_item(next: i64, status: Status) -> Item {
        Item {
            id: ItemId::new("a"),
            name: "Two Sum".to_string(),
            link: "https://example.com".to_string(),
            topic: None,
            difficulty: Difficulty::Easy,
            added_date: Timestamp::from_millis(0),
            next_review_date: Timestamp::from_millis(next),
            retry_count: 0,
            status,
        }
    }

    #[test]
    fn test_interval_constant() {
        assert_eq!(INTERVAL_MILLIS, 432_000_000);
    }

    #[test]
    fn test_next_review() {
        let t = Timestamp::from_millis(1_700_000_000_000);
        assert_eq!(next_review(t).as_millis(), 1_700_000_000_000 + 432_000_000);
    }

    #[test]
    fn test_days_remaining() {
        let now = Timestamp::from_millis(0);
        assert_eq!(days_remaining(Timestamp::from_millis(INTERVAL_MILLIS), now), 5);
        assert_eq!(days_remaining(Timestamp::from_millis(1), now), 1);
        assert_eq!(days_remaining(Timestamp::from_millis(DAY_MILLIS + 1), now), 2);
        assert_eq!(days_remaining(now, now), 0);
        assert_eq!(days_remaining(Timestamp::from_millis(-1), now), 0);
        assert_eq!(days_remaining(Timestamp::from_millis(-DAY_MILLIS), now), -1);
        assert_eq!(days_remaining(Timestamp::from_millis(-DAY_MILLIS - 1), now), -1);
    }

    #[test]
    fn test_is_due_boundary() {
        let t = 1_700_000_000_000;
        let item = make_item(t + INTERVAL_MILLIS, Status::Active);
        assert!(is_due(&item, Timestamp::from_millis(t + INTERVAL_MILLIS)));
        assert!(!is_due(&item, Timestamp::from_millis(t + 1)));
        assert!(is_upcoming(&item, Timestamp::from_millis(t + 1)));
    }

    #[test]
    fn test_completed_is_never_due() {
        let item = make_item(0, Status::Completed);
        let now = Timestamp::from_millis(10 * INTERVAL_MILLIS);
        assert!(!is_due(&item, now));
        assert!(!is_upcoming(&item, now));
    }
}
