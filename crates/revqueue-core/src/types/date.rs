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

use chrono::NaiveDate;

/// Represents a calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Date(NaiveDate);

impl Date {
    pub fn new(naive_date: NaiveDate) -> Self {
        Self(naive_date)
    }

    /// Human-readable form used in listings, e.g. `05 Jan 2025`.
    pub fn to_display_string(self) -> String {
        self.0.format("%d %b %Y").to_string()
    }
}

/// ISO form, used in backup file names.
impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_display() {
        let date = Date::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(date.to_string(), "2024-01-02");
    }

    #[test]
    fn test_display_string() {
        let date = Date::new(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(date.to_display_string(), "05 Jan 2025");
    }
}
