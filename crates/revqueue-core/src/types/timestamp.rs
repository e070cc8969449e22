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

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
#[cfg(feature = "clock")]
use crate::types::date::Date;

/// An instant with millisecond precision, stored as milliseconds since the
/// Unix epoch. Serializes as a bare JSON integer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// The current instant.
    #[cfg(feature = "clock")]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// This instant shifted by `millis` (which may be negative).
    pub fn add_millis(self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    /// Signed number of milliseconds from `self` to `other`.
    pub fn millis_until(self, other: Timestamp) -> i64 {
        other.0.saturating_sub(self.0)
    }

    pub fn to_utc(self) -> Fallible<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
            .ok_or_else(|| ErrorReport::new(format!("timestamp out of range: {}", self.0)))
    }

    /// The calendar date of this instant in the user's local time.
    #[cfg(feature = "clock")]
    pub fn local_date(self) -> Fallible<Date> {
        Ok(Date::new(
            self.to_utc()?.with_timezone(&chrono::Local).date_naive(),
        ))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_utc() {
            Ok(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Err(_) => write!(f, "{}ms", self.0),
        }
    }
}
