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

//! revqueue-core: Core library for the revqueue revision tracker.
//!
//! This library provides the pieces that do not touch the terminal, the
//! network or the filesystem:
//! - The item data model and its JSON codec
//! - Fixed-interval review scheduling
//! - The item store and the commands that transform it
//! - Tab/search projection and summary statistics

pub mod clock;
pub mod codec;
pub mod command;
pub mod error;
pub mod rng;
pub mod schedule;
pub mod stats;
pub mod store;
pub mod types;
pub mod view;

// Re-exports for convenience
pub use clock::Clock;
pub use command::{Applied, Command, apply};
pub use error::{ErrorReport, Fallible, fail};
pub use store::{NewItem, Store};
pub use types::date::Date;
pub use types::difficulty::Difficulty;
pub use types::item::{Item, ItemId, Status};
pub use types::timestamp::Timestamp;
pub use view::{Tab, TabCounts, project};
