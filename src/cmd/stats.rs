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

use clap::ValueEnum;
use revqueue_core::stats::Stats;

use crate::collection::Collection;
use crate::error::Fallible;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum StatsFormat {
    /// Plain text, one figure per line.
    Text,
    /// A JSON object.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_stats(directory: Option<String>, format: StatsFormat) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let session = collection.open_session();
    let stats = Stats::compute(session.items(), session.now());
    println!("{}", render_stats(&stats, format)?);
    Ok(())
}

fn render_stats(stats: &Stats, format: StatsFormat) -> Fallible<String> {
    match format {
        StatsFormat::Text => {
            let rows = [
                ("Total in queue", stats.total.to_string()),
                ("Due now", stats.due.to_string()),
                ("Hard problems", stats.hard.to_string()),
                ("Max retries", stats.max_retries.to_string()),
                ("Upcoming", stats.tabs.upcoming.to_string()),
                ("Solved", stats.tabs.completed.to_string()),
            ];
            Ok(rows
                .iter()
                .map(|(key, val)| format!("{key:<16}{val}"))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        StatsFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
    }
}
