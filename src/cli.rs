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

use std::process::exit;

use clap::Parser;
use clap::ValueEnum;
use revqueue_core::Tab;
use tokio::spawn;

use crate::cmd::export::export_collection;
use crate::cmd::import::import_collection;
use crate::cmd::items::ItemAction;
use crate::cmd::items::add_item;
use crate::cmd::items::run_item_action;
use crate::cmd::list::list_items;
use crate::cmd::serve::server::ServerConfig;
use crate::cmd::serve::server::start_server;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::difficulty::Difficulty;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the collection directory. By default, the current working directory is used.
    #[arg(long, short, global = true)]
    directory: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Add a problem to the queue. It comes up for review in five days.
    Add {
        /// Name of the problem.
        name: String,
        /// Link to the problem.
        link: String,
        /// How hard the problem felt.
        #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
        difficulty: DifficultyArg,
        /// Optional topic, e.g. "Graphs".
        #[arg(long)]
        topic: Option<String>,
    },
    /// Mark a problem as solved.
    Solve {
        /// The item id.
        id: String,
    },
    /// Put a problem back in the queue for another five days.
    Retry {
        /// The item id.
        id: String,
    },
    /// Delete a problem permanently.
    Delete {
        /// The item id.
        id: String,
    },
    /// List the problems in one tab.
    List {
        /// Which tab to show.
        #[arg(long, value_enum, default_value_t = TabArg::Due)]
        tab: TabArg,
        /// Only show problems whose name or topic contains this text.
        #[arg(long)]
        search: Option<String>,
    },
    /// Print collection statistics.
    Stats {
        /// Which output format to use.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Write a JSON backup of the whole queue.
    Export {
        /// Optional path to the output file. By default, a dated file is written to the export directory.
        #[arg(long)]
        output: Option<String>,
    },
    /// Replace the whole queue with the contents of a JSON backup.
    Import {
        /// Path to the backup file.
        file: String,
        /// Do not ask for confirmation.
        #[arg(long)]
        yes: bool,
    },
    /// Manage the queue through a web interface.
    Serve {
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long)]
        host: Option<String>,
        /// The port to use for the web server. Default is 8000.
        #[arg(long)]
        port: Option<u16>,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
enum TabArg {
    Due,
    Upcoming,
    Completed,
}

impl From<TabArg> for Tab {
    fn from(value: TabArg) -> Self {
        match value {
            TabArg::Due => Tab::Due,
            TabArg::Upcoming => Tab::Upcoming,
            TabArg::Completed => Tab::Completed,
        }
    }
}

pub async fn entrypoint() -> Fallible<()> {
    let Cli { directory, command } = Cli::parse();
    match command {
        Command::Add {
            name,
            link,
            difficulty,
            topic,
        } => add_item(directory, name, link, difficulty.into(), topic),
        Command::Solve { id } => run_item_action(directory, ItemAction::Solve, id),
        Command::Retry { id } => run_item_action(directory, ItemAction::Retry, id),
        Command::Delete { id } => run_item_action(directory, ItemAction::Delete, id),
        Command::List { tab, search } => list_items(directory, tab.into(), search),
        Command::Stats { format } => print_stats(directory, format),
        Command::Export { output } => export_collection(directory, output).map(|_| ()),
        Command::Import { file, yes } => import_collection(directory, file, yes),
        Command::Serve {
            host,
            port,
            open_browser,
        } => {
            let collection = Collection::new(directory)?;
            let settings = &collection.config.server;
            let host = host.unwrap_or_else(|| settings.host.clone());
            let port = port.unwrap_or(settings.port);
            if open_browser.unwrap_or(settings.open_browser) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            let _ = open::that(format!("http://{browser_host}:{port}/"));
                        }
                        Err(e) => {
                            eprintln!("Failed to connect to server: {e}");
                            exit(-1)
                        }
                    }
                });
            }
            let config = ServerConfig {
                collection,
                host,
                port,
            };
            start_server(config).await
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "revqueue",
            "--directory",
            "/tmp/q",
            "add",
            "Two Sum",
            "https://leetcode.com/problems/two-sum",
            "--difficulty",
            "hard",
            "--topic",
            "Arrays",
        ])
        .unwrap();
        assert_eq!(cli.directory.as_deref(), Some("/tmp/q"));
        match cli.command {
            Command::Add {
                name,
                difficulty,
                topic,
                ..
            } => {
                assert_eq!(name, "Two Sum");
                assert_eq!(Difficulty::from(difficulty), Difficulty::Hard);
                assert_eq!(topic.as_deref(), Some("Arrays"));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_list_defaults_to_due() {
        let cli = Cli::try_parse_from(["revqueue", "list"]).unwrap();
        match cli.command {
            Command::List { tab, search } => {
                assert_eq!(Tab::from(tab), Tab::Due);
                assert_eq!(search, None);
            }
            _ => panic!("expected list"),
        }
    }
}
