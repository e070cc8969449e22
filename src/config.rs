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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::ErrorReport;
use crate::error::Fallible;

/// Name of the optional configuration file in the collection directory.
pub const CONFIG_FILE: &str = "revqueue.toml";

/// Settings read from `revqueue.toml`. Every field is optional; command line
/// flags take precedence over anything set here.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerSettings,
    pub export: ExportSettings,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            open_browser: true,
        }
    }
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSettings {
    /// Where backups go when no output path is given. Relative paths are
    /// resolved against the collection directory.
    pub directory: Option<String>,
}

impl Config {
    /// Read the config file from `directory`, or the defaults if there is
    /// none.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No {CONFIG_FILE} in {}, using defaults", directory.display());
            return Ok(Config::default());
        }
        let text = read_to_string(&path)?;
        Config::parse(&text)
    }

    pub fn parse(text: &str) -> Fallible<Self> {
        toml::from_str(text)
            .map_err(|e| ErrorReport::new(format!("Failed to parse {CONFIG_FILE}: {e}")))
    }
}
