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

use std::env::current_dir;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use revqueue_core::clock::SystemClock;

use crate::config::Config;
use crate::error::Fallible;
use crate::error::fail;
use crate::session::Session;
use crate::storage::JsonFileStorage;

/// Name of the data file inside the collection directory.
pub const DATA_FILE: &str = "revqueue.json";

/// A directory holding a queue: the data file plus an optional config file.
pub struct Collection {
    pub directory: PathBuf,
    pub config: Config,
}

impl Collection {
    /// Open the collection in `directory`, or in the current working
    /// directory if none is given.
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        if !directory.exists() {
            return fail("directory does not exist.");
        }
        if !directory.is_dir() {
            return fail("path is not a directory.");
        }
        let directory = directory.canonicalize()?;
        let config = Config::load(&directory)?;
        Ok(Self { directory, config })
    }

    pub fn data_path(&self) -> PathBuf {
        self.directory.join(DATA_FILE)
    }

    /// Start a session backed by the data file and the wall clock.
    pub fn open_session(&self) -> Session {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Session::open(
            Box::new(JsonFileStorage::new(self.data_path())),
            Box::new(SystemClock),
            seed,
        )
    }
}
