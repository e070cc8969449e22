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

use std::fs::write;

use tempfile::tempdir;

use crate::collection::DATA_FILE;
use crate::error::Fallible;
use crate::types::timestamp::Timestamp;

/// Two due items, one upcoming and one solved, relative to the real clock.
pub fn sample_collection_json() -> String {
    let now = Timestamp::now().as_millis();
    let day = 24 * 60 * 60 * 1000;
    format!(
        r#"[
  {{"id": "due0001", "name": "Two Sum", "link": "https://leetcode.com/problems/two-sum", "topic": "Arrays", "difficulty": "Easy", "addedDate": {a0}, "nextReviewDate": {n0}, "retryCount": 0, "status": "active"}},
  {{"id": "due0002", "name": "LRU Cache", "link": "https://leetcode.com/problems/lru-cache", "topic": "Design", "difficulty": "Medium", "addedDate": {a1}, "nextReviewDate": {n1}, "retryCount": 2, "status": "active"}},
  {{"id": "upc0001", "name": "Word Ladder", "link": "https://leetcode.com/problems/word-ladder", "difficulty": "Hard", "addedDate": {a2}, "nextReviewDate": {n2}, "retryCount": 0}},
  {{"id": "sol0001", "name": "N-Queens", "link": "https://leetcode.com/problems/n-queens", "topic": "Backtracking", "difficulty": "Hard", "addedDate": {a3}, "nextReviewDate": {n3}, "retryCount": 1, "status": "completed"}}
]"#,
        a0 = now - 7 * day,
        n0 = now - 2 * day,
        a1 = now - 6 * day,
        n1 = now - day,
        a2 = now - day,
        n2 = now + 4 * day,
        a3 = now - 10 * day,
        n3 = now - 5 * day,
    )
}

/// A fresh collection directory seeded with [`sample_collection_json`].
/// The directory is not deleted when the test ends.
pub fn create_tmp_collection() -> Fallible<String> {
    let dir = tempdir()?.keep();
    write(dir.join(DATA_FILE), sample_collection_json())?;
    Ok(dir.canonicalize()?.display().to_string())
}

/// An empty collection directory.
pub fn create_tmp_directory() -> Fallible<String> {
    let dir = tempdir()?.keep();
    Ok(dir.canonicalize()?.display().to_string())
}
