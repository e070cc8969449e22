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

use std::fs::create_dir_all;
use std::fs::write;
use std::path::PathBuf;

use revqueue_core::codec::export_file_name;
use revqueue_core::codec::serialize_items;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::session::Session;

/// Write a backup of the collection and return where it went.
pub fn export_collection(directory: Option<String>, output: Option<String>) -> Fallible<PathBuf> {
    let collection = Collection::new(directory)?;
    let session = collection.open_session();
    let path = write_export(&collection, &session, output)?;
    println!("Exported {} items to {}", session.items().len(), path.display());
    Ok(path)
}

fn write_export(collection: &Collection, session: &Session, output: Option<String>) -> Fallible<PathBuf> {
    // Name and body come from the same clock read.
    let (name, contents) = export_contents(session)?;
    let path: PathBuf = match output {
        Some(path) => PathBuf::from(path),
        None => {
            let dir = match &collection.config.export.directory {
                Some(dir) => collection.directory.join(dir),
                None => collection.directory.clone(),
            };
            create_dir_all(&dir)?;
            dir.join(name)
        }
    };
    write(&path, contents)?;
    log::debug!("Exported {} items to {}", session.items().len(), path.display());
    Ok(path)
}

/// File name and body of a backup taken now.
pub fn export_contents(session: &Session) -> Fallible<(String, String)> {
    let name = export_file_name(session.now().local_date()?);
    let mut body = serialize_items(session.items())?;
    body.push('\n');
    Ok((name, body))
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;
    use std::fs::write;

    use revqueue_core::clock::ManualClock;
    use revqueue_core::codec::deserialize_items;

    use super::*;
    use crate::config::CONFIG_FILE;
    use crate::helper::create_tmp_collection;
    use crate::storage::JsonFileStorage;
    use crate::types::timestamp::Timestamp;

    #[test]
    fn test_export_to_path() -> Fallible<()> {
        let directory = create_tmp_collection()?;
        let output = PathBuf::from(&directory).join("backup.json");
        let path = export_collection(Some(directory), Some(output.display().to_string()))?;
        assert_eq!(path, output);
        let text = read_to_string(&path)?;
        assert!(text.starts_with("[\n  {"));
        assert_eq!(deserialize_items(&text)?.len(), 4);
        Ok(())
    }

    #[test]
    fn test_export_default_name() -> Fallible<()> {
        let directory = create_tmp_collection()?;
        write(
            PathBuf::from(&directory).join(CONFIG_FILE),
            "[export]\ndirectory = \"backups\"\n",
        )?;
        let path = export_collection(Some(directory.clone()), None)?;
        assert_eq!(path.parent().unwrap(), PathBuf::from(&directory).join("backups"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("revqueue-backup-"));
        assert!(name.ends_with(".json"));
        Ok(())
    }

    #[test]
    fn test_default_name_uses_session_clock() -> Fallible<()> {
        let collection = Collection::new(Some(create_tmp_collection()?))?;
        let at = Timestamp::from_millis(1_741_521_600_000);
        let session = Session::open(
            Box::new(JsonFileStorage::new(collection.data_path())),
            Box::new(ManualClock::new(at)),
            1,
        );
        let path = write_export(&collection, &session, None)?;
        let expected = export_file_name(at.local_date()?);
        assert_eq!(path, collection.directory.join(&expected));
        let (name, _) = export_contents(&session)?;
        assert_eq!(name, expected);
        Ok(())
    }
}
