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
use std::io::BufRead;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;

use revqueue_core::Command;
use revqueue_core::codec::deserialize_items;

use crate::collection::Collection;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::session::Session;
use crate::types::item::Item;
use crate::utils::confirm;

/// Parse an import file. The collection is only touched once this succeeds.
pub fn parse_import(text: &str) -> Fallible<Vec<Item>> {
    deserialize_items(text).map_err(|e| ErrorReport::new(format!("invalid import file: {}", e.message())))
}

pub fn import_collection(directory: Option<String>, file: String, yes: bool) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let mut session = collection.open_session();
    let text = read_to_string(&file)?;
    let message = import_into(
        &mut session,
        &text,
        yes,
        &mut stdin().lock(),
        &mut stdout(),
    )?;
    println!("{message}");
    Ok(())
}

fn import_into(
    session: &mut Session,
    text: &str,
    yes: bool,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Fallible<String> {
    let items = parse_import(text)?;
    let prompt = format!(
        "This replaces all {} items with the {} in the file.",
        session.items().len(),
        items.len()
    );
    if !yes && !confirm(&prompt, input, output)? {
        return Ok("Import cancelled.".to_string());
    }
    let count = items.len();
    session.dispatch(Command::ReplaceAll(items))?;
    Ok(format!("Imported {count} items."))
}
