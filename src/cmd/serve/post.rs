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

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use revqueue_core::Command;
use revqueue_core::NewItem;
use serde::Deserialize;

use crate::cmd::import::parse_import;
use crate::cmd::serve::get::AddDraft;
use crate::cmd::serve::get::Notice;
use crate::cmd::serve::get::PageView;
use crate::cmd::serve::get::render_page;
use crate::cmd::serve::state::ServerState;
use crate::session::Session;
use crate::types::difficulty::Difficulty;
use crate::types::item::ItemId;

#[derive(Deserialize)]
pub struct AddForm {
    name: String,
    link: String,
    difficulty: String,
    #[serde(default)]
    topic: String,
    #[serde(default)]
    tab: Option<String>,
    #[serde(default)]
    q: Option<String>,
}

#[derive(Deserialize)]
pub struct ActionForm {
    action: String,
    id: String,
    #[serde(default)]
    tab: Option<String>,
    #[serde(default)]
    q: Option<String>,
}

#[derive(Deserialize)]
pub struct ImportForm {
    data: String,
    #[serde(default)]
    confirm: Option<String>,
}

fn page(status: StatusCode, session: &Session, view: PageView) -> Response {
    (status, Html(render_page(session, &view).into_string())).into_response()
}

pub async fn add_handler(State(state): State<ServerState>, Form(form): Form<AddForm>) -> Response {
    let mut session = state.session();
    let mut view = PageView::new(form.tab.clone(), form.q.clone());
    let result = Difficulty::try_from(form.difficulty.clone()).and_then(|difficulty| {
        let topic = Some(form.topic.clone());
        let new = NewItem::new(form.name.clone(), form.link.clone(), difficulty, topic);
        session.dispatch(Command::Add(new))
    });
    match result {
        Ok(_) => Redirect::to(&view.href()).into_response(),
        Err(e) => {
            log::debug!("Rejected add: {e}");
            view.notice = Some(Notice::Error(e.message().to_string()));
            view.add_draft = Some(AddDraft {
                name: form.name,
                link: form.link,
                difficulty: form.difficulty,
                topic: form.topic,
            });
            page(StatusCode::BAD_REQUEST, &session, view)
        }
    }
}

pub async fn action_handler(
    State(state): State<ServerState>,
    Form(form): Form<ActionForm>,
) -> Response {
    let mut session = state.session();
    let mut view = PageView::new(form.tab, form.q);
    let id = ItemId::new(form.id);
    let command = match form.action.as_str() {
        "Solve" => Command::MarkSolved(id),
        "Retry" => Command::Retry(id),
        "Delete" => Command::Delete(id),
        other => {
            view.notice = Some(Notice::Error(format!("Unknown action: {other}")));
            return page(StatusCode::BAD_REQUEST, &session, view);
        }
    };
    match session.dispatch(command) {
        Ok(_) => Redirect::to(&view.href()).into_response(),
        Err(e) => {
            log::error!("Action failed: {e}");
            view.notice = Some(Notice::Error(e.message().to_string()));
            page(StatusCode::INTERNAL_SERVER_ERROR, &session, view)
        }
    }
}

pub async fn import_handler(
    State(state): State<ServerState>,
    Form(form): Form<ImportForm>,
) -> Response {
    let mut session = state.session();
    let mut view = PageView::default();
    let items = match parse_import(&form.data) {
        Ok(items) => items,
        Err(e) => {
            view.notice = Some(Notice::Error(e.message().to_string()));
            view.import_draft = Some(form.data);
            return page(StatusCode::BAD_REQUEST, &session, view);
        }
    };
    if form.confirm.is_none() {
        view.notice = Some(Notice::Info(format!(
            "Importing replaces all {} items with the {} in the file. Tick the box to confirm.",
            session.items().len(),
            items.len()
        )));
        view.import_draft = Some(form.data);
        return page(StatusCode::OK, &session, view);
    }
    let count = items.len();
    match session.dispatch(Command::ReplaceAll(items)) {
        Ok(_) => {
            view.notice = Some(Notice::Info(format!("Imported {count} items.")));
            page(StatusCode::OK, &session, view)
        }
        Err(e) => {
            log::error!("Import failed: {e}");
            view.notice = Some(Notice::Error(e.message().to_string()));
            page(StatusCode::INTERNAL_SERVER_ERROR, &session, view)
        }
    }
}

pub async fn shutdown_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    state.shutdown();
    (StatusCode::OK, Html("Server stopped. You can close this tab.".to_string()))
}
