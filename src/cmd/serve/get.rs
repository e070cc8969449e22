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

use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_DISPOSITION;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use maud::Markup;
use maud::html;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;
use revqueue_core::Difficulty;
use revqueue_core::Tab;
use revqueue_core::project;
use revqueue_core::schedule::INTERVAL_DAYS;
use revqueue_core::schedule::is_due;
use revqueue_core::stats::Stats;
use serde::Deserialize;

use crate::cmd::export::export_contents;
use crate::cmd::serve::template::page_template;
use crate::cmd::serve::state::ServerState;
use crate::display::format_date;
use crate::display::status_label;
use crate::session::Session;
use crate::types::item::Item;
use crate::types::timestamp::Timestamp;

/// Query string of the main page.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub tab: Option<String>,
    pub q: Option<String>,
}

impl ViewQuery {
    pub fn view(&self) -> PageView {
        PageView::new(self.tab.clone(), self.q.clone())
    }
}

/// A message shown above the list.
pub enum Notice {
    Info(String),
    Error(String),
}

/// Form values sent back to the page after a failed add.
#[derive(Debug, Default)]
pub struct AddDraft {
    pub name: String,
    pub link: String,
    pub difficulty: String,
    pub topic: String,
}

/// Everything about the page that is not collection state.
#[derive(Default)]
pub struct PageView {
    pub tab: Tab,
    pub search: Option<String>,
    pub notice: Option<Notice>,
    pub add_draft: Option<AddDraft>,
    pub import_draft: Option<String>,
}

impl PageView {
    /// Unknown tab names fall back to the due tab. The search term is used
    /// as typed; an empty one is dropped.
    pub fn new(tab: Option<String>, search: Option<String>) -> Self {
        let tab = tab
            .and_then(|t| Tab::try_from(t).ok())
            .unwrap_or_default();
        let search = search.filter(|s| !s.is_empty());
        Self {
            tab,
            search,
            ..Self::default()
        }
    }

    /// Link back to this tab and search.
    pub fn href(&self) -> String {
        view_href(self.tab, self.search.as_deref())
    }
}

pub fn view_href(tab: Tab, search: Option<&str>) -> String {
    match search {
        Some(q) => format!("/?tab={tab}&q={}", utf8_percent_encode(q, NON_ALPHANUMERIC)),
        None => format!("/?tab={tab}"),
    }
}

pub async fn get_handler(
    State(state): State<ServerState>,
    Query(query): Query<ViewQuery>,
) -> (StatusCode, Html<String>) {
    let session = state.session();
    let view = query.view();
    (StatusCode::OK, Html(render_page(&session, &view).into_string()))
}

pub async fn export_handler(State(state): State<ServerState>) -> Response {
    let session = state.session();
    match export_contents(&session) {
        Ok((name, body)) => (
            StatusCode::OK,
            [
                (CONTENT_TYPE, "application/json".to_string()),
                (CONTENT_DISPOSITION, format!("attachment; filename=\"{name}\"")),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            log::error!("Export failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

fn tab_title(tab: Tab) -> &'static str {
    match tab {
        Tab::Due => "Due",
        Tab::Upcoming => "Upcoming",
        Tab::Completed => "Solved",
    }
}

pub fn render_page(session: &Session, view: &PageView) -> Markup {
    // One clock read for the whole page.
    let now: Timestamp = session.now();
    let items = session.items();
    let stats = Stats::compute(items, now);
    let list: Vec<&Item> = project(items, now, view.tab, view.search.as_deref());
    let body = html! {
        div.root {
            div.header {
                h1 { "revqueue" }
                a.button href="/export" title="Download a JSON backup" { "Export" }
            }
            @if let Some(notice) = &view.notice {
                @match notice {
                    Notice::Info(message) => {
                        div.notice.info { (message) }
                    }
                    Notice::Error(message) => {
                        div.notice.error { (message) }
                    }
                }
            }
            div.stats {
                (stat_card("Total in Queue", stats.total.to_string()))
                (stat_card("Due Now", stats.due.to_string()))
                (stat_card("Hard Problems", stats.hard.to_string()))
                (stat_card("Max Retries", stats.max_retries.to_string()))
            }
            div.toolbar {
                nav.tabs {
                    @for tab in Tab::ALL {
                        a.tab.active[tab == view.tab] href=(view_href(tab, view.search.as_deref())) {
                            (tab_title(tab)) " (" (stats.tabs.get(tab)) ")"
                        }
                    }
                }
                form.search action="/" method="get" {
                    input type="hidden" name="tab" value=(view.tab.as_str());
                    input type="search" name="q" placeholder="Search problems..." value=(view.search.as_deref().unwrap_or(""));
                }
            }
            @if list.is_empty() {
                div.empty {
                    p { "Nothing here." }
                    p { "Add a problem below to get started." }
                }
            } @else {
                div.items {
                    @for item in list {
                        (render_item(item, now, view))
                    }
                }
            }
            (add_form(view))
            (import_form(view))
            div.shutdown-container {
                form action="/shutdown" method="post" {
                    input #shutdown .shutdown-button type="submit" value="Shut down" title="Shut down the server";
                }
            }
        }
    };
    page_template(body)
}

fn stat_card(label: &str, value: String) -> Markup {
    html! {
        div.stat {
            div.stat-label { (label) }
            div.stat-value { (value) }
        }
    }
}

fn render_item(item: &Item, now: Timestamp, view: &PageView) -> Markup {
    let completed = item.is_completed();
    let difficulty_class = format!("badge difficulty-{}", item.difficulty.as_str().to_lowercase());
    html! {
        div.item.due[is_due(item, now)].completed[completed] {
            div.item-main {
                div.badges {
                    span class=(difficulty_class) { (item.difficulty) }
                    @if let Some(topic) = &item.topic {
                        span.badge.topic { (topic) }
                    }
                    @if item.retry_count > 0 {
                        span.badge.retries { (item.retry_count) " retries" }
                    }
                }
                h3.item-name {
                    a href=(item.link) target="_blank" rel="noopener noreferrer" { (item.name) }
                }
                div.meta {
                    @if !completed {
                        span.next-review { "Next review: " (format_date(item.next_review_date)) }
                    }
                    span.status { (status_label(item, now)) }
                }
            }
            form.item-actions action="/action" method="post" {
                input type="hidden" name="id" value=(item.id.as_str());
                input type="hidden" name="tab" value=(view.tab.as_str());
                input type="hidden" name="q" value=(view.search.as_deref().unwrap_or(""));
                @if completed {
                    button type="submit" name="action" value="Retry" { "Re-queue" }
                } @else {
                    button.solve type="submit" name="action" value="Solve" { "Solved it" }
                    button type="submit" name="action" value="Retry" { "Retry in " (INTERVAL_DAYS) " days" }
                }
                button.delete type="submit" name="action" value="Delete" onclick="return confirm('Delete this problem permanently?');" { "Delete" }
            }
        }
    }
}

fn add_form(view: &PageView) -> Markup {
    let draft = view.add_draft.as_ref();
    let selected = draft
        .and_then(|d| Difficulty::try_from(d.difficulty.clone()).ok())
        .unwrap_or_default();
    html! {
        div.panel {
            h2 { "Add a problem" }
            form.add-form action="/add" method="post" {
                input type="hidden" name="tab" value=(view.tab.as_str());
                input type="hidden" name="q" value=(view.search.as_deref().unwrap_or(""));
                label { "Name" input type="text" name="name" placeholder="e.g. Valid Parentheses" value=(draft.map(|d| d.name.as_str()).unwrap_or("")); }
                label { "Link" input type="url" name="link" placeholder="https://" value=(draft.map(|d| d.link.as_str()).unwrap_or("")); }
                label {
                    "Difficulty"
                    select name="difficulty" {
                        @for difficulty in Difficulty::ALL {
                            option value=(difficulty.as_str()) selected[difficulty == selected] { (difficulty) }
                        }
                    }
                }
                label { "Topic" input type="text" name="topic" placeholder="Optional" value=(draft.map(|d| d.topic.as_str()).unwrap_or("")); }
                input type="submit" value="Add";
            }
        }
    }
}

fn import_form(view: &PageView) -> Markup {
    html! {
        div.panel {
            h2 { "Import a backup" }
            form.import-form action="/import" method="post" {
                textarea name="data" rows="6" placeholder="Paste the contents of an exported JSON file" {
                    (view.import_draft.as_deref().unwrap_or(""))
                }
                label.confirm {
                    input type="checkbox" name="confirm" value="yes";
                    "Replace all current items"
                }
                input type="submit" value="Import";
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_defaults() {
        let view = PageView::new(Some("sideways".to_string()), Some(String::new()));
        assert_eq!(view.tab, Tab::Due);
        assert_eq!(view.search, None);
        assert_eq!(view.href(), "/?tab=due");
    }

    #[test]
    fn test_search_is_not_trimmed() {
        let view = PageView::new(Some("due".to_string()), Some(" sum ".to_string()));
        assert_eq!(view.search.as_deref(), Some(" sum "));
        assert_eq!(view.href(), "/?tab=due&q=%20sum%20");
    }

    #[test]
    fn test_href_encodes_search() {
        let view = PageView::new(Some("completed".to_string()), Some("two sum&x".to_string()));
        assert_eq!(view.href(), "/?tab=completed&q=two%20sum%26x");
    }
}
