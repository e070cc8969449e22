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

mod get;
mod post;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use revqueue_core::codec::deserialize_items;
    use tokio::spawn;

    use crate::cmd::serve::server::ServerConfig;
    use crate::cmd::serve::server::start_server;
    use crate::collection::Collection;
    use crate::error::Fallible;
    use crate::helper::create_tmp_collection;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    /// HTTP errors come from `reqwest`, so the tests box everything.
    type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

    /// Start a server over a fresh sample collection and return its base URL
    /// and directory.
    async fn start() -> Fallible<(String, String)> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_collection()?;
        let config = ServerConfig {
            collection: Collection::new(Some(directory.clone()))?,
            host: TEST_HOST.to_string(),
            port,
        };
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;
        Ok((format!("http://{TEST_HOST}:{port}"), directory))
    }

    async fn get_html(url: String) -> TestResult<String> {
        let response = reqwest::get(url).await?;
        assert!(response.status().is_success());
        Ok(response.text().await?)
    }

    fn saved_names(directory: &str) -> Fallible<Vec<String>> {
        let collection = Collection::new(Some(directory.to_string()))?;
        let text = std::fs::read_to_string(collection.data_path())?;
        Ok(deserialize_items(&text)?
            .into_iter()
            .map(|item| item.name)
            .collect())
    }

    #[tokio::test]
    async fn test_static_and_not_found() -> TestResult {
        let (base, _) = start().await?;

        // Hit the `style.css` endpoint.
        let response = reqwest::get(format!("{base}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        // Hit the not found endpoint.
        let response = reqwest::get(format!("{base}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Hit the root endpoint.
        let response = reqwest::get(format!("{base}/")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_tabs_and_search() -> TestResult {
        let (base, _) = start().await?;

        let html = get_html(format!("{base}/")).await?;
        assert!(html.contains("Due (2)"));
        assert!(html.contains("Upcoming (1)"));
        assert!(html.contains("Solved (1)"));
        assert!(html.contains("Two Sum"));
        assert!(html.contains("LRU Cache"));
        assert!(!html.contains("Word Ladder"));
        assert!(html.contains("Due now"));

        let html = get_html(format!("{base}/?tab=upcoming")).await?;
        assert!(html.contains("Word Ladder"));
        assert!(html.contains("In 4 days"));
        assert!(!html.contains("Two Sum"));

        let html = get_html(format!("{base}/?tab=completed")).await?;
        assert!(html.contains("N-Queens"));
        assert!(html.contains("Re-queue"));

        // Search narrows the list but not the counts.
        let html = get_html(format!("{base}/?tab=due&q=DESIGN")).await?;
        assert!(html.contains("LRU Cache"));
        assert!(!html.contains("Two Sum"));
        assert!(html.contains("Due (2)"));
        Ok(())
    }

    #[tokio::test]
    async fn test_add() -> TestResult {
        let (base, directory) = start().await?;

        // Blank name is rejected.
        let response = reqwest::Client::new()
            .post(format!("{base}/add"))
            .form(&[
                ("name", "  "),
                ("link", "https://example.com/jump"),
                ("difficulty", "Medium"),
                ("topic", ""),
            ])
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = response.text().await?;
        assert!(html.contains("name must not be blank."));
        assert_eq!(saved_names(&directory)?.len(), 4);

        // A valid add lands in the upcoming tab.
        let response = reqwest::Client::new()
            .post(format!("{base}/add"))
            .form(&[
                ("name", "Jump Game"),
                ("link", "https://example.com/jump"),
                ("difficulty", "Hard"),
                ("topic", "Greedy"),
                ("tab", "upcoming"),
                ("q", "jump"),
            ])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Jump Game"));
        assert!(html.contains("Upcoming (2)"));
        // The search survives the redirect.
        assert!(!html.contains("Word Ladder"));
        assert!(saved_names(&directory)?.contains(&"Jump Game".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_actions() -> TestResult {
        let (base, directory) = start().await?;
        let client = reqwest::Client::new();

        // Solve moves an item to the solved tab.
        let response = client
            .post(format!("{base}/action"))
            .form(&[("action", "Solve"), ("id", "due0001"), ("tab", "completed")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Two Sum"));
        assert!(html.contains("Solved (2)"));

        // Re-queue brings a solved item back as upcoming.
        let response = client
            .post(format!("{base}/action"))
            .form(&[("action", "Retry"), ("id", "sol0001"), ("tab", "upcoming")])
            .send()
            .await?;
        let html = response.text().await?;
        assert!(html.contains("N-Queens"));
        assert!(html.contains("2 retries"));

        // Delete removes the item everywhere.
        let response = client
            .post(format!("{base}/action"))
            .form(&[("action", "Delete"), ("id", "due0002")])
            .send()
            .await?;
        assert!(response.status().is_success());
        assert!(!saved_names(&directory)?.contains(&"LRU Cache".to_string()));

        // Unknown ids are ignored.
        let response = client
            .post(format!("{base}/action"))
            .form(&[("action", "Delete"), ("id", "nope")])
            .send()
            .await?;
        assert!(response.status().is_success());
        assert_eq!(saved_names(&directory)?.len(), 3);

        // Unknown actions are not.
        let response = client
            .post(format!("{base}/action"))
            .form(&[("action", "Explode"), ("id", "due0001")])
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn test_export() -> TestResult {
        let (base, _) = start().await?;
        let response = reqwest::get(format!("{base}/export")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let disposition = response
            .headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"revqueue-backup-"));
        let items = deserialize_items(&response.text().await?)?;
        assert_eq!(items.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_import() -> TestResult {
        let (base, directory) = start().await?;
        let client = reqwest::Client::new();
        let backup = r#"[{"id": "new0001", "name": "Jump Game", "link": "https://example.com/jump", "difficulty": "Medium", "addedDate": 1, "nextReviewDate": 432000001, "retryCount": 0}]"#;

        // Not an array.
        let response = client
            .post(format!("{base}/import"))
            .form(&[("data", "{}"), ("confirm", "yes")])
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.text().await?.contains("expected a JSON array of items."));
        assert_eq!(saved_names(&directory)?.len(), 4);

        // Without confirmation nothing changes.
        let response = client
            .post(format!("{base}/import"))
            .form(&[("data", backup)])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Tick the box to confirm."));
        assert_eq!(saved_names(&directory)?.len(), 4);

        // Confirmed.
        let response = client
            .post(format!("{base}/import"))
            .form(&[("data", backup), ("confirm", "yes")])
            .send()
            .await?;
        assert!(response.status().is_success());
        assert!(response.text().await?.contains("Imported 1 items."));
        assert_eq!(saved_names(&directory)?, vec!["Jump Game".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_shutdown() -> TestResult {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_collection()?;
        let config = ServerConfig {
            collection: Collection::new(Some(directory))?,
            host: TEST_HOST.to_string(),
            port,
        };
        let handle = spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;
        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/shutdown"))
            .send()
            .await?;
        assert!(response.status().is_success());
        handle.await.unwrap()?;
        Ok(())
    }
}
