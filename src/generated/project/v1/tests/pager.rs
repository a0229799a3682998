// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Verify the pager iterates over all the pages of `list_projects()`.

#[cfg(test)]
mod tests {
    use auth::credentials::anonymous;
    use gax::options::RequestOptionsBuilder;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use platform_services_project_v1::client::ProjectService;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    async fn client(server: &Server) -> Result<ProjectService> {
        let client = ProjectService::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    fn first_page() -> serde_json::Value {
        json!({
            "limit": 1,
            "total_count": 2,
            "first": {"href": "https://projects.example.com/v1/projects?limit=1"},
            "next": {"href": "https://projects.example.com/v1/projects?limit=1&start=1", "start": "1"},
            "projects": [{"id": "p-1", "name": "one"}]
        })
    }

    fn last_page() -> serde_json::Value {
        json!({
            "limit": 1,
            "total_count": 2,
            "first": {"href": "https://projects.example.com/v1/projects?limit=1"},
            "projects": [{"id": "p-2", "name": "two"}]
        })
    }

    fn expect_pages(server: &Server) {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects"),
                request::query(url_decoded(contains(("limit", "1")))),
                request::query(url_decoded(not(contains(key("start"))))),
            ])
            .times(1)
            .respond_with(json_encoded(first_page())),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects"),
                request::query(url_decoded(contains(("limit", "1")))),
                request::query(url_decoded(contains(("start", "1")))),
            ])
            .times(1)
            .respond_with(json_encoded(last_page())),
        );
    }

    #[tokio::test]
    async fn get_all() -> Result<()> {
        let server = Server::run();
        expect_pages(&server);
        let client = client(&server).await?;
        let mut pager = client.list_projects().set_limit(1).by_page()?;
        assert!(pager.has_next());
        let all = pager.get_all().await?;
        let ids = all.iter().filter_map(|p| p.id.as_deref()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["p-1", "p-2"]);
        assert!(!pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn get_next() -> Result<()> {
        let server = Server::run();
        expect_pages(&server);
        let client = client(&server).await?;
        let mut pager = client
            .list_projects()
            .set_limit(1)
            .with_idempotency(true)
            .by_page()?;

        let page = pager.get_next().await?;
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name.as_deref(), Some("one"));
        assert!(pager.has_next());

        let page = pager.get_next().await?;
        assert_eq!(page[0].name.as_deref(), Some("two"));
        assert!(!pager.has_next());

        let err = pager.get_next().await.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn into_stream() -> Result<()> {
        let server = Server::run();
        expect_pages(&server);
        let client = client(&server).await?;
        let mut stream = client.list_projects().set_limit(1).by_page()?.into_stream();
        let mut pages = Vec::new();
        while let Some(page) = stream.next().await {
            pages.push(page?.len());
        }
        assert_eq!(pages, vec![1, 1]);
        Ok(())
    }

    #[tokio::test]
    async fn get_all_fails_fast() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects"),
                request::query(url_decoded(not(contains(key("start"))))),
            ])
            .respond_with(json_encoded(first_page())),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects"),
                request::query(url_decoded(contains(("start", "1")))),
            ])
            .respond_with(status_code(500).body("{\"error\": \"internal\"}")),
        );
        let client = client(&server).await?;
        let mut pager = client.list_projects().set_limit(1).by_page()?;
        let err = pager.get_all().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(500), "{err:?}");
        // The failed page can be fetched again.
        assert!(pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn start_already_set() -> Result<()> {
        let server = Server::run();
        let client = client(&server).await?;
        let err = client
            .list_projects()
            .set_start("cursor")
            .by_page()
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn first_page_error() -> Result<()> {
        let server = Server::run();
        let mut client = client(&server).await?;
        client.set_service_url("");
        let mut pager = client.list_projects().by_page()?;
        let err = pager.get_next().await.unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        assert!(pager.has_next());
        Ok(())
    }
}
