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

use crate::Result;
use crate::builder::project_service::ListProjects;
use crate::model::{ProjectListItem, ProjectListResponseSchema};
use gax::error::Error;
use gax::paginator::{PageStream, PageableResponse, Pager};

impl PageableResponse for ProjectListResponseSchema {
    type PageItem = ProjectListItem;

    fn next_page_token(&self) -> Option<String> {
        self.get_next_start()
    }

    fn into_items(self) -> Vec<ProjectListItem> {
        self.projects
    }
}

/// Iterates over the projects returned by
/// [list_projects()][crate::client::ProjectService::list_projects].
///
/// The pager fetches one page per call to [get_next()][ProjectsPager::get_next],
/// using the cursor returned in the previous page. All the other request fields
/// and the request options are the same for every page.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use platform_services_project_v1::client::ProjectService;
/// let client = ProjectService::builder().build().await?;
/// let mut pager = client.list_projects().set_limit(10).by_page()?;
/// while pager.has_next() {
///     for project in pager.get_next().await? {
///         println!("{:?}", project.id);
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
pub struct ProjectsPager {
    inner: Pager<ProjectListResponseSchema>,
}

impl ProjectsPager {
    pub(crate) fn new(builder: ListProjects) -> Result<Self> {
        if builder.cursor().is_some() {
            return Err(Error::validation(
                "the `start` field must not be set when using a pager",
            ));
        }
        let inner = Pager::new(move |cursor| builder.clone().with_cursor(cursor).send());
        Ok(Self { inner })
    }

    /// Returns `true` if there may be more results to fetch.
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Fetches the next page of projects.
    ///
    /// Fails with an [exhausted][Error::is_exhausted] error after the last
    /// page.
    pub async fn get_next(&mut self) -> Result<Vec<ProjectListItem>> {
        self.inner.get_next().await
    }

    /// Fetches all the remaining pages of projects.
    ///
    /// On error, the projects fetched before the error are discarded.
    pub async fn get_all(&mut self) -> Result<Vec<ProjectListItem>> {
        self.inner.get_all().await
    }

    /// Converts the pager into a stream of pages.
    pub fn into_stream(self) -> PageStream<ProjectListItem> {
        self.inner.into_stream()
    }
}

impl std::fmt::Debug for ProjectsPager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectsPager")
            .field("has_next", &self.has_next())
            .finish()
    }
}
