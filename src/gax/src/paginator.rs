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
use crate::error::Error;
use crate::response::Response;
use futures::future::BoxFuture;
use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a page returned by a "list" operation.
pub trait PageableResponse {
    type PageItem: Send;

    /// The cursor to fetch the next page, `None` on the last page.
    fn next_page_token(&self) -> Option<String>;

    /// Consumes the page, returning its items.
    fn into_items(self) -> Vec<Self::PageItem>;
}

/// Errors reported by [Pager].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PagerError {
    #[error("no more results available")]
    NoMoreResults,
}

enum PagerState {
    /// More pages may be available, holds the cursor for the next page.
    Ready(Option<String>),
    /// The server reported the last page.
    Exhausted,
}

type FetchPage<T> = Box<dyn FnMut(Option<String>) -> BoxFuture<'static, Result<Response<T>>> + Send>;

/// Iterates over the pages of a "list" operation.
///
/// The pager calls the underlying operation with the cursor returned in the
/// previous page, until the service omits the cursor. The pager is not
/// shareable between concurrent callers, all the methods require `&mut self`.
///
/// # Example
/// ```
/// # use platform_services_gax::paginator::{Pager, PageableResponse};
/// # use platform_services_gax::response::Response;
/// struct Page { items: Vec<String>, next: Option<String> }
/// impl PageableResponse for Page {
///     type PageItem = String;
///     fn next_page_token(&self) -> Option<String> { self.next.clone() }
///     fn into_items(self) -> Vec<String> { self.items }
/// }
///
/// # tokio_test::block_on(async {
/// let mut pager = Pager::new(|cursor: Option<String>| async move {
///     let page = match cursor {
///         None => Page { items: vec!["a".into()], next: Some("1".into()) },
///         Some(_) => Page { items: vec!["b".into()], next: None },
///     };
///     Ok(Response::from(page))
/// });
/// let all = pager.get_all().await?;
/// assert_eq!(all, vec!["a", "b"]);
/// assert!(!pager.has_next());
/// # platform_services_gax::Result::<()>::Ok(()) });
/// ```
pub struct Pager<T>
where
    T: PageableResponse,
{
    fetch: FetchPage<T>,
    state: PagerState,
}

impl<T> Pager<T>
where
    T: PageableResponse + Send + 'static,
{
    /// Creates a new pager given a function to fetch a page.
    ///
    /// The function receives the cursor for the page, it receives `None` for
    /// the first page.
    pub fn new<F, Fut>(mut fetch: F) -> Self
    where
        F: FnMut(Option<String>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Response<T>>> + Send + 'static,
    {
        let fetch: FetchPage<T> = Box::new(move |cursor| Box::pin(fetch(cursor)));
        Self {
            fetch,
            state: PagerState::Ready(None),
        }
    }

    /// Returns `true` if the first page was not fetched yet, or if the last
    /// page fetched included a cursor.
    pub fn has_next(&self) -> bool {
        matches!(self.state, PagerState::Ready(_))
    }

    /// Fetches the next page and returns its items.
    ///
    /// Fails with an [exhausted][Error::is_exhausted] error if the last page
    /// was already returned. If the operation fails the pager state is not
    /// modified, and the caller may try again.
    pub async fn get_next(&mut self) -> Result<Vec<T::PageItem>> {
        let cursor = match &self.state {
            PagerState::Exhausted => return Err(Error::exhausted(PagerError::NoMoreResults)),
            PagerState::Ready(cursor) => cursor.clone(),
        };
        tracing::debug!(?cursor, "fetching next page");
        let response = (self.fetch)(cursor).await?;
        let Some(page) = response.into_body() else {
            self.state = PagerState::Exhausted;
            return Ok(Vec::new());
        };
        self.state = match page.next_page_token() {
            Some(next) => PagerState::Ready(Some(next)),
            None => PagerState::Exhausted,
        };
        Ok(page.into_items())
    }

    /// Fetches all the remaining pages, returning their items in order.
    ///
    /// Stops at the first error, any items fetched before the error are
    /// discarded.
    pub async fn get_all(&mut self) -> Result<Vec<T::PageItem>> {
        let mut all = Vec::new();
        while self.has_next() {
            let items = self.get_next().await?;
            all.extend(items);
        }
        Ok(all)
    }

    /// Converts the pager into a [Stream] of pages.
    ///
    /// The stream ends after the last page, or after the first error.
    pub fn into_stream(self) -> PageStream<T::PageItem>
    where
        T::PageItem: 'static,
    {
        let stream = unfold(Some(self), |pager| async move {
            let mut pager = pager?;
            if !pager.has_next() {
                return None;
            }
            match pager.get_next().await {
                Ok(items) => Some((Ok(items), Some(pager))),
                Err(e) => Some((Err(e), None)),
            }
        });
        PageStream {
            stream: Box::pin(stream),
        }
    }
}

/// A [Stream] over the pages of a "list" operation.
#[pin_project]
pub struct PageStream<I> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<Vec<I>>> + Send>>,
}

impl<I> PageStream<I> {
    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<I> Stream for PageStream<I> {
    type Item = Result<Vec<I>>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}
