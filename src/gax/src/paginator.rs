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

//! Streams over the results of `List*` RPCs.
//!
//! `List*` RPCs return one page of results at a time, with a token to fetch
//! the next page. [Paginator] streams the pages, [ItemPaginator] streams the
//! items across all pages.
//!
//! # Example
//! ```
//! # use gcs_gax::paginator::*;
//! # struct Page { items: Vec<String>, token: String }
//! # impl PageableResponse for Page {
//! #     type PageItem = String;
//! #     fn items(self) -> Vec<String> { self.items }
//! #     fn next_page_token(&self) -> String { self.token.clone() }
//! # }
//! # tokio_test::block_on(async {
//! let mut items = Paginator::new(String::new(), |token: String| async move {
//!     let (items, next) = match token.as_str() {
//!         "" => (vec!["a".to_string(), "b".to_string()], "p2".to_string()),
//!         _ => (vec!["c".to_string()], String::new()),
//!     };
//!     Ok::<_, gcs_gax::error::Error>(Page { items, token: next })
//! })
//! .items();
//! while let Some(item) = items.next().await {
//!     println!("{}", item?);
//! }
//! # Ok::<(), gcs_gax::error::Error>(()) });
//! ```

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Implemented by the responses of `List*` RPCs.
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the page and returns its items.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token for the next page, empty on the last page.
    fn next_page_token(&self) -> String;
}

/// A stream of pages.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

enum PageState {
    Next(String),
    Done,
}

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a paginator.
    ///
    /// `execute` fetches the page for a token, starting with `seed_token`.
    /// The stream ends after a page with an empty `next_page_token`, or
    /// after the first error.
    pub fn new<F, Fut>(seed_token: String, execute: F) -> Self
    where
        F: Fn(String) -> Fut + Clone + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(PageState::Next(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    PageState::Next(token) => token,
                    PageState::Done => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let next = page.next_page_token();
                        let state = if next.is_empty() {
                            PageState::Done
                        } else {
                            PageState::Next(next)
                        };
                        Some((Ok(page), state))
                    }
                    Err(e) => Some((Err(e), PageState::Done)),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts into a stream of items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream of items across all pages.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T::PageItem, E>> + Send>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        let stream = pages.flat_map(|page| {
            let items: Vec<Result<T::PageItem, E>> = match page {
                Ok(page) => page.items().into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct TestPage {
        names: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestPage {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.names
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn page(names: &[&str], next: &str) -> TestPage {
        TestPage {
            names: names.iter().map(|s| s.to_string()).collect(),
            next_page_token: next.to_string(),
        }
    }

    type Script = Arc<Mutex<VecDeque<(String, Result<TestPage, String>)>>>;

    fn scripted(
        script: Script,
    ) -> impl Fn(String) -> futures::future::Ready<Result<TestPage, String>> + Clone + Send + 'static
    {
        move |token| {
            let (want, response) = script
                .lock()
                .expect("not poisoned")
                .pop_front()
                .expect("an unexpected call");
            assert_eq!(token, want);
            futures::future::ready(response)
        }
    }

    #[tokio::test]
    async fn pages() {
        let script: Script = Arc::new(Mutex::new(VecDeque::from([
            ("seed".to_string(), Ok(page(&["a", "b"], "t2"))),
            ("t2".to_string(), Ok(page(&[], "t3"))),
            ("t3".to_string(), Ok(page(&["c"], ""))),
        ])));
        let mut paginator = Paginator::new("seed".to_string(), scripted(script.clone()));
        let mut got = Vec::new();
        while let Some(p) = paginator.next().await {
            got.push(p.expect("scripted pages succeed").names.len());
        }
        assert_eq!(got, vec![2, 0, 1]);
        assert!(script.lock().expect("not poisoned").is_empty());
    }

    #[tokio::test]
    async fn items() {
        let script: Script = Arc::new(Mutex::new(VecDeque::from([
            (String::new(), Ok(page(&["a", "b"], "t2"))),
            ("t2".to_string(), Ok(page(&["c"], ""))),
        ])));
        let mut items = Paginator::new(String::new(), scripted(script)).items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item.expect("scripted pages succeed"));
        }
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn error_stops_stream() {
        let script: Script = Arc::new(Mutex::new(VecDeque::from([
            (String::new(), Ok(page(&["a"], "t2"))),
            ("t2".to_string(), Err("uh-oh".to_string())),
        ])));
        let mut items = Paginator::new(String::new(), scripted(script)).items();
        assert_eq!(items.next().await, Some(Ok("a".to_string())));
        assert_eq!(items.next().await, Some(Err("uh-oh".to_string())));
        assert_eq!(items.next().await, None);
    }
}
