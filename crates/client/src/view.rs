//! Paginated views backed by the remote API.
//!
//! After a mutation the collection is fetched again and swapped into the
//! existing view, so search, category, sort and (when still valid) the page
//! survive the refresh.

use std::future::Future;

use eventhub_core::listing::{Listable, PaginatedView};

use crate::error::Result;

/// A [`PaginatedView`] whose collection comes from an API call.
#[derive(Debug, Clone)]
pub struct RemoteListView<T> {
    view: PaginatedView<T>,
}

impl<T: Listable + Clone> RemoteListView<T> {
    /// Awaits `fetch` and loads the result into `view`.
    pub async fn load<F>(view: PaginatedView<T>, fetch: F) -> Result<Self>
    where
        F: Future<Output = Result<Vec<T>>>,
    {
        let items = fetch.await?;
        tracing::debug!(count = items.len(), "list view loaded");
        Ok(Self {
            view: view.with_collection(items),
        })
    }

    /// Re-fetches the collection, keeping filter, sort and page state.
    pub async fn refresh<F>(&mut self, fetch: F) -> Result<()>
    where
        F: Future<Output = Result<Vec<T>>>,
    {
        let items = fetch.await?;
        tracing::debug!(count = items.len(), "list view refreshed");
        self.view.replace_collection(items);
        Ok(())
    }

    /// Runs `mutation`, then refreshes from `fetch`.
    ///
    /// `fetch` is only polled once the mutation has succeeded; a failed
    /// mutation leaves the view untouched.
    pub async fn mutate<M, R, F>(&mut self, mutation: M, fetch: F) -> Result<R>
    where
        M: Future<Output = Result<R>>,
        F: Future<Output = Result<Vec<T>>>,
    {
        let outcome = mutation.await?;
        self.refresh(fetch).await?;
        Ok(outcome)
    }

    pub fn view(&self) -> &PaginatedView<T> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PaginatedView<T> {
        &mut self.view
    }

    pub fn into_view(self) -> PaginatedView<T> {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[derive(Debug, Clone, PartialEq)]
    struct Invite {
        email: String,
    }

    impl Listable for Invite {
        fn search_field(&self) -> &str {
            &self.email
        }
    }

    fn invites(count: usize) -> Vec<Invite> {
        (0..count)
            .map(|i| Invite {
                email: format!("guest{i}@example.com"),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_refresh_keeps_filter_and_clamps_page() {
        let view = PaginatedView::new(2).unwrap();
        let mut list = RemoteListView::load(view, async { Ok(invites(10)) })
            .await
            .unwrap();
        list.view_mut().set_search_term("guest");
        list.view_mut().go_to_page(5);

        list.refresh(async { Ok(invites(5)) }).await.unwrap();

        assert_eq!(list.view().filter().search_term, "guest");
        assert_eq!(list.view().current_page(), 3);
        assert_eq!(list.view().visible_slice().items.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_mutation_skips_refresh() {
        let view = PaginatedView::new(5).unwrap();
        let mut list = RemoteListView::load(view, async { Ok(invites(3)) })
            .await
            .unwrap();

        let result: Result<()> = list
            .mutate(
                async {
                    Err(ClientError::Forbidden("organizers only".to_string()))
                },
                async { Ok(invites(0)) },
            )
            .await;

        assert!(matches!(result, Err(ClientError::Forbidden(_))));
        assert_eq!(list.view().collection().len(), 3);
    }

    #[tokio::test]
    async fn test_mutation_then_refresh() {
        let view = PaginatedView::new(5).unwrap();
        let mut list = RemoteListView::load(view, async { Ok(invites(3)) })
            .await
            .unwrap();

        let removed = list
            .mutate(async { Ok("guest0@example.com") }, async { Ok(invites(2)) })
            .await
            .unwrap();

        assert_eq!(removed, "guest0@example.com");
        assert_eq!(list.into_view().collection().len(), 2);
    }
}
