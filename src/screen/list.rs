//! State behind the product list screen.
//!
//! The screen owns a [`ListState`] mirror of the record store. The mirror only
//! changes after the store confirms: a refresh replaces it, a confirmed delete
//! removes one record, and a failure leaves it as it was.

use tracing::{info, instrument, warn};

use crate::framework::StoreClient;
use crate::listing::ListState;
use crate::model::ProductId;

use super::notice::Notices;

/// A delete the user asked for but has not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: ProductId,
    pub name: String,
}

impl PendingDelete {
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            self.name
        )
    }
}

pub struct ProductListScreen {
    client: StoreClient,
    state: ListState,
    loading: bool,
    error: Option<String>,
    pending_delete: Option<PendingDelete>,
    deleting: Option<ProductId>,
    pub notices: Notices,
}

impl ProductListScreen {
    pub fn new(client: StoreClient, page_size: usize) -> Self {
        Self {
            client,
            state: ListState::new(page_size),
            loading: false,
            error: None,
            pending_delete: None,
            deleting: None,
            notices: Notices::default(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Filter and page changes go straight to the owned state.
    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The persistent error banner from the last failed load, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn deleting(&self) -> Option<&ProductId> {
        self.deleting.as_ref()
    }

    /// Fetches the full record set. Returns whether the fetch succeeded.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> bool {
        self.loading = true;
        self.error = None;

        let ok = match self.client.list_all().await {
            Ok(products) => {
                info!(count = products.len(), "Loaded products");
                self.state.replace_records(products);
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to load products");
                self.error = Some(e.to_string());
                self.notices.error("Failed to load products");
                false
            }
        };
        self.loading = false;
        ok
    }

    /// Opens the confirmation for `id`. Unknown ids are ignored.
    pub fn request_delete(&mut self, id: &ProductId) -> Option<&PendingDelete> {
        let product = self.state.find(id)?;
        self.pending_delete = Some(PendingDelete {
            id: product.id.clone(),
            name: product.name.clone(),
        });
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the pending product. On failure the confirmation stays open so
    /// the user can retry or cancel.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(pending) = self.pending_delete.clone() else {
            return false;
        };
        self.deleting = Some(pending.id.clone());

        let ok = match self.client.remove(pending.id.clone()).await {
            Ok(()) => {
                self.state.remove(&pending.id);
                self.pending_delete = None;
                info!(id = %pending.id, "Deleted product");
                self.notices
                    .success(format!("Product \"{}\" deleted successfully!", pending.name));
                true
            }
            Err(e) => {
                warn!(id = %pending.id, error = %e, "Delete failed");
                self.notices.error(e.to_string());
                false
            }
        };
        self.deleting = None;
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;
    use crate::framework::mock::MockStore;
    use crate::model::Product;
    use crate::screen::NoticeLevel;

    fn products() -> Vec<Product> {
        vec![
            Product::new("a", "Lamp", "Home & Garden", 20.0, 3),
            Product::new("b", "Sofa", "Home & Garden", 400.0, 0),
        ]
    }

    #[tokio::test]
    async fn refresh_failure_sets_error_and_clears_loading() {
        let mock = MockStore::new();
        mock.expect_list()
            .return_err(RemoteError::Transport("connection refused".into()));
        let mut screen = ProductListScreen::new(mock.client(), 10);

        assert!(!screen.refresh().await);
        assert!(!screen.is_loading());
        assert_eq!(screen.error(), Some("connection refused"));
        assert_eq!(
            screen.notices.last().map(|n| n.level),
            Some(NoticeLevel::Error)
        );

        screen.dismiss_error();
        assert_eq!(screen.error(), None);
        mock.verify();
    }

    #[tokio::test]
    async fn cancel_leaves_records_alone() {
        let mock = MockStore::new();
        mock.expect_list().return_ok(products());
        let mut screen = ProductListScreen::new(mock.client(), 10);
        screen.refresh().await;

        let pending = screen.request_delete(&"b".into()).unwrap();
        assert_eq!(
            pending.prompt(),
            "Are you sure you want to delete \"Sofa\"? This action cannot be undone."
        );
        screen.cancel_delete();
        assert!(screen.pending_delete().is_none());
        assert!(!screen.confirm_delete().await);
        assert_eq!(screen.state().records().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    async fn failed_delete_keeps_confirmation_until_cancelled() {
        let mock = MockStore::new();
        mock.expect_list().return_ok(products());
        mock.expect_delete("a")
            .return_err(RemoteError::Service {
                status: 500,
                body: "boom".into(),
            });
        mock.expect_delete("a").return_ok(());
        let mut screen = ProductListScreen::new(mock.client(), 10);
        screen.refresh().await;

        screen.request_delete(&"a".into());
        assert!(!screen.confirm_delete().await);
        assert!(screen.deleting().is_none());
        assert_eq!(screen.pending_delete().map(|p| p.name.as_str()), Some("Lamp"));

        assert!(screen.confirm_delete().await);
        assert!(screen.deleting().is_none());
        assert!(screen.pending_delete().is_none());
        assert_eq!(screen.state().records().len(), 1);

        screen.request_delete(&"b".into());
        screen.cancel_delete();
        assert!(screen.pending_delete().is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn unknown_id_opens_nothing() {
        let mock = MockStore::new();
        let mut screen = ProductListScreen::new(mock.client(), 10);
        assert!(screen.request_delete(&"zzz".into()).is_none());
        assert!(mock.calls().is_empty());
    }
}
