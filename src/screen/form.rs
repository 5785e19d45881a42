//! State behind the add and edit product forms.

use tracing::{info, instrument, warn};

use crate::error::{InventoryError, RemoteError};
use crate::framework::StoreClient;
use crate::model::{Product, ProductId};
use crate::validation::{check, validate, Field, ProductDraft, ValidationErrors};

use super::notice::Notices;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

pub struct ProductForm {
    client: StoreClient,
    mode: FormMode,
    draft: ProductDraft,
    errors: ValidationErrors,
    submit_error: Option<String>,
    submitting: bool,
    pub notices: Notices,
}

impl ProductForm {
    /// An empty form for a new product.
    pub fn create(client: StoreClient) -> Self {
        Self::with_draft(client, FormMode::Create, ProductDraft::default())
    }

    /// Loads the product and seeds the form from it.
    #[instrument(skip(client))]
    pub async fn edit(client: StoreClient, id: ProductId) -> Result<Self, RemoteError> {
        let product = client.get_one(id).await?;
        Ok(Self::from_product(client, &product))
    }

    /// An edit form seeded from a product already in hand.
    pub fn from_product(client: StoreClient, product: &Product) -> Self {
        Self::with_draft(
            client,
            FormMode::Edit(product.id.clone()),
            ProductDraft::from_product(product),
        )
    }

    fn with_draft(client: StoreClient, mode: FormMode, draft: ProductDraft) -> Self {
        Self {
            client,
            mode,
            draft,
            errors: ValidationErrors::default(),
            submit_error: None,
            submitting: false,
            notices: Notices::default(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn dismiss_submit_error(&mut self) {
        self.submit_error = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Updates one field and clears that field's error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Re-validates the draft without submitting it.
    pub fn check(&mut self) -> bool {
        self.errors = check(&self.draft);
        self.errors.is_empty()
    }

    /// Validates the draft and, when it passes, sends exactly one create or
    /// update. Field errors stop the submission before any request is made.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn submit(&mut self) -> Result<Product, InventoryError> {
        self.submit_error = None;
        let fields = match validate(&self.draft) {
            Ok(fields) => fields,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(errors.into());
            }
        };
        self.errors = ValidationErrors::default();

        self.submitting = true;
        let result = match &self.mode {
            FormMode::Create => self.client.create(fields).await,
            FormMode::Edit(id) => self.client.update(id.clone(), fields).await,
        };
        self.submitting = false;

        match result {
            Ok(product) => {
                info!(id = %product.id, "Saved product");
                self.notices.success(match self.mode {
                    FormMode::Create => "Product added successfully!",
                    FormMode::Edit(_) => "Product updated successfully!",
                });
                Ok(product)
            }
            Err(e) => {
                warn!(error = %e, "Save failed");
                self.submit_error = Some(e.to_string());
                self.notices.error(e.to_string());
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockStore;

    #[tokio::test]
    async fn set_field_clears_only_that_error() {
        let mock = MockStore::new();
        let mut form = ProductForm::create(mock.client());
        assert!(!form.check());
        assert_eq!(form.errors().len(), 4);

        form.set_field(Field::Name, "Chair");
        assert_eq!(form.errors().get(Field::Name), None);
        assert_eq!(form.errors().len(), 3);
    }

    #[tokio::test]
    async fn edit_seeds_draft_from_product() {
        let mock = MockStore::new();
        mock.expect_get("p7")
            .return_ok(Product::new("p7", "Sold Out Hat", "Clothing", 15.0, 0));

        let form = ProductForm::edit(mock.client(), "p7".into()).await.unwrap();
        assert_eq!(form.mode(), &FormMode::Edit("p7".into()));
        assert_eq!(form.draft().stock, "0");
        assert_eq!(form.draft().category, "Clothing");
        mock.verify();
    }

    #[tokio::test]
    async fn edit_of_missing_product_fails() {
        let mock = MockStore::new();
        mock.expect_get("p0")
            .return_err(RemoteError::NotFound("p0".into()));
        let result = ProductForm::edit(mock.client(), "p0".into()).await;
        assert!(matches!(result, Err(RemoteError::NotFound(_))));
    }
}
