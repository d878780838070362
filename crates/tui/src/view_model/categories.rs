use api_types::category::Category;

use super::{ActionError, EntityKind, Modal, Panel, Validate, ViewModel};
use crate::client::Backend;

const FAIL_SET: &str = "Fail to set category";
const FAIL_DELETE: &str = "Fail to delete category";
const DUPLICATE: &str = "A category with the same name already exists.";

impl<B: Backend> ViewModel<B> {
    pub async fn fetch_categories(&mut self) -> bool {
        match self.backend.list_categories().await {
            Ok(categories) => {
                tracing::debug!(count = categories.len(), "categories fetched");
                self.categories = categories;
                true
            }
            Err(err) => {
                tracing::warn!("failed to fetch categories: {err}");
                false
            }
        }
    }

    pub async fn show_categories(&mut self) -> bool {
        if !self.fetch_categories().await {
            return false;
        }
        self.show_panel(Panel::Categories);
        true
    }

    pub fn open_input_category(&mut self, index: Option<usize>) -> Result<(), ActionError> {
        let mut draft = Category::default();
        if let Some(index) = index {
            let Some(category) = self.categories.get(index) else {
                return Err(self.wrong_action());
            };
            draft = category.clone();
        }
        self.category_modal = Some(Modal::new(draft));
        Ok(())
    }

    pub fn category_name_taken(&self, draft: &Category) -> bool {
        let name = draft.category_name.trim();
        if name.is_empty() {
            return false;
        }
        self.categories
            .iter()
            .any(|category| category.category_name == name && category.id != draft.id)
    }

    pub async fn set_category(&mut self) -> Result<(), ActionError> {
        let Some(modal) = self.category_modal.as_mut() else {
            return Err(self.wrong_action());
        };
        if let Err(err) = modal.draft.validate() {
            modal.invalid = Some(err.clone());
            return Err(err.into());
        }
        modal.invalid = None;
        modal.draft.category_name = modal.draft.category_name.trim().to_string();

        let draft = modal.draft.clone();
        if self.category_name_taken(&draft) {
            self.alert(DUPLICATE);
            return Err(ActionError::DuplicateName {
                kind: EntityKind::Category,
                name: draft.category_name,
            });
        }

        self.request_category().await
    }

    pub async fn request_category(&mut self) -> Result<(), ActionError> {
        let Some(modal) = self.category_modal.as_ref() else {
            return Err(self.wrong_action());
        };
        let draft = modal.draft.clone();
        self.upsert_category(&draft).await?;
        self.category_modal = None;
        Ok(())
    }

    pub(crate) async fn upsert_category(&mut self, draft: &Category) -> Result<(), ActionError> {
        if let Err(err) = self.backend.upsert_category(draft).await {
            self.alert(FAIL_SET);
            return Err(err.into());
        }
        if !self.fetch_categories().await {
            tracing::warn!("category saved but the list could not be reloaded");
        }
        Ok(())
    }

    pub async fn delete_category(&mut self, index: usize) -> Result<(), ActionError> {
        let Some(id) = self.categories.get(index).and_then(|c| c.id.clone()) else {
            return Err(self.wrong_action());
        };

        if let Err(err) = self.backend.delete_category(&id).await {
            self.alert(FAIL_DELETE);
            return Err(err.into());
        }
        self.fetch_categories().await;
        self.category_modal = None;
        Ok(())
    }

    fn category_exists(&self, name: &str) -> bool {
        self.categories
            .iter()
            .any(|category| category.category_name == name)
    }

    /// Makes sure a category named `name` exists, creating it when needed.
    pub(crate) async fn resolve_or_create_category(&mut self, name: &str) -> Result<(), ActionError> {
        if self.category_exists(name) {
            return Ok(());
        }

        tracing::info!(name, "creating category for record");
        self.upsert_category(&Category::named(name)).await?;

        if self.category_exists(name) {
            return Ok(());
        }
        self.alert(FAIL_SET);
        Err(ActionError::Unresolved {
            kind: EntityKind::Category,
            name: name.to_string(),
        })
    }
}
