use api_types::account::Account;

use super::{ActionError, EntityKind, Modal, Panel, Validate, ViewModel};
use crate::client::Backend;

const FAIL_SET: &str = "Fail to set account";
const FAIL_DELETE: &str = "Fail to delete account";
const DUPLICATE: &str = "An account with the same name already exists.";

impl<B: Backend> ViewModel<B> {
    /// Replaces the cached accounts with the backend's list.
    pub async fn fetch_accounts(&mut self) -> bool {
        match self.backend.list_accounts().await {
            Ok(accounts) => {
                tracing::debug!(count = accounts.len(), "accounts fetched");
                self.accounts = accounts;
                true
            }
            Err(err) => {
                tracing::warn!("failed to fetch accounts: {err}");
                false
            }
        }
    }

    pub async fn show_accounts(&mut self) -> bool {
        if !self.fetch_accounts().await {
            return false;
        }
        self.show_panel(Panel::Accounts);
        true
    }

    /// Opens the account form, blank or filled from the cached account at
    /// `index`.
    pub fn open_input_account(&mut self, index: Option<usize>) -> Result<(), ActionError> {
        let mut draft = Account::default();
        if let Some(index) = index {
            let Some(account) = self.accounts.get(index) else {
                return Err(self.wrong_action());
            };
            draft = account.clone();
        }
        self.account_modal = Some(Modal::new(draft));
        Ok(())
    }

    /// Another cached account already uses the draft's name.
    pub fn account_name_taken(&self, draft: &Account) -> bool {
        let name = draft.account_name.trim();
        if name.is_empty() {
            return false;
        }
        self.accounts
            .iter()
            .any(|account| account.account_name == name && account.id != draft.id)
    }

    /// Validates the open account form and saves it.
    pub async fn set_account(&mut self) -> Result<(), ActionError> {
        let Some(modal) = self.account_modal.as_mut() else {
            return Err(self.wrong_action());
        };
        if let Err(err) = modal.draft.validate() {
            modal.invalid = Some(err.clone());
            return Err(err.into());
        }
        modal.invalid = None;
        modal.draft.account_name = modal.draft.account_name.trim().to_string();

        let draft = modal.draft.clone();
        if self.account_name_taken(&draft) {
            self.alert(DUPLICATE);
            return Err(ActionError::DuplicateName {
                kind: EntityKind::Account,
                name: draft.account_name,
            });
        }

        self.request_account().await
    }

    /// Sends the open account form and closes it once the backend accepted
    /// it.
    pub async fn request_account(&mut self) -> Result<(), ActionError> {
        let Some(modal) = self.account_modal.as_ref() else {
            return Err(self.wrong_action());
        };
        let draft = modal.draft.clone();
        self.upsert_account(&draft).await?;
        self.account_modal = None;
        Ok(())
    }

    /// Creates or updates `draft`, then reloads the account list.
    pub(crate) async fn upsert_account(&mut self, draft: &Account) -> Result<(), ActionError> {
        if let Err(err) = self.backend.upsert_account(draft).await {
            self.alert(FAIL_SET);
            return Err(err.into());
        }
        if !self.fetch_accounts().await {
            tracing::warn!("account saved but the list could not be reloaded");
        }
        Ok(())
    }

    pub async fn delete_account(&mut self, index: usize) -> Result<(), ActionError> {
        let Some(id) = self.accounts.get(index).and_then(|a| a.id.clone()) else {
            return Err(self.wrong_action());
        };

        if let Err(err) = self.backend.delete_account(&id).await {
            self.alert(FAIL_DELETE);
            return Err(err.into());
        }
        self.fetch_accounts().await;
        self.account_modal = None;
        Ok(())
    }

    /// Id of the cached account named `name`.
    pub(crate) fn account_id_by_name(&self, name: &str) -> Option<String> {
        self.accounts
            .iter()
            .find(|account| account.account_name == name)
            .and_then(|account| account.id.clone())
    }

    /// Id of the account named `name`, creating a direct-pay account first
    /// when none exists yet.
    pub(crate) async fn resolve_or_create_account(
        &mut self,
        name: &str,
    ) -> Result<String, ActionError> {
        if let Some(id) = self.account_id_by_name(name) {
            return Ok(id);
        }

        tracing::info!(name, "creating account for record");
        self.upsert_account(&Account::named(name)).await?;

        match self.account_id_by_name(name) {
            Some(id) => Ok(id),
            None => {
                self.alert(FAIL_SET);
                Err(ActionError::Unresolved {
                    kind: EntityKind::Account,
                    name: name.to_string(),
                })
            }
        }
    }
}
