use super::{
    ActionError, Gate, Modal, PasswordDraft, Validate, ValidationError, ViewModel, WRONG_PASSWORD,
};
use crate::client::Backend;

const PASSWORD_CHANGED: &str = "Password is changed";
const FAIL_PASSWORD: &str = "Fail to change password";

impl<B: Backend> ViewModel<B> {
    /// Marks the password as submitted so the UI can draw the pending state.
    pub fn begin_unlock(&mut self) {
        if self.gate == Gate::Locked {
            self.gate = Gate::Unlocking;
        }
    }

    /// Opens the ledger with `password`, then loads accounts, categories,
    /// records and the home summary.
    pub async fn unlock(&mut self, password: &str) -> Result<(), ActionError> {
        if password.is_empty() {
            self.gate = Gate::Locked;
            return Err(ValidationError::Missing("password").into());
        }
        self.begin_unlock();

        if let Err(err) = self.backend.unlock(password).await {
            self.gate = Gate::Locked;
            self.alert(WRONG_PASSWORD);
            return Err(err.into());
        }

        self.gate = Gate::Unlocked;
        tracing::info!("ledger unlocked");

        self.fetch_accounts().await;
        self.fetch_categories().await;
        self.fetch_records().await;
        self.show_home();
        Ok(())
    }

    pub fn open_preferences(&mut self) {
        self.password_modal = Some(Modal::new(PasswordDraft::default()));
    }

    /// Changes the ledger password; on success the gate closes again and the
    /// new password is needed to continue.
    pub async fn change_password(&mut self) -> Result<(), ActionError> {
        if !self.is_ready() {
            return Err(ActionError::Locked);
        }
        let Some(modal) = self.password_modal.as_mut() else {
            return Err(self.wrong_action());
        };
        if let Err(err) = modal.draft.validate() {
            modal.invalid = Some(err.clone());
            return Err(err.into());
        }
        modal.invalid = None;
        let draft = modal.draft.clone();

        if let Err(err) = self
            .backend
            .change_password(&draft.old_password, &draft.new_password)
            .await
        {
            self.alert(FAIL_PASSWORD);
            return Err(err.into());
        }

        tracing::info!("password changed, locking");
        self.notify(PASSWORD_CHANGED);
        self.password_modal = None;
        self.gate = Gate::Locked;
        Ok(())
    }
}
