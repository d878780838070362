use api_types::{
    PayType,
    record::{DATE_FORMAT, Record, TIME_FORMAT},
};
use chrono::{Local, NaiveDateTime};

use super::{ActionError, Modal, Panel, RecordDraft, Validate, ViewModel};
use crate::client::Backend;

const FAIL_SET: &str = "Fail to set record";
const FAIL_DELETE: &str = "Fail to delete record";

impl RecordDraft {
    /// Blank record booked now, paid directly in KRW.
    pub fn blank(now: NaiveDateTime) -> Self {
        Self {
            record: Record {
                date: now.format(DATE_FORMAT).to_string(),
                time: now.format(TIME_FORMAT).to_string(),
                ..Record::default()
            },
            account_name: String::new(),
            amount: String::new(),
        }
    }

    /// Typed amount as a number, truncated for integral currencies.
    pub fn coerced_amount(&self) -> Option<f64> {
        let value = self.amount.trim().parse::<f64>().ok()?;
        if self.record.currency.is_integral() {
            return Some(value.trunc());
        }
        Some(value)
    }
}

impl<B: Backend> ViewModel<B> {
    /// Loads the records of the current window.
    ///
    /// Does nothing and reports failure while the gate is closed or when
    /// either end of the window is not a calendar date.
    pub async fn fetch_records(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        let Some((from, to)) = self.range.dates() else {
            tracing::debug!(from = %self.range.from, to = %self.range.to, "invalid record range");
            return false;
        };

        match self.backend.list_records(from, to).await {
            Ok(response) => {
                tracing::debug!(count = response.records.len(), %from, %to, "records fetched");
                self.records = response;
                true
            }
            Err(err) => {
                tracing::warn!("failed to fetch records: {err}");
                false
            }
        }
    }

    pub async fn show_records(&mut self) -> bool {
        if !self.fetch_records().await {
            return false;
        }
        self.show_panel(Panel::Records);
        true
    }

    pub fn open_input_record(&mut self, index: Option<usize>) -> Result<(), ActionError> {
        self.open_input_record_at(index, Local::now().naive_local())
    }

    /// Opens the record form; `now` stamps blank drafts.
    pub fn open_input_record_at(
        &mut self,
        index: Option<usize>,
        now: NaiveDateTime,
    ) -> Result<(), ActionError> {
        let mut draft = RecordDraft::blank(now);
        if let Some(index) = index {
            let Some(record) = self.records.records.get(index) else {
                return Err(self.wrong_action());
            };
            let record = record.clone();
            draft.account_name = self
                .accounts
                .iter()
                .find(|account| account.id.as_deref() == Some(record.account_id.as_str()))
                .map(|account| account.account_name.clone())
                .unwrap_or_default();
            draft.amount = record.amount.to_string();
            draft.record = record;
        }
        self.record_modal = Some(Modal::new(draft));
        Ok(())
    }

    /// Copies the pay type of the typed account onto the record draft.
    ///
    /// Records never carry `hybrid`; a blank account name resets to direct
    /// and an unknown one leaves the draft untouched.
    pub fn set_record_pay_type(&mut self) {
        let Some(modal) = self.record_modal.as_mut() else {
            return;
        };
        let name = modal.draft.account_name.trim();
        if name.is_empty() {
            modal.draft.record.pay_type = PayType::Direct;
            return;
        }
        if let Some(account) = self.accounts.iter().find(|a| a.account_name == name) {
            modal.draft.record.pay_type = account.pay_type.for_record();
        }
    }

    /// Validates the record form, resolves its account and category (creating
    /// them when missing) and saves it.
    pub async fn set_record(&mut self) -> Result<(), ActionError> {
        let Some(modal) = self.record_modal.as_mut() else {
            return Err(self.wrong_action());
        };
        if let Err(err) = modal.draft.validate() {
            modal.invalid = Some(err.clone());
            return Err(err.into());
        }
        modal.invalid = None;

        let Some(amount) = modal.draft.coerced_amount() else {
            return Err(self.wrong_action());
        };
        modal.draft.record.amount = amount;
        let account_name = modal.draft.account_name.trim().to_string();
        let category = modal.draft.record.category.trim().to_string();

        let account_id = self.resolve_or_create_account(&account_name).await?;
        self.resolve_or_create_category(&category).await?;

        if let Some(modal) = self.record_modal.as_mut() {
            modal.draft.account_name = account_name;
            modal.draft.record.account_id = account_id;
            modal.draft.record.category = category;
        }
        self.request_record().await
    }

    pub async fn request_record(&mut self) -> Result<(), ActionError> {
        let Some(modal) = self.record_modal.as_ref() else {
            return Err(self.wrong_action());
        };
        let record = modal.draft.record.clone();

        if let Err(err) = self.backend.upsert_record(&record).await {
            self.alert(FAIL_SET);
            return Err(err.into());
        }
        if !self.refresh_records().await {
            tracing::warn!("record saved but the list could not be reloaded");
        }
        self.record_modal = None;
        Ok(())
    }

    pub async fn delete_record(&mut self, index: usize) -> Result<(), ActionError> {
        let Some(id) = self
            .records
            .records
            .get(index)
            .and_then(|record| record.id.clone())
        else {
            return Err(self.wrong_action());
        };

        if let Err(err) = self.backend.delete_record(&id).await {
            self.alert(FAIL_DELETE);
            return Err(err.into());
        }
        if !self.refresh_records().await {
            tracing::warn!("record deleted but the list could not be reloaded");
        }
        self.record_modal = None;
        Ok(())
    }
}
