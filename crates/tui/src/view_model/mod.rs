//! Client-side state of the ledger and its synchronisation with the backend.
//!
//! The [`ViewModel`] owns every cached list, the open modal drafts and the
//! visible panel. Each user action is one `async` method; the caches are only
//! replaced by the `fetch_*` methods after the backend confirmed them.

mod accounts;
mod categories;
mod gate;
mod records;
mod validation;

#[cfg(test)]
mod tests;

use std::fmt;

use api_types::{
    account::Account,
    category::Category,
    record::{DATE_FORMAT, Record, RecordsResponse},
};
use chrono::{Days, NaiveDate};

use crate::{
    chart::HomeChart,
    client::{Backend, ClientError},
};

pub use validation::{Validate, ValidationError};

pub(crate) const WRONG_ACTION: &str = "Wrong action";
pub(crate) const WRONG_PASSWORD: &str = "Wrong password";
const FAIL_LOAD: &str = "Fail to load records";

/// The single list view shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    None,
    Home,
    Accounts,
    Categories,
    Records,
}

impl Panel {
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "-",
            Self::Home => "Home",
            Self::Accounts => "Accounts",
            Self::Categories => "Categories",
            Self::Records => "Records",
        }
    }
}

/// Password gate in front of every privileged request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Locked,
    Unlocking,
    Unlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Account,
    Category,
    Record,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Account => "account",
            Self::Category => "category",
            Self::Record => "record",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),
    #[error("{kind} named {name:?} already exists")]
    DuplicateName { kind: EntityKind, name: String },
    #[error("wrong action")]
    WrongAction,
    #[error("request failed: {0}")]
    Request(#[from] ClientError),
    /// The entity was created but still could not be found afterwards.
    #[error("{kind} {name:?} could not be resolved")]
    Unresolved { kind: EntityKind, name: String },
    #[error("ledger is locked")]
    Locked,
    #[error("invalid date range")]
    InvalidRange,
    /// The window moved but its records could not be loaded.
    #[error("records could not be reloaded")]
    Reload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// Last message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
}

/// An open modal form and what went wrong with it the last time it was
/// submitted.
#[derive(Debug, Clone)]
pub struct Modal<D> {
    pub draft: D,
    pub invalid: Option<ValidationError>,
}

impl<D> Modal<D> {
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            invalid: None,
        }
    }
}

/// Record form: the wire record plus the free-text fields resolved on save.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub record: Record,
    /// Typed account name, resolved (or created) into `record.account_id`.
    pub account_name: String,
    /// Amount as typed, coerced into `record.amount` on save.
    pub amount: String,
}

#[derive(Debug, Clone, Default)]
pub struct PasswordDraft {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default)]
pub struct RangeDraft {
    pub from: String,
    pub to: String,
}

/// Summary window, kept as typed text until a fetch parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    /// `days` days back from `today`, both ends included.
    pub fn ending(today: NaiveDate, days: u32) -> Self {
        let from = today
            .checked_sub_days(Days::new(days as u64))
            .unwrap_or(today);
        Self::between(from, today)
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: from.format(DATE_FORMAT).to_string(),
            to: to.format(DATE_FORMAT).to_string(),
        }
    }

    /// Both ends as calendar dates, `None` when either does not parse.
    pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        let from = NaiveDate::parse_from_str(self.from.trim(), DATE_FORMAT).ok()?;
        let to = NaiveDate::parse_from_str(self.to.trim(), DATE_FORMAT).ok()?;
        Some((from, to))
    }
}

pub struct ViewModel<B> {
    backend: B,
    gate: Gate,
    panel: Panel,
    accounts: Vec<Account>,
    categories: Vec<Category>,
    records: RecordsResponse,
    pub range: DateRange,
    pub account_modal: Option<Modal<Account>>,
    pub category_modal: Option<Modal<Category>>,
    pub record_modal: Option<Modal<RecordDraft>>,
    pub password_modal: Option<Modal<PasswordDraft>>,
    pub range_modal: Option<Modal<RangeDraft>>,
    chart: HomeChart,
    toast: Option<ToastState>,
}

impl<B: Backend> ViewModel<B> {
    pub fn new(backend: B, range: DateRange) -> Self {
        Self {
            backend,
            gate: Gate::Locked,
            panel: Panel::None,
            accounts: Vec::new(),
            categories: Vec::new(),
            records: RecordsResponse::default(),
            range,
            account_modal: None,
            category_modal: None,
            record_modal: None,
            password_modal: None,
            range_modal: None,
            chart: HomeChart::default(),
            toast: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn gate(&self) -> Gate {
        self.gate
    }

    /// Privileged requests are only sent once the gate is open.
    pub fn is_ready(&self) -> bool {
        self.gate == Gate::Unlocked
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn records(&self) -> &RecordsResponse {
        &self.records
    }

    pub fn chart(&self) -> &HomeChart {
        &self.chart
    }

    pub fn toast(&self) -> Option<&ToastState> {
        self.toast.as_ref()
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    pub fn close_modals(&mut self) {
        self.account_modal = None;
        self.category_modal = None;
        self.record_modal = None;
        self.password_modal = None;
        self.range_modal = None;
    }

    fn show_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }

    /// Enters the home summary, rebuilding the chart from the cached records.
    pub fn show_home(&mut self) {
        self.show_panel(Panel::Home);
        self.chart.rebuild(&self.records);
    }

    pub(crate) fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(%message, "alert");
        self.toast = Some(ToastState {
            message,
            level: ToastLevel::Error,
        });
    }

    pub(crate) fn notify(&mut self, message: impl Into<String>) {
        self.toast = Some(ToastState {
            message: message.into(),
            level: ToastLevel::Success,
        });
    }

    /// Shows "Wrong action" and hands back the matching error.
    pub(crate) fn wrong_action(&mut self) -> ActionError {
        self.alert(WRONG_ACTION);
        ActionError::WrongAction
    }

    pub fn open_range(&mut self) {
        self.range_modal = Some(Modal::new(RangeDraft {
            from: self.range.from.clone(),
            to: self.range.to.clone(),
        }));
    }

    /// Applies the range form and reloads the records of the new window.
    pub async fn apply_range(&mut self) -> Result<(), ActionError> {
        let Some(modal) = self.range_modal.as_mut() else {
            return Err(self.wrong_action());
        };
        if let Err(err) = modal.draft.validate() {
            modal.invalid = Some(err.clone());
            return Err(err.into());
        }
        let typed = DateRange {
            from: modal.draft.from.trim().to_string(),
            to: modal.draft.to.trim().to_string(),
        };
        let Some((from, to)) = typed.dates() else {
            return Err(ActionError::InvalidRange);
        };
        self.range_modal = None;
        self.set_range(from, to).await
    }

    /// Replaces the window and reloads its records.
    pub async fn set_range(&mut self, from: NaiveDate, to: NaiveDate) -> Result<(), ActionError> {
        if from > to {
            return Err(ActionError::InvalidRange);
        }
        self.range = DateRange::between(from, to);
        self.reload_range().await
    }

    /// Moves the whole window by `days` (negative goes back in time).
    pub async fn shift_range(&mut self, days: i64) -> Result<(), ActionError> {
        let Some((from, to)) = self.range.dates() else {
            return Err(ActionError::InvalidRange);
        };
        let shift = |date: NaiveDate| {
            if days >= 0 {
                date.checked_add_days(Days::new(days as u64))
            } else {
                date.checked_sub_days(Days::new(days.unsigned_abs()))
            }
        };
        let (Some(from), Some(to)) = (shift(from), shift(to)) else {
            return Err(ActionError::InvalidRange);
        };
        self.range = DateRange::between(from, to);
        self.reload_range().await
    }

    /// Replaces the window with the last `days` days ending `today`.
    pub async fn reset_range(&mut self, today: NaiveDate, days: u32) -> Result<(), ActionError> {
        self.range = DateRange::ending(today, days);
        self.reload_range().await
    }

    async fn reload_range(&mut self) -> Result<(), ActionError> {
        if self.refresh_records().await {
            return Ok(());
        }
        self.alert(FAIL_LOAD);
        Err(ActionError::Reload)
    }

    /// Refetches the records, rebuilding the chart while home is shown.
    pub(crate) async fn refresh_records(&mut self) -> bool {
        if !self.fetch_records().await {
            return false;
        }
        if self.panel == Panel::Home {
            self.show_home();
        }
        true
    }
}
