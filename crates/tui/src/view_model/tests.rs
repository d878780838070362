use std::{collections::BTreeMap, sync::Mutex};

use api_types::{
    Currency, PayType,
    account::Account,
    category::Category,
    record::{Record, RecordsResponse, Stat},
};
use chrono::NaiveDate;

use super::*;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    ListAccounts,
    UpsertAccount(Account),
    DeleteAccount(String),
    ListCategories,
    UpsertCategory(Category),
    DeleteCategory(String),
    ListRecords(NaiveDate, NaiveDate),
    UpsertRecord(Record),
    DeleteRecord(String),
    Unlock(String),
    ChangePassword(String, String),
}

#[derive(Debug, Default)]
struct Store {
    accounts: Vec<Account>,
    categories: Vec<Category>,
    records: RecordsResponse,
    calls: Vec<Call>,
    next_id: u64,
    password: String,
    fail_upserts: bool,
    fail_lists: bool,
    /// Accepts creates without storing them.
    drop_creates: bool,
}

impl Store {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}:{}", self.next_id)
    }
}

#[derive(Debug, Default)]
struct FakeBackend {
    store: Mutex<Store>,
}

impl FakeBackend {
    fn calls(&self) -> Vec<Call> {
        self.store.lock().unwrap().calls.clone()
    }

    fn clear_calls(&self) {
        self.store.lock().unwrap().calls.clear();
    }

    fn with(&self, f: impl FnOnce(&mut Store)) {
        f(&mut self.store.lock().unwrap());
    }
}

fn rejected() -> ClientError {
    ClientError::Rejected("fail".to_string())
}

impl Backend for FakeBackend {
    async fn list_accounts(&self) -> Result<Vec<Account>, ClientError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::ListAccounts);
        if store.fail_lists {
            return Err(rejected());
        }
        Ok(store.accounts.clone())
    }

    async fn upsert_account(&self, account: &Account) -> Result<(), ClientError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::UpsertAccount(account.clone()));
        if store.fail_upserts {
            return Err(rejected());
        }
        let mut account = account.clone();
        match account.id.clone() {
            Some(id) => {
                if let Some(slot) = store.accounts.iter_mut().find(|a| a.id.as_ref() == Some(&id)) {
                    *slot = account;
                }
            }
            None if store.drop_creates => {}
            None => {
                account.id = Some(store.next_id("account"));
                store.accounts.push(account);
            }
        }
        Ok(())
    }

    async fn delete_account(&self, id: &str) -> Result<(), ClientError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::DeleteAccount(id.to_string()));
        store.accounts.retain(|a| a.id.as_deref() != Some(id));
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::ListCategories);
        if store.fail_lists {
            return Err(rejected());
        }
        Ok(store.categories.clone())
    }

    async fn upsert_category(&self, category: &Category) -> Result<(), ClientError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::UpsertCategory(category.clone()));
        if store.fail_upserts {
            return Err(rejected());
        }
        if category.id.is_none() && !store.drop_creates {
            let mut category = category.clone();
            category.id = Some(store.next_id("category"));
            store.categories.push(category);
        }
        Ok(())
    }

    async fn delete_category(&self, id: &str) -> Result<(), ClientError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::DeleteCategory(id.to_string()));
        store.categories.retain(|c| c.id.as_deref() != Some(id));
        Ok(())
    }

    async fn list_records(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<RecordsResponse, ClientError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::ListRecords(from, to));
        if store.fail_lists {
            return Err(rejected());
        }
        Ok(store.records.clone())
    }

    async fn upsert_record(&self, record: &Record) -> Result<(), ClientError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::UpsertRecord(record.clone()));
        if store.fail_upserts {
            return Err(rejected());
        }
        if record.id.is_none() {
            let mut record = record.clone();
            record.id = Some(store.next_id("record"));
            store.records.records.push(record);
        }
        Ok(())
    }

    async fn delete_record(&self, id: &str) -> Result<(), ClientError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::DeleteRecord(id.to_string()));
        store.records.records.retain(|r| r.id.as_deref() != Some(id));
        Ok(())
    }

    async fn unlock(&self, password: &str) -> Result<(), ClientError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::Unlock(password.to_string()));
        if store.password != password {
            return Err(rejected());
        }
        Ok(())
    }

    async fn change_password(&self, old: &str, new: &str) -> Result<(), ClientError> {
        let mut store = self.store.lock().unwrap();
        store
            .calls
            .push(Call::ChangePassword(old.to_string(), new.to_string()));
        if store.password != old {
            return Err(rejected());
        }
        store.password = new.to_string();
        Ok(())
    }
}

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn account(id: Option<&str>, name: &str, pay_type: PayType) -> Account {
    Account {
        id: id.map(str::to_string),
        account_name: name.to_string(),
        pay_type,
        ..Account::default()
    }
}

fn category(id: &str, name: &str) -> Category {
    Category {
        id: Some(id.to_string()),
        category_name: name.to_string(),
    }
}

fn store() -> Store {
    Store {
        password: "secret".to_string(),
        next_id: 100,
        accounts: vec![
            account(Some("account:1"), "Cash", PayType::Direct),
            account(Some("account:2"), "Card", PayType::Hybrid),
        ],
        categories: vec![category("category:1", "food")],
        ..Store::default()
    }
}

fn view_model(store: Store) -> ViewModel<FakeBackend> {
    let backend = FakeBackend {
        store: Mutex::new(store),
    };
    ViewModel::new(
        backend,
        DateRange::between(date("2024-05-01"), date("2024-05-08")),
    )
}

async fn unlocked(store: Store) -> ViewModel<FakeBackend> {
    let mut vm = view_model(store);
    vm.unlock("secret").await.unwrap();
    vm.backend().clear_calls();
    vm
}

fn fill_record(vm: &mut ViewModel<FakeBackend>, account: &str, amount: &str, currency: Currency) {
    let modal = vm.record_modal.as_mut().unwrap();
    modal.draft.account_name = account.to_string();
    modal.draft.amount = amount.to_string();
    modal.draft.record.currency = currency;
    modal.draft.record.category = "food".to_string();
}

#[tokio::test]
async fn unlock_loads_lists_and_home_summary() {
    let mut store = store();
    store.records = RecordsResponse {
        stats: BTreeMap::from([(
            "food".to_string(),
            Stat {
                category: "food".to_string(),
                amount: 10.0,
            },
        )]),
        sum_pay: 10.0,
        ..RecordsResponse::default()
    };
    let mut vm = view_model(store);

    vm.unlock("secret").await.unwrap();

    assert_eq!(vm.gate(), Gate::Unlocked);
    assert_eq!(vm.panel(), Panel::Home);
    assert_eq!(vm.accounts().len(), 2);
    assert_eq!(vm.categories().len(), 1);
    assert_eq!(vm.chart().current().unwrap().slices[0].percent, 100);
    assert_eq!(
        vm.backend().calls(),
        vec![
            Call::Unlock("secret".to_string()),
            Call::ListAccounts,
            Call::ListCategories,
            Call::ListRecords(date("2024-05-01"), date("2024-05-08")),
        ]
    );
}

#[tokio::test]
async fn wrong_password_keeps_the_gate_locked() {
    let mut vm = view_model(store());

    let err = vm.unlock("nope").await.unwrap_err();

    assert!(matches!(err, ActionError::Request(_)));
    assert_eq!(vm.gate(), Gate::Locked);
    assert_eq!(vm.toast().unwrap().message, "Wrong password");
    assert_eq!(vm.backend().calls(), vec![Call::Unlock("nope".to_string())]);
}

#[tokio::test]
async fn fetch_records_needs_an_open_gate() {
    let mut vm = view_model(store());

    assert!(!vm.fetch_records().await);
    assert!(vm.backend().calls().is_empty());
}

#[tokio::test]
async fn fetch_records_needs_calendar_dates() {
    let mut vm = unlocked(store()).await;

    vm.range.from = "2024-13-01".to_string();
    assert!(!vm.fetch_records().await);
    vm.range.from = "2024-05-01".to_string();
    vm.range.to = "soon".to_string();
    assert!(!vm.fetch_records().await);

    assert!(vm.backend().calls().is_empty());
}

#[tokio::test]
async fn duplicate_account_name_is_rejected_before_any_request() {
    let mut vm = unlocked(store()).await;
    vm.open_input_account(None).unwrap();
    vm.account_modal.as_mut().unwrap().draft.account_name = "Cash".to_string();

    let err = vm.set_account().await.unwrap_err();

    assert!(matches!(err, ActionError::DuplicateName { .. }));
    assert!(vm.backend().calls().is_empty());
    assert!(vm.account_modal.is_some());
    assert_eq!(
        vm.toast().unwrap().message,
        "An account with the same name already exists."
    );
}

#[tokio::test]
async fn renaming_onto_another_account_is_a_duplicate() {
    let mut vm = unlocked(store()).await;
    vm.open_input_account(Some(1)).unwrap();
    vm.account_modal.as_mut().unwrap().draft.account_name = "Cash".to_string();

    assert!(vm.set_account().await.is_err());
    assert!(vm.backend().calls().is_empty());
}

#[tokio::test]
async fn resubmitting_an_account_with_its_own_name_is_allowed() {
    let mut vm = unlocked(store()).await;
    vm.open_input_account(Some(0)).unwrap();
    vm.account_modal.as_mut().unwrap().draft.description = "wallet".to_string();

    vm.set_account().await.unwrap();

    let calls = vm.backend().calls();
    assert!(matches!(&calls[0], Call::UpsertAccount(a) if a.id.as_deref() == Some("account:1")));
    assert_eq!(calls[1], Call::ListAccounts);
    assert!(vm.account_modal.is_none());
    assert_eq!(vm.accounts()[0].description, "wallet");
}

#[tokio::test]
async fn invalid_account_form_stays_open_without_request() {
    let mut vm = unlocked(store()).await;
    vm.open_input_account(None).unwrap();

    let err = vm.set_account().await.unwrap_err();

    assert!(matches!(err, ActionError::Invalid(ValidationError::Missing("account-name"))));
    let modal = vm.account_modal.as_ref().unwrap();
    assert!(modal.invalid.is_some());
    assert!(vm.backend().calls().is_empty());
}

#[tokio::test]
async fn failed_save_alerts_and_keeps_the_modal() {
    let mut vm = unlocked(store()).await;
    vm.backend().with(|store| store.fail_upserts = true);
    vm.open_input_category(None).unwrap();
    vm.category_modal.as_mut().unwrap().draft.category_name = "rent".to_string();

    let err = vm.set_category().await.unwrap_err();

    assert!(matches!(err, ActionError::Request(_)));
    assert!(vm.category_modal.is_some());
    assert_eq!(vm.toast().unwrap().message, "Fail to set category");
    assert_eq!(vm.backend().calls().len(), 1);
}

#[tokio::test]
async fn unknown_account_is_created_once_before_the_record() {
    let mut vm = unlocked(store()).await;
    vm.open_input_record(None).unwrap();
    fill_record(&mut vm, "Savings", "5000", Currency::Krw);

    vm.set_record().await.unwrap();

    let calls = vm.backend().calls();
    let account_creates: Vec<_> = calls
        .iter()
        .filter_map(|call| match call {
            Call::UpsertAccount(account) => Some(account),
            _ => None,
        })
        .collect();
    let record_creates: Vec<_> = calls
        .iter()
        .filter_map(|call| match call {
            Call::UpsertRecord(record) => Some(record),
            _ => None,
        })
        .collect();
    assert_eq!(account_creates.len(), 1);
    assert_eq!(account_creates[0].account_name, "Savings");
    assert_eq!(account_creates[0].pay_type, PayType::Direct);
    assert_eq!(record_creates.len(), 1);

    let created = vm
        .accounts()
        .iter()
        .find(|a| a.account_name == "Savings")
        .unwrap();
    assert_eq!(Some(record_creates[0].account_id.as_str()), created.id.as_deref());

    let account_at = calls
        .iter()
        .position(|c| matches!(c, Call::UpsertAccount(_)))
        .unwrap();
    let record_at = calls
        .iter()
        .position(|c| matches!(c, Call::UpsertRecord(_)))
        .unwrap();
    assert!(account_at < record_at);
    assert!(vm.record_modal.is_none());
}

#[tokio::test]
async fn unknown_category_is_created_before_the_record() {
    let mut vm = unlocked(store()).await;
    vm.open_input_record(None).unwrap();
    fill_record(&mut vm, "Cash", "1", Currency::Krw);
    vm.record_modal.as_mut().unwrap().draft.record.category = "books".to_string();

    vm.set_record().await.unwrap();

    let calls = vm.backend().calls();
    assert!(matches!(&calls[0], Call::UpsertCategory(c) if c.category_name == "books"));
    assert!(!calls.iter().any(|c| matches!(c, Call::UpsertAccount(_))));
    assert!(vm.categories().iter().any(|c| c.category_name == "books"));
}

#[tokio::test]
async fn unresolvable_account_never_sends_the_record() {
    let mut store = store();
    store.drop_creates = true;
    let mut vm = unlocked(store).await;
    vm.open_input_record(None).unwrap();
    fill_record(&mut vm, "Ghost", "10", Currency::Krw);

    let err = vm.set_record().await.unwrap_err();

    assert!(matches!(
        err,
        ActionError::Unresolved {
            kind: EntityKind::Account,
            ..
        }
    ));
    assert!(!vm
        .backend()
        .calls()
        .iter()
        .any(|c| matches!(c, Call::UpsertRecord(_))));
    assert!(vm.record_modal.is_some());
}

#[tokio::test]
async fn krw_amounts_are_truncated() {
    let mut vm = unlocked(store()).await;
    vm.open_input_record(None).unwrap();
    fill_record(&mut vm, "Cash", "1234.56", Currency::Krw);

    vm.set_record().await.unwrap();

    let sent = vm
        .backend()
        .calls()
        .into_iter()
        .find_map(|c| match c {
            Call::UpsertRecord(record) => Some(record),
            _ => None,
        })
        .unwrap();
    assert_eq!(sent.amount, 1234.0);
    assert_eq!(sent.amount.fract(), 0.0);
    assert_eq!(sent.account_id, "account:1");
}

#[tokio::test]
async fn won_amounts_below_one_are_never_sent() {
    let mut vm = unlocked(store()).await;
    vm.open_input_record(None).unwrap();
    fill_record(&mut vm, "Cash", "0.5", Currency::Krw);

    let err = vm.set_record().await.unwrap_err();

    assert!(matches!(err, ActionError::Invalid(ValidationError::Invalid { field: "amount", .. })));
    assert!(vm.record_modal.as_ref().unwrap().invalid.is_some());
    assert!(vm.backend().calls().is_empty());
}

#[tokio::test]
async fn other_currencies_keep_their_cents() {
    let mut vm = unlocked(store()).await;
    vm.open_input_record(None).unwrap();
    fill_record(&mut vm, "Cash", "12.5", Currency::Usd);

    vm.set_record().await.unwrap();

    let sent = vm
        .backend()
        .calls()
        .into_iter()
        .find_map(|c| match c {
            Call::UpsertRecord(record) => Some(record),
            _ => None,
        })
        .unwrap();
    assert_eq!(sent.amount, 12.5);
    assert_eq!(sent.currency, Currency::Usd);
}

#[tokio::test]
async fn hybrid_accounts_book_direct_records() {
    let mut vm = unlocked(store()).await;
    vm.open_input_record(None).unwrap();
    vm.record_modal.as_mut().unwrap().draft.account_name = "Card".to_string();

    vm.set_record_pay_type();
    assert_eq!(
        vm.record_modal.as_ref().unwrap().draft.record.pay_type,
        PayType::Direct
    );

    vm.backend().with(|store| {
        store.accounts[1].pay_type = PayType::Credit;
    });
    vm.fetch_accounts().await;
    vm.set_record_pay_type();
    assert_eq!(
        vm.record_modal.as_ref().unwrap().draft.record.pay_type,
        PayType::Credit
    );

    vm.record_modal.as_mut().unwrap().draft.account_name.clear();
    vm.set_record_pay_type();
    assert_eq!(
        vm.record_modal.as_ref().unwrap().draft.record.pay_type,
        PayType::Direct
    );
}

#[tokio::test]
async fn editing_a_record_carries_its_id_and_account_name() {
    let mut store = store();
    store.records.records.push(Record {
        id: Some("record:7".to_string()),
        account_id: "account:2".to_string(),
        amount: 300.0,
        category: "food".to_string(),
        date: "2024-05-02".to_string(),
        time: "08:15".to_string(),
        ..Record::default()
    });
    let mut vm = unlocked(store).await;

    vm.open_input_record(Some(0)).unwrap();

    let draft = &vm.record_modal.as_ref().unwrap().draft;
    assert_eq!(draft.account_name, "Card");
    assert_eq!(draft.amount, "300");
    assert_eq!(draft.record.id.as_deref(), Some("record:7"));
}

#[tokio::test]
async fn deleting_an_unsaved_entity_is_a_wrong_action() {
    let mut store = store();
    store.accounts.push(account(None, "Draft", PayType::Direct));
    let mut vm = unlocked(store).await;

    let err = vm.delete_account(2).await.unwrap_err();

    assert!(matches!(err, ActionError::WrongAction));
    assert_eq!(vm.toast().unwrap().message, "Wrong action");
    assert!(vm.backend().calls().is_empty());
}

#[tokio::test]
async fn delete_sends_the_id_and_refetches() {
    let mut vm = unlocked(store()).await;

    vm.delete_category(0).await.unwrap();

    assert_eq!(
        vm.backend().calls(),
        vec![
            Call::DeleteCategory("category:1".to_string()),
            Call::ListCategories
        ]
    );
    assert!(vm.categories().is_empty());
}

#[tokio::test]
async fn stale_index_is_a_wrong_action() {
    let mut vm = unlocked(store()).await;

    assert!(matches!(
        vm.open_input_account(Some(9)),
        Err(ActionError::WrongAction)
    ));
    assert!(vm.account_modal.is_none());
    assert!(matches!(
        vm.delete_record(0).await,
        Err(ActionError::WrongAction)
    ));
}

#[tokio::test]
async fn panels_only_switch_after_a_successful_fetch() {
    let mut vm = unlocked(store()).await;
    assert!(vm.show_accounts().await);
    assert_eq!(vm.panel(), Panel::Accounts);

    vm.backend().with(|store| store.fail_lists = true);
    assert!(!vm.show_categories().await);
    assert_eq!(vm.panel(), Panel::Accounts);
    assert!(!vm.show_records().await);
    assert_eq!(vm.panel(), Panel::Accounts);
}

#[tokio::test]
async fn password_change_locks_the_gate() {
    let mut vm = unlocked(store()).await;
    vm.open_preferences();
    {
        let draft = &mut vm.password_modal.as_mut().unwrap().draft;
        draft.old_password = "secret".to_string();
        draft.new_password = "better".to_string();
    }

    vm.change_password().await.unwrap();

    assert_eq!(vm.gate(), Gate::Locked);
    assert!(vm.password_modal.is_none());
    assert_eq!(vm.toast().unwrap().message, "Password is changed");
    assert!(!vm.fetch_records().await);
    assert!(vm.unlock("secret").await.is_err());
    assert!(vm.unlock("better").await.is_ok());
}

#[tokio::test]
async fn shifting_the_range_moves_both_ends() {
    let mut vm = unlocked(store()).await;

    vm.shift_range(-7).await.unwrap();

    assert_eq!(vm.range.from, "2024-04-24");
    assert_eq!(vm.range.to, "2024-05-01");
    assert_eq!(
        vm.backend().calls(),
        vec![Call::ListRecords(date("2024-04-24"), date("2024-05-01"))]
    );
}

#[tokio::test]
async fn range_form_rejects_reversed_dates() {
    let mut vm = unlocked(store()).await;
    vm.open_range();
    vm.range_modal.as_mut().unwrap().draft.from = "2024-06-01".to_string();

    assert!(vm.apply_range().await.is_err());
    assert!(vm.range_modal.is_some());
    assert_eq!(vm.range.from, "2024-05-01");
    assert!(vm.backend().calls().is_empty());
}

#[tokio::test]
async fn set_range_refuses_a_reversed_window() {
    let mut vm = unlocked(store()).await;

    let err = vm
        .set_range(date("2024-06-01"), date("2024-05-01"))
        .await
        .unwrap_err();
    assert!(matches!(err, ActionError::InvalidRange));
    assert!(vm.backend().calls().is_empty());

    vm.set_range(date("2024-03-01"), date("2024-03-31"))
        .await
        .unwrap();
    assert_eq!(vm.range.from, "2024-03-01");
    assert_eq!(
        vm.backend().calls(),
        vec![Call::ListRecords(date("2024-03-01"), date("2024-03-31"))]
    );
}

fn spending(entries: &[(&str, f64)]) -> RecordsResponse {
    RecordsResponse {
        stats: entries
            .iter()
            .map(|(name, amount)| {
                (
                    name.to_string(),
                    Stat {
                        category: name.to_string(),
                        amount: *amount,
                    },
                )
            })
            .collect(),
        sum_pay: entries.iter().map(|(_, amount)| amount).sum(),
        ..RecordsResponse::default()
    }
}

fn chart_slices(vm: &ViewModel<FakeBackend>) -> Vec<(String, u64)> {
    vm.chart()
        .current()
        .map(|chart| {
            chart
                .slices
                .iter()
                .map(|slice| (slice.label.clone(), slice.percent))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn saving_a_record_on_home_rebuilds_the_chart() {
    let mut store = store();
    store.records = spending(&[("food", 10.0)]);
    let mut vm = unlocked(store).await;
    assert_eq!(vm.panel(), Panel::Home);
    assert_eq!(chart_slices(&vm), vec![("food".to_string(), 100)]);

    vm.backend().with(|store| {
        let records = std::mem::take(&mut store.records.records);
        store.records = spending(&[("food", 10.0), ("rent", 30.0)]);
        store.records.records = records;
    });
    vm.open_input_record(None).unwrap();
    fill_record(&mut vm, "Cash", "30", Currency::Krw);
    vm.set_record().await.unwrap();

    assert_eq!(vm.records().sum_pay, 40.0);
    assert_eq!(
        chart_slices(&vm),
        vec![("food".to_string(), 25), ("rent".to_string(), 75)]
    );
}

#[tokio::test]
async fn deleting_a_record_on_home_rebuilds_the_chart() {
    let mut store = store();
    store.records = spending(&[("food", 10.0), ("rent", 30.0)]);
    store.records.records = vec![Record {
        id: Some("record:9".to_string()),
        category: "rent".to_string(),
        amount: 30.0,
        ..Record::default()
    }];
    let mut vm = unlocked(store).await;
    assert_eq!(chart_slices(&vm).len(), 2);

    vm.backend().with(|store| {
        let records = std::mem::take(&mut store.records.records);
        store.records = spending(&[("food", 10.0)]);
        store.records.records = records;
    });
    vm.delete_record(0).await.unwrap();

    assert!(vm.records().records.is_empty());
    assert_eq!(chart_slices(&vm), vec![("food".to_string(), 100)]);
}

#[tokio::test]
async fn failed_reload_after_moving_the_range_alerts() {
    let mut vm = unlocked(store()).await;
    vm.backend().with(|store| store.fail_lists = true);

    let err = vm.shift_range(7).await.unwrap_err();

    assert!(matches!(err, ActionError::Reload));
    assert_eq!(vm.range.from, "2024-05-08");
    assert_eq!(vm.toast().unwrap().message, "Fail to load records");

    let err = vm
        .reset_range(date("2024-06-30"), 7)
        .await
        .unwrap_err();
    assert!(matches!(err, ActionError::Reload));
}

#[test]
fn default_range_spans_the_interval() {
    let range = DateRange::ending(date("2024-05-08"), 7);
    assert_eq!(range.from, "2024-05-01");
    assert_eq!(range.to, "2024-05-08");
}
