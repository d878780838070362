use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use chrono::{Local, NaiveDate};
use serde_json::{Value, json};

use api_types::{
    Currency,
    account::Account,
    category::Category,
    record::{Record, RecordsResponse, Stat},
};
use ledger_tui::{
    client::{Backend, Client, ClientError},
    view_model::{DateRange, Gate, Panel, ViewModel},
};

#[derive(Debug, Clone)]
struct Seen {
    method: Method,
    path: String,
    query: HashMap<String, String>,
    body: Option<Value>,
}

#[derive(Default)]
struct Store {
    accounts: Vec<Account>,
    categories: Vec<Category>,
    records: Vec<Record>,
    next_id: u32,
    password: String,
    fail_status: bool,
    seen: Vec<Seen>,
}

impl Store {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

type Shared = Arc<Mutex<Store>>;

fn success() -> Response {
    Json(json!({ "status": "success" })).into_response()
}

fn rejected() -> Response {
    Json(json!({ "status": "fail" })).into_response()
}

/// Logs the call and answers 500 when the store is set to fail.
fn observe(
    store: &mut Store,
    method: &Method,
    uri: &Uri,
    query: &HashMap<String, String>,
    body: &str,
) -> Option<Response> {
    store.seen.push(Seen {
        method: method.clone(),
        path: uri.path().to_string(),
        query: query.clone(),
        body: serde_json::from_str(body).ok(),
    });
    if store.fail_status {
        return Some(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "boom" })),
            )
                .into_response(),
        );
    }
    None
}

async fn accounts(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let mut store = state.lock().unwrap();
    if let Some(res) = observe(&mut store, &method, &uri, &query, &body) {
        return res;
    }

    match method {
        Method::GET => Json(store.accounts.clone()).into_response(),
        Method::POST => {
            let mut account: Account = serde_json::from_str(&body).unwrap();
            account.id = Some(store.next_id());
            store.accounts.push(account);
            success()
        }
        Method::PUT => {
            let account: Account = serde_json::from_str(&body).unwrap();
            let id = query.get("id").cloned();
            match store.accounts.iter_mut().find(|a| a.id == id) {
                Some(slot) => {
                    *slot = Account { id, ..account };
                    success()
                }
                None => rejected(),
            }
        }
        Method::DELETE => {
            let id = query.get("id").cloned();
            store.accounts.retain(|a| a.id != id);
            success()
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

async fn categories(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let mut store = state.lock().unwrap();
    if let Some(res) = observe(&mut store, &method, &uri, &query, &body) {
        return res;
    }

    match method {
        Method::GET => Json(store.categories.clone()).into_response(),
        Method::POST => {
            let mut category: Category = serde_json::from_str(&body).unwrap();
            category.id = Some(store.next_id());
            store.categories.push(category);
            success()
        }
        Method::DELETE => {
            let id = query.get("id").cloned();
            store.categories.retain(|c| c.id != id);
            success()
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

async fn records(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let mut store = state.lock().unwrap();
    if let Some(res) = observe(&mut store, &method, &uri, &query, &body) {
        return res;
    }

    match method {
        Method::GET => {
            let from = query.get("from").cloned().unwrap_or_default();
            let to = query.get("to").cloned().unwrap_or_default();
            let records: Vec<Record> = store
                .records
                .iter()
                .filter(|r| r.date >= from && r.date <= to)
                .cloned()
                .collect();

            let mut response = RecordsResponse::default();
            for record in &records {
                let stat = response
                    .stats
                    .entry(record.category.clone())
                    .or_insert_with(|| Stat {
                        category: record.category.clone(),
                        amount: 0.0,
                    });
                stat.amount += record.amount;
                response.sum_pay += record.amount;
            }
            response.records = records;
            Json(response).into_response()
        }
        Method::POST => {
            let mut record: Record = serde_json::from_str(&body).unwrap();
            record.id = Some(store.next_id());
            store.records.push(record);
            success()
        }
        Method::DELETE => {
            let id = query.get("id").cloned();
            store.records.retain(|r| r.id != id);
            success()
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

async fn unlock(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut store = state.lock().unwrap();
    if let Some(res) = observe(&mut store, &method, &uri, &query, "") {
        return res;
    }
    if query.get("password") == Some(&store.password) {
        success()
    } else {
        rejected()
    }
}

async fn change_password(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut store = state.lock().unwrap();
    if let Some(res) = observe(&mut store, &method, &uri, &query, "") {
        return res;
    }
    if query.get("old-password") != Some(&store.password) {
        return rejected();
    }
    store.password = query.get("new-password").cloned().unwrap_or_default();
    success()
}

async fn spawn_server(store: Store) -> (Client, Shared) {
    let state: Shared = Arc::new(Mutex::new(store));
    let app = Router::new()
        .route("/account", any(accounts))
        .route("/category", any(categories))
        .route("/record", any(records))
        .route("/setup/db", get(unlock))
        .route("/setup/db/password", get(change_password))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = Client::new(&format!("http://{addr}")).unwrap();
    (client, state)
}

fn seeded() -> Store {
    let mut card = Account::named("card");
    card.id = Some("100".into());
    let mut food = Category::named("food");
    food.id = Some("200".into());
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    Store {
        accounts: vec![card],
        categories: vec![food],
        records: vec![Record {
            id: Some("300".into()),
            account_id: "100".into(),
            amount: 8000.0,
            category: "food".into(),
            date: today,
            time: "12:30".into(),
            ..Record::default()
        }],
        password: "secret".into(),
        ..Store::default()
    }
}

fn mutations(state: &Shared) -> Vec<(Method, String)> {
    state
        .lock()
        .unwrap()
        .seen
        .iter()
        .filter(|seen| seen.method != Method::GET)
        .map(|seen| (seen.method.clone(), seen.path.clone()))
        .collect()
}

#[tokio::test]
async fn upsert_posts_new_entities_and_puts_existing_ones() {
    let (client, state) = spawn_server(Store::default()).await;

    client.upsert_account(&Account::named("wallet")).await.unwrap();
    let created = client.list_accounts().await.unwrap();
    assert_eq!(created.len(), 1);
    let id = created[0].id.clone().unwrap();

    let mut renamed = created[0].clone();
    renamed.account_name = "purse".into();
    client.upsert_account(&renamed).await.unwrap();

    let store = state.lock().unwrap();
    let post = &store.seen[0];
    assert_eq!(post.method, Method::POST);
    assert!(post.query.get("id").is_none());
    assert_eq!(post.body.as_ref().unwrap()["account-name"], "wallet");
    assert!(post.body.as_ref().unwrap().get("id").is_none());

    let put = store.seen.last().unwrap();
    assert_eq!(put.method, Method::PUT);
    assert_eq!(put.query.get("id"), Some(&id));
    assert_eq!(store.accounts[0].account_name, "purse");
}

#[tokio::test]
async fn delete_sends_the_id_as_a_query_parameter() {
    let (client, state) = spawn_server(seeded()).await;

    client.delete_category("200").await.unwrap();

    let store = state.lock().unwrap();
    let call = store.seen.last().unwrap();
    assert_eq!(call.method, Method::DELETE);
    assert_eq!(call.path, "/category");
    assert_eq!(call.query.get("id").map(String::as_str), Some("200"));
    assert!(store.categories.is_empty());
}

#[tokio::test]
async fn records_are_requested_for_the_whole_range() {
    let (client, state) = spawn_server(seeded()).await;
    let from = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();

    let response = client.list_records(from, to).await.unwrap();
    assert_eq!(response.records.len(), 1);
    assert_eq!(response.stats["food"].amount, 8000.0);
    assert_eq!(response.sum_pay, 8000.0);

    let store = state.lock().unwrap();
    let query = &store.seen[0].query;
    assert_eq!(query.get("q").map(String::as_str), Some("record:"));
    assert_eq!(query.get("from").map(String::as_str), Some("2000-01-01"));
    assert_eq!(query.get("to").map(String::as_str), Some("2100-12-31"));
}

#[tokio::test]
async fn a_non_success_envelope_is_rejected() {
    let (client, _state) = spawn_server(seeded()).await;

    let err = client.unlock("guess").await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected(ref status) if status == "fail"));
    client.unlock("secret").await.unwrap();
}

#[tokio::test]
async fn password_change_sends_both_passwords() {
    let (client, state) = spawn_server(seeded()).await;

    client.change_password("secret", "hunter2").await.unwrap();

    let store = state.lock().unwrap();
    let query = &store.seen[0].query;
    assert_eq!(query.get("old-password").map(String::as_str), Some("secret"));
    assert_eq!(query.get("new-password").map(String::as_str), Some("hunter2"));
    assert_eq!(store.password, "hunter2");
}

#[tokio::test]
async fn server_errors_carry_the_reported_message() {
    let (client, _state) = spawn_server(Store {
        fail_status: true,
        ..Store::default()
    })
    .await;

    match client.list_accounts().await.unwrap_err() {
        ClientError::Status { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unlocking_loads_every_list_and_the_home_chart() {
    let (client, _state) = spawn_server(seeded()).await;
    let range = DateRange::ending(Local::now().date_naive(), 7);
    let mut vm = ViewModel::new(client, range);

    assert!(vm.unlock("wrong").await.is_err());
    assert_eq!(vm.gate(), Gate::Locked);
    assert!(vm.accounts().is_empty());

    vm.unlock("secret").await.unwrap();
    assert_eq!(vm.gate(), Gate::Unlocked);
    assert_eq!(vm.panel(), Panel::Home);
    assert_eq!(vm.accounts().len(), 1);
    assert_eq!(vm.categories().len(), 1);
    assert_eq!(vm.records().records.len(), 1);

    let chart = vm.chart().current().unwrap();
    assert_eq!(chart.slices[0].label, "food");
    assert_eq!(chart.slices[0].percent, 100);
}

#[tokio::test]
async fn saving_a_record_creates_its_account_and_category_first() {
    let (client, state) = spawn_server(seeded()).await;
    let range = DateRange::ending(Local::now().date_naive(), 7);
    let mut vm = ViewModel::new(client, range);
    vm.unlock("secret").await.unwrap();

    vm.open_input_record(None).unwrap();
    {
        let draft = &mut vm.record_modal.as_mut().unwrap().draft;
        draft.account_name = "wallet".into();
        draft.record.category = "taxi".into();
        draft.record.currency = Currency::Krw;
        draft.amount = "12000.9".into();
    }
    vm.set_record().await.unwrap();
    assert!(vm.record_modal.is_none());

    assert_eq!(
        mutations(&state),
        vec![
            (Method::POST, "/account".to_string()),
            (Method::POST, "/category".to_string()),
            (Method::POST, "/record".to_string()),
        ]
    );

    let wallet_id = vm
        .accounts()
        .iter()
        .find(|a| a.account_name == "wallet")
        .and_then(|a| a.id.clone())
        .unwrap();
    let saved = vm
        .records()
        .records
        .iter()
        .find(|r| r.category == "taxi")
        .unwrap();
    assert_eq!(saved.account_id, wallet_id);
    assert_eq!(saved.amount, 12000.0);
    assert!(vm.categories().iter().any(|c| c.category_name == "taxi"));
}
