use std::future::Future;

use api_types::{
    Envelope,
    account::Account,
    category::Category,
    record::{DATE_FORMAT, Record, RecordsResponse},
    setup::{PasswordChange, Unlock},
};
use chrono::NaiveDate;
use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{AppError, Result};

const ACCOUNT_PATH: &str = "account";
const CATEGORY_PATH: &str = "category";
const RECORD_PATH: &str = "record";
const UNLOCK_PATH: &str = "setup/db";
const PASSWORD_PATH: &str = "setup/db/password";

/// Backend query selecting every record of the range.
const RECORD_QUERY: &str = "record:";

const NO_QUERY: [(&str, &str); 0] = [];

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Status { status: StatusCode, message: String },
    /// The call went through but the envelope did not report success.
    #[error("rejected by server (status {0:?})")]
    Rejected(String),
    #[error("invalid url: {0}")]
    Url(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Every call the ledger backend exposes.
///
/// Mutating calls resolve to `Ok(())` only when the HTTP status is a success
/// and the envelope reports `"success"`.
pub trait Backend {
    fn list_accounts(
        &self,
    ) -> impl Future<Output = std::result::Result<Vec<Account>, ClientError>> + Send;

    fn upsert_account(
        &self,
        account: &Account,
    ) -> impl Future<Output = std::result::Result<(), ClientError>> + Send;

    fn delete_account(
        &self,
        id: &str,
    ) -> impl Future<Output = std::result::Result<(), ClientError>> + Send;

    fn list_categories(
        &self,
    ) -> impl Future<Output = std::result::Result<Vec<Category>, ClientError>> + Send;

    fn upsert_category(
        &self,
        category: &Category,
    ) -> impl Future<Output = std::result::Result<(), ClientError>> + Send;

    fn delete_category(
        &self,
        id: &str,
    ) -> impl Future<Output = std::result::Result<(), ClientError>> + Send;

    fn list_records(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Future<Output = std::result::Result<RecordsResponse, ClientError>> + Send;

    fn upsert_record(
        &self,
        record: &Record,
    ) -> impl Future<Output = std::result::Result<(), ClientError>> + Send;

    fn delete_record(
        &self,
        id: &str,
    ) -> impl Future<Output = std::result::Result<(), ClientError>> + Send;

    fn unlock(
        &self,
        password: &str,
    ) -> impl Future<Output = std::result::Result<(), ClientError>> + Send;

    fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> impl Future<Output = std::result::Result<(), ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        // Paths are joined relative to the origin, so it must end with a slash.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|err| AppError::BaseUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Url(err.to_string()))
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> std::result::Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let endpoint = self.endpoint(path)?;
        tracing::debug!(%endpoint, "GET");

        let res = self.http.get(endpoint).query(query).send().await?;
        let res = ensure_ok(res).await?;
        Ok(res.json::<T>().await?)
    }

    /// Sends a mutating request and checks the envelope of the answer.
    async fn send_envelope<B>(
        &self,
        method: Method,
        path: &str,
        id: Option<&str>,
        body: Option<&B>,
    ) -> std::result::Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = self.endpoint(path)?;
        tracing::debug!(%method, %endpoint, id, "sending request");

        let mut req = self.http.request(method, endpoint);
        if let Some(id) = id {
            req = req.query(&[("id", id)]);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await?;
        expect_success(res).await
    }

    /// `POST` for drafts without id, `PUT ?id=` for persisted ones.
    async fn upsert<B: Serialize>(
        &self,
        path: &str,
        id: Option<&str>,
        body: &B,
    ) -> std::result::Result<(), ClientError> {
        let method = if id.is_some() { Method::PUT } else { Method::POST };
        self.send_envelope(method, path, id, Some(body)).await
    }

    async fn delete(&self, path: &str, id: &str) -> std::result::Result<(), ClientError> {
        self.send_envelope::<()>(Method::DELETE, path, Some(id), None)
            .await
    }

    async fn get_envelope<Q>(&self, path: &str, query: &Q) -> std::result::Result<(), ClientError>
    where
        Q: Serialize + ?Sized,
    {
        let endpoint = self.endpoint(path)?;
        tracing::debug!(%endpoint, "GET");

        let res = self.http.get(endpoint).query(query).send().await?;
        expect_success(res).await
    }
}

async fn ensure_ok(res: reqwest::Response) -> std::result::Result<reqwest::Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let text = res.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) if text.trim().is_empty() => "server error".to_string(),
        Err(_) => text.trim().to_string(),
    };
    tracing::warn!(%status, %message, "request failed");
    Err(ClientError::Status { status, message })
}

async fn expect_success(res: reqwest::Response) -> std::result::Result<(), ClientError> {
    let res = ensure_ok(res).await?;
    let envelope = res.json::<Envelope>().await?;
    if envelope.is_success() {
        return Ok(());
    }
    tracing::warn!(status = %envelope.status, "request rejected");
    Err(ClientError::Rejected(envelope.status))
}

impl Backend for Client {
    async fn list_accounts(&self) -> std::result::Result<Vec<Account>, ClientError> {
        self.get_json(ACCOUNT_PATH, &NO_QUERY).await
    }

    async fn upsert_account(&self, account: &Account) -> std::result::Result<(), ClientError> {
        self.upsert(ACCOUNT_PATH, account.id.as_deref(), account)
            .await
    }

    async fn delete_account(&self, id: &str) -> std::result::Result<(), ClientError> {
        self.delete(ACCOUNT_PATH, id).await
    }

    async fn list_categories(&self) -> std::result::Result<Vec<Category>, ClientError> {
        self.get_json(CATEGORY_PATH, &NO_QUERY).await
    }

    async fn upsert_category(&self, category: &Category) -> std::result::Result<(), ClientError> {
        self.upsert(CATEGORY_PATH, category.id.as_deref(), category)
            .await
    }

    async fn delete_category(&self, id: &str) -> std::result::Result<(), ClientError> {
        self.delete(CATEGORY_PATH, id).await
    }

    async fn list_records(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> std::result::Result<RecordsResponse, ClientError> {
        let from = from.format(DATE_FORMAT).to_string();
        let to = to.format(DATE_FORMAT).to_string();
        self.get_json(
            RECORD_PATH,
            &[("q", RECORD_QUERY), ("from", from.as_str()), ("to", to.as_str())],
        )
        .await
    }

    async fn upsert_record(&self, record: &Record) -> std::result::Result<(), ClientError> {
        self.upsert(RECORD_PATH, record.id.as_deref(), record)
            .await
    }

    async fn delete_record(&self, id: &str) -> std::result::Result<(), ClientError> {
        self.delete(RECORD_PATH, id).await
    }

    async fn unlock(&self, password: &str) -> std::result::Result<(), ClientError> {
        let query = Unlock {
            password: password.to_string(),
        };
        self.get_envelope(UNLOCK_PATH, &query).await
    }

    async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> std::result::Result<(), ClientError> {
        let query = PasswordChange {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.get_envelope(PASSWORD_PATH, &query).await
    }
}
