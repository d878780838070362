use serde::{Deserialize, Deserializer, Serialize};

/// Currencies a record can be booked in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Krw,
    Usd,
    Jpy,
    Eur,
    Gbp,
    Cny,
}

impl Currency {
    pub const ALL: [Self; 6] = [
        Self::Krw,
        Self::Usd,
        Self::Jpy,
        Self::Eur,
        Self::Gbp,
        Self::Cny,
    ];

    /// ISO code as sent on the wire.
    pub fn code(self) -> &'static str {
        match self {
            Self::Krw => "KRW",
            Self::Usd => "USD",
            Self::Jpy => "JPY",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Cny => "CNY",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Krw => "₩",
            Self::Usd => "$",
            Self::Jpy => "¥",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Cny => "Y",
        }
    }

    /// Amounts in this currency carry no fractional part.
    pub fn is_integral(self) -> bool {
        matches!(self, Self::Krw)
    }
}

/// How an account (or a record booked on it) is settled.
///
/// `Hybrid` only exists on accounts: a record booked on a hybrid account is
/// stored as `Direct`, see [`PayType::for_record`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayType {
    #[default]
    Direct,
    Credit,
    Hybrid,
}

impl PayType {
    pub const ALL: [Self; 3] = [Self::Direct, Self::Credit, Self::Hybrid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Credit => "credit",
            Self::Hybrid => "hybrid",
        }
    }

    /// Pay type a record inherits from an account of this type.
    pub fn for_record(self) -> Self {
        match self {
            Self::Hybrid => Self::Direct,
            other => other,
        }
    }
}

/// Wrapper every mutating endpoint answers with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: String,
}

impl Envelope {
    pub const SUCCESS: &'static str = "success";

    pub fn success() -> Self {
        Self {
            status: Self::SUCCESS.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }
}

/// Treats `""` and `null` ids as "not persisted yet".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|id| !id.is_empty()))
}

/// Day fields were strings in some backend versions and integers in others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => text,
        Some(Raw::Int(value)) => value.to_string(),
        Some(Raw::Float(value)) => value.to_string(),
        None => String::new(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub mod account {
    use super::*;

    /// Payment account (cash, card, ...).
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub struct Account {
        #[serde(
            default,
            deserialize_with = "empty_as_none",
            skip_serializing_if = "Option::is_none"
        )]
        pub id: Option<String>,
        #[serde(default)]
        pub account_name: String,
        #[serde(default)]
        pub pay_type: PayType,
        /// Day of month the credit balance is repaid.
        #[serde(
            default,
            deserialize_with = "string_or_number",
            skip_serializing_if = "String::is_empty"
        )]
        pub repay_day: String,
        /// First day of the billing window.
        #[serde(
            default,
            deserialize_with = "string_or_number",
            skip_serializing_if = "String::is_empty"
        )]
        pub use_day_from: String,
        /// Last day of the billing window.
        #[serde(
            default,
            deserialize_with = "string_or_number",
            skip_serializing_if = "String::is_empty"
        )]
        pub use_day_to: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        pub description: String,
    }

    impl Account {
        /// Account created implicitly when a record names an unknown account.
        pub fn named(name: &str) -> Self {
            Self {
                account_name: name.to_string(),
                ..Self::default()
            }
        }
    }
}

pub mod category {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub struct Category {
        #[serde(
            default,
            deserialize_with = "empty_as_none",
            skip_serializing_if = "Option::is_none"
        )]
        pub id: Option<String>,
        #[serde(default)]
        pub category_name: String,
    }

    impl Category {
        pub fn named(name: &str) -> Self {
            Self {
                id: None,
                category_name: name.to_string(),
            }
        }
    }
}

pub mod record {
    use std::collections::BTreeMap;

    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    use super::*;

    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    pub const TIME_FORMAT: &str = "%H:%M";

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub enum TransactionType {
        #[default]
        #[serde(rename = "record_type_pay")]
        Pay,
        #[serde(rename = "record_type_income")]
        Income,
    }

    impl TransactionType {
        pub const ALL: [Self; 2] = [Self::Pay, Self::Income];

        pub fn label(self) -> &'static str {
            match self {
                Self::Pay => "pay",
                Self::Income => "income",
            }
        }
    }

    /// A single booked transaction.
    ///
    /// The account is referenced by id while the category is referenced by
    /// name.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub struct Record {
        #[serde(
            default,
            deserialize_with = "empty_as_none",
            skip_serializing_if = "Option::is_none"
        )]
        pub id: Option<String>,
        #[serde(default)]
        pub transaction_type: TransactionType,
        #[serde(default)]
        pub account_id: String,
        #[serde(default)]
        pub pay_type: PayType,
        #[serde(default)]
        pub currency: Currency,
        #[serde(default)]
        pub amount: f64,
        #[serde(default)]
        pub category: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        pub description: String,
        /// Local calendar date, `YYYY-MM-DD`.
        #[serde(default)]
        pub date: String,
        /// Local wall-clock time, `HH:MM`.
        #[serde(default)]
        pub time: String,
    }

    impl Record {
        pub fn occurred_on(&self) -> Option<NaiveDate> {
            NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
        }

        pub fn occurred_at(&self) -> Option<NaiveDateTime> {
            let date = self.occurred_on()?;
            let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()?;
            Some(date.and_time(time))
        }
    }

    /// Per-category total inside a [`RecordsResponse`].
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct Stat {
        #[serde(default, alias = "Category")]
        pub category: String,
        #[serde(default, alias = "Amount")]
        pub amount: f64,
    }

    /// Records of a date range plus the sums the backend computed for it.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default, rename_all = "kebab-case")]
    pub struct RecordsResponse {
        #[serde(deserialize_with = "null_as_default")]
        pub records: Vec<Record>,
        /// Direct-pay totals keyed by category name.
        #[serde(deserialize_with = "null_as_default")]
        pub stats: BTreeMap<String, Stat>,
        /// Credit totals not yet repaid, keyed by category name.
        #[serde(deserialize_with = "null_as_default")]
        pub stats_credit: BTreeMap<String, Stat>,
        pub sum_pay: f64,
        pub sum_credit_pay: f64,
        pub sum_income: f64,
    }

    impl RecordsResponse {
        /// Everything paid in the range, settled or not.
        pub fn total_spend(&self) -> f64 {
            self.sum_pay + self.sum_credit_pay
        }
    }
}

pub mod setup {
    use super::*;

    /// Query of the unlock endpoint.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Unlock {
        pub password: String,
    }

    /// Query of the password change endpoint.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub struct PasswordChange {
        pub old_password: String,
        pub new_password: String,
    }
}
