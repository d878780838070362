use api_types::{
    account::Account,
    category::Category,
    record::{DATE_FORMAT, TIME_FORMAT},
};
use chrono::{NaiveDate, NaiveTime};

use super::{PasswordDraft, RangeDraft, RecordDraft};

/// Form-level problem found before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Required-field and format checks of a draft.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(())
}

fn optional_day(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    match value.parse::<u8>() {
        Ok(day) if (1..=31).contains(&day) => Ok(()),
        _ => Err(ValidationError::Invalid {
            field,
            reason: "must be a day between 1 and 31",
        }),
    }
}

pub(crate) fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    required(field, value)?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ValidationError::Invalid {
        field,
        reason: "must be a YYYY-MM-DD date",
    })
}

impl Validate for Account {
    fn validate(&self) -> Result<(), ValidationError> {
        required("account-name", &self.account_name)?;
        optional_day("repay-day", &self.repay_day)?;
        optional_day("use-day-from", &self.use_day_from)?;
        optional_day("use-day-to", &self.use_day_to)?;
        Ok(())
    }
}

impl Validate for Category {
    fn validate(&self) -> Result<(), ValidationError> {
        required("category-name", &self.category_name)
    }
}

impl Validate for RecordDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required("account-name", &self.account_name)?;
        required("category", &self.record.category)?;

        required("amount", &self.amount)?;
        let amount = self.amount.trim();
        let value = match amount.parse::<f64>() {
            Ok(value) if value.is_finite() && value != 0.0 => value,
            _ => {
                return Err(ValidationError::Invalid {
                    field: "amount",
                    reason: "must be a non-zero number",
                });
            }
        };
        if self.record.currency.is_integral() {
            // Truncated on save, so the whole part must carry the amount.
            if value.trunc() == 0.0 {
                return Err(ValidationError::Invalid {
                    field: "amount",
                    reason: "must be at least one whole unit",
                });
            }
        } else {
            let decimals = amount.split_once('.').map_or(0, |(_, fraction)| fraction.len());
            if decimals > 2 {
                return Err(ValidationError::Invalid {
                    field: "amount",
                    reason: "must use steps of 0.01",
                });
            }
        }

        parse_date("date", &self.record.date)?;
        let time = self.record.time.trim();
        if !time.is_empty() && NaiveTime::parse_from_str(time, TIME_FORMAT).is_err() {
            return Err(ValidationError::Invalid {
                field: "time",
                reason: "must be a 24h HH:MM time",
            });
        }
        Ok(())
    }
}

impl Validate for PasswordDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required("old-password", &self.old_password)?;
        required("new-password", &self.new_password)
    }
}

impl Validate for RangeDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        let from = parse_date("from", &self.from)?;
        let to = parse_date("to", &self.to)?;
        if from > to {
            return Err(ValidationError::Invalid {
                field: "from",
                reason: "must not be after to",
            });
        }
        Ok(())
    }
}
