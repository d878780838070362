use api_types::{
    Currency, PayType,
    account::Account,
    category::Category,
    record::TransactionType,
};

use crate::view_model::{PasswordDraft, RangeDraft, RecordDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    /// Fixed set of values, cycled with Space.
    Choice,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn text(label: &'static str) -> FieldSpec {
    FieldSpec {
        label,
        kind: FieldKind::Text,
    }
}

const fn choice(label: &'static str) -> FieldSpec {
    FieldSpec {
        label,
        kind: FieldKind::Choice,
    }
}

const fn secret(label: &'static str) -> FieldSpec {
    FieldSpec {
        label,
        kind: FieldKind::Secret,
    }
}

/// A draft that can be edited field by field in a modal.
pub trait FormDraft {
    fn title(&self) -> &'static str;

    fn fields(&self) -> &'static [FieldSpec];

    fn value(&self, index: usize) -> String;

    fn text_mut(&mut self, index: usize) -> Option<&mut String>;

    fn cycle(&mut self, _index: usize) {}
}

fn next_of<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let position = all.iter().position(|item| *item == current).unwrap_or(0);
    all[(position + 1) % all.len()]
}

const ACCOUNT_FIELDS: [FieldSpec; 6] = [
    text("Name"),
    choice("Pay type"),
    text("Repay day"),
    text("Use day from"),
    text("Use day to"),
    text("Description"),
];

impl FormDraft for Account {
    fn title(&self) -> &'static str {
        if self.id.is_some() {
            "Edit account"
        } else {
            "New account"
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        &ACCOUNT_FIELDS
    }

    fn value(&self, index: usize) -> String {
        match index {
            0 => self.account_name.clone(),
            1 => self.pay_type.as_str().to_string(),
            2 => self.repay_day.clone(),
            3 => self.use_day_from.clone(),
            4 => self.use_day_to.clone(),
            5 => self.description.clone(),
            _ => String::new(),
        }
    }

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.account_name),
            2 => Some(&mut self.repay_day),
            3 => Some(&mut self.use_day_from),
            4 => Some(&mut self.use_day_to),
            5 => Some(&mut self.description),
            _ => None,
        }
    }

    fn cycle(&mut self, index: usize) {
        if index == 1 {
            self.pay_type = next_of(&PayType::ALL, self.pay_type);
        }
    }
}

const CATEGORY_FIELDS: [FieldSpec; 1] = [text("Name")];

impl FormDraft for Category {
    fn title(&self) -> &'static str {
        if self.id.is_some() {
            "Edit category"
        } else {
            "New category"
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        &CATEGORY_FIELDS
    }

    fn value(&self, index: usize) -> String {
        match index {
            0 => self.category_name.clone(),
            _ => String::new(),
        }
    }

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.category_name),
            _ => None,
        }
    }
}

/// Index of the account name inside [`RECORD_FIELDS`].
pub const RECORD_ACCOUNT_FIELD: usize = 1;

const RECORD_FIELDS: [FieldSpec; 9] = [
    choice("Type"),
    text("Account"),
    choice("Pay type"),
    choice("Currency"),
    text("Amount"),
    text("Category"),
    text("Date"),
    text("Time"),
    text("Description"),
];

const RECORD_PAY_TYPES: [PayType; 2] = [PayType::Direct, PayType::Credit];

impl FormDraft for RecordDraft {
    fn title(&self) -> &'static str {
        if self.record.id.is_some() {
            "Edit record"
        } else {
            "New record"
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        &RECORD_FIELDS
    }

    fn value(&self, index: usize) -> String {
        match index {
            0 => self.record.transaction_type.label().to_string(),
            1 => self.account_name.clone(),
            2 => self.record.pay_type.as_str().to_string(),
            3 => format!(
                "{} {}",
                self.record.currency.code(),
                self.record.currency.symbol()
            ),
            4 => self.amount.clone(),
            5 => self.record.category.clone(),
            6 => self.record.date.clone(),
            7 => self.record.time.clone(),
            8 => self.record.description.clone(),
            _ => String::new(),
        }
    }

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            1 => Some(&mut self.account_name),
            4 => Some(&mut self.amount),
            5 => Some(&mut self.record.category),
            6 => Some(&mut self.record.date),
            7 => Some(&mut self.record.time),
            8 => Some(&mut self.record.description),
            _ => None,
        }
    }

    fn cycle(&mut self, index: usize) {
        match index {
            0 => {
                self.record.transaction_type =
                    next_of(&TransactionType::ALL, self.record.transaction_type)
            }
            2 => self.record.pay_type = next_of(&RECORD_PAY_TYPES, self.record.pay_type),
            3 => self.record.currency = next_of(&Currency::ALL, self.record.currency),
            _ => {}
        }
    }
}

const PASSWORD_FIELDS: [FieldSpec; 2] = [secret("Old password"), secret("New password")];

impl FormDraft for PasswordDraft {
    fn title(&self) -> &'static str {
        "Change password"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        &PASSWORD_FIELDS
    }

    fn value(&self, index: usize) -> String {
        match index {
            0 => self.old_password.clone(),
            1 => self.new_password.clone(),
            _ => String::new(),
        }
    }

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.old_password),
            1 => Some(&mut self.new_password),
            _ => None,
        }
    }
}

const RANGE_FIELDS: [FieldSpec; 2] = [text("From"), text("To")];

impl FormDraft for RangeDraft {
    fn title(&self) -> &'static str {
        "Summary range"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        &RANGE_FIELDS
    }

    fn value(&self, index: usize) -> String {
        match index {
            0 => self.from.clone(),
            1 => self.to.clone(),
            _ => String::new(),
        }
    }

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.from),
            1 => Some(&mut self.to),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_pay_type_never_cycles_to_hybrid() {
        let mut draft = RecordDraft::default();
        for _ in 0..4 {
            draft.cycle(2);
            assert_ne!(draft.record.pay_type, PayType::Hybrid);
        }
    }

    #[test]
    fn currency_cycles_through_every_code() {
        let mut draft = RecordDraft::default();
        let mut seen = Vec::new();
        for _ in 0..Currency::ALL.len() {
            seen.push(draft.record.currency);
            draft.cycle(3);
        }
        assert_eq!(seen, Currency::ALL);
        assert_eq!(draft.record.currency, Currency::Krw);
    }

    #[test]
    fn choice_fields_are_not_typed_into() {
        let mut account = Account::default();
        assert!(account.text_mut(1).is_none());
        assert!(account.text_mut(0).is_some());
        assert_eq!(account.fields()[1].kind, FieldKind::Choice);
    }
}
