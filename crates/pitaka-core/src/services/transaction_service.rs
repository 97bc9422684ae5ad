//! Business logic for transaction mutations and list filtering.

use chrono::NaiveDate;

use pitaka_domain::{EntityId, Transaction, TransactionKind};

use crate::{
    services::{remove_entry, replace_entry},
    store::{keys, OfflineStore},
    time::{stamp_id, Clock},
    CoreError,
};

/// Draft payload for creating or editing a transaction. `amount` is the
/// unsigned magnitude entered in the form; the stored sign follows `kind`.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub id: Option<EntityId>,
    pub date: NaiveDate,
    pub category: String,
    pub note: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub account: Option<String>,
}

/// Provides validated mutations for [`Transaction`] entries.
pub struct TransactionService;

impl TransactionService {
    pub fn list(store: &OfflineStore) -> Vec<Transaction> {
        store.get(keys::TRANSACTIONS, Vec::new())
    }

    /// Creates or edits a transaction. New entries are prepended so the list
    /// stays newest-first, matching how it is displayed.
    pub fn save(
        store: &OfflineStore,
        clock: &dyn Clock,
        draft: TransactionDraft,
    ) -> Result<Transaction, CoreError> {
        let category = draft.category.trim().to_string();
        if category.is_empty() {
            return Err(CoreError::Validation(
                "transaction category must not be empty".into(),
            ));
        }
        if !(draft.amount.abs() > 0.0) {
            return Err(CoreError::Validation(
                "transaction amount must be a positive number".into(),
            ));
        }
        let account = draft
            .account
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let mut transactions = Self::list(store);
        let saved = match draft.id {
            Some(id) => {
                let txn = Transaction::new(
                    id,
                    draft.date,
                    category,
                    draft.note,
                    draft.kind,
                    draft.amount,
                    account,
                );
                if !replace_entry(&mut transactions, txn.clone()) {
                    return Err(CoreError::TransactionNotFound(id));
                }
                txn
            }
            None => {
                let txn = Transaction::new(
                    stamp_id(clock, &transactions),
                    draft.date,
                    category,
                    draft.note,
                    draft.kind,
                    draft.amount,
                    account,
                );
                transactions.insert(0, txn.clone());
                txn
            }
        };
        store.set(keys::TRANSACTIONS, &transactions);
        Ok(saved)
    }

    pub fn remove(store: &OfflineStore, id: EntityId) -> Result<(), CoreError> {
        let mut transactions = Self::list(store);
        if !remove_entry(&mut transactions, id) {
            return Err(CoreError::TransactionNotFound(id));
        }
        store.set(keys::TRANSACTIONS, &transactions);
        Ok(())
    }

    /// Filters by category (case-insensitive) and exact date; `None` leaves
    /// that dimension unfiltered.
    pub fn filter(
        transactions: &[Transaction],
        category: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| {
                let category_match =
                    category.map_or(true, |wanted| txn.category.eq_ignore_ascii_case(wanted));
                let date_match = date.map_or(true, |wanted| txn.date == wanted);
                category_match && date_match
            })
            .cloned()
            .collect()
    }
}
