//! Business logic for account mutations and their cascade.

use tracing::warn;

use pitaka_domain::{Account, EntityId, Transaction};

use crate::{
    services::{remove_entry, replace_entry},
    store::{keys, OfflineStore, WriteBatch},
    time::{stamp_id, Clock},
    CoreError,
};

/// Draft payload for creating or editing an account.
#[derive(Debug, Clone)]
pub struct AccountDraft {
    pub id: Option<EntityId>,
    pub name: String,
    pub initial_balance: f64,
}

/// Provides validated mutations for [`Account`] entries.
pub struct AccountService;

impl AccountService {
    pub fn list(store: &OfflineStore) -> Vec<Account> {
        store.get(keys::ACCOUNTS, Vec::new())
    }

    /// Creates or edits an account. Creates stamp a fresh clock-derived id;
    /// edits must reference an existing entry.
    pub fn save(
        store: &OfflineStore,
        clock: &dyn Clock,
        draft: AccountDraft,
    ) -> Result<Account, CoreError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Validation("account name must not be empty".into()));
        }

        let mut accounts = Self::list(store);
        let duplicate = accounts
            .iter()
            .any(|account| account.name.eq_ignore_ascii_case(&name) && draft.id != Some(account.id));
        if duplicate {
            // Transactions join on the name, so twins share one balance.
            warn!(account = %name, "saving account with a duplicate name");
        }

        let saved = match draft.id {
            Some(id) => {
                let account = Account::new(id, name, draft.initial_balance);
                if !replace_entry(&mut accounts, account.clone()) {
                    return Err(CoreError::AccountNotFound(id));
                }
                account
            }
            None => {
                let account =
                    Account::new(stamp_id(clock, &accounts), name, draft.initial_balance);
                accounts.push(account.clone());
                account
            }
        };
        store.set(keys::ACCOUNTS, &accounts);
        Ok(saved)
    }

    /// Removes an account and every transaction posted to its name.
    ///
    /// Both list writes are staged and committed as one batch. The store
    /// applies them sequentially; a crash in between leaves orphaned
    /// transactions, which the balance calculator ignores.
    pub fn remove(store: &OfflineStore, id: EntityId) -> Result<(), CoreError> {
        let mut accounts = Self::list(store);
        let name = accounts
            .iter()
            .find(|account| account.id == id)
            .map(|account| account.name.clone())
            .ok_or(CoreError::AccountNotFound(id))?;

        remove_entry(&mut accounts, id);
        let mut transactions: Vec<Transaction> = store.get(keys::TRANSACTIONS, Vec::new());
        transactions.retain(|txn| !txn.posted_to(&name));

        let mut batch = WriteBatch::new();
        batch.stage(keys::ACCOUNTS, &accounts);
        batch.stage(keys::TRANSACTIONS, &transactions);
        batch.commit(store);
        Ok(())
    }
}
