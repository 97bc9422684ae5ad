//! Round-trip and fail-open behavior of the keyed store accessor.

use chrono::NaiveDate;
use pitaka_core::{keys, OfflineStore};
use pitaka_domain::{Account, Budget, EntityId, Goal, Transaction, TransactionKind};

fn sample_accounts() -> Vec<Account> {
    vec![
        Account::new(EntityId::from_millis(1), "Cash", 100.0),
        Account::new(EntityId::from_millis(2), "Bank", 2500.0),
    ]
}

fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(
            EntityId::from_millis(3),
            NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            "Food",
            "lunch",
            TransactionKind::Expense,
            20.0,
            Some("Cash".into()),
        ),
        Transaction::new(
            EntityId::from_millis(4),
            NaiveDate::from_ymd_opt(2024, 5, 5).unwrap(),
            "Load",
            "",
            TransactionKind::Income,
            300.0,
            None,
        ),
    ]
}

#[test]
fn every_list_slot_round_trips_deep_equal() {
    let store = OfflineStore::in_memory();

    let accounts = sample_accounts();
    let transactions = sample_transactions();
    let budgets = vec![Budget::new(EntityId::from_millis(5), "Food", 500.0)];
    let mut goal = Goal::new(EntityId::from_millis(6), "Trip", 800.0);
    goal.add_progress(120.0);
    let goals = vec![goal];

    store.set(keys::ACCOUNTS, &accounts);
    store.set(keys::TRANSACTIONS, &transactions);
    store.set(keys::BUDGETS, &budgets);
    store.set(keys::GOALS, &goals);

    assert_eq!(store.get::<Vec<Account>>(keys::ACCOUNTS, Vec::new()), accounts);
    assert_eq!(
        store.get::<Vec<Transaction>>(keys::TRANSACTIONS, Vec::new()),
        transactions
    );
    assert_eq!(store.get::<Vec<Budget>>(keys::BUDGETS, Vec::new()), budgets);
    assert_eq!(store.get::<Vec<Goal>>(keys::GOALS, Vec::new()), goals);
}

#[test]
fn corrupted_slots_fail_open_to_the_default() {
    let store = OfflineStore::in_memory();
    for key in [keys::ACCOUNTS, keys::TRANSACTIONS, keys::BUDGETS, keys::GOALS] {
        store.set_raw(key, "][ not json");
        let recovered: Vec<Account> = store.get(key, Vec::new());
        assert!(recovered.is_empty(), "slot `{key}` should fall back to default");
        assert!(
            store.get_raw(key).is_none(),
            "slot `{key}` should discard the corrupted value"
        );
    }
}

#[test]
fn corruption_in_one_slot_leaves_the_others_intact() {
    let store = OfflineStore::in_memory();
    let accounts = sample_accounts();
    store.set(keys::ACCOUNTS, &accounts);
    store.set_raw(keys::TRANSACTIONS, "oops");

    let _: Vec<Transaction> = store.get(keys::TRANSACTIONS, Vec::new());
    assert_eq!(store.get::<Vec<Account>>(keys::ACCOUNTS, Vec::new()), accounts);
}

#[test]
fn rewrites_replace_the_whole_slot() {
    let store = OfflineStore::in_memory();
    store.set(keys::ACCOUNTS, &sample_accounts());
    let shorter = vec![Account::new(EntityId::from_millis(9), "Only", 1.0)];
    store.set(keys::ACCOUNTS, &shorter);
    assert_eq!(store.get::<Vec<Account>>(keys::ACCOUNTS, Vec::new()), shorter);
}

#[test]
fn removed_slots_read_as_the_default_again() {
    let store = OfflineStore::in_memory();
    store.set(keys::GOALS, &vec![Goal::new(EntityId::from_millis(1), "Trip", 800.0)]);
    store.remove(keys::GOALS);
    assert!(store.get::<Vec<Goal>>(keys::GOALS, Vec::new()).is_empty());
}

#[test]
fn plain_string_slots_stay_unframed() {
    let store = OfflineStore::in_memory();
    store.set_raw(keys::USER_NAME, "Ana");
    store.set_raw(keys::THEME, "dark");

    // No JSON quotes around the raw values.
    assert_eq!(store.get_raw(keys::USER_NAME).as_deref(), Some("Ana"));
    assert_eq!(store.get_raw(keys::THEME).as_deref(), Some("dark"));
}
