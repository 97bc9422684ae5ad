//! Business logic for budget mutations and monthly usage.

use chrono::NaiveDate;

use pitaka_domain::{Budget, BudgetUsage, EntityId, MonthWindow, Transaction};

use crate::{
    services::{remove_entry, replace_entry, SummaryService},
    store::{keys, OfflineStore},
    time::{stamp_id, Clock},
    CoreError,
};

/// Draft payload for creating or editing a budget.
#[derive(Debug, Clone)]
pub struct BudgetDraft {
    pub id: Option<EntityId>,
    pub category: String,
    pub total: f64,
}

/// A budget row paired with its derived usage for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub budget: Budget,
    pub usage: BudgetUsage,
}

/// Provides validated mutations and usage reports for [`Budget`] entries.
pub struct BudgetService;

impl BudgetService {
    pub fn list(store: &OfflineStore) -> Vec<Budget> {
        store.get(keys::BUDGETS, Vec::new())
    }

    pub fn save(
        store: &OfflineStore,
        clock: &dyn Clock,
        draft: BudgetDraft,
    ) -> Result<Budget, CoreError> {
        let category = draft.category.trim().to_string();
        if category.is_empty() {
            return Err(CoreError::Validation(
                "budget category must not be empty".into(),
            ));
        }
        if !(draft.total > 0.0) {
            return Err(CoreError::Validation(
                "budget total must be a positive number".into(),
            ));
        }

        let mut budgets = Self::list(store);
        let saved = match draft.id {
            Some(id) => {
                let budget = Budget::new(id, category, draft.total);
                if !replace_entry(&mut budgets, budget.clone()) {
                    return Err(CoreError::BudgetNotFound(id));
                }
                budget
            }
            None => {
                let budget = Budget::new(stamp_id(clock, &budgets), category, draft.total);
                budgets.push(budget.clone());
                budget
            }
        };
        store.set(keys::BUDGETS, &budgets);
        Ok(saved)
    }

    pub fn remove(store: &OfflineStore, id: EntityId) -> Result<(), CoreError> {
        let mut budgets = Self::list(store);
        if !remove_entry(&mut budgets, id) {
            return Err(CoreError::BudgetNotFound(id));
        }
        store.set(keys::BUDGETS, &budgets);
        Ok(())
    }

    /// Usage for the month containing the reference date. The reference is a
    /// parameter so "spent this month" stays deterministic; callers resolve
    /// it from a clock at evaluation time.
    pub fn usage(budget: &Budget, transactions: &[Transaction], reference: NaiveDate) -> BudgetUsage {
        let window = MonthWindow::containing(reference);
        let spent = SummaryService::spent_in_month(transactions, &budget.category, window);
        BudgetUsage::from_parts(budget.total, spent)
    }

    /// Usage rows for every budget, in stored order.
    pub fn statuses(
        budgets: &[Budget],
        transactions: &[Transaction],
        reference: NaiveDate,
    ) -> Vec<BudgetStatus> {
        budgets
            .iter()
            .map(|budget| BudgetStatus {
                budget: budget.clone(),
                usage: Self::usage(budget, transactions, reference),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use pitaka_domain::TransactionKind;

    fn clock() -> FixedClock {
        FixedClock::at_millis(1_700_000_000_000)
    }

    fn txn(id: i64, date: NaiveDate, category: &str, kind: TransactionKind, amount: f64) -> Transaction {
        Transaction::new(
            EntityId::from_millis(id),
            date,
            category,
            "",
            kind,
            amount,
            None,
        )
    }

    #[test]
    fn save_rejects_non_positive_totals() {
        let store = OfflineStore::in_memory();
        let err = BudgetService::save(
            &store,
            &clock(),
            BudgetDraft {
                id: None,
                category: "Food".into(),
                total: 0.0,
            },
        )
        .expect_err("zero cap must fail");
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn usage_only_counts_expenses_in_the_reference_month() {
        let reference = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let budget = Budget::new(EntityId::from_millis(1), "Food", 500.0);
        let transactions = vec![
            txn(2, reference, "Food", TransactionKind::Expense, 100.0),
            txn(3, reference, "Food", TransactionKind::Expense, 50.0),
            // Income in the same category is not spending.
            txn(4, reference, "Food", TransactionKind::Income, 75.0),
            // Previous month stays out of the window.
            txn(
                5,
                NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
                "Food",
                TransactionKind::Expense,
                40.0,
            ),
            txn(6, reference, "Transport", TransactionKind::Expense, 30.0),
        ];

        let usage = BudgetService::usage(&budget, &transactions, reference);
        assert_eq!(usage.spent, 150.0);
        assert_eq!(usage.remaining, 350.0);
        assert!(!usage.over_budget);
        assert!((usage.percent_used - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn statuses_cover_every_budget_in_order() {
        let store = OfflineStore::in_memory();
        BudgetService::save(
            &store,
            &clock(),
            BudgetDraft {
                id: None,
                category: "Food".into(),
                total: 500.0,
            },
        )
        .expect("saves");
        BudgetService::save(
            &store,
            &clock(),
            BudgetDraft {
                id: None,
                category: "Fun".into(),
                total: 200.0,
            },
        )
        .expect("saves");

        let budgets = BudgetService::list(&store);
        let statuses = BudgetService::statuses(
            &budgets,
            &[],
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
        );
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].budget.category, "Food");
        assert_eq!(statuses[1].budget.category, "Fun");
        assert_eq!(statuses[0].usage.spent, 0.0);
    }
}
