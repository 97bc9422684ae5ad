//! Stateless reducers deriving balances and totals from stored lists.
//!
//! Nothing here caches or persists; every figure is recomputed from the
//! slices on each call. Transactions referencing an unknown account name
//! simply contribute nothing.

use std::collections::BTreeMap;

use pitaka_domain::{Account, Goal, MonthWindow, Transaction};

/// Current balance for one account, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalance {
    pub name: String,
    pub balance: f64,
}

/// Income and expense totals with their net difference. Expense is reported
/// as a positive magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CashFlow {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// Summed savings targets and progress across all goals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GoalTotals {
    pub target: f64,
    pub saved: f64,
}

/// Aggregates stored lists into the figures the shell displays.
pub struct SummaryService;

impl SummaryService {
    /// Current balance for the named account: its initial balance plus every
    /// transaction posted to that name, unbounded by date. An unknown name
    /// resolves to zero.
    pub fn current_balance(accounts: &[Account], name: &str, transactions: &[Transaction]) -> f64 {
        let Some(account) = accounts.iter().find(|account| account.name == name) else {
            return 0.0;
        };
        account.initial_balance
            + transactions
                .iter()
                .filter(|txn| txn.posted_to(name))
                .map(|txn| txn.amount)
                .sum::<f64>()
    }

    /// Per-account current balances, in account order.
    pub fn account_balances(
        accounts: &[Account],
        transactions: &[Transaction],
    ) -> Vec<AccountBalance> {
        accounts
            .iter()
            .map(|account| AccountBalance {
                name: account.name.clone(),
                balance: Self::current_balance(accounts, &account.name, transactions),
            })
            .collect()
    }

    /// All-time income and expense totals across every transaction.
    pub fn cash_flow(transactions: &[Transaction]) -> CashFlow {
        let mut flow = CashFlow::default();
        for txn in transactions {
            if txn.is_income() {
                flow.income += txn.amount;
            } else {
                flow.expense += txn.magnitude();
            }
        }
        flow.net = flow.income - flow.expense;
        flow
    }

    /// Sum of initial balances plus the all-time net flow.
    pub fn net_worth(accounts: &[Account], transactions: &[Transaction]) -> f64 {
        let initial: f64 = accounts.iter().map(|account| account.initial_balance).sum();
        initial + Self::cash_flow(transactions).net
    }

    /// Expense total for one category within the month window. Category
    /// comparison is exact, as stored.
    pub fn spent_in_month(
        transactions: &[Transaction],
        category: &str,
        window: MonthWindow,
    ) -> f64 {
        transactions
            .iter()
            .filter(|txn| {
                txn.is_expense() && txn.category == category && window.contains(txn.date)
            })
            .map(|txn| txn.magnitude())
            .sum()
    }

    /// Per-category expense totals within the month window.
    pub fn spent_by_category(
        transactions: &[Transaction],
        window: MonthWindow,
    ) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for txn in transactions {
            if txn.is_expense() && window.contains(txn.date) {
                *totals.entry(txn.category.clone()).or_insert(0.0) += txn.magnitude();
            }
        }
        totals
    }

    /// Income and expense totals restricted to one month.
    pub fn monthly_flow(transactions: &[Transaction], window: MonthWindow) -> CashFlow {
        let mut flow = CashFlow::default();
        for txn in transactions {
            if !window.contains(txn.date) {
                continue;
            }
            if txn.is_income() {
                flow.income += txn.amount;
            } else {
                flow.expense += txn.magnitude();
            }
        }
        flow.net = flow.income - flow.expense;
        flow
    }

    /// Summed targets and saved amounts across all goals.
    pub fn goal_totals(goals: &[Goal]) -> GoalTotals {
        GoalTotals {
            target: goals.iter().map(|goal| goal.total).sum(),
            saved: goals.iter().map(|goal| goal.saved).sum(),
        }
    }
}
