//! Domain model for monthly category spending caps.

use serde::{Deserialize, Serialize};

use crate::common::{EntityId, Identifiable};

/// A monthly spending cap for one category. The spent amount is derived from
/// transactions, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: EntityId,
    pub category: String,
    pub total: f64,
}

impl Budget {
    pub fn new(id: EntityId, category: impl Into<String>, total: f64) -> Self {
        Self {
            id,
            category: category.into(),
            total,
        }
    }
}

impl Identifiable for Budget {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Derived usage figures for a budget within one month window.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUsage {
    pub spent: f64,
    pub remaining: f64,
    pub over_budget: bool,
    pub percent_used: f64,
}

impl BudgetUsage {
    pub fn from_parts(total: f64, spent: f64) -> Self {
        let remaining = total - spent;
        let percent_used = if total > 0.0 {
            (spent / total) * 100.0
        } else {
            0.0
        };
        Self {
            spent,
            remaining,
            over_budget: remaining < 0.0,
            percent_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_flags_overspend() {
        let usage = BudgetUsage::from_parts(500.0, 650.0);
        assert_eq!(usage.remaining, -150.0);
        assert!(usage.over_budget);
        assert!((usage.percent_used - 130.0).abs() < f64::EPSILON);
    }

    #[test]
    fn usage_with_zero_cap_reports_zero_percent() {
        let usage = BudgetUsage::from_parts(0.0, 25.0);
        assert_eq!(usage.percent_used, 0.0);
        assert!(usage.over_budget);
    }
}
