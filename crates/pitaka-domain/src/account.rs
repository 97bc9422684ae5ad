//! Domain model for named money containers.

use serde::{Deserialize, Serialize};

use crate::common::{EntityId, Identifiable};

/// A named money container with a declared starting balance.
///
/// Transactions reference accounts by `name`, not by id; the current balance
/// is always derived from `initial_balance` plus matching transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: EntityId,
    pub name: String,
    pub initial_balance: f64,
}

impl Account {
    pub fn new(id: EntityId, name: impl Into<String>, initial_balance: f64) -> Self {
        Self {
            id,
            name: name.into(),
            initial_balance,
        }
    }
}

impl Identifiable for Account {
    fn id(&self) -> EntityId {
        self.id
    }
}
