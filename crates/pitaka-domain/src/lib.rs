//! pitaka-domain
//!
//! Pure domain models (Account, Transaction, Budget, Goal) plus the shared
//! id and month-window primitives. No I/O, no storage. The serde shapes here
//! define the persisted JSON layout and must stay compatible with data saved
//! by earlier releases.

pub mod account;
pub mod budget;
pub mod common;
pub mod goal;
pub mod transaction;

pub use account::*;
pub use budget::*;
pub use common::*;
pub use goal::*;
pub use transaction::*;
