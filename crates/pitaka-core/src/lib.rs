//! pitaka-core
//!
//! The persistence and derived-balance layer: a fail-open accessor over a
//! keyed string store, the clock seam, the boot-state cache, and the CRUD
//! and summary services the shell consumes. Depends on pitaka-domain. No
//! filesystem code here; backends implement [`store::KeyValueStore`].

pub mod boot;
pub mod error;
pub mod services;
pub mod store;
pub mod time;

pub use boot::{BootCache, BootState};
pub use error::CoreError;
pub use services::*;
pub use store::{keys, KeyValueStore, MemoryStore, OfflineStore, WriteBatch};
pub use time::{Clock, FixedClock, SystemClock};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("pitaka_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Pitaka core tracing initialized.");
    });
}
