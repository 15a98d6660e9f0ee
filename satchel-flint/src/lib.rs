//! Flint test harness for satchel inventories.
//!
//! This crate provides in-memory stand-ins for the pieces an inventory talks to:
//! - `FlintConnection` records every update pushed to it and can be closed at any time
//! - `TestPlayer` is a holder entity with a real `PlayerInventory`, a viewer set and an
//!   optional connection
//!
//! # Example
//!
//! ```ignore
//! use satchel_flint::{FlintConnection, TestPlayer};
//!
//! satchel_flint::init();
//!
//! let holder = TestPlayer::new(1, None);
//! let viewer = TestPlayer::connected(2);
//! holder.start_seen_by(viewer.clone());
//!
//! holder.inventory().set_item_in_hand(stack)?;
//! assert_eq!(viewer.flint_connection().unwrap().equipment_changes_for(1), 1);
//! ```

mod connection;
mod player;

pub use connection::{FlintConnection, FlintEvent};
pub use player::TestPlayer;

use std::sync::Once;

use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly log subscriber.
///
/// `RUST_LOG` overrides the default filter. It's safe to call multiple times - subsequent
/// calls are no-ops.
pub fn init() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("satchel_core=debug,satchel_flint=debug"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .finish();

        // Bridge the `log` macros used by satchel-core into tracing
        if tracing::subscriber::set_global_default(subscriber).is_ok()
            && let Err(err) = LogTracer::init()
        {
            tracing::debug!("log bridge already installed: {err}");
        }
    });
}
