// Test helpers are intentionally partially used
#![allow(dead_code)]

use std::sync::Once;
use treasure_hunt::domain::StorePtr;
use treasure_hunt::{create_memory_store, create_noop_metrics, GameService, Pacing};

static TRACING_INIT: Once = Once::new();

// ============================================================================
// Test Setup
// ============================================================================

/// Initialize tracing once for all tests in a binary.
pub fn init_tracing() {
    // ---
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_ansi(false) // No colorization, makes logs easier to read.
            .with_test_writer()
            .init();
    });
}

/// A service over a fresh in-memory store with no pacing.
pub fn test_service() -> GameService {
    // ---
    service_on(create_memory_store())
}

/// A service over `store` with no pacing.
pub fn service_on(store: StorePtr) -> GameService {
    // ---
    init_tracing();
    GameService::new(store, create_noop_metrics(), Pacing::instant())
}
