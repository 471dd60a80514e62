//! Run state shared with the Ctrl+C handler.
//!
//! Two flags:
//! - `GUARDED`: Is a multi-step run in progress that can stop cleanly between steps?
//! - `SHUTDOWN`: Has shutdown been requested? (Ctrl+C received)

use std::sync::atomic::{AtomicBool, Ordering};

/// A run that checks `is_shutdown()` between steps is in progress
static GUARDED: AtomicBool = AtomicBool::new(false);

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

// =============================================================================
// SHUTDOWN state
// =============================================================================

/// Setup the global Ctrl+C handler. Call once at program start
///
/// The handler behavior depends on whether a guarded run is active:
/// - Outside a guarded run: exit immediately, nothing is half-written
/// - Inside a guarded run: set SHUTDOWN, the run stops after the current step
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        if GUARDED.load(Ordering::SeqCst) {
            SHUTDOWN.store(true, Ordering::SeqCst);
            crate::log!("links"; "interrupted, stopping after the current file type...");
        } else {
            std::process::exit(130);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Check if shutdown has been requested
///
/// Uses Relaxed ordering - worst case is processing one more file type
/// before stopping
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Guard that marks a stoppable run for its lifetime
pub struct RunGuard(());

impl RunGuard {
    /// Enter a guarded run
    pub fn enter() -> Self {
        GUARDED.store(true, Ordering::SeqCst);
        Self(())
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        GUARDED.store(false, Ordering::SeqCst);
    }
}

// =============================================================================
// Tests
// =============================================================================
