//! Process-wide Ctrl-C flag. Long running searches poll [`received_ctrl_c`] between steps
//! and stop early, so that the best solution found so far can still be reported.

use std::sync::{
    Once,
    atomic::{AtomicBool, Ordering},
};

static RECEIVED_CTRL_C: AtomicBool = AtomicBool::new(false);
static INITIALIZE: Once = Once::new();

/// Installs the signal handler. Calling this function more than once has no effect.
pub fn initialize() {
    INITIALIZE.call_once(|| {
        if let Err(e) = ctrlc::set_handler(|| {
            RECEIVED_CTRL_C.store(true, Ordering::SeqCst);
        }) {
            log::warn!("Could not install termination handler: {e}");
        }
    });
}

/// Returns true iff a termination signal was received after [`initialize`] was called
pub fn received_ctrl_c() -> bool {
    RECEIVED_CTRL_C.load(Ordering::Relaxed)
}
