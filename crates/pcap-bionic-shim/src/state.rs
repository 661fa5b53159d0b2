//! Process-wide shim state, bound once at load time and read-only after.

use std::sync::atomic::{AtomicBool, Ordering};

/// Trace flag for `shim_trace!`. Written exactly once, by the load-time
/// constructor, before any concurrent access can exist.
pub static TRACE_ENABLED: AtomicBool = AtomicBool::new(false);

#[inline]
pub fn trace_enabled() -> bool {
    TRACE_ENABLED.load(Ordering::Relaxed)
}

/// Runs inside the loader's constructor pass; only libc may be assumed
/// usable, so the environment is read with `getenv` rather than `std::env`.
pub(crate) unsafe fn bind_from_env() {
    if !libc::getenv(c"PCAP_SHIM_TRACE".as_ptr()).is_null() {
        TRACE_ENABLED.store(true, Ordering::Relaxed);
    }
}
