//! # pcap-bionic-shim
//!
//! Link-time libc shims for running a glibc-built packet-capture library on
//! Android/bionic below API 24. Supplies the undefined symbols the prebuilt
//! object expects: `__gnu_strerror_r`, the `stdin`/`stdout`/`stderr` data
//! symbols, `getifaddrs`/`freeifaddrs` stubs, and `ftello64`.
//!
//! Nothing here is called by this crate's own logic; the exports exist for
//! the linker. Tracing is off unless `PCAP_SHIM_TRACE` is set in the host
//! process environment.

// C-ABI entry points are inherently unsafe; contracts live on the items
#![allow(clippy::missing_safety_doc)]
// Exported stream symbols must carry their C names
#![allow(non_upper_case_globals)]

// Macros must be defined before modules that use them
#[macro_use]
pub mod macros;

pub mod ifaddrs;
pub mod state;
pub mod stdio;
pub mod strerror;

/// Load-time constructor (ELF targets): binds the exported streams and the
/// trace flag before any consumer code can observe them.
#[cfg(not(target_os = "macos"))]
#[link_section = ".init_array"]
#[used]
pub static SHIM_INIT: unsafe extern "C" fn() = {
    unsafe extern "C" fn init() {
        crate::state::bind_from_env();
        crate::stdio::bind_streams();
    }
    init
};

/// Load-time constructor for Mach-O host development builds.
#[cfg(target_os = "macos")]
#[link_section = "__DATA,__mod_init_func"]
pub static SHIM_INIT: unsafe extern "C" fn() = {
    unsafe extern "C" fn init() {
        crate::state::bind_from_env();
        crate::stdio::bind_streams();
    }
    init
};
