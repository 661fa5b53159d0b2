//! Standard-stream exposure and the wide file-offset accessor.
//!
//! bionic below API 23 does not export `stdin`/`stdout`/`stderr` as data
//! symbols; its macros expand to slots of the `__sF` stream table. A
//! glibc-built object references the symbols directly, so this module
//! re-exports the table slots under those names.

use std::ptr;

use libc::FILE;

extern "C" {
    // src/c/stdio_slots.c; the platform headers know sizeof(FILE).
    fn shim_stdio_slot(slot: libc::c_int) -> *mut FILE;
}

#[no_mangle]
pub static mut stdin: *mut FILE = ptr::null_mut();
#[no_mangle]
pub static mut stdout: *mut FILE = ptr::null_mut();
#[no_mangle]
pub static mut stderr: *mut FILE = ptr::null_mut();

/// Binds the three exported streams to the platform's stream table. Called
/// exactly once, from the load-time constructor; never reassigned after.
pub(crate) unsafe fn bind_streams() {
    stdin = shim_stdio_slot(0);
    stdout = shim_stdio_slot(1);
    stderr = shim_stdio_slot(2);
    shim_trace!("stdio streams bound");
}

/// 64-bit file position for a consumer compiled against the LFS names.
///
/// Widens `ftell`; error reporting mirrors the primitive (negative sentinel,
/// `errno` already set by it).
#[cfg(any(target_os = "android", target_os = "linux"))]
#[no_mangle]
pub unsafe extern "C" fn ftello64(stream: *mut FILE) -> libc::off64_t {
    libc::ftell(stream) as libc::off64_t
}
