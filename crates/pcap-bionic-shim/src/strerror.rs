//! `__gnu_strerror_r`, the glibc-internal spelling a `_GNU_SOURCE`-built
//! object references instead of the POSIX name.

use libc::{c_char, c_int, size_t};

/// Formats the message for `errnum` into `buf` and returns `buf` unchanged.
///
/// Delegates to the thread-safe POSIX `strerror_r` (bionic's own on Android,
/// `__xpg_strerror_r` on glibc hosts) and discards its status: on truncation
/// or failure the buffer holds whatever the primitive left there, and the
/// returned pointer is still the caller's.
#[no_mangle]
pub unsafe extern "C" fn __gnu_strerror_r(
    errnum: c_int,
    buf: *mut c_char,
    buflen: size_t,
) -> *mut c_char {
    let _ = libc::strerror_r(errnum, buf, buflen);
    buf
}
