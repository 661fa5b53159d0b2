/// Trace line for shim entry points. Formats on the stack and emits with a
/// raw `write(2)`; a library loaded into a foreign process must not pull the
/// host's stdio or an allocator into its logging path.
#[macro_export]
macro_rules! shim_trace {
    ($($arg:tt)*) => {{
        if $crate::state::trace_enabled() {
            use std::fmt::Write;
            let mut scratch = [0u8; 256];
            let mut w = $crate::macros::StackWriter::new(&mut scratch);
            let pid = unsafe { libc::getpid() };
            let _ = write!(w, "[pcap-shim][{}] ", pid);
            let _ = writeln!(w, $($arg)*);
            let msg = w.as_str();
            unsafe {
                libc::write(2, msg.as_ptr() as *const libc::c_void, msg.len());
            }
        }
    }};
}

/// Writes into a caller-provided buffer; output past capacity is dropped.
pub struct StackWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> StackWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.pos]).unwrap_or("")
    }
}

impl<'a> std::fmt::Write for StackWriter<'a> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        let bytes = s.as_bytes();
        let remaining = self.buf.len() - self.pos;
        let to_copy = std::cmp::min(bytes.len(), remaining);
        self.buf[self.pos..self.pos + to_copy].copy_from_slice(&bytes[..to_copy]);
        self.pos += to_copy;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use super::StackWriter;

    #[test]
    fn writes_within_capacity() {
        let mut buf = [0u8; 16];
        let mut w = StackWriter::new(&mut buf);
        write!(w, "slot={}", 2).unwrap();
        assert_eq!(w.as_str(), "slot=2");
    }

    #[test]
    fn truncates_at_capacity_without_failing() {
        let mut buf = [0u8; 8];
        let mut w = StackWriter::new(&mut buf);
        write!(w, "0123456789abcdef").unwrap();
        assert_eq!(w.as_str(), "01234567");
    }
}
