//! Compiles the C helper that resolves the platform's standard-stream slots.
//! The C compiler sees the real stdio headers, so `sizeof(FILE)` and the name
//! of the stream table stay out of the Rust source.

fn main() {
    println!("cargo:rerun-if-changed=src/c/stdio_slots.c");

    cc::Build::new()
        .file("src/c/stdio_slots.c")
        .compile("stdio_slots");
}
