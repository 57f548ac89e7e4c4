//! Named seam for the collaborators spec §1/§6 explicitly put out of scope:
//! console I/O, the `sbrk` heap allocator, and the C-runtime stubs
//! (`_exit`, `_fstat`, ...). This crate never calls any of these — the
//! trait exists only so an embedder wiring this trampoline onto real RV32
//! hardware has a documented place to plug a UART and a program-break
//! allocator in, instead of the trampoline reaching for `std` I/O that
//! would not exist on a bare-metal target.

/// Implement this against your board's UART and heap; the trampoline in
/// this crate never calls it.
pub trait HostEnvironment {
    fn write_byte(&mut self, byte: u8);
    fn read_byte(&mut self) -> u8;
    /// Move the program break by `increment` bytes, returning the previous
    /// break (the `sbrk` contract `syscalls.c`'s C-runtime stubs assume).
    fn sbrk(&mut self, increment: isize) -> *mut u8;
}
