//! A dynamic function-call trampoline for RV32 under the ilp32 family of
//! ABIs (ilp32 / ilp32f / ilp32d).
//!
//! Given a raw function entry address, a return-type tag, and an ordered
//! list of typed argument values, [`call`] marshals the values into the
//! registers and stack slots the selected ABI requires, transfers control
//! via an indirect `jalr`, and hands the return value back tagged.
//!
//! The ABI variant is a compile-time choice between three mutually
//! exclusive Cargo features: `abi-soft` (ilp32), `abi-single` (ilp32f), or
//! `abi-double` (ilp32d, the default). Exactly one must be active; see the
//! `compile_error!` below.
//!
//! This crate covers only the caller side of the call. Console I/O, heap
//! management, and C-runtime stubs are explicitly out of scope — see
//! [`host::HostEnvironment`] for the seam a bare-metal embedder hooks into
//! instead.

#[cfg(not(any(feature = "abi-soft", feature = "abi-single", feature = "abi-double")))]
compile_error!("exactly one of the `abi-soft`, `abi-single`, `abi-double` features must be enabled");

#[cfg(any(
    all(feature = "abi-soft", feature = "abi-single"),
    all(feature = "abi-soft", feature = "abi-double"),
    all(feature = "abi-single", feature = "abi-double"),
))]
compile_error!("`abi-soft`, `abi-single`, and `abi-double` are mutually exclusive");

pub mod classify;
pub mod demote;
mod error;
mod execute;
pub mod ffi;
pub mod host;
pub mod types;

pub use error::ClassifyError;
pub use execute::RawReturn;
pub use ffi::{call_raw, RawArg};
pub use types::{AbiKind, ArgTag, ArgValue, CallDescriptor, RetTag, ReturnValue, ABI_KIND};

// Host-side static assertions (spec §6): little-endian, fixed widths, and
// the descriptor field layout this crate assumes throughout.
const _: () = assert!(
    cfg!(target_endian = "little"),
    "rv32-ucall requires a little-endian target"
);
const _: () = assert!(std::mem::size_of::<f32>() == 4);
const _: () = assert!(std::mem::size_of::<f64>() == 8);
const _: () = assert!(std::mem::size_of::<u64>() == 8);

/// Marshal `descriptor`'s arguments, invoke the callee, and demote the
/// result.
///
/// # Safety
/// `descriptor.entry` must be the address of a function whose real
/// signature matches `descriptor` exactly (argument count, order, and
/// types, plus `descriptor.ret_type`). A mismatch is undefined behavior —
/// this crate performs no dynamic signature check (spec §4.3, §7).
///
/// # Panics
/// Panics if classification fails: more stack words than the bounded
/// buffer holds, or an internal register-accounting invariant breaks.
/// These are precondition violations by the descriptor, not recoverable
/// runtime states (spec §7).
pub unsafe fn call(descriptor: &CallDescriptor<'_>) -> ReturnValue {
    let classified = classify::classify(descriptor)
        .unwrap_or_else(|e| panic!("rv32-ucall: classification failed: {e}"));
    log::trace!(
        "rv32-ucall: entry={:?} used_int={} used_fp={} used_stack_words={}",
        descriptor.entry,
        classified.used_int,
        classified.used_fp,
        classified.used_stack_words,
    );

    #[cfg(target_arch = "riscv32")]
    let raw = execute::execute(&classified, descriptor.entry);

    #[cfg(not(target_arch = "riscv32"))]
    let raw = {
        let _ = &classified;
        panic!("rv32-ucall: the call executor only runs on an rv32 target");
    };

    demote::demote(descriptor.ret_type, raw)
}
