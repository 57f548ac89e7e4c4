//! Raw/FFI-shaped entry point (spec §6's "programmatic entry point," for a
//! caller on the other side of a language boundary).
//!
//! [`crate::call`] takes an already-built [`CallDescriptor`] whose argument
//! tags are a closed Rust enum and therefore can't be invalid. A non-Rust
//! caller building that descriptor from raw bytes — the `arg_t { arg_type_t
//! type; arg_value_t value; }` shape `universal_caller.h` was modeled on —
//! has no such guarantee, so [`call_raw`] is the actual boundary where
//! spec §7's "unknown argument tag" fatal condition is reachable: each
//! [`RawArg`] is validated through [`ArgValue::from_raw`] before the
//! resulting descriptor is handed to [`classify::classify`], so a bad tag
//! surfaces as [`ClassifyError::UnknownArgTag`] instead of corrupting the
//! call.

use crate::classify;
use crate::demote;
use crate::error::ClassifyError;
use crate::execute;
use crate::types::{ArgValue, CallDescriptor, RetTag, ReturnValue};

/// One argument as it arrives across an FFI boundary: an untyped tag byte
/// plus a 64-bit value cell, not yet validated against the closed
/// [`crate::types::ArgTag`] set.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct RawArg {
    pub tag: u8,
    pub bits: u64,
}

/// Validate and marshal `raw_args`, invoke the callee at `entry`, and
/// demote the result — the raw-tag counterpart of [`crate::call`].
///
/// Unlike `crate::call`, a malformed tag (either `ret_type` or any element
/// of `raw_args`) is a reported [`ClassifyError`] rather than a Rust
/// compile-time impossibility, since both travel in as plain bytes here.
///
/// # Safety
/// Same contract as [`crate::call`]: `entry` must be the address of a
/// function whose true signature matches `ret_type` and `raw_args` exactly.
pub unsafe fn call_raw(
    entry: *const (),
    ret_type: u8,
    raw_args: &[RawArg],
) -> Result<ReturnValue, ClassifyError> {
    let ret_type = RetTag::from_raw(ret_type).ok_or(ClassifyError::UnknownArgTag)?;

    let mut args = Vec::with_capacity(raw_args.len());
    for raw in raw_args {
        args.push(ArgValue::from_raw(raw.tag, raw.bits)?);
    }

    let descriptor = CallDescriptor::new(entry, ret_type, &args);
    let classified = classify::classify(&descriptor)?;
    log::trace!(
        "rv32-ucall: call_raw entry={:?} used_int={} used_fp={} used_stack_words={}",
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

    Ok(demote::demote(descriptor.ret_type, raw))
}
