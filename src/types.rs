//! Scalar type tags and the tagged argument/return cell they gate.
//!
//! Mirrors `arg_type_t` / `ret_type_t` / `arg_value_t` from the C
//! `universal_caller.h` this crate's calling convention is modeled on, but
//! keeps the tag attached to each value instead of living in a sibling
//! array, so a [`CallDescriptor`] can't desynchronize tags from values.

/// Closed set of scalar argument types the ilp32 family of ABIs classifies.
///
/// `Char`/`Short`/`Int`/`Long`/`Pointer` are all 32-bit payloads that the
/// classifier treats identically; they are kept distinct here only so
/// callers can build descriptors from C-shaped signatures without doing
/// their own narrowing first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ArgTag {
    Char = 0,
    Short = 1,
    Int = 2,
    Long = 3,
    LongLong = 4,
    Float = 5,
    Double = 6,
    Pointer = 7,
}

impl ArgTag {
    /// Validate a raw discriminant coming from an FFI caller.
    ///
    /// The enum itself is closed and exhaustive from Rust, but a
    /// `#[repr(C)]` descriptor built by a non-Rust caller carries the tag as
    /// a plain byte, so this is the actual boundary where "unknown argument
    /// tag" (spec §7) can occur.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(ArgTag::Char),
            1 => Some(ArgTag::Short),
            2 => Some(ArgTag::Int),
            3 => Some(ArgTag::Long),
            4 => Some(ArgTag::LongLong),
            5 => Some(ArgTag::Float),
            6 => Some(ArgTag::Double),
            7 => Some(ArgTag::Pointer),
            _ => None,
        }
    }

    pub(crate) fn is_two_word(self) -> bool {
        matches!(self, ArgTag::LongLong | ArgTag::Double)
    }
}

/// Closed set of return types, `Void` aside identical in width to [`ArgTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RetTag {
    Void = 0,
    Char = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    LongLong = 5,
    Float = 6,
    Double = 7,
    Pointer = 8,
}

impl RetTag {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(RetTag::Void),
            1 => Some(RetTag::Char),
            2 => Some(RetTag::Short),
            3 => Some(RetTag::Int),
            4 => Some(RetTag::Long),
            5 => Some(RetTag::LongLong),
            6 => Some(RetTag::Float),
            7 => Some(RetTag::Double),
            8 => Some(RetTag::Pointer),
            _ => None,
        }
    }
}

/// A tagged 64-bit-wide argument cell.
///
/// Small (32-bit) payloads are stored zero-extended in the low half; per
/// spec §9's Open Question, narrower types are never sign- or
/// zero-extended *by the classifier* before landing in a register or stack
/// slot — only the representation within this cell is widened so it fits a
/// single field.
#[derive(Debug, Clone, Copy)]
pub struct ArgValue {
    tag: ArgTag,
    bits: u64,
}

impl ArgValue {
    /// Build an argument from a raw FFI tag byte and its accompanying
    /// 64-bit value cell (the `arg_t { arg_type_t type; arg_value_t value; }`
    /// shape a non-Rust caller hands across the boundary). This is the one
    /// place an invalid tag can actually occur — every in-crate constructor
    /// below takes an already-valid [`ArgTag`] and can't fail.
    pub fn from_raw(tag: u8, bits: u64) -> Result<Self, crate::error::ClassifyError> {
        let tag = ArgTag::from_raw(tag).ok_or(crate::error::ClassifyError::UnknownArgTag)?;
        Ok(ArgValue { tag, bits })
    }

    /// Build a one-word integer-classified argument (char/short/int/long).
    pub fn int32(tag: ArgTag, value: i32) -> Self {
        debug_assert!(!tag.is_two_word() && tag != ArgTag::Float);
        ArgValue {
            tag,
            bits: value as u32 as u64,
        }
    }

    pub fn long_long(value: i64) -> Self {
        ArgValue {
            tag: ArgTag::LongLong,
            bits: value as u64,
        }
    }

    pub fn float(value: f32) -> Self {
        ArgValue {
            tag: ArgTag::Float,
            bits: value.to_bits() as u64,
        }
    }

    pub fn double(value: f64) -> Self {
        ArgValue {
            tag: ArgTag::Double,
            bits: value.to_bits(),
        }
    }

    pub fn pointer(value: *const ()) -> Self {
        ArgValue {
            tag: ArgTag::Pointer,
            bits: value as usize as u32 as u64,
        }
    }

    pub fn tag(&self) -> ArgTag {
        self.tag
    }

    /// Low 32 bits, for every 1-word-classified tag.
    pub(crate) fn low32(&self) -> u32 {
        self.bits as u32
    }

    /// Full 64 bits, for every 2-word-classified tag.
    pub(crate) fn bits64(&self) -> u64 {
        self.bits
    }
}

/// Borrowed description of one call: callee, return tag, and argument list.
///
/// Never retained past the `call()` that consumes it — see spec §3's
/// ownership note. `'a` ties the descriptor to the lifetime of its argument
/// slice.
pub struct CallDescriptor<'a> {
    pub entry: *const (),
    pub ret_type: RetTag,
    pub args: &'a [ArgValue],
}

impl<'a> CallDescriptor<'a> {
    pub fn new(entry: *const (), ret_type: RetTag, args: &'a [ArgValue]) -> Self {
        CallDescriptor {
            entry,
            ret_type,
            args,
        }
    }
}

/// Compile-time ABI identity (spec §3). Exactly one of the three features
/// below must be enabled; see the `compile_error!` gate in `lib.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiKind {
    /// ilp32 — no floating-point argument registers.
    Soft,
    /// ilp32f — 32-bit fa0-fa7.
    Single,
    /// ilp32d — 64-bit fa0-fa7, NaN-boxed when carrying a float.
    Double,
}

#[cfg(all(feature = "abi-soft", not(any(feature = "abi-single", feature = "abi-double"))))]
pub const ABI_KIND: AbiKind = AbiKind::Soft;
#[cfg(all(feature = "abi-single", not(any(feature = "abi-soft", feature = "abi-double"))))]
pub const ABI_KIND: AbiKind = AbiKind::Single;
#[cfg(all(feature = "abi-double", not(any(feature = "abi-soft", feature = "abi-single"))))]
pub const ABI_KIND: AbiKind = AbiKind::Double;

/// Tagged return value handed back to the caller of [`crate::call`].
#[derive(Debug, Clone, Copy)]
pub enum ReturnValue {
    Void,
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    Pointer(*const ()),
}
