//! Return demoter (spec §4.3): raw return-register state to a tagged value.

use crate::execute::RawReturn;
use crate::types::{AbiKind, RetTag, ReturnValue, ABI_KIND};

/// Map the raw registers captured right after the callee returns into a
/// [`ReturnValue`] tagged by `ret_type`. Never fails — a descriptor whose
/// tag disagrees with the callee's true signature is undefined behavior
/// the caller opted into, not something demotion can detect (spec §4.3,
/// §7).
pub fn demote(ret_type: RetTag, raw: RawReturn) -> ReturnValue {
    match ret_type {
        RetTag::Void => ReturnValue::Void,
        RetTag::Char | RetTag::Short | RetTag::Int | RetTag::Long => {
            ReturnValue::Int32(raw.int_lo as i32)
        }
        RetTag::Pointer => ReturnValue::Pointer(raw.int_lo as usize as *const ()),
        RetTag::LongLong => {
            let bits = ((raw.int_hi as u64) << 32) | raw.int_lo as u64;
            ReturnValue::Int64(bits as i64)
        }
        RetTag::Float => match ABI_KIND {
            AbiKind::Soft => ReturnValue::Float(f32::from_bits(raw.int_lo)),
            AbiKind::Single => ReturnValue::Float(f32::from_bits(raw.fp_bits as u32)),
            AbiKind::Double => ReturnValue::Float(f32::from_bits(raw.fp_bits as u32)),
        },
        RetTag::Double => match ABI_KIND {
            AbiKind::Soft | AbiKind::Single => {
                let bits = ((raw.int_hi as u64) << 32) | raw.int_lo as u64;
                ReturnValue::Double(f64::from_bits(bits))
            }
            AbiKind::Double => ReturnValue::Double(f64::from_bits(raw.fp_bits)),
        },
    }
}
