//! ABI classifier & marshaller (spec §4.1).
//!
//! Walks a [`CallDescriptor`]'s argument list in order and assigns each
//! scalar to an integer argument register, a floating argument register
//! (when the ABI provides one and it is free), or a stack slot. Pure
//! function, no observable side effects, per invariant 1 of spec §8.

use crate::error::ClassifyError;
use crate::types::{AbiKind, ArgTag, CallDescriptor, ABI_KIND};

/// Bound on the outgoing stack area, in 32-bit words (spec §3).
pub const MAX_STACK_WORDS: usize = 64;

/// Result of classifying a call: register files plus a stack buffer, all
/// stack-allocated and owned by this value alone (spec §5 — no shared
/// mutable scratch, so concurrent/reentrant classification never aliases).
#[derive(Debug, Clone, Copy)]
pub struct Classified {
    pub int_regs: [u32; 8],
    pub used_int: usize,
    pub fp_regs: [u64; 8],
    pub used_fp: usize,
    pub stack_words: [u32; MAX_STACK_WORDS],
    pub used_stack_words: usize,
    pub stack_byte_size: u32,
}

impl Classified {
    fn new() -> Self {
        Classified {
            int_regs: [0; 8],
            used_int: 0,
            fp_regs: [0; 8],
            used_fp: 0,
            stack_words: [0; MAX_STACK_WORDS],
            used_stack_words: 0,
            stack_byte_size: 0,
        }
    }

    fn push_stack_word(&mut self, word: u32) -> Result<(), ClassifyError> {
        if self.used_stack_words >= MAX_STACK_WORDS {
            return Err(ClassifyError::StackBufferOverflow {
                used: self.used_stack_words + 1,
                max: MAX_STACK_WORDS,
            });
        }
        self.stack_words[self.used_stack_words] = word;
        self.used_stack_words += 1;
        Ok(())
    }

    /// 1-word integer rule (spec §4.1): a0..a7 while free, then stack.
    fn place_one_word_integer(&mut self, word: u32) -> Result<(), ClassifyError> {
        if self.used_int < 8 {
            self.int_regs[self.used_int] = word;
            self.used_int += 1;
            Ok(())
        } else {
            self.push_stack_word(word)
        }
    }

    /// 2-word integer rule (spec §4.1), including the a7/stack split and
    /// the 8-byte stack-alignment padding once registers are exhausted.
    fn place_two_word_integer(&mut self, bits: u64) -> Result<(), ClassifyError> {
        let low = bits as u32;
        let high = (bits >> 32) as u32;
        if self.used_int <= 6 {
            self.int_regs[self.used_int] = low;
            self.int_regs[self.used_int + 1] = high;
            self.used_int += 2;
        } else if self.used_int == 7 {
            // Only a7 remains: low word goes to a7, high word spills with
            // no alignment padding — this split is ABI-mandated, not a bug.
            self.int_regs[7] = low;
            self.used_int = 8;
            self.push_stack_word(high)?;
        } else {
            if self.used_stack_words % 2 != 0 {
                self.push_stack_word(0)?;
            }
            self.push_stack_word(low)?;
            self.push_stack_word(high)?;
        }
        Ok(())
    }

    fn place_float_reg(&mut self, bits32: u32, nan_box: bool) {
        debug_assert!(self.used_fp < 8);
        let bits = if nan_box {
            0xFFFF_FFFF_0000_0000u64 | bits32 as u64
        } else {
            bits32 as u64
        };
        self.fp_regs[self.used_fp] = bits;
        self.used_fp += 1;
    }

    fn place_double_reg(&mut self, bits64: u64) {
        debug_assert!(self.used_fp < 8);
        self.fp_regs[self.used_fp] = bits64;
        self.used_fp += 1;
    }
}

/// Classify every argument of `descriptor` under the build's [`AbiKind`].
pub fn classify(descriptor: &CallDescriptor<'_>) -> Result<Classified, ClassifyError> {
    let mut out = Classified::new();

    for arg in descriptor.args {
        match arg.tag() {
            ArgTag::Char | ArgTag::Short | ArgTag::Int | ArgTag::Long | ArgTag::Pointer => {
                out.place_one_word_integer(arg.low32())?;
            }
            ArgTag::LongLong => {
                out.place_two_word_integer(arg.bits64())?;
            }
            ArgTag::Float => match ABI_KIND {
                AbiKind::Soft => out.place_one_word_integer(arg.low32())?,
                AbiKind::Single => {
                    if out.used_fp < 8 {
                        out.place_float_reg(arg.low32(), false);
                    } else {
                        out.place_one_word_integer(arg.low32())?;
                    }
                }
                AbiKind::Double => {
                    if out.used_fp < 8 {
                        out.place_float_reg(arg.low32(), true);
                    } else {
                        out.place_one_word_integer(arg.low32())?;
                    }
                }
            },
            ArgTag::Double => match ABI_KIND {
                AbiKind::Soft | AbiKind::Single => out.place_two_word_integer(arg.bits64())?,
                AbiKind::Double => {
                    if out.used_fp < 8 {
                        out.place_double_reg(arg.bits64());
                    } else {
                        out.place_two_word_integer(arg.bits64())?;
                    }
                }
            },
        }
    }

    if out.used_int > 8 {
        return Err(ClassifyError::RegisterAccountingBreach(
            "integer register index exceeded 8",
        ));
    }

    out.stack_byte_size = round_up_16(out.used_stack_words as u32 * 4);
    Ok(out)
}

fn round_up_16(bytes: u32) -> u32 {
    (bytes + 15) & !15
}
