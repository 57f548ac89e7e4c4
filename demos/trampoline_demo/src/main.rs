//! Reproduces the scenario table from the original `universal_caller`
//! test harness (spec §8) as a human-readable smoke test.
//!
//! On an `rv32` target this actually invokes the callees below through
//! [`rv32_ucall::call`]; on any other host it only prints how the
//! classifier laid each call out, since the executor is architecture-gated
//! (see `rv32-ucall`'s `execute` module) and has nothing to jump into here.

use anyhow::Result;
use rv32_ucall::{ArgTag, ArgValue, CallDescriptor, RetTag};

extern "C" fn no_args() -> i32 {
    42
}

extern "C" fn helper_add(a: i32, b: i32) -> i32 {
    a + b
}

fn describe(name: &str, descriptor: &CallDescriptor<'_>) -> Result<()> {
    let classified = rv32_ucall::classify::classify(descriptor)?;
    log::info!(
        "{name}: used_int={} used_fp={} used_stack_words={} stack_bytes={}",
        classified.used_int,
        classified.used_fp,
        classified.used_stack_words,
        classified.stack_byte_size,
    );

    #[cfg(target_arch = "riscv32")]
    {
        let result = unsafe { rv32_ucall::call(descriptor) };
        log::info!("{name}: returned {result:?}");
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    describe(
        "no_args",
        &CallDescriptor::new(no_args as *const (), RetTag::Int, &[]),
    )?;

    let sum8_args: Vec<ArgValue> = (1..=8).map(|i| ArgValue::int32(ArgTag::Int, i)).collect();
    describe(
        "sum8",
        &CallDescriptor::new(helper_add as *const (), RetTag::Int, &sum8_args[..2]),
    )?;

    let sum10_args: Vec<ArgValue> = (1..=10).map(|i| ArgValue::int32(ArgTag::Int, i)).collect();
    describe(
        "sum10",
        &CallDescriptor::new(helper_add as *const (), RetTag::Int, &sum10_args),
    )?;

    let mixed_args = [
        ArgValue::int32(ArgTag::Char, -1),
        ArgValue::int32(ArgTag::Short, -2),
        ArgValue::int32(ArgTag::Int, 30_000),
        ArgValue::long_long(400_000),
        ArgValue::float(-5.5),
        ArgValue::double(6.6),
        ArgValue::pointer(7 as *const ()),
    ];
    describe(
        "mixed",
        &CallDescriptor::new(helper_add as *const (), RetTag::Double, &mixed_args),
    )?;

    Ok(())
}
