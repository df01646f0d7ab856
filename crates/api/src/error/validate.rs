//! Validation helpers for argument boundaries

use super::{Error, Result};

/// Validate a caller-facing precondition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Usage { context, details });
    }
    Ok(())
}

/// Validate a key length against the bound algorithm
#[inline(always)]
pub fn key_length(cipher: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyLength {
            cipher,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an IV/nonce length against the bound algorithm
#[inline(always)]
pub fn iv_length(cipher: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvLength {
            cipher,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a non-empty whole number of blocks
#[inline(always)]
pub fn full_blocks(block_size: usize, actual: usize) -> Result<()> {
    if actual == 0 || actual % block_size != 0 {
        return Err(Error::FullBlockExpected { block_size, actual });
    }
    Ok(())
}
