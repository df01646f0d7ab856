//! Error handling for cipher-engine operations
//!
//! Every failure in ciphra is either a contract violation by the caller, a
//! mismatch against the algorithm registry, or a fault reported by one of
//! the external primitive crates. All of them surface through this one
//! enum. An AEAD tag mismatch is deliberately *not* represented here: it
//! is an expected outcome of decrypting tampered data and is returned as a
//! value (`Ok(false)`) by the operations that can produce it.

use core::fmt;

/// The error type shared by all ciphra crates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested algorithm has no entry in this build's registry
    UnknownCipher {
        /// Name of the requested cipher
        cipher: &'static str,
    },

    /// Caller violated a documented precondition
    Usage {
        /// Operation that was misused
        context: &'static str,
        /// What the precondition is
        details: &'static str,
    },

    /// Key byte length does not match the bound algorithm
    InvalidKeyLength {
        /// Cipher whose key was rejected
        cipher: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// IV/nonce byte length does not match the bound algorithm
    InvalidIvLength {
        /// Cipher whose IV was rejected
        cipher: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// A block mode without padding received non-block-aligned data
    FullBlockExpected {
        /// Block size of the bound algorithm
        block_size: usize,
        /// Length that failed the alignment check
        actual: usize,
    },

    /// Decrypted trailing bytes are inconsistent with the padding scheme
    InvalidPadding {
        /// Padding scheme that rejected the block
        mode: &'static str,
    },

    /// Operation requires AEAD support that this build lacks
    AeadUnsupported {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Failure reported by an external primitive crate, relayed verbatim
    Primitive {
        /// Operation that invoked the primitive
        context: &'static str,
        /// The primitive's own description of the failure
        details: &'static str,
    },
}

/// Result type for cipher-engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCipher { cipher } => {
                write!(f, "Unknown cipher: {}", cipher)
            }
            Error::Usage { context, details } => {
                write!(f, "Usage error in {}: {}", context, details)
            }
            Error::InvalidKeyLength { cipher, expected, actual } => {
                write!(
                    f,
                    "Invalid key length for {}: expected {} bytes, got {}",
                    cipher, expected, actual
                )
            }
            Error::InvalidIvLength { cipher, expected, actual } => {
                write!(
                    f,
                    "Invalid IV length for {}: expected {} bytes, got {}",
                    cipher, expected, actual
                )
            }
            Error::FullBlockExpected { block_size, actual } => {
                write!(
                    f,
                    "Full blocks expected: {} bytes is not a multiple of the {}-byte block size",
                    actual, block_size
                )
            }
            Error::InvalidPadding { mode } => {
                write!(f, "Invalid {} padding", mode)
            }
            Error::AeadUnsupported { operation } => {
                write!(f, "{} requires AEAD support, which this build lacks", operation)
            }
            Error::Primitive { context, details } => {
                write!(f, "Primitive failure in {}: {}", context, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub mod validate;
