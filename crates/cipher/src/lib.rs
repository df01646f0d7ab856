//! Symmetric-cipher execution engine for the ciphra library
//!
//! One uniform API over every registered cipher kind: bind a
//! [`Cipher`] context to a kind, configure key/IV/padding, then either
//! stream with `start`/`update`/`finish` or run a whole buffer through
//! the one-shot [`encrypt`]/[`decrypt`] engine. Authenticated modes go
//! through [`encrypt_aead`]/[`decrypt_aead`], with streaming GCM
//! available on the context itself.
//!
//! The raw primitives — AES, Camellia, ChaCha20, GHASH, CCM,
//! ChaCha20-Poly1305 — come from the RustCrypto crates; this crate owns
//! the chunking, chaining, padding and lifecycle logic around them.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod aead;
pub mod context;
pub mod oneshot;
pub mod registry;

#[cfg(feature = "aead")]
mod gcm;
mod modes;
mod padding;
mod primitive;

/// Operation direction of a keyed context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Produce ciphertext from plaintext
    Encrypt,
    /// Recover plaintext from ciphertext
    Decrypt,
}

// Re-export main types for convenience
pub use aead::{decrypt_aead, encrypt_aead, supports_aead};
pub use context::Cipher;
pub use oneshot::{decrypt, encrypt};

pub use ciphra_api::{Error, Result};
pub use ciphra_params::{BlockMode, CipherId, CipherKind, CipherMeta, PaddingMode};
