//! # ciphra
//!
//! A symmetric-cipher execution engine with one uniform API over block,
//! stream and AEAD modes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ciphra = "0.4"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `aead` (default): the authenticated-encryption engine (GCM streams,
//!   one-shot GCM/CCM and ChaCha20-Poly1305)
//! - `serde`: serialization for the registry identifier types
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the member
//! crates:
//!
//! - `ciphra-api`: the shared error surface
//! - `ciphra-params`: the static algorithm registry
//! - `ciphra-cipher`: the execution engine itself
//!
//! ## Example
//!
//! ```
//! use ciphra::prelude::*;
//!
//! fn roundtrip() -> Result<()> {
//!     let key = [0u8; 32];
//!     let iv = [0u8; 16];
//!     let ciphertext = cipher::encrypt(
//!         CipherKind::Aes256Cbc,
//!         PaddingMode::Pkcs7,
//!         &iv,
//!         &key,
//!         b"hello world",
//!     )?;
//!     let plaintext = cipher::decrypt(
//!         CipherKind::Aes256Cbc,
//!         PaddingMode::Pkcs7,
//!         &iv,
//!         &key,
//!         &ciphertext,
//!     )?;
//!     assert_eq!(plaintext, b"hello world");
//!     Ok(())
//! }
//! # roundtrip().unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use ciphra_api as api;
pub use ciphra_cipher as cipher;
pub use ciphra_params as params;

// Workspace dependencies users commonly need alongside the engine
pub use subtle;
pub use zeroize;

/// Common imports for ciphra users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the engine surface
    pub use crate::cipher::{self, supports_aead, Cipher, Direction};

    // Re-export registry types
    pub use crate::params::{BlockMode, CipherId, CipherKind, CipherMeta, PaddingMode};
}
