//! Static algorithm registry for ciphra
//!
//! This crate is pure data: the closed set of cipher identifiers the
//! engine knows about, and for each one the block size, IV size, key
//! length and block-mode category that drive every sizing decision in
//! the execution engine. It performs no cryptography and is always
//! `no_std` compatible.

#![no_std]
#![forbid(unsafe_code)]

pub mod cipher;
pub mod consts;

pub use cipher::{metadata, BlockMode, CipherId, CipherKind, CipherMeta, PaddingMode};
