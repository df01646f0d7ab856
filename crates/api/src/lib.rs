//! Shared error surface for the ciphra workspace
//!
//! This crate defines the single error type used by every ciphra crate,
//! together with the small validation helpers the engine calls at its
//! argument boundaries. It carries no cryptography of its own.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;

pub use error::{validate, Error, Result};
