//! Cipher identifiers and their static metadata
//!
//! Every supported algorithm+keysize+mode triple is a [`CipherKind`]
//! variant; [`metadata`] maps it to the sizing facts the engine needs.
//! The table mirrors the layout of a native cipher-info registry: base
//! primitive id, block-mode category, block/IV sizes and key length.

use crate::consts::*;

/// Base primitive behind a cipher kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CipherId {
    /// AES (FIPS 197)
    Aes,
    /// Camellia (RFC 3713)
    Camellia,
    /// ChaCha20 (RFC 8439)
    ChaCha20,
}

impl CipherId {
    /// Primitive name as used in error contexts
    pub const fn name(self) -> &'static str {
        match self {
            CipherId::Aes => "AES",
            CipherId::Camellia => "CAMELLIA",
            CipherId::ChaCha20 => "CHACHA20",
        }
    }
}

/// Block-mode category of a cipher kind
///
/// The full category set of the registry format is kept even where this
/// library ships no algorithm for it (`Xts`, `Undefined`); the engine
/// rejects those at operation construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockMode {
    /// Byte-at-a-time stream cipher
    Stream,
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining
    Cbc,
    /// Cipher feedback (full-block segments)
    Cfb,
    /// Output feedback
    Ofb,
    /// Counter mode
    Ctr,
    /// Galois/counter mode (AEAD)
    Gcm,
    /// Counter with CBC-MAC (AEAD)
    Ccm,
    /// XEX-based tweaked-codebook mode
    Xts,
    /// No mode bound
    Undefined,
}

impl BlockMode {
    /// True for modes that produce and check an authentication tag
    pub const fn is_aead(self) -> bool {
        matches!(self, BlockMode::Gcm | BlockMode::Ccm)
    }

    /// True for modes where a padding scheme applies
    pub const fn uses_padding(self) -> bool {
        matches!(self, BlockMode::Cbc)
    }

    /// Mode name as used in error contexts
    pub const fn name(self) -> &'static str {
        match self {
            BlockMode::Stream => "STREAM",
            BlockMode::Ecb => "ECB",
            BlockMode::Cbc => "CBC",
            BlockMode::Cfb => "CFB",
            BlockMode::Ofb => "OFB",
            BlockMode::Ctr => "CTR",
            BlockMode::Gcm => "GCM",
            BlockMode::Ccm => "CCM",
            BlockMode::Xts => "XTS",
            BlockMode::Undefined => "NONE",
        }
    }
}

/// Padding scheme for CBC-style block encryption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaddingMode {
    /// Leave data untouched; the caller must supply whole blocks
    None,
    /// PKCS#7: n bytes of value n
    Pkcs7,
    /// ISO/IEC 7816-4: a 0x80 marker then zeros
    OneAndZeros,
    /// ANSI X9.23: zeros then a length byte
    ZerosAndLen,
    /// Zero fill, stripped as trailing zeros
    Zeros,
}

impl PaddingMode {
    /// Scheme name as used in error contexts
    pub const fn name(self) -> &'static str {
        match self {
            PaddingMode::None => "NONE",
            PaddingMode::Pkcs7 => "PKCS7",
            PaddingMode::OneAndZeros => "ONE-AND-ZEROS",
            PaddingMode::ZerosAndLen => "ZEROS-AND-LEN",
            PaddingMode::Zeros => "ZEROS",
        }
    }
}

/// Static registry facts for one cipher kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherMeta {
    /// Base primitive
    pub id: CipherId,
    /// Block-mode category
    pub mode: BlockMode,
    /// Block size in bytes (1 for stream ciphers)
    pub block_size: usize,
    /// Required IV/nonce size in bytes (0 where no IV is consumed)
    pub iv_size: usize,
    /// Required key length in bits
    pub key_bits: usize,
}

impl CipherMeta {
    /// Required key length in bytes
    pub const fn key_size(&self) -> usize {
        self.key_bits / 8
    }
}

/// Algorithm+keysize+mode identifiers known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CipherKind {
    Aes128Ecb,
    Aes192Ecb,
    Aes256Ecb,
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
    Aes128Cfb128,
    Aes192Cfb128,
    Aes256Cfb128,
    Aes128Ofb,
    Aes192Ofb,
    Aes256Ofb,
    Aes128Ctr,
    Aes192Ctr,
    Aes256Ctr,
    Aes128Gcm,
    Aes192Gcm,
    Aes256Gcm,
    Aes128Ccm,
    Aes192Ccm,
    Aes256Ccm,
    Camellia128Ecb,
    Camellia192Ecb,
    Camellia256Ecb,
    Camellia128Cbc,
    Camellia192Cbc,
    Camellia256Cbc,
    Camellia128Cfb128,
    Camellia192Cfb128,
    Camellia256Cfb128,
    Camellia128Ctr,
    Camellia192Ctr,
    Camellia256Ctr,
    Camellia128Gcm,
    Camellia192Gcm,
    Camellia256Gcm,
    ChaCha20,
    ChaCha20Poly1305,
}

impl CipherKind {
    /// Every kind in the registry, in declaration order
    pub const ALL: [CipherKind; 38] = [
        CipherKind::Aes128Ecb,
        CipherKind::Aes192Ecb,
        CipherKind::Aes256Ecb,
        CipherKind::Aes128Cbc,
        CipherKind::Aes192Cbc,
        CipherKind::Aes256Cbc,
        CipherKind::Aes128Cfb128,
        CipherKind::Aes192Cfb128,
        CipherKind::Aes256Cfb128,
        CipherKind::Aes128Ofb,
        CipherKind::Aes192Ofb,
        CipherKind::Aes256Ofb,
        CipherKind::Aes128Ctr,
        CipherKind::Aes192Ctr,
        CipherKind::Aes256Ctr,
        CipherKind::Aes128Gcm,
        CipherKind::Aes192Gcm,
        CipherKind::Aes256Gcm,
        CipherKind::Aes128Ccm,
        CipherKind::Aes192Ccm,
        CipherKind::Aes256Ccm,
        CipherKind::Camellia128Ecb,
        CipherKind::Camellia192Ecb,
        CipherKind::Camellia256Ecb,
        CipherKind::Camellia128Cbc,
        CipherKind::Camellia192Cbc,
        CipherKind::Camellia256Cbc,
        CipherKind::Camellia128Cfb128,
        CipherKind::Camellia192Cfb128,
        CipherKind::Camellia256Cfb128,
        CipherKind::Camellia128Ctr,
        CipherKind::Camellia192Ctr,
        CipherKind::Camellia256Ctr,
        CipherKind::Camellia128Gcm,
        CipherKind::Camellia192Gcm,
        CipherKind::Camellia256Gcm,
        CipherKind::ChaCha20,
        CipherKind::ChaCha20Poly1305,
    ];

    /// Canonical name, matching the registry's native spelling
    pub const fn name(self) -> &'static str {
        match self {
            CipherKind::Aes128Ecb => "AES-128-ECB",
            CipherKind::Aes192Ecb => "AES-192-ECB",
            CipherKind::Aes256Ecb => "AES-256-ECB",
            CipherKind::Aes128Cbc => "AES-128-CBC",
            CipherKind::Aes192Cbc => "AES-192-CBC",
            CipherKind::Aes256Cbc => "AES-256-CBC",
            CipherKind::Aes128Cfb128 => "AES-128-CFB128",
            CipherKind::Aes192Cfb128 => "AES-192-CFB128",
            CipherKind::Aes256Cfb128 => "AES-256-CFB128",
            CipherKind::Aes128Ofb => "AES-128-OFB",
            CipherKind::Aes192Ofb => "AES-192-OFB",
            CipherKind::Aes256Ofb => "AES-256-OFB",
            CipherKind::Aes128Ctr => "AES-128-CTR",
            CipherKind::Aes192Ctr => "AES-192-CTR",
            CipherKind::Aes256Ctr => "AES-256-CTR",
            CipherKind::Aes128Gcm => "AES-128-GCM",
            CipherKind::Aes192Gcm => "AES-192-GCM",
            CipherKind::Aes256Gcm => "AES-256-GCM",
            CipherKind::Aes128Ccm => "AES-128-CCM",
            CipherKind::Aes192Ccm => "AES-192-CCM",
            CipherKind::Aes256Ccm => "AES-256-CCM",
            CipherKind::Camellia128Ecb => "CAMELLIA-128-ECB",
            CipherKind::Camellia192Ecb => "CAMELLIA-192-ECB",
            CipherKind::Camellia256Ecb => "CAMELLIA-256-ECB",
            CipherKind::Camellia128Cbc => "CAMELLIA-128-CBC",
            CipherKind::Camellia192Cbc => "CAMELLIA-192-CBC",
            CipherKind::Camellia256Cbc => "CAMELLIA-256-CBC",
            CipherKind::Camellia128Cfb128 => "CAMELLIA-128-CFB128",
            CipherKind::Camellia192Cfb128 => "CAMELLIA-192-CFB128",
            CipherKind::Camellia256Cfb128 => "CAMELLIA-256-CFB128",
            CipherKind::Camellia128Ctr => "CAMELLIA-128-CTR",
            CipherKind::Camellia192Ctr => "CAMELLIA-192-CTR",
            CipherKind::Camellia256Ctr => "CAMELLIA-256-CTR",
            CipherKind::Camellia128Gcm => "CAMELLIA-128-GCM",
            CipherKind::Camellia192Gcm => "CAMELLIA-192-GCM",
            CipherKind::Camellia256Gcm => "CAMELLIA-256-GCM",
            CipherKind::ChaCha20 => "CHACHA20",
            CipherKind::ChaCha20Poly1305 => "CHACHA20-POLY1305",
        }
    }
}

const fn aes(key_bits: usize, mode: BlockMode, iv_size: usize) -> CipherMeta {
    CipherMeta {
        id: CipherId::Aes,
        mode,
        block_size: AES_BLOCK_SIZE,
        iv_size,
        key_bits,
    }
}

const fn camellia(key_bits: usize, mode: BlockMode, iv_size: usize) -> CipherMeta {
    CipherMeta {
        id: CipherId::Camellia,
        mode,
        block_size: CAMELLIA_BLOCK_SIZE,
        iv_size,
        key_bits,
    }
}

/// Look up the static metadata for a cipher kind
///
/// Total over the registry: every [`CipherKind`] has an entry. Build
/// availability (e.g. an AEAD-less build) is layered on top by the
/// engine, not encoded here.
pub const fn metadata(kind: CipherKind) -> CipherMeta {
    match kind {
        CipherKind::Aes128Ecb => aes(128, BlockMode::Ecb, 0),
        CipherKind::Aes192Ecb => aes(192, BlockMode::Ecb, 0),
        CipherKind::Aes256Ecb => aes(256, BlockMode::Ecb, 0),
        CipherKind::Aes128Cbc => aes(128, BlockMode::Cbc, AES_BLOCK_SIZE),
        CipherKind::Aes192Cbc => aes(192, BlockMode::Cbc, AES_BLOCK_SIZE),
        CipherKind::Aes256Cbc => aes(256, BlockMode::Cbc, AES_BLOCK_SIZE),
        CipherKind::Aes128Cfb128 => aes(128, BlockMode::Cfb, AES_BLOCK_SIZE),
        CipherKind::Aes192Cfb128 => aes(192, BlockMode::Cfb, AES_BLOCK_SIZE),
        CipherKind::Aes256Cfb128 => aes(256, BlockMode::Cfb, AES_BLOCK_SIZE),
        CipherKind::Aes128Ofb => aes(128, BlockMode::Ofb, AES_BLOCK_SIZE),
        CipherKind::Aes192Ofb => aes(192, BlockMode::Ofb, AES_BLOCK_SIZE),
        CipherKind::Aes256Ofb => aes(256, BlockMode::Ofb, AES_BLOCK_SIZE),
        CipherKind::Aes128Ctr => aes(128, BlockMode::Ctr, AES_BLOCK_SIZE),
        CipherKind::Aes192Ctr => aes(192, BlockMode::Ctr, AES_BLOCK_SIZE),
        CipherKind::Aes256Ctr => aes(256, BlockMode::Ctr, AES_BLOCK_SIZE),
        CipherKind::Aes128Gcm => aes(128, BlockMode::Gcm, GCM_IV_SIZE),
        CipherKind::Aes192Gcm => aes(192, BlockMode::Gcm, GCM_IV_SIZE),
        CipherKind::Aes256Gcm => aes(256, BlockMode::Gcm, GCM_IV_SIZE),
        CipherKind::Aes128Ccm => aes(128, BlockMode::Ccm, CCM_IV_SIZE),
        CipherKind::Aes192Ccm => aes(192, BlockMode::Ccm, CCM_IV_SIZE),
        CipherKind::Aes256Ccm => aes(256, BlockMode::Ccm, CCM_IV_SIZE),
        CipherKind::Camellia128Ecb => camellia(128, BlockMode::Ecb, 0),
        CipherKind::Camellia192Ecb => camellia(192, BlockMode::Ecb, 0),
        CipherKind::Camellia256Ecb => camellia(256, BlockMode::Ecb, 0),
        CipherKind::Camellia128Cbc => camellia(128, BlockMode::Cbc, CAMELLIA_BLOCK_SIZE),
        CipherKind::Camellia192Cbc => camellia(192, BlockMode::Cbc, CAMELLIA_BLOCK_SIZE),
        CipherKind::Camellia256Cbc => camellia(256, BlockMode::Cbc, CAMELLIA_BLOCK_SIZE),
        CipherKind::Camellia128Cfb128 => camellia(128, BlockMode::Cfb, CAMELLIA_BLOCK_SIZE),
        CipherKind::Camellia192Cfb128 => camellia(192, BlockMode::Cfb, CAMELLIA_BLOCK_SIZE),
        CipherKind::Camellia256Cfb128 => camellia(256, BlockMode::Cfb, CAMELLIA_BLOCK_SIZE),
        CipherKind::Camellia128Ctr => camellia(128, BlockMode::Ctr, CAMELLIA_BLOCK_SIZE),
        CipherKind::Camellia192Ctr => camellia(192, BlockMode::Ctr, CAMELLIA_BLOCK_SIZE),
        CipherKind::Camellia256Ctr => camellia(256, BlockMode::Ctr, CAMELLIA_BLOCK_SIZE),
        CipherKind::Camellia128Gcm => camellia(128, BlockMode::Gcm, GCM_IV_SIZE),
        CipherKind::Camellia192Gcm => camellia(192, BlockMode::Gcm, GCM_IV_SIZE),
        CipherKind::Camellia256Gcm => camellia(256, BlockMode::Gcm, GCM_IV_SIZE),
        CipherKind::ChaCha20 => CipherMeta {
            id: CipherId::ChaCha20,
            mode: BlockMode::Stream,
            block_size: STREAM_BLOCK_SIZE,
            iv_size: CHACHA20_NONCE_SIZE,
            key_bits: CHACHA20_KEY_BITS,
        },
        CipherKind::ChaCha20Poly1305 => CipherMeta {
            id: CipherId::ChaCha20,
            mode: BlockMode::Stream,
            block_size: STREAM_BLOCK_SIZE,
            iv_size: CHACHA20_NONCE_SIZE,
            key_bits: CHACHA20_KEY_BITS,
        },
    }
}
