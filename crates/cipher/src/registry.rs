//! Build-aware registry lookups
//!
//! `ciphra-params` is a total table; this module layers the build's
//! actual capabilities on top. A kind whose backing support is compiled
//! out (the AEAD family on an `aead`-less build) resolves to
//! `UnknownCipher`, so callers probe availability the same way they
//! would probe a native registry.

use ciphra_api::{Error, Result};
use ciphra_params::{BlockMode, CipherKind, CipherMeta};

/// True when this build can execute the given kind
pub fn is_supported(kind: CipherKind) -> bool {
    let meta = ciphra_params::metadata(kind);
    if meta.mode.is_aead() || kind == CipherKind::ChaCha20Poly1305 {
        cfg!(feature = "aead")
    } else {
        true
    }
}

/// Registry metadata for a kind, honoring build capabilities
pub fn metadata(kind: CipherKind) -> Result<CipherMeta> {
    if !is_supported(kind) {
        return Err(Error::UnknownCipher {
            cipher: kind.name(),
        });
    }
    Ok(ciphra_params::metadata(kind))
}

/// Block size in bytes of a cipher kind
pub fn block_size(kind: CipherKind) -> Result<usize> {
    Ok(metadata(kind)?.block_size)
}

/// Required IV size in bytes of a cipher kind
pub fn iv_size(kind: CipherKind) -> Result<usize> {
    Ok(metadata(kind)?.iv_size)
}

/// Required key length in bits of a cipher kind
pub fn key_bitlen(kind: CipherKind) -> Result<usize> {
    Ok(metadata(kind)?.key_bits)
}

/// Block-mode category of a cipher kind
pub fn block_mode(kind: CipherKind) -> Result<BlockMode> {
    Ok(metadata(kind)?.mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_match_the_table() {
        assert_eq!(block_size(CipherKind::Aes128Cbc).unwrap(), 16);
        assert_eq!(iv_size(CipherKind::Aes128Cbc).unwrap(), 16);
        assert_eq!(key_bitlen(CipherKind::Aes256Ecb).unwrap(), 256);
        assert_eq!(block_mode(CipherKind::ChaCha20).unwrap(), BlockMode::Stream);
    }

    #[test]
    fn test_aead_kinds_follow_the_build_capability() {
        let expected = cfg!(feature = "aead");
        for kind in [
            CipherKind::Aes128Gcm,
            CipherKind::Camellia256Gcm,
            CipherKind::Aes256Ccm,
            CipherKind::ChaCha20Poly1305,
        ] {
            assert_eq!(is_supported(kind), expected);
            assert_eq!(metadata(kind).is_ok(), expected);
        }
        assert!(is_supported(CipherKind::Aes128Cbc));
    }
}
