//! One-shot authenticated encryption
//!
//! `encrypt_aead` returns the tag next to the ciphertext; `decrypt_aead`
//! reports a failed tag check as `Ok((false, bytes))` — the expected
//! outcome for tampered input — and reserves errors for misuse or
//! primitive faults. GCM runs on the in-crate stream; CCM and
//! ChaCha20-Poly1305 go through their RustCrypto AEAD implementations
//! and are one-shot only.
//!
//! Whether any of this is available depends on how the build was
//! configured; [`supports_aead`] answers that at runtime.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use ciphra_api::Result;
use ciphra_params::CipherKind;

/// True when this build carries the AEAD engine
pub fn supports_aead() -> bool {
    cfg!(feature = "aead")
}

/// Authenticated encryption of a whole buffer
///
/// Returns `(tag, ciphertext)` with a full 16-byte tag.
#[cfg(feature = "aead")]
pub fn encrypt_aead(
    kind: CipherKind,
    iv: &[u8],
    key: &[u8],
    ad: &[u8],
    input: &[u8],
) -> Result<(Vec<u8>, Vec<u8>)> {
    imp::encrypt(kind, iv, key, ad, input)
}

/// Authenticated decryption of a whole buffer
///
/// Returns `(authenticated, plaintext)`. When `authenticated` is false
/// the bytes are untrusted and must be discarded by ordinary callers.
#[cfg(feature = "aead")]
pub fn decrypt_aead(
    kind: CipherKind,
    iv: &[u8],
    key: &[u8],
    ad: &[u8],
    tag: &[u8],
    input: &[u8],
) -> Result<(bool, Vec<u8>)> {
    imp::decrypt(kind, iv, key, ad, tag, input)
}

#[cfg(not(feature = "aead"))]
pub fn encrypt_aead(
    _kind: CipherKind,
    _iv: &[u8],
    _key: &[u8],
    _ad: &[u8],
    _input: &[u8],
) -> Result<(Vec<u8>, Vec<u8>)> {
    Err(ciphra_api::Error::AeadUnsupported {
        operation: "encrypt_aead",
    })
}

#[cfg(not(feature = "aead"))]
pub fn decrypt_aead(
    _kind: CipherKind,
    _iv: &[u8],
    _key: &[u8],
    _ad: &[u8],
    _tag: &[u8],
    _input: &[u8],
) -> Result<(bool, Vec<u8>)> {
    Err(ciphra_api::Error::AeadUnsupported {
        operation: "decrypt_aead",
    })
}

#[cfg(feature = "aead")]
mod imp {
    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;

    use ccm::aead::consts::{U12, U16};
    use ccm::aead::AeadInPlace;
    use ccm::Ccm;
    use chacha20poly1305::ChaCha20Poly1305;
    use cipher::generic_array::GenericArray;
    use cipher::KeyInit;

    use crate::gcm;
    use crate::primitive::BlockPrimitive;
    use crate::registry;
    use ciphra_api::{validate, Error, Result};
    use ciphra_params::consts::AEAD_TAG_SIZE;
    use ciphra_params::{BlockMode, CipherKind};

    type Aes128Ccm = Ccm<aes::Aes128, U16, U12>;
    type Aes192Ccm = Ccm<aes::Aes192, U16, U12>;
    type Aes256Ccm = Ccm<aes::Aes256, U16, U12>;

    pub(super) fn encrypt(
        kind: CipherKind,
        iv: &[u8],
        key: &[u8],
        ad: &[u8],
        input: &[u8],
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        let meta = registry::metadata(kind)?;
        match meta.mode {
            BlockMode::Gcm => {
                let prim = BlockPrimitive::new(kind.name(), &meta, key)?;
                gcm::seal(prim, iv, ad, input)
            }
            BlockMode::Ccm => {
                validate::iv_length(kind.name(), iv.len(), meta.iv_size)?;
                match meta.key_bits {
                    128 => seal_with::<Aes128Ccm>(kind, key, iv, ad, input),
                    192 => seal_with::<Aes192Ccm>(kind, key, iv, ad, input),
                    _ => seal_with::<Aes256Ccm>(kind, key, iv, ad, input),
                }
            }
            _ if kind == CipherKind::ChaCha20Poly1305 => {
                validate::iv_length(kind.name(), iv.len(), meta.iv_size)?;
                seal_with::<ChaCha20Poly1305>(kind, key, iv, ad, input)
            }
            _ => Err(Error::Usage {
                context: "encrypt_aead",
                details: "cipher kind is not authenticated",
            }),
        }
    }

    pub(super) fn decrypt(
        kind: CipherKind,
        iv: &[u8],
        key: &[u8],
        ad: &[u8],
        tag: &[u8],
        input: &[u8],
    ) -> Result<(bool, Vec<u8>)> {
        let meta = registry::metadata(kind)?;
        match meta.mode {
            BlockMode::Gcm => {
                let prim = BlockPrimitive::new(kind.name(), &meta, key)?;
                gcm::open(prim, iv, ad, tag, input)
            }
            BlockMode::Ccm => {
                validate::iv_length(kind.name(), iv.len(), meta.iv_size)?;
                validate::parameter(
                    tag.len() == AEAD_TAG_SIZE,
                    "decrypt_aead",
                    "CCM tags are 16 bytes",
                )?;
                match meta.key_bits {
                    128 => open_with::<Aes128Ccm>(kind, key, iv, ad, tag, input),
                    192 => open_with::<Aes192Ccm>(kind, key, iv, ad, tag, input),
                    _ => open_with::<Aes256Ccm>(kind, key, iv, ad, tag, input),
                }
            }
            _ if kind == CipherKind::ChaCha20Poly1305 => {
                validate::iv_length(kind.name(), iv.len(), meta.iv_size)?;
                validate::parameter(
                    tag.len() == AEAD_TAG_SIZE,
                    "decrypt_aead",
                    "CHACHA20-POLY1305 tags are 16 bytes",
                )?;
                open_with::<ChaCha20Poly1305>(kind, key, iv, ad, tag, input)
            }
            _ => Err(Error::Usage {
                context: "decrypt_aead",
                details: "cipher kind is not authenticated",
            }),
        }
    }

    fn seal_with<A>(
        kind: CipherKind,
        key: &[u8],
        iv: &[u8],
        ad: &[u8],
        input: &[u8],
    ) -> Result<(Vec<u8>, Vec<u8>)>
    where
        A: AeadInPlace + KeyInit,
    {
        let cipher = keyed::<A>(kind, key)?;
        let mut buffer = input.to_vec();
        let tag = cipher
            .encrypt_in_place_detached(GenericArray::from_slice(iv), ad, &mut buffer)
            .map_err(|_| Error::Primitive {
                context: kind.name(),
                details: "authenticated encryption failed",
            })?;
        Ok((tag.as_slice().to_vec(), buffer))
    }

    fn open_with<A>(
        kind: CipherKind,
        key: &[u8],
        iv: &[u8],
        ad: &[u8],
        tag: &[u8],
        input: &[u8],
    ) -> Result<(bool, Vec<u8>)>
    where
        A: AeadInPlace + KeyInit,
    {
        let cipher = keyed::<A>(kind, key)?;
        let mut buffer = input.to_vec();
        // the aead contract reports exactly one failure: a bad tag
        match cipher.decrypt_in_place_detached(
            GenericArray::from_slice(iv),
            ad,
            &mut buffer,
            GenericArray::from_slice(tag),
        ) {
            Ok(()) => Ok((true, buffer)),
            Err(_) => Ok((false, buffer)),
        }
    }

    fn keyed<A: KeyInit>(kind: CipherKind, key: &[u8]) -> Result<A> {
        A::new_from_slice(key).map_err(|_| Error::InvalidKeyLength {
            cipher: kind.name(),
            expected: ciphra_params::metadata(kind).key_size(),
            actual: key.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "aead")]
    use ciphra_api::Error;

    #[test]
    fn test_capability_query_matches_the_build() {
        assert_eq!(supports_aead(), cfg!(feature = "aead"));
    }

    #[cfg(not(feature = "aead"))]
    #[test]
    fn test_disabled_builds_answer_with_a_dedicated_error() {
        let err = encrypt_aead(CipherKind::Aes128Gcm, &[0; 12], &[0; 16], &[], b"x").unwrap_err();
        assert!(matches!(err, ciphra_api::Error::AeadUnsupported { .. }));
        let err = decrypt_aead(CipherKind::Aes128Gcm, &[0; 12], &[0; 16], &[], &[0; 16], b"x")
            .unwrap_err();
        assert!(matches!(err, ciphra_api::Error::AeadUnsupported { .. }));
    }

    #[cfg(feature = "aead")]
    mod enabled {
        use super::*;

        #[test]
        fn test_aes128_gcm_short_message_tag_and_sizes() {
            let key = [0xA1u8; 16];
            let iv = [0xB2u8; 12];

            let (tag, ciphertext) =
                encrypt_aead(CipherKind::Aes128Gcm, &iv, &key, &[], b"test").unwrap();
            assert_eq!(tag.len(), 16);
            assert_eq!(ciphertext.len(), 4);

            let (ok, plaintext) =
                decrypt_aead(CipherKind::Aes128Gcm, &iv, &key, &[], &tag, &ciphertext).unwrap();
            assert!(ok);
            assert_eq!(plaintext, b"test");

            let mut bad_tag = tag.clone();
            bad_tag[0] ^= 0x01;
            let (ok, _) =
                decrypt_aead(CipherKind::Aes128Gcm, &iv, &key, &[], &bad_tag, &ciphertext)
                    .unwrap();
            assert!(!ok);
        }

        #[test]
        fn test_round_trips_across_aead_kinds() {
            let message = b"authenticated round trip";
            let ad = b"bound context";
            let key16 = [0x51u8; 16];
            let key24 = [0x52u8; 24];
            let key32 = [0x53u8; 32];
            let iv = [0x54u8; 12];

            let cases: &[(CipherKind, &[u8])] = &[
                (CipherKind::Aes128Gcm, &key16),
                (CipherKind::Aes192Gcm, &key24),
                (CipherKind::Aes256Gcm, &key32),
                (CipherKind::Camellia128Gcm, &key16),
                (CipherKind::Camellia256Gcm, &key32),
                (CipherKind::Aes128Ccm, &key16),
                (CipherKind::Aes192Ccm, &key24),
                (CipherKind::Aes256Ccm, &key32),
                (CipherKind::ChaCha20Poly1305, &key32),
            ];

            for &(kind, key) in cases {
                let (tag, ciphertext) = encrypt_aead(kind, &iv, key, ad, message).unwrap();
                assert_eq!(tag.len(), 16, "{:?}", kind);
                assert_eq!(ciphertext.len(), message.len(), "{:?}", kind);

                let (ok, plaintext) =
                    decrypt_aead(kind, &iv, key, ad, &tag, &ciphertext).unwrap();
                assert!(ok, "{:?}", kind);
                assert_eq!(plaintext, message, "{:?}", kind);
            }
        }

        #[test]
        fn test_any_bit_flip_fails_authentication() {
            let key = [0x99u8; 32];
            let iv = [0x17u8; 12];
            let ad = b"header";
            let message = b"tamper detection";

            for kind in [CipherKind::Aes256Gcm, CipherKind::Aes256Ccm, CipherKind::ChaCha20Poly1305]
            {
                let (tag, ciphertext) = encrypt_aead(kind, &iv, &key, ad, message).unwrap();

                let mut bad = ciphertext.clone();
                bad[0] ^= 0x80;
                let (ok, _) = decrypt_aead(kind, &iv, &key, ad, &tag, &bad).unwrap();
                assert!(!ok, "ciphertext flip {:?}", kind);

                let mut bad = tag.clone();
                bad[15] ^= 0x01;
                let (ok, _) = decrypt_aead(kind, &iv, &key, ad, &bad, &ciphertext).unwrap();
                assert!(!ok, "tag flip {:?}", kind);

                let (ok, _) = decrypt_aead(kind, &iv, &key, b"head3r", &tag, &ciphertext).unwrap();
                assert!(!ok, "ad flip {:?}", kind);
            }
        }

        #[test]
        fn test_unauthenticated_kinds_are_rejected() {
            let err = encrypt_aead(CipherKind::Aes128Cbc, &[0; 16], &[0; 16], &[], b"x")
                .unwrap_err();
            assert!(matches!(err, Error::Usage { .. }));

            let err =
                decrypt_aead(CipherKind::ChaCha20, &[0; 12], &[0; 32], &[], &[0; 16], b"x")
                    .unwrap_err();
            assert!(matches!(err, Error::Usage { .. }));
        }

        #[test]
        fn test_gcm_accepts_truncated_tags() {
            let key = [0x61u8; 16];
            let iv = [0x62u8; 12];
            let (tag, ciphertext) =
                encrypt_aead(CipherKind::Aes128Gcm, &iv, &key, &[], b"payload").unwrap();

            let (ok, plaintext) =
                decrypt_aead(CipherKind::Aes128Gcm, &iv, &key, &[], &tag[..8], &ciphertext)
                    .unwrap();
            assert!(ok);
            assert_eq!(plaintext, b"payload");

            // below the GCM minimum is misuse, not a tag mismatch
            assert!(
                decrypt_aead(CipherKind::Aes128Gcm, &iv, &key, &[], &tag[..2], &ciphertext)
                    .is_err()
            );
        }
    }
}
