//! Keyed block-primitive dispatch
//!
//! The engine's mode code is written once over [`BlockPrimitive`], a
//! closed enum of the keyed external cipher instances. Every call site
//! dispatches with a plain `match`, so each arm stays monomorphic over
//! the concrete RustCrypto type.

use aes::{Aes128, Aes192, Aes256};
use camellia::{Camellia128, Camellia192, Camellia256};
use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

use ciphra_api::{validate, Error, Result};
use ciphra_params::{CipherId, CipherMeta};

/// Block size shared by every block primitive in the registry
pub(crate) const BLOCK_SIZE: usize = 16;

/// One cipher block
pub(crate) type Block = [u8; BLOCK_SIZE];

/// A keyed block cipher from the external primitive crates
#[derive(Clone, Debug)]
pub(crate) enum BlockPrimitive {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
    Camellia128(Camellia128),
    Camellia192(Camellia192),
    Camellia256(Camellia256),
}

impl BlockPrimitive {
    /// Key the primitive named by the registry entry
    ///
    /// The key length is validated here, before any other state is
    /// touched; `cipher` is the registry name used in error reports.
    pub(crate) fn new(cipher: &'static str, meta: &CipherMeta, key: &[u8]) -> Result<Self> {
        validate::key_length(cipher, key.len(), meta.key_size())?;

        let primitive = match (meta.id, meta.key_bits) {
            (CipherId::Aes, 128) => BlockPrimitive::Aes128(init(cipher, key)?),
            (CipherId::Aes, 192) => BlockPrimitive::Aes192(init(cipher, key)?),
            (CipherId::Aes, 256) => BlockPrimitive::Aes256(init(cipher, key)?),
            (CipherId::Camellia, 128) => BlockPrimitive::Camellia128(init(cipher, key)?),
            (CipherId::Camellia, 192) => BlockPrimitive::Camellia192(init(cipher, key)?),
            (CipherId::Camellia, 256) => BlockPrimitive::Camellia256(init(cipher, key)?),
            _ => {
                return Err(Error::Usage {
                    context: "primitive setup",
                    details: "registry entry is not a block cipher",
                })
            }
        };
        Ok(primitive)
    }

    /// Encrypt one block in place
    pub(crate) fn encrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(&mut block[..]);
        match self {
            BlockPrimitive::Aes128(c) => c.encrypt_block(block),
            BlockPrimitive::Aes192(c) => c.encrypt_block(block),
            BlockPrimitive::Aes256(c) => c.encrypt_block(block),
            BlockPrimitive::Camellia128(c) => c.encrypt_block(block),
            BlockPrimitive::Camellia192(c) => c.encrypt_block(block),
            BlockPrimitive::Camellia256(c) => c.encrypt_block(block),
        }
    }

    /// Decrypt one block in place
    pub(crate) fn decrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(&mut block[..]);
        match self {
            BlockPrimitive::Aes128(c) => c.decrypt_block(block),
            BlockPrimitive::Aes192(c) => c.decrypt_block(block),
            BlockPrimitive::Aes256(c) => c.decrypt_block(block),
            BlockPrimitive::Camellia128(c) => c.decrypt_block(block),
            BlockPrimitive::Camellia192(c) => c.decrypt_block(block),
            BlockPrimitive::Camellia256(c) => c.decrypt_block(block),
        }
    }
}

fn init<C: KeyInit>(cipher: &'static str, key: &[u8]) -> Result<C> {
    C::new_from_slice(key).map_err(|_| Error::Primitive {
        context: cipher,
        details: "primitive rejected the key material",
    })
}
