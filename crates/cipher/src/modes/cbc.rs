//! Cipher block chaining (CBC) state
//!
//! Follows NIST SP 800-38A: each plaintext block is XORed with the
//! previous ciphertext block (the IV for the first) before encryption.
//! The chain register survives across calls, so a stream can be fed in
//! any whole-block sized pieces.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroize;

use crate::primitive::{Block, BlockPrimitive, BLOCK_SIZE};

pub(crate) struct CbcState {
    prim: BlockPrimitive,
    chain: Block,
}

impl CbcState {
    /// `iv` must be exactly one block; the context validates this.
    pub(crate) fn new(prim: BlockPrimitive, iv: &[u8]) -> Self {
        let mut chain = [0u8; BLOCK_SIZE];
        chain.copy_from_slice(iv);
        Self { prim, chain }
    }

    /// Encrypt whole blocks, appending ciphertext to `out`
    pub(crate) fn encrypt_blocks(&mut self, data: &[u8], out: &mut Vec<u8>) {
        debug_assert_eq!(data.len() % BLOCK_SIZE, 0);

        for chunk in data.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            for i in 0..BLOCK_SIZE {
                block[i] ^= self.chain[i];
            }
            self.prim.encrypt_block(&mut block);
            out.extend_from_slice(&block);
            self.chain = block;
        }
    }

    /// Decrypt whole blocks, appending plaintext to `out`
    pub(crate) fn decrypt_blocks(&mut self, data: &[u8], out: &mut Vec<u8>) {
        debug_assert_eq!(data.len() % BLOCK_SIZE, 0);

        for chunk in data.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            let saved: Block = block;
            self.prim.decrypt_block(&mut block);
            for i in 0..BLOCK_SIZE {
                block[i] ^= self.chain[i];
            }
            out.extend_from_slice(&block);
            self.chain = saved;
            block.zeroize();
        }
    }
}

impl Drop for CbcState {
    fn drop(&mut self) {
        self.chain.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ciphra_params::{metadata, CipherKind};

    fn aes128_prim(key_hex: &str) -> BlockPrimitive {
        let key = hex::decode(key_hex).unwrap();
        let meta = metadata(CipherKind::Aes128Cbc);
        BlockPrimitive::new("AES-128-CBC", &meta, &key).unwrap()
    }

    #[test]
    fn test_sp800_38a_cbc_first_block() {
        // NIST SP 800-38A F.2.1
        let prim = aes128_prim("2b7e151628aed2a6abf7158809cf4f3c");
        let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

        let mut state = CbcState::new(prim.clone(), &iv);
        let mut ciphertext = Vec::new();
        state.encrypt_blocks(&plaintext, &mut ciphertext);
        assert_eq!(hex::encode(&ciphertext), "7649abac8119b246cee98e9b12e9197d");

        let mut state = CbcState::new(prim, &iv);
        let mut decrypted = Vec::new();
        state.decrypt_blocks(&ciphertext, &mut decrypted);
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_chain_survives_split_feeding() {
        let prim = aes128_prim("2b7e151628aed2a6abf7158809cf4f3c");
        let iv = [0x42u8; BLOCK_SIZE];
        let data = [0xA5u8; BLOCK_SIZE * 4];

        let mut whole = Vec::new();
        CbcState::new(prim.clone(), &iv).encrypt_blocks(&data, &mut whole);

        let mut split = Vec::new();
        let mut state = CbcState::new(prim, &iv);
        state.encrypt_blocks(&data[..BLOCK_SIZE], &mut split);
        state.encrypt_blocks(&data[BLOCK_SIZE..], &mut split);

        assert_eq!(whole, split);
    }
}
