//! Counter (CTR) mode state
//!
//! NIST SP 800-38A counter mode with the whole 128-bit block treated as
//! a big-endian counter. Keystream bytes are buffered so calls may carry
//! any lengths; encryption and decryption are the same operation.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroize;

use crate::primitive::{Block, BlockPrimitive, BLOCK_SIZE};

pub(crate) struct CtrState {
    prim: BlockPrimitive,
    counter: Block,
    keystream: Block,
    pos: usize,
}

impl CtrState {
    pub(crate) fn new(prim: BlockPrimitive, iv: &[u8]) -> Self {
        let mut counter = [0u8; BLOCK_SIZE];
        counter.copy_from_slice(iv);
        Self {
            prim,
            counter,
            keystream: [0u8; BLOCK_SIZE],
            // forces keystream generation on first use
            pos: BLOCK_SIZE,
        }
    }

    pub(crate) fn process(&mut self, input: &[u8], out: &mut Vec<u8>) {
        for &byte in input {
            if self.pos == BLOCK_SIZE {
                self.keystream = self.counter;
                self.prim.encrypt_block(&mut self.keystream);
                increment(&mut self.counter);
                self.pos = 0;
            }
            out.push(byte ^ self.keystream[self.pos]);
            self.pos += 1;
        }
    }
}

/// Big-endian increment of the whole counter block, wrapping at 2^128
fn increment(counter: &mut Block) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

impl Drop for CtrState {
    fn drop(&mut self) {
        self.counter.zeroize();
        self.keystream.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ciphra_params::{metadata, CipherKind};

    fn aes128_prim() -> BlockPrimitive {
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let meta = metadata(CipherKind::Aes128Ctr);
        BlockPrimitive::new("AES-128-CTR", &meta, &key).unwrap()
    }

    #[test]
    fn test_sp800_38a_ctr_two_blocks() {
        // NIST SP 800-38A F.5.1
        let iv = hex::decode("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff").unwrap();
        let plaintext = hex::decode(
            "6bc1bee22e409f96e93d7e117393172a\
             ae2d8a571e03ac9c9eb76fac45af8e51",
        )
        .unwrap();

        let mut state = CtrState::new(aes128_prim(), &iv);
        let mut ciphertext = Vec::new();
        state.process(&plaintext, &mut ciphertext);
        assert_eq!(
            hex::encode(&ciphertext),
            "874d6191b620e3261bef6864990db6ce\
             9806f66b7970fdff8617187bb9fffdff"
        );

        let mut state = CtrState::new(aes128_prim(), &iv);
        let mut decrypted = Vec::new();
        state.process(&ciphertext, &mut decrypted);
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_counter_wraps_across_block_boundary() {
        let iv = [0xFFu8; BLOCK_SIZE];
        let data = [0u8; BLOCK_SIZE * 2];

        let mut state = CtrState::new(aes128_prim(), &iv);
        let mut whole = Vec::new();
        state.process(&data, &mut whole);

        // second keystream block comes from the wrapped all-zero counter
        let mut zero_block = [0u8; BLOCK_SIZE];
        aes128_prim().encrypt_block(&mut zero_block);
        assert_eq!(&whole[BLOCK_SIZE..], &zero_block[..]);
    }

    #[test]
    fn test_split_feeding_matches_whole() {
        let iv = [9u8; BLOCK_SIZE];
        let data: Vec<u8> = (0u8..75).collect();

        let mut whole = Vec::new();
        CtrState::new(aes128_prim(), &iv).process(&data, &mut whole);

        let mut split = Vec::new();
        let mut state = CtrState::new(aes128_prim(), &iv);
        state.process(&data[..1], &mut split);
        state.process(&data[1..17], &mut split);
        state.process(&data[17..], &mut split);
        assert_eq!(whole, split);
    }
}
