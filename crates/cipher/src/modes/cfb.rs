//! Cipher feedback (CFB128) state
//!
//! Full-block CFB per NIST SP 800-38A with a byte-level offset: the
//! shift register holds the block being filled with ciphertext bytes,
//! so calls may carry any lengths and resume mid-block.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroize;

use crate::primitive::{Block, BlockPrimitive, BLOCK_SIZE};

pub(crate) struct CfbState {
    prim: BlockPrimitive,
    reg: Block,
    pos: usize,
}

impl CfbState {
    pub(crate) fn new(prim: BlockPrimitive, iv: &[u8]) -> Self {
        let mut reg = [0u8; BLOCK_SIZE];
        reg.copy_from_slice(iv);
        Self { prim, reg, pos: 0 }
    }

    pub(crate) fn encrypt(&mut self, input: &[u8], out: &mut Vec<u8>) {
        for &byte in input {
            if self.pos == 0 {
                self.prim.encrypt_block(&mut self.reg);
            }
            let c = byte ^ self.reg[self.pos];
            out.push(c);
            self.reg[self.pos] = c;
            self.pos = (self.pos + 1) % BLOCK_SIZE;
        }
    }

    pub(crate) fn decrypt(&mut self, input: &[u8], out: &mut Vec<u8>) {
        for &byte in input {
            if self.pos == 0 {
                self.prim.encrypt_block(&mut self.reg);
            }
            out.push(byte ^ self.reg[self.pos]);
            self.reg[self.pos] = byte;
            self.pos = (self.pos + 1) % BLOCK_SIZE;
        }
    }
}

impl Drop for CfbState {
    fn drop(&mut self) {
        self.reg.zeroize();
    }
}
