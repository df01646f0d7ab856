//! Output feedback (OFB) state
//!
//! NIST SP 800-38A output feedback: the keystream register is encrypted
//! repeatedly and never depends on the data, so encryption and
//! decryption are the same XOR.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroize;

use crate::primitive::{Block, BlockPrimitive, BLOCK_SIZE};

pub(crate) struct OfbState {
    prim: BlockPrimitive,
    reg: Block,
    pos: usize,
}

impl OfbState {
    pub(crate) fn new(prim: BlockPrimitive, iv: &[u8]) -> Self {
        let mut reg = [0u8; BLOCK_SIZE];
        reg.copy_from_slice(iv);
        Self { prim, reg, pos: 0 }
    }

    pub(crate) fn process(&mut self, input: &[u8], out: &mut Vec<u8>) {
        for &byte in input {
            if self.pos == 0 {
                self.prim.encrypt_block(&mut self.reg);
            }
            out.push(byte ^ self.reg[self.pos]);
            self.pos = (self.pos + 1) % BLOCK_SIZE;
        }
    }
}

impl Drop for OfbState {
    fn drop(&mut self) {
        self.reg.zeroize();
    }
}
