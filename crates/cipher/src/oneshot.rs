//! One-shot encrypt/decrypt of a complete buffer
//!
//! The crypt engine resolves everything it needs at construction time —
//! registry facts, a fully configured context, and the chunk count —
//! so an ill-sized ECB input fails before any byte is processed. ECB is
//! driven one block per primitive call; every other mode runs as a
//! single whole-buffer pass whose internal chunking belongs to the
//! context.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::context::Cipher;
use crate::registry;
use crate::Direction;
use ciphra_api::{Error, Result};
use ciphra_params::{BlockMode, CipherKind, PaddingMode};

struct CryptEngine<'a> {
    block_size: usize,
    chunks: usize,
    ctx: Cipher,
    input: &'a [u8],
}

impl<'a> CryptEngine<'a> {
    fn new(
        kind: CipherKind,
        pad: PaddingMode,
        iv: &[u8],
        key: &[u8],
        direction: Direction,
        input: &'a [u8],
    ) -> Result<Self> {
        let meta = registry::metadata(kind)?;

        let mut ctx = Cipher::new(kind)?;
        ctx.padding(pad);
        ctx.iv(iv)?;
        ctx.key(key, direction)?;

        // ECB runs block by block; everything else is one logical unit
        let chunks = if meta.mode == BlockMode::Ecb {
            if input.is_empty() || input.len() % meta.block_size != 0 {
                return Err(Error::Usage {
                    context: "one-shot crypt",
                    details: "ECB input size must be a positive multiple of the block size",
                });
            }
            input.len() / meta.block_size
        } else {
            1
        };

        Ok(Self {
            block_size: meta.block_size,
            chunks,
            ctx,
            input,
        })
    }

    fn compute(mut self) -> Result<Vec<u8>> {
        if self.chunks == 1 {
            return self.ctx.crypt(self.input);
        }

        self.ctx.start()?;
        let mut output = Vec::with_capacity(self.input.len() + self.block_size);
        for block in self.input.chunks(self.block_size) {
            output.extend_from_slice(&self.ctx.update(block)?);
        }
        self.ctx.finish()?;
        Ok(output)
    }
}

/// Encrypt a whole buffer under the given kind, padding, IV and key
pub fn encrypt(
    kind: CipherKind,
    pad: PaddingMode,
    iv: &[u8],
    key: &[u8],
    input: &[u8],
) -> Result<Vec<u8>> {
    CryptEngine::new(kind, pad, iv, key, Direction::Encrypt, input)?.compute()
}

/// Decrypt a whole buffer under the given kind, padding, IV and key
pub fn decrypt(
    kind: CipherKind,
    pad: PaddingMode,
    iv: &[u8],
    key: &[u8],
    input: &[u8],
) -> Result<Vec<u8>> {
    CryptEngine::new(kind, pad, iv, key, Direction::Decrypt, input)?.compute()
}
