//! Galois/Counter Mode over the keyed block primitive
//!
//! Incremental GCM per NIST SP 800-38D: a CTR keystream (inc32 on the
//! final 32 bits) for confidentiality and GHASH for authentication. The
//! GF(2^128) multiplication comes from the `ghash` crate — the same core
//! the RustCrypto AEADs build on — while this module owns J0 derivation,
//! counter management, the AAD-before-data phase rule and tag
//! derivation, so that both AAD and data can arrive in arbitrary
//! sub-chunks.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use byteorder::{BigEndian, ByteOrder};
use cipher::generic_array::typenum::U16;
use cipher::generic_array::GenericArray;
use cipher::KeyInit;
use ghash::universal_hash::UniversalHash;
use ghash::GHash;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::primitive::{Block, BlockPrimitive, BLOCK_SIZE};
use crate::Direction;
use ciphra_api::{Error, Result};
use ciphra_params::consts::{AEAD_TAG_SIZE, GCM_MIN_TAG_SIZE};

type GhashBlock = GenericArray<u8, U16>;

#[derive(PartialEq, Eq)]
enum Phase {
    Aad,
    Data,
    Finished,
}

pub(crate) struct GcmStream {
    prim: BlockPrimitive,
    direction: Direction,
    ghash: GHash,
    /// E_K(J0), folded into the tag at the end
    base: Block,
    counter: Block,
    keystream: Block,
    ks_pos: usize,
    buf: Block,
    buf_len: usize,
    aad_len: u64,
    data_len: u64,
    phase: Phase,
}

impl GcmStream {
    pub(crate) fn new(prim: BlockPrimitive, direction: Direction, iv: &[u8]) -> Result<Self> {
        if iv.is_empty() {
            return Err(Error::InvalidIvLength {
                cipher: "GCM",
                expected: 12,
                actual: 0,
            });
        }

        // GHASH key H = E_K(0^128)
        let mut h = [0u8; BLOCK_SIZE];
        prim.encrypt_block(&mut h);
        let ghash = GHash::new(GenericArray::from_slice(&h));

        let mut j0 = [0u8; BLOCK_SIZE];
        if iv.len() == 12 {
            j0[..12].copy_from_slice(iv);
            j0[15] = 1;
        } else {
            // J0 = GHASH(IV || 0-pad || [0]_64 || [len(IV) in bits]_64)
            let mut g = ghash.clone();
            for chunk in iv.chunks(BLOCK_SIZE) {
                let mut block = [0u8; BLOCK_SIZE];
                block[..chunk.len()].copy_from_slice(chunk);
                g.update(&[GhashBlock::from(block)]);
            }
            let mut lengths = [0u8; BLOCK_SIZE];
            BigEndian::write_u64(&mut lengths[8..], (iv.len() as u64) * 8);
            g.update(&[GhashBlock::from(lengths)]);
            j0 = g.finalize().into();
        }

        let mut base = j0;
        prim.encrypt_block(&mut base);

        let mut counter = j0;
        inc32(&mut counter);

        h.zeroize();
        j0.zeroize();

        Ok(Self {
            prim,
            direction,
            ghash,
            base,
            counter,
            keystream: [0u8; BLOCK_SIZE],
            ks_pos: BLOCK_SIZE,
            buf: [0u8; BLOCK_SIZE],
            buf_len: 0,
            aad_len: 0,
            data_len: 0,
            phase: Phase::Aad,
        })
    }

    /// Feed additional authenticated data; must precede all cipher data
    pub(crate) fn update_ad(&mut self, ad: &[u8]) -> Result<()> {
        if self.phase != Phase::Aad {
            return Err(Error::Usage {
                context: "update_ad",
                details: "additional data must be supplied before cipher data",
            });
        }
        self.absorb(ad);
        self.aad_len += ad.len() as u64;
        Ok(())
    }

    pub(crate) fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        if self.phase == Phase::Finished {
            return Err(Error::Usage {
                context: "update",
                details: "stream already finished",
            });
        }
        if self.phase == Phase::Aad {
            self.flush_partial();
            self.phase = Phase::Data;
        }

        // GHASH always runs over the ciphertext side
        let output = match self.direction {
            Direction::Encrypt => {
                let ciphertext = self.xor_keystream(input);
                self.absorb(&ciphertext);
                ciphertext
            }
            Direction::Decrypt => {
                self.absorb(input);
                self.xor_keystream(input)
            }
        };
        self.data_len += input.len() as u64;
        Ok(output)
    }

    /// Close the data stream; the tag becomes available afterwards
    pub(crate) fn finish(&mut self) -> Result<()> {
        if self.phase == Phase::Finished {
            return Err(Error::Usage {
                context: "finish",
                details: "stream already finished",
            });
        }
        self.flush_partial();
        self.phase = Phase::Finished;
        Ok(())
    }

    /// Derive the authentication tag, truncated to `len` bytes
    pub(crate) fn write_tag(&self, len: usize) -> Result<Vec<u8>> {
        if self.phase != Phase::Finished {
            return Err(Error::Usage {
                context: "write_tag",
                details: "finish the stream before requesting the tag",
            });
        }
        if !(GCM_MIN_TAG_SIZE..=AEAD_TAG_SIZE).contains(&len) {
            return Err(Error::Usage {
                context: "write_tag",
                details: "tag length must be between 4 and 16 bytes",
            });
        }

        let mut g = self.ghash.clone();
        let mut lengths = [0u8; BLOCK_SIZE];
        BigEndian::write_u64(&mut lengths[..8], self.aad_len.wrapping_mul(8));
        BigEndian::write_u64(&mut lengths[8..], self.data_len.wrapping_mul(8));
        g.update(&[GhashBlock::from(lengths)]);

        let mut tag: Block = g.finalize().into();
        for i in 0..BLOCK_SIZE {
            tag[i] ^= self.base[i];
        }
        let out = tag[..len].to_vec();
        tag.zeroize();
        Ok(out)
    }

    /// Compare a received tag against the computed one in constant time
    ///
    /// `Ok(false)` is the expected outcome for tampered data; only state
    /// misuse or an out-of-range tag length is an error.
    pub(crate) fn check_tag(&self, tag: &[u8]) -> Result<bool> {
        let expected = self.write_tag(tag.len())?;
        Ok(bool::from(expected.as_slice().ct_eq(tag)))
    }

    /// Absorb bytes into GHASH, carrying partial blocks across calls
    fn absorb(&mut self, mut data: &[u8]) {
        if self.buf_len > 0 {
            let take = data.len().min(BLOCK_SIZE - self.buf_len);
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
            self.buf_len += take;
            data = &data[take..];
            if self.buf_len < BLOCK_SIZE {
                return;
            }
            self.ghash.update(&[GhashBlock::from(self.buf)]);
            self.buf_len = 0;
        }
        let mut chunks = data.chunks_exact(BLOCK_SIZE);
        for chunk in &mut chunks {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.ghash.update(&[GhashBlock::from(block)]);
        }
        let rest = chunks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.buf_len = rest.len();
    }

    /// Zero-pad and absorb any buffered partial block
    fn flush_partial(&mut self) {
        if self.buf_len > 0 {
            for byte in &mut self.buf[self.buf_len..] {
                *byte = 0;
            }
            let block = self.buf;
            self.ghash.update(&[GhashBlock::from(block)]);
            self.buf_len = 0;
        }
    }

    fn xor_keystream(&mut self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len());
        for &byte in input {
            if self.ks_pos == BLOCK_SIZE {
                self.keystream = self.counter;
                self.prim.encrypt_block(&mut self.keystream);
                inc32(&mut self.counter);
                self.ks_pos = 0;
            }
            out.push(byte ^ self.keystream[self.ks_pos]);
            self.ks_pos += 1;
        }
        out
    }
}

impl Drop for GcmStream {
    fn drop(&mut self) {
        self.base.zeroize();
        self.counter.zeroize();
        self.keystream.zeroize();
        self.buf.zeroize();
    }
}

/// Increment the final 32 bits of the counter block, big-endian
fn inc32(counter: &mut Block) {
    let n = BigEndian::read_u32(&counter[12..]);
    BigEndian::write_u32(&mut counter[12..], n.wrapping_add(1));
}

/// One-shot authenticated encryption, full 16-byte tag
pub(crate) fn seal(
    prim: BlockPrimitive,
    iv: &[u8],
    ad: &[u8],
    plaintext: &[u8],
) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut stream = GcmStream::new(prim, Direction::Encrypt, iv)?;
    stream.update_ad(ad)?;
    let ciphertext = stream.update(plaintext)?;
    stream.finish()?;
    let tag = stream.write_tag(AEAD_TAG_SIZE)?;
    Ok((tag, ciphertext))
}

/// One-shot authenticated decryption; tag mismatch is a value, not an error
pub(crate) fn open(
    prim: BlockPrimitive,
    iv: &[u8],
    ad: &[u8],
    tag: &[u8],
    ciphertext: &[u8],
) -> Result<(bool, Vec<u8>)> {
    let mut stream = GcmStream::new(prim, Direction::Decrypt, iv)?;
    stream.update_ad(ad)?;
    let plaintext = stream.update(ciphertext)?;
    stream.finish()?;
    let authenticated = stream.check_tag(tag)?;
    Ok((authenticated, plaintext))
}

#[cfg(test)]
mod tests;
