//! Streaming cipher context
//!
//! A [`Cipher`] owns everything one logical operation needs: the bound
//! registry entry, the keyed primitive, the remembered IV, the padding
//! scheme and the running mode engine. `start()` rebuilds the engine
//! from the last-set IV, so a context can run any number of independent
//! messages under the same key without the caller resupplying state.
//!
//! Key material and buffered plaintext live in `Zeroizing` storage and
//! are wiped whenever the context is dropped, also on error paths.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::ChaCha20;
use zeroize::Zeroizing;

#[cfg(feature = "aead")]
use crate::gcm::GcmStream;
use crate::modes::{CbcState, CfbState, CtrState, OfbState};
use crate::primitive::{BlockPrimitive, BLOCK_SIZE};
use crate::registry;
use crate::Direction;
use ciphra_api::{validate, Error, Result};
use ciphra_params::{BlockMode, CipherId, CipherKind, CipherMeta, PaddingMode};

/// Keyed primitive, direction-agnostic; the running engine is built
/// from it at every `start()`
enum Keyed {
    Block(BlockPrimitive),
    Stream(Zeroizing<[u8; 32]>),
}

/// Running per-stream state, one variant per block-mode category
enum Engine {
    Ecb(BlockPrimitive),
    Cbc(CbcState),
    Cfb(CfbState),
    Ofb(OfbState),
    Ctr(CtrState),
    Stream(ChaCha20),
    #[cfg(feature = "aead")]
    Gcm(GcmStream),
}

/// Streaming cipher context bound to one registry entry
pub struct Cipher {
    kind: CipherKind,
    meta: CipherMeta,
    padding: PaddingMode,
    direction: Direction,
    primitive: Option<Keyed>,
    iv: Zeroizing<Vec<u8>>,
    iv_set: bool,
    engine: Option<Engine>,
    pending: Zeroizing<Vec<u8>>,
    finished: bool,
}

impl Cipher {
    /// Bind a context to a cipher kind
    ///
    /// Fails with `UnknownCipher` when the kind has no entry in this
    /// build's registry (e.g. an AEAD kind on an AEAD-less build).
    pub fn new(kind: CipherKind) -> Result<Self> {
        let meta = registry::metadata(kind)?;
        Ok(Self {
            kind,
            meta,
            // native default; consulted by CBC only
            padding: PaddingMode::Pkcs7,
            direction: Direction::Encrypt,
            primitive: None,
            iv: Zeroizing::new(Vec::new()),
            iv_set: false,
            engine: None,
            pending: Zeroizing::new(Vec::new()),
            finished: false,
        })
    }

    /// Install key material and the operation direction
    ///
    /// The byte length is validated against the registry before any
    /// primitive state is built. Installing a key invalidates any
    /// running stream; call `start()` afterwards.
    pub fn key(&mut self, key: &[u8], direction: Direction) -> Result<&mut Self> {
        let keyed = match self.meta.id {
            CipherId::Aes | CipherId::Camellia => {
                Keyed::Block(BlockPrimitive::new(self.kind.name(), &self.meta, key)?)
            }
            CipherId::ChaCha20 => {
                validate::key_length(self.kind.name(), key.len(), self.meta.key_size())?;
                let mut bytes = Zeroizing::new([0u8; 32]);
                bytes.copy_from_slice(key);
                Keyed::Stream(bytes)
            }
        };
        self.primitive = Some(keyed);
        self.direction = direction;
        self.engine = None;
        Ok(self)
    }

    /// Install the IV/nonce and remember it for later restarts
    ///
    /// Lengths are checked against the registry entry; GCM accepts any
    /// non-empty IV, every other mode requires an exact match.
    pub fn iv(&mut self, iv: &[u8]) -> Result<&mut Self> {
        if self.meta.mode == BlockMode::Gcm {
            if iv.is_empty() {
                return Err(Error::InvalidIvLength {
                    cipher: self.kind.name(),
                    expected: self.meta.iv_size,
                    actual: 0,
                });
            }
        } else {
            validate::iv_length(self.kind.name(), iv.len(), self.meta.iv_size)?;
        }
        self.iv = Zeroizing::new(iv.to_vec());
        self.iv_set = true;
        self.engine = None;
        Ok(self)
    }

    /// Select the padding scheme consulted by CBC streams
    ///
    /// `PaddingMode::None` is a no-op signal that keeps the current
    /// scheme (PKCS#7 by default). Modes without a padding concept
    /// store the setting and never consult it.
    pub fn padding(&mut self, mode: PaddingMode) -> &mut Self {
        if mode != PaddingMode::None {
            self.padding = mode;
        }
        self
    }

    /// Reset the running state to begin a fresh stream from the last IV
    ///
    /// Safe to call repeatedly: each call reproduces the same starting
    /// state, so successive messages under one key are independent.
    pub fn start(&mut self) -> Result<()> {
        let keyed = self.primitive.as_ref().ok_or(Error::Usage {
            context: "start",
            details: "a key must be installed first",
        })?;
        if self.meta.iv_size > 0 && !self.iv_set {
            return Err(Error::Usage {
                context: "start",
                details: "an IV must be installed first",
            });
        }
        if self.kind == CipherKind::ChaCha20Poly1305 {
            return Err(Error::Usage {
                context: "start",
                details: "CHACHA20-POLY1305 is one-shot only; use the aead module",
            });
        }

        let engine = match self.meta.mode {
            BlockMode::Ecb => Engine::Ecb(block_primitive(keyed)?.clone()),
            BlockMode::Cbc => Engine::Cbc(CbcState::new(block_primitive(keyed)?.clone(), &self.iv)),
            BlockMode::Cfb => Engine::Cfb(CfbState::new(block_primitive(keyed)?.clone(), &self.iv)),
            BlockMode::Ofb => Engine::Ofb(OfbState::new(block_primitive(keyed)?.clone(), &self.iv)),
            BlockMode::Ctr => Engine::Ctr(CtrState::new(block_primitive(keyed)?.clone(), &self.iv)),
            BlockMode::Stream => {
                let key = match keyed {
                    Keyed::Stream(bytes) => bytes,
                    Keyed::Block(_) => {
                        return Err(Error::Usage {
                            context: "start",
                            details: "registry entry is not a stream cipher",
                        })
                    }
                };
                let chacha =
                    ChaCha20::new_from_slices(&key[..], &self.iv).map_err(|_| Error::Primitive {
                        context: self.kind.name(),
                        details: "primitive rejected the key or nonce",
                    })?;
                Engine::Stream(chacha)
            }
            #[cfg(feature = "aead")]
            BlockMode::Gcm => Engine::Gcm(GcmStream::new(
                block_primitive(keyed)?.clone(),
                self.direction,
                &self.iv,
            )?),
            #[cfg(not(feature = "aead"))]
            BlockMode::Gcm => return Err(Error::AeadUnsupported { operation: "start" }),
            BlockMode::Ccm => {
                return Err(Error::Usage {
                    context: "start",
                    details: "CCM is one-shot only; use the aead module",
                })
            }
            BlockMode::Xts | BlockMode::Undefined => {
                return Err(Error::Usage {
                    context: "start",
                    details: "block mode is not supported by the streaming engine",
                })
            }
        };

        self.engine = Some(engine);
        self.pending.clear();
        self.finished = false;
        Ok(())
    }

    /// Feed data into the running stream, returning the bytes produced
    ///
    /// ECB data must arrive in whole blocks; CBC buffers partial blocks
    /// internally (holding back the final block while decrypting, so
    /// padding can be stripped at `finish`); all other modes produce
    /// output byte for byte.
    pub fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        if self.finished {
            return Err(Error::Usage {
                context: "update",
                details: "call start() to begin a new stream",
            });
        }
        let engine = self.engine.as_mut().ok_or(Error::Usage {
            context: "update",
            details: "start() must be called first",
        })?;

        match engine {
            // chunk driver: one primitive call per block, first failure
            // aborts before any output is handed back
            Engine::Ecb(prim) => {
                if input.len() % self.meta.block_size != 0 {
                    return Err(Error::FullBlockExpected {
                        block_size: self.meta.block_size,
                        actual: input.len(),
                    });
                }
                let mut out = Vec::with_capacity(input.len());
                for chunk in input.chunks_exact(self.meta.block_size) {
                    let mut block = [0u8; BLOCK_SIZE];
                    block.copy_from_slice(chunk);
                    match self.direction {
                        Direction::Encrypt => prim.encrypt_block(&mut block),
                        Direction::Decrypt => prim.decrypt_block(&mut block),
                    }
                    out.extend_from_slice(&block);
                }
                Ok(out)
            }
            Engine::Cbc(state) => {
                let block = self.meta.block_size;
                self.pending.extend_from_slice(input);

                let mut take = self.pending.len() - self.pending.len() % block;
                // while decrypting, the last full block stays buffered
                // until finish() so its padding can be stripped
                if self.direction == Direction::Decrypt && take == self.pending.len() {
                    take = take.saturating_sub(block);
                }

                let mut out = Vec::with_capacity(take);
                if take > 0 {
                    match self.direction {
                        Direction::Encrypt => state.encrypt_blocks(&self.pending[..take], &mut out),
                        Direction::Decrypt => state.decrypt_blocks(&self.pending[..take], &mut out),
                    }
                    self.pending.drain(..take);
                }
                Ok(out)
            }
            Engine::Cfb(state) => {
                let mut out = Vec::with_capacity(input.len());
                match self.direction {
                    Direction::Encrypt => state.encrypt(input, &mut out),
                    Direction::Decrypt => state.decrypt(input, &mut out),
                }
                Ok(out)
            }
            Engine::Ofb(state) => {
                let mut out = Vec::with_capacity(input.len());
                state.process(input, &mut out);
                Ok(out)
            }
            Engine::Ctr(state) => {
                let mut out = Vec::with_capacity(input.len());
                state.process(input, &mut out);
                Ok(out)
            }
            Engine::Stream(chacha) => {
                let mut out = input.to_vec();
                chacha.apply_keystream(&mut out);
                Ok(out)
            }
            #[cfg(feature = "aead")]
            Engine::Gcm(stream) => stream.update(input),
        }
    }

    /// Flush the stream: apply padding (encrypt) or validate and strip
    /// it (decrypt)
    pub fn finish(&mut self) -> Result<Vec<u8>> {
        if self.finished {
            return Err(Error::Usage {
                context: "finish",
                details: "stream already finished",
            });
        }
        let engine = self.engine.as_mut().ok_or(Error::Usage {
            context: "finish",
            details: "start() must be called first",
        })?;

        let out = match engine {
            Engine::Cbc(state) => {
                let block = self.meta.block_size;
                match self.direction {
                    Direction::Encrypt => {
                        crate::padding::apply(self.padding, &mut self.pending, block);
                        let mut out = Vec::with_capacity(block);
                        state.encrypt_blocks(&self.pending, &mut out);
                        self.pending.clear();
                        out
                    }
                    Direction::Decrypt => {
                        if self.pending.len() != block {
                            return Err(Error::FullBlockExpected {
                                block_size: block,
                                actual: self.pending.len(),
                            });
                        }
                        let mut buf = Vec::with_capacity(block);
                        state.decrypt_blocks(&self.pending, &mut buf);
                        self.pending.clear();
                        let keep = crate::padding::strip(self.padding, &buf)?;
                        buf.truncate(keep);
                        buf
                    }
                }
            }
            #[cfg(feature = "aead")]
            Engine::Gcm(stream) => {
                stream.finish()?;
                Vec::new()
            }
            Engine::Ecb(_) | Engine::Cfb(_) | Engine::Ofb(_) | Engine::Ctr(_)
            | Engine::Stream(_) => Vec::new(),
        };

        self.finished = true;
        Ok(out)
    }

    /// Encrypt or decrypt a whole buffer: `start` + `update` + `finish`
    pub fn crypt(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.start()?;
        let mut out = Vec::with_capacity(input.len() + self.meta.block_size);
        out.extend_from_slice(&self.update(input)?);
        out.extend_from_slice(&self.finish()?);
        Ok(out)
    }

    /// Feed additional authenticated data into a running GCM stream
    ///
    /// Must be called after `start()` and before the first `update()`.
    #[cfg(feature = "aead")]
    pub fn update_ad(&mut self, ad: &[u8]) -> Result<()> {
        match self.engine.as_mut() {
            Some(Engine::Gcm(stream)) => stream.update_ad(ad),
            Some(_) => Err(Error::Usage {
                context: "update_ad",
                details: "additional data applies to GCM streams",
            }),
            None => Err(Error::Usage {
                context: "update_ad",
                details: "start() must be called first",
            }),
        }
    }

    #[cfg(not(feature = "aead"))]
    pub fn update_ad(&mut self, _ad: &[u8]) -> Result<()> {
        Err(Error::AeadUnsupported { operation: "update_ad" })
    }

    /// Retrieve the authentication tag of a finished GCM encryption
    /// stream, truncated to `length` bytes (4..=16)
    #[cfg(feature = "aead")]
    pub fn write_tag(&self, length: usize) -> Result<Vec<u8>> {
        match self.engine.as_ref() {
            Some(Engine::Gcm(stream)) => stream.write_tag(length),
            Some(_) => Err(Error::Usage {
                context: "write_tag",
                details: "tags are produced by GCM streams",
            }),
            None => Err(Error::Usage {
                context: "write_tag",
                details: "start() must be called first",
            }),
        }
    }

    #[cfg(not(feature = "aead"))]
    pub fn write_tag(&self, _length: usize) -> Result<Vec<u8>> {
        Err(Error::AeadUnsupported { operation: "write_tag" })
    }

    /// Check the tag of a finished GCM decryption stream
    ///
    /// `Ok(false)` means the data did not authenticate — an expected,
    /// caller-handled outcome; errors are reserved for misuse.
    #[cfg(feature = "aead")]
    pub fn check_tag(&self, tag: &[u8]) -> Result<bool> {
        match self.engine.as_ref() {
            Some(Engine::Gcm(stream)) => stream.check_tag(tag),
            Some(_) => Err(Error::Usage {
                context: "check_tag",
                details: "tags are checked by GCM streams",
            }),
            None => Err(Error::Usage {
                context: "check_tag",
                details: "start() must be called first",
            }),
        }
    }

    #[cfg(not(feature = "aead"))]
    pub fn check_tag(&self, _tag: &[u8]) -> Result<bool> {
        Err(Error::AeadUnsupported { operation: "check_tag" })
    }

    /// The bound cipher kind
    pub fn kind(&self) -> CipherKind {
        self.kind
    }

    /// Registry name of the bound cipher
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Block size in bytes of the bound cipher
    pub fn block_size(&self) -> usize {
        self.meta.block_size
    }

    /// Required IV size in bytes of the bound cipher
    pub fn iv_size(&self) -> usize {
        self.meta.iv_size
    }

    /// Required key length in bits of the bound cipher
    pub fn key_bitlen(&self) -> usize {
        self.meta.key_bits
    }

    /// Block-mode category of the bound cipher
    pub fn block_mode(&self) -> BlockMode {
        self.meta.mode
    }
}

fn block_primitive(keyed: &Keyed) -> Result<&BlockPrimitive> {
    match keyed {
        Keyed::Block(prim) => Ok(prim),
        Keyed::Stream(_) => Err(Error::Usage {
            context: "start",
            details: "registry entry is not a block cipher",
        }),
    }
}
