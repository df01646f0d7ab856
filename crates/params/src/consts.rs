//! Size constants for the supported primitives

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Camellia block size in bytes
pub const CAMELLIA_BLOCK_SIZE: usize = 16;

/// Block size reported for stream ciphers
pub const STREAM_BLOCK_SIZE: usize = 1;

/// ChaCha20 key length in bits
pub const CHACHA20_KEY_BITS: usize = 256;

/// ChaCha20 nonce size in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// Standard GCM nonce size in bytes
pub const GCM_IV_SIZE: usize = 12;

/// CCM nonce size in bytes accepted by the engine
pub const CCM_IV_SIZE: usize = 12;

/// Full authentication-tag size in bytes for every supported AEAD
pub const AEAD_TAG_SIZE: usize = 16;

/// Shortest tag a GCM stream will emit or check
pub const GCM_MIN_TAG_SIZE: usize = 4;
