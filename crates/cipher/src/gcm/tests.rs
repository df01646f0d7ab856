use super::*;
use ciphra_params::{metadata, CipherKind};

fn aes128_prim(key_hex: &str) -> BlockPrimitive {
    let key = hex::decode(key_hex).unwrap();
    let meta = metadata(CipherKind::Aes128Gcm);
    BlockPrimitive::new("AES-128-GCM", &meta, &key).unwrap()
}

#[test]
fn test_nist_case_empty_plaintext() {
    // NIST SP 800-38D validation vector: zero key, zero IV, no data
    let prim = aes128_prim("00000000000000000000000000000000");
    let iv = [0u8; 12];

    let (tag, ciphertext) = seal(prim, &iv, &[], &[]).unwrap();
    assert!(ciphertext.is_empty());
    assert_eq!(hex::encode(&tag), "58e2fccefa7e3061367f1d57a4e7455a");
}

#[test]
fn test_nist_case_single_block() {
    let prim = aes128_prim("00000000000000000000000000000000");
    let iv = [0u8; 12];
    let plaintext = [0u8; 16];

    let (tag, ciphertext) = seal(prim.clone(), &iv, &[], &plaintext).unwrap();
    assert_eq!(hex::encode(&ciphertext), "0388dace60b6a392f328c2b971b2fe78");
    assert_eq!(hex::encode(&tag), "ab6e47d42cec13bdf53a67b21257bddf");

    let (ok, decrypted) = open(prim, &iv, &[], &tag, &ciphertext).unwrap();
    assert!(ok);
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_streaming_matches_one_shot() {
    let prim = aes128_prim("feffe9928665731c6d6a8f9467308308");
    let iv = hex::decode("cafebabefacedbaddecaf888").unwrap();
    let aad = b"header bytes";
    let data: Vec<u8> = (0u8..61).collect();

    let (tag, whole) = seal(prim.clone(), &iv, aad, &data).unwrap();

    let mut stream = GcmStream::new(prim.clone(), Direction::Encrypt, &iv).unwrap();
    stream.update_ad(&aad[..5]).unwrap();
    stream.update_ad(&aad[5..]).unwrap();
    let mut split = Vec::new();
    split.extend(stream.update(&data[..7]).unwrap());
    split.extend(stream.update(&data[7..32]).unwrap());
    split.extend(stream.update(&data[32..]).unwrap());
    stream.finish().unwrap();

    assert_eq!(split, whole);
    assert_eq!(stream.write_tag(16).unwrap(), tag);
    assert!(stream.check_tag(&tag).unwrap());

    // decrypt side, chunked differently
    let mut stream = GcmStream::new(prim, Direction::Decrypt, &iv).unwrap();
    stream.update_ad(aad).unwrap();
    let mut plain = Vec::new();
    plain.extend(stream.update(&whole[..19]).unwrap());
    plain.extend(stream.update(&whole[19..]).unwrap());
    stream.finish().unwrap();
    assert_eq!(plain, data);
    assert!(stream.check_tag(&tag).unwrap());
}

#[test]
fn test_non_96_bit_iv_round_trip() {
    let prim = aes128_prim("000102030405060708090a0b0c0d0e0f");
    let iv = [0x5Cu8; 16];
    let data = b"arbitrary IV lengths go through the GHASH derivation";

    let (tag, ciphertext) = seal(prim.clone(), &iv, &[], data).unwrap();
    let (ok, decrypted) = open(prim.clone(), &iv, &[], &tag, &ciphertext).unwrap();
    assert!(ok);
    assert_eq!(decrypted, data);

    // a different IV must not authenticate
    let other_iv = [0x5Du8; 16];
    let (ok, _) = open(prim, &other_iv, &[], &tag, &ciphertext).unwrap();
    assert!(!ok);
}

#[test]
fn test_tampering_is_reported_as_value() {
    let prim = aes128_prim("000102030405060708090a0b0c0d0e0f");
    let iv = [1u8; 12];
    let aad = b"associated";
    let data = b"payload";

    let (tag, ciphertext) = seal(prim.clone(), &iv, aad, data).unwrap();

    let mut bad_ct = ciphertext.clone();
    bad_ct[0] ^= 0x01;
    let (ok, _) = open(prim.clone(), &iv, aad, &tag, &bad_ct).unwrap();
    assert!(!ok);

    let mut bad_tag = tag.clone();
    bad_tag[0] ^= 0x01;
    let (ok, _) = open(prim.clone(), &iv, aad, &bad_tag, &ciphertext).unwrap();
    assert!(!ok);

    let (ok, _) = open(prim.clone(), &iv, b"assoc1ated", &tag, &ciphertext).unwrap();
    assert!(!ok);

    let (ok, plain) = open(prim, &iv, aad, &tag, &ciphertext).unwrap();
    assert!(ok);
    assert_eq!(plain, data);
}

#[test]
fn test_truncated_tags() {
    let prim = aes128_prim("000102030405060708090a0b0c0d0e0f");
    let iv = [2u8; 12];

    let mut stream = GcmStream::new(prim.clone(), Direction::Encrypt, &iv).unwrap();
    stream.update(b"data").unwrap();
    stream.finish().unwrap();

    let full = stream.write_tag(16).unwrap();
    let short = stream.write_tag(4).unwrap();
    assert_eq!(short, full[..4].to_vec());
    assert!(stream.check_tag(&full[..8]).unwrap());

    assert!(stream.write_tag(3).is_err());
    assert!(stream.write_tag(17).is_err());
}

#[test]
fn test_phase_rules() {
    let prim = aes128_prim("000102030405060708090a0b0c0d0e0f");
    let iv = [3u8; 12];

    // AAD after data is a usage error
    let mut stream = GcmStream::new(prim.clone(), Direction::Encrypt, &iv).unwrap();
    stream.update(b"data").unwrap();
    assert!(stream.update_ad(b"late").is_err());

    // the tag is only defined once the stream is finished
    let stream2 = GcmStream::new(prim.clone(), Direction::Encrypt, &iv).unwrap();
    assert!(stream2.write_tag(16).is_err());

    // an empty IV is rejected up front
    assert!(GcmStream::new(prim, Direction::Encrypt, &[]).is_err());
}
