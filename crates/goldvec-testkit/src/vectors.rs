//! Published known-answer vectors.
//!
//! These pin the primitives behind every dataset to outputs taken from
//! FIPS 180, RFC 1321, FIPS 202, RFC 6070, NIST SP 800-38A and the
//! ChaCha20 reference. A toolkit that disagrees with one of these will
//! disagree with the generated datasets too.

use goldvec_primitives::{pbkdf2_hmac_sha1, CipherAlgorithm, HashAlgorithm, PaddingScheme};

/// A digest known answer.
#[derive(Debug, Clone, Copy)]
pub struct HashVector {
    pub name: &'static str,
    pub algorithm: HashAlgorithm,
    pub input: &'static [u8],
    /// Expected digest (hex).
    pub digest: &'static str,
}

/// A PBKDF2-HMAC-SHA1 known answer.
#[derive(Debug, Clone, Copy)]
pub struct Pbkdf2Vector {
    pub name: &'static str,
    pub password: &'static [u8],
    pub salt: &'static [u8],
    pub iterations: u32,
    /// Expected key (hex); its length is the derived key length.
    pub key: &'static str,
}

/// A single-call cipher known answer. All fields are hex.
#[derive(Debug, Clone, Copy)]
pub struct CipherVector {
    pub name: &'static str,
    pub algorithm: CipherAlgorithm,
    pub key: &'static str,
    pub iv: &'static str,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

/// A deterministic padding answer. ISO 10126 fills with random bytes and
/// has no fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct PaddingVector {
    pub name: &'static str,
    pub scheme: PaddingScheme,
    /// Input (hex).
    pub input: &'static str,
    /// Full padded buffer (hex).
    pub padded: &'static str,
}

pub fn hash_vectors() -> Vec<HashVector> {
    vec![
        HashVector {
            name: "SHA-1 empty",
            algorithm: HashAlgorithm::Sha1,
            input: b"",
            digest: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        },
        HashVector {
            name: "SHA-1 abc",
            algorithm: HashAlgorithm::Sha1,
            input: b"abc",
            digest: "a9993e364706816aba3e25717850c26c9cd0d89d",
        },
        HashVector {
            name: "SHA-256 empty",
            algorithm: HashAlgorithm::Sha256,
            input: b"",
            digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        },
        HashVector {
            name: "SHA-256 abc",
            algorithm: HashAlgorithm::Sha256,
            input: b"abc",
            digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        },
        HashVector {
            name: "SHA-512 abc",
            algorithm: HashAlgorithm::Sha512,
            input: b"abc",
            digest: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                     2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        },
        HashVector {
            name: "MD5 empty",
            algorithm: HashAlgorithm::Md5,
            input: b"",
            digest: "d41d8cd98f00b204e9800998ecf8427e",
        },
        HashVector {
            name: "MD5 abc",
            algorithm: HashAlgorithm::Md5,
            input: b"abc",
            digest: "900150983cd24fb0d6963f7d28e17f72",
        },
        HashVector {
            name: "SHA3-512 empty",
            algorithm: HashAlgorithm::Sha3_512,
            input: b"",
            digest: "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6\
                     15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
        },
        HashVector {
            name: "SHA3-512 abc",
            algorithm: HashAlgorithm::Sha3_512,
            input: b"abc",
            digest: "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
                     10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
        },
    ]
}

/// RFC 6070 test vectors.
pub fn pbkdf2_vectors() -> Vec<Pbkdf2Vector> {
    vec![
        Pbkdf2Vector {
            name: "RFC 6070 c=1",
            password: b"password",
            salt: b"salt",
            iterations: 1,
            key: "0c60c80f961f0e71f3a9b524af6012062fe037a6",
        },
        Pbkdf2Vector {
            name: "RFC 6070 c=2",
            password: b"password",
            salt: b"salt",
            iterations: 2,
            key: "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957",
        },
        Pbkdf2Vector {
            name: "RFC 6070 c=4096",
            password: b"password",
            salt: b"salt",
            iterations: 4096,
            key: "4b007901b765489abead49d926f721d065a429c1",
        },
    ]
}

pub fn cipher_vectors() -> Vec<CipherVector> {
    vec![
        CipherVector {
            name: "SP 800-38A F.2.5 block 1",
            algorithm: CipherAlgorithm::Aes256Cbc,
            key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
            iv: "000102030405060708090a0b0c0d0e0f",
            plaintext: "6bc1bee22e409f96e93d7e117393172a",
            ciphertext: "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
        },
        CipherVector {
            name: "ChaCha20 zero key, zero nonce",
            algorithm: CipherAlgorithm::ChaCha20,
            key: "0000000000000000000000000000000000000000000000000000000000000000",
            iv: "0000000000000000",
            plaintext: "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
            ciphertext: "76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1aa836efcc8b770dc7da41597c5157488d7724e03fb8d84a376a43b8f41518a11cc387b669b2ee6586",
        },
    ]
}

pub fn padding_vectors() -> Vec<PaddingVector> {
    vec![
        PaddingVector {
            name: "PKCS#7 abc",
            scheme: PaddingScheme::Pkcs7,
            input: "616263",
            padded: "6162630d0d0d0d0d0d0d0d0d0d0d0d0d",
        },
        PaddingVector {
            name: "PKCS#7 full block",
            scheme: PaddingScheme::Pkcs7,
            input: "000102030405060708090a0b0c0d0e0f",
            padded: "000102030405060708090a0b0c0d0e0f10101010101010101010101010101010",
        },
        PaddingVector {
            name: "ISO/IEC 7816-4 abc",
            scheme: PaddingScheme::Iso7816,
            input: "616263",
            padded: "61626380000000000000000000000000",
        },
        PaddingVector {
            name: "ANSI X9.23 abc",
            scheme: PaddingScheme::AnsiX923,
            input: "616263",
            padded: "6162630000000000000000000000000d",
        },
    ]
}

fn decode(text: &str) -> Vec<u8> {
    hex::decode(text).unwrap_or_default()
}

fn cipher_output(v: &CipherVector) -> String {
    v.algorithm
        .cipher()
        .encrypt(&decode(v.key), &decode(v.iv), &decode(v.plaintext))
        .map(hex::encode)
        .unwrap_or_else(|e| e.to_string())
}

fn padding_output(v: &PaddingVector) -> String {
    v.scheme
        .pad(&decode(v.input), &mut rand::thread_rng())
        .map(hex::encode)
        .unwrap_or_else(|e| e.to_string())
}

fn pbkdf2_output(v: &Pbkdf2Vector) -> String {
    pbkdf2_hmac_sha1(v.password, v.salt, v.iterations, v.key.len() / 2)
        .map(hex::encode)
        .unwrap_or_else(|e| e.to_string())
}

/// Run every vector against the primitives.
///
/// Returns `(name, matches, actual)` per vector, where `actual` is the hex
/// output (or the error text).
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let mut results = Vec::new();
    for v in hash_vectors() {
        let actual = hex::encode(v.algorithm.digest(v.input));
        results.push((v.name.to_string(), actual == v.digest, actual));
    }
    for v in pbkdf2_vectors() {
        let actual = pbkdf2_output(&v);
        results.push((v.name.to_string(), actual == v.key, actual));
    }
    for v in cipher_vectors() {
        let actual = cipher_output(&v);
        results.push((v.name.to_string(), actual == v.ciphertext, actual));
    }
    for v in padding_vectors() {
        let actual = padding_output(&v);
        results.push((v.name.to_string(), actual == v.padded, actual));
    }
    results
}
