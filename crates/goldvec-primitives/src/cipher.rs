//! Symmetric ciphers.
//!
//! Every algorithm is a unit type implementing [`Cipher`]; callers pick one
//! through [`CipherAlgorithm::cipher`]. CBC modes run without padding: the
//! drivers always feed whole blocks, so ciphertext length equals plaintext
//! length and the golden values carry no padding bytes.

use aes::Aes256;
use blowfish::Blowfish;
use chacha20::ChaCha20Legacy;
use cipher::block_padding::NoPadding;
use cipher::{
    BlockCipher, BlockDecryptMut, BlockEncryptMut, BlockSizeUser, InnerIvInit, KeyInit,
    KeyIvInit, StreamCipher,
};
use des::{Des, TdesEde3};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PrimitiveError, Result};

/// Encrypt/decrypt capability for one algorithm.
pub trait Cipher: Send + Sync {
    /// Which algorithm this is.
    fn algorithm(&self) -> CipherAlgorithm;

    /// Required key length in bytes.
    fn key_len(&self) -> usize;

    /// Required IV or nonce length in bytes.
    fn iv_len(&self) -> usize;

    /// Encrypt `plaintext` under `key` and `iv`.
    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt `ciphertext` under `key` and `iv`.
    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// The symmetric algorithms goldvec generates vectors for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherAlgorithm {
    Aes256Cbc,
    BlowfishCbc,
    TripleDesCbc,
    DesCbc,
    ChaCha20,
}

impl CipherAlgorithm {
    pub const ALL: [CipherAlgorithm; 5] = [
        Self::Aes256Cbc,
        Self::BlowfishCbc,
        Self::TripleDesCbc,
        Self::DesCbc,
        Self::ChaCha20,
    ];

    /// The implementation for this algorithm.
    pub fn cipher(self) -> &'static dyn Cipher {
        match self {
            Self::Aes256Cbc => &Aes256CbcCipher,
            Self::BlowfishCbc => &BlowfishCbcCipher,
            Self::TripleDesCbc => &TripleDesCbcCipher,
            Self::DesCbc => &DesCbcCipher,
            Self::ChaCha20 => &ChaCha20Cipher,
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Aes256Cbc => "AES-256-CBC",
            Self::BlowfishCbc => "Blowfish-CBC",
            Self::TripleDesCbc => "3DES-EDE3-CBC",
            Self::DesCbc => "DES-CBC",
            Self::ChaCha20 => "ChaCha20",
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn check_len(
    algorithm: CipherAlgorithm,
    parameter: &'static str,
    expected: usize,
    actual: usize,
) -> Result<()> {
    if expected != actual {
        return Err(PrimitiveError::UnsupportedParameter {
            algorithm: algorithm.label(),
            parameter,
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

fn check_aligned<C: BlockSizeUser>(algorithm: CipherAlgorithm, len: usize) -> Result<()> {
    let block_size = C::block_size();
    if len % block_size != 0 {
        return Err(PrimitiveError::Misaligned {
            algorithm: algorithm.label(),
            len,
            block_size,
        });
    }
    Ok(())
}

fn invalid_length(algorithm: CipherAlgorithm, parameter: &'static str, actual: usize) -> PrimitiveError {
    PrimitiveError::UnsupportedParameter {
        algorithm: algorithm.label(),
        parameter,
        expected: "a length accepted by the cipher".to_string(),
        actual,
    }
}

fn cbc_encrypt<C>(algorithm: CipherAlgorithm, key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    check_aligned::<C>(algorithm, data.len())?;
    let inner = C::new_from_slice(key).map_err(|_| invalid_length(algorithm, "key", key.len()))?;
    let encryptor = cbc::Encryptor::<C>::inner_iv_slice_init(inner, iv)
        .map_err(|_| invalid_length(algorithm, "iv", iv.len()))?;
    Ok(encryptor.encrypt_padded_vec_mut::<NoPadding>(data))
}

fn cbc_decrypt<C>(algorithm: CipherAlgorithm, key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    check_aligned::<C>(algorithm, data.len())?;
    let inner = C::new_from_slice(key).map_err(|_| invalid_length(algorithm, "key", key.len()))?;
    let decryptor = cbc::Decryptor::<C>::inner_iv_slice_init(inner, iv)
        .map_err(|_| invalid_length(algorithm, "iv", iv.len()))?;
    decryptor
        .decrypt_padded_vec_mut::<NoPadding>(data)
        .map_err(|_| PrimitiveError::Misaligned {
            algorithm: algorithm.label(),
            len: data.len(),
            block_size: C::block_size(),
        })
}

/// AES with a 256-bit key in CBC mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256CbcCipher;

impl Cipher for Aes256CbcCipher {
    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Aes256Cbc
    }

    fn key_len(&self) -> usize {
        32
    }

    fn iv_len(&self) -> usize {
        16
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        check_len(self.algorithm(), "key", self.key_len(), key.len())?;
        check_len(self.algorithm(), "iv", self.iv_len(), iv.len())?;
        cbc_encrypt::<Aes256>(self.algorithm(), key, iv, plaintext)
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_len(self.algorithm(), "key", self.key_len(), key.len())?;
        check_len(self.algorithm(), "iv", self.iv_len(), iv.len())?;
        cbc_decrypt::<Aes256>(self.algorithm(), key, iv, ciphertext)
    }
}

/// Blowfish (big-endian, 448-bit key) in CBC mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlowfishCbcCipher;

impl Cipher for BlowfishCbcCipher {
    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::BlowfishCbc
    }

    fn key_len(&self) -> usize {
        56
    }

    fn iv_len(&self) -> usize {
        8
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        check_len(self.algorithm(), "key", self.key_len(), key.len())?;
        check_len(self.algorithm(), "iv", self.iv_len(), iv.len())?;
        cbc_encrypt::<Blowfish>(self.algorithm(), key, iv, plaintext)
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_len(self.algorithm(), "key", self.key_len(), key.len())?;
        check_len(self.algorithm(), "iv", self.iv_len(), iv.len())?;
        cbc_decrypt::<Blowfish>(self.algorithm(), key, iv, ciphertext)
    }
}

/// Three-key Triple DES (EDE3) in CBC mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripleDesCbcCipher;

impl Cipher for TripleDesCbcCipher {
    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::TripleDesCbc
    }

    fn key_len(&self) -> usize {
        24
    }

    fn iv_len(&self) -> usize {
        8
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        check_len(self.algorithm(), "key", self.key_len(), key.len())?;
        check_len(self.algorithm(), "iv", self.iv_len(), iv.len())?;
        cbc_encrypt::<TdesEde3>(self.algorithm(), key, iv, plaintext)
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_len(self.algorithm(), "key", self.key_len(), key.len())?;
        check_len(self.algorithm(), "iv", self.iv_len(), iv.len())?;
        cbc_decrypt::<TdesEde3>(self.algorithm(), key, iv, ciphertext)
    }
}

/// Single DES in CBC mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesCbcCipher;

impl Cipher for DesCbcCipher {
    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::DesCbc
    }

    fn key_len(&self) -> usize {
        8
    }

    fn iv_len(&self) -> usize {
        8
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        check_len(self.algorithm(), "key", self.key_len(), key.len())?;
        check_len(self.algorithm(), "iv", self.iv_len(), iv.len())?;
        cbc_encrypt::<Des>(self.algorithm(), key, iv, plaintext)
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_len(self.algorithm(), "key", self.key_len(), key.len())?;
        check_len(self.algorithm(), "iv", self.iv_len(), iv.len())?;
        cbc_decrypt::<Des>(self.algorithm(), key, iv, ciphertext)
    }
}

/// Original (DJB) ChaCha20: 64-bit nonce, 64-bit block counter starting at 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaCha20Cipher;

impl ChaCha20Cipher {
    fn apply(&self, key: &[u8], nonce: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        check_len(self.algorithm(), "key", self.key_len(), key.len())?;
        check_len(self.algorithm(), "nonce", self.iv_len(), nonce.len())?;
        let mut stream = ChaCha20Legacy::new_from_slices(key, nonce)
            .map_err(|_| invalid_length(self.algorithm(), "nonce", nonce.len()))?;
        let mut buf = data.to_vec();
        stream.apply_keystream(&mut buf);
        Ok(buf)
    }
}

impl Cipher for ChaCha20Cipher {
    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::ChaCha20
    }

    fn key_len(&self) -> usize {
        32
    }

    fn iv_len(&self) -> usize {
        8
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        self.apply(key, iv, plaintext)
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.apply(key, iv, ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(algorithm: CipherAlgorithm, len: usize) {
        let cipher = algorithm.cipher();
        let key: Vec<u8> = (0..cipher.key_len() as u8).collect();
        let iv = vec![0x24u8; cipher.iv_len()];
        let plaintext: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();

        let ciphertext = cipher.encrypt(&key, &iv, &plaintext).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len(), "{algorithm}");
        assert_ne!(ciphertext, plaintext, "{algorithm}");

        let decrypted = cipher.decrypt(&key, &iv, &ciphertext).unwrap();
        assert_eq!(decrypted, plaintext, "{algorithm}");
    }

    #[test]
    fn test_all_ciphers_roundtrip() {
        for algorithm in CipherAlgorithm::ALL {
            roundtrip(algorithm, 16);
            roundtrip(algorithm, 1600);
        }
    }

    #[test]
    fn test_algorithm_dispatch() {
        for algorithm in CipherAlgorithm::ALL {
            assert_eq!(algorithm.cipher().algorithm(), algorithm);
        }
    }

    #[test]
    fn test_key_widths() {
        let widths: Vec<(usize, usize)> = CipherAlgorithm::ALL
            .iter()
            .map(|a| (a.cipher().key_len(), a.cipher().iv_len()))
            .collect();
        assert_eq!(widths, vec![(32, 16), (56, 8), (24, 8), (8, 8), (32, 8)]);
    }

    #[test]
    fn test_wrong_key_length_rejected() {
        let cipher = CipherAlgorithm::Aes256Cbc.cipher();
        let err = cipher.encrypt(&[0u8; 16], &[0u8; 16], &[0u8; 16]).unwrap_err();
        assert!(matches!(
            err,
            PrimitiveError::UnsupportedParameter {
                parameter: "key",
                actual: 16,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_nonce_length_rejected() {
        let cipher = CipherAlgorithm::ChaCha20.cipher();
        let err = cipher.encrypt(&[0u8; 32], &[0u8; 12], b"data").unwrap_err();
        assert!(matches!(
            err,
            PrimitiveError::UnsupportedParameter {
                parameter: "nonce",
                ..
            }
        ));
    }

    #[test]
    fn test_misaligned_cbc_input_rejected() {
        let cipher = CipherAlgorithm::DesCbc.cipher();
        let err = cipher.encrypt(&[1u8; 8], &[2u8; 8], &[0u8; 12]).unwrap_err();
        assert!(matches!(err, PrimitiveError::Misaligned { block_size: 8, .. }));
    }

    #[test]
    fn test_aes_cbc_known_answer() {
        // NIST SP 800-38A F.2.5, first block.
        let key = hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")
            .unwrap();
        let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

        let ciphertext = CipherAlgorithm::Aes256Cbc
            .cipher()
            .encrypt(&key, &iv, &plaintext)
            .unwrap();
        assert_eq!(hex::encode(ciphertext), "f58c4c04d6e5f1ba779eabfb5f7bfbd6");
    }

    #[test]
    fn test_cbc_chains_blocks() {
        let cipher = CipherAlgorithm::Aes256Cbc.cipher();
        let key = [9u8; 32];
        let iv = [3u8; 16];
        let ciphertext = cipher.encrypt(&key, &iv, &[0u8; 32]).unwrap();
        // Identical plaintext blocks must not give identical ciphertext blocks.
        assert_ne!(ciphertext[..16], ciphertext[16..]);
    }
}
