//! Dataset categories.

use goldvec_primitives::{CipherAlgorithm, HashAlgorithm, PaddingScheme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One selectable unit of generation. Every category produces one dataset,
/// except [`Category::Rsa`] which provisions two keypairs and one dataset
/// per keypair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "aes")]
    Aes,
    #[serde(rename = "blowfish")]
    Blowfish,
    #[serde(rename = "tripledes")]
    TripleDes,
    #[serde(rename = "des")]
    Des,
    #[serde(rename = "chacha20")]
    ChaCha20,
    #[serde(rename = "sha1")]
    Sha1,
    #[serde(rename = "sha256")]
    Sha256,
    #[serde(rename = "sha512")]
    Sha512,
    #[serde(rename = "md5")]
    Md5,
    #[serde(rename = "sha3_512")]
    Sha3_512,
    #[serde(rename = "pkcs7")]
    Pkcs7,
    #[serde(rename = "iso10126")]
    Iso10126,
    #[serde(rename = "iso7816")]
    Iso7816,
    #[serde(rename = "ansix923")]
    AnsiX923,
    #[serde(rename = "pbkdf2")]
    Pbkdf2,
    #[serde(rename = "rsa")]
    Rsa,
    #[serde(rename = "hex_base64")]
    HexBase64,
}

/// What kind of driver a category runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Cipher(CipherAlgorithm),
    Hash(HashAlgorithm),
    Padding(PaddingScheme),
    Kdf,
    Rsa,
    Encoding,
}

impl Category {
    pub const ALL: [Category; 17] = [
        Self::Aes,
        Self::Blowfish,
        Self::TripleDes,
        Self::Des,
        Self::ChaCha20,
        Self::Sha1,
        Self::Sha256,
        Self::Sha512,
        Self::Md5,
        Self::Sha3_512,
        Self::Pkcs7,
        Self::Iso10126,
        Self::Iso7816,
        Self::AnsiX923,
        Self::Pbkdf2,
        Self::Rsa,
        Self::HexBase64,
    ];

    /// Dataset and file stem, e.g. `tripledes` for `tripledes.csv`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Aes => "aes",
            Self::Blowfish => "blowfish",
            Self::TripleDes => "tripledes",
            Self::Des => "des",
            Self::ChaCha20 => "chacha20",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Md5 => "md5",
            Self::Sha3_512 => "sha3_512",
            Self::Pkcs7 => "pkcs7",
            Self::Iso10126 => "iso10126",
            Self::Iso7816 => "iso7816",
            Self::AnsiX923 => "ansix923",
            Self::Pbkdf2 => "pbkdf2",
            Self::Rsa => "rsa",
            Self::HexBase64 => "hex_base64",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Self::Aes => Family::Cipher(CipherAlgorithm::Aes256Cbc),
            Self::Blowfish => Family::Cipher(CipherAlgorithm::BlowfishCbc),
            Self::TripleDes => Family::Cipher(CipherAlgorithm::TripleDesCbc),
            Self::Des => Family::Cipher(CipherAlgorithm::DesCbc),
            Self::ChaCha20 => Family::Cipher(CipherAlgorithm::ChaCha20),
            Self::Sha1 => Family::Hash(HashAlgorithm::Sha1),
            Self::Sha256 => Family::Hash(HashAlgorithm::Sha256),
            Self::Sha512 => Family::Hash(HashAlgorithm::Sha512),
            Self::Md5 => Family::Hash(HashAlgorithm::Md5),
            Self::Sha3_512 => Family::Hash(HashAlgorithm::Sha3_512),
            Self::Pkcs7 => Family::Padding(PaddingScheme::Pkcs7),
            Self::Iso10126 => Family::Padding(PaddingScheme::Iso10126),
            Self::Iso7816 => Family::Padding(PaddingScheme::Iso7816),
            Self::AnsiX923 => Family::Padding(PaddingScheme::AnsiX923),
            Self::Pbkdf2 => Family::Kdf,
            Self::Rsa => Family::Rsa,
            Self::HexBase64 => Family::Encoding,
        }
    }

    /// One-line description for `goldvec list`.
    pub fn description(self) -> String {
        match self.family() {
            Family::Cipher(algorithm) => format!("{algorithm} encryption, no padding"),
            Family::Hash(algorithm) => format!("{algorithm} digests"),
            Family::Padding(scheme) => format!("{scheme} padding to 16-byte blocks"),
            Family::Kdf => "PBKDF2-HMAC-SHA1 derived keys".to_string(),
            Family::Rsa => "RSA keypairs (PEM) and OAEP-SHA1 ciphertexts".to_string(),
            Family::Encoding => "hex and base64 encodings".to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace('-', "_");
        let alias = match wanted.as_str() {
            "3des" | "triple_des" => Some(Self::TripleDes),
            "sha3" => Some(Self::Sha3_512),
            "x923" | "ansi_x923" => Some(Self::AnsiX923),
            "hex" | "base64" => Some(Self::HexBase64),
            _ => None,
        };
        alias
            .or_else(|| Self::ALL.into_iter().find(|c| c.name() == wanted))
            .ok_or_else(|| format!("unknown category '{s}' (see `goldvec list`)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("3DES".parse::<Category>().unwrap(), Category::TripleDes);
        assert_eq!("sha3-512".parse::<Category>().unwrap(), Category::Sha3_512);
        assert_eq!("hex-base64".parse::<Category>().unwrap(), Category::HexBase64);
        assert!("rc4".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.name()));
        }
    }

    #[test]
    fn test_families() {
        assert_eq!(
            Category::ChaCha20.family(),
            Family::Cipher(CipherAlgorithm::ChaCha20)
        );
        assert_eq!(Category::AnsiX923.family(), Family::Padding(PaddingScheme::AnsiX923));
        assert_eq!(Category::Pbkdf2.family(), Family::Kdf);
    }
}
