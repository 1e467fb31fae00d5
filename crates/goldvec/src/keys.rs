//! RSA key provisioning.
//!
//! Two independent keypairs are generated per run. Both public keys are
//! written as SubjectPublicKeyInfo PEM. Private key 1 is PKCS#8 encrypted
//! under the configured passphrase, private key 2 is plain PKCS#8.

use goldvec_core::RandomSource;
use goldvec_primitives::RsaKeyPair;
use tracing::info;

use crate::config::RsaConfig;
use crate::error::Result;

/// Number of keypairs provisioned per run.
pub const KEYPAIRS: usize = 2;

/// `pub_key<index>.pem`
pub fn public_key_file(index: usize) -> String {
    format!("pub_key{index}.pem")
}

/// `pk_key<index>.pem`
pub fn private_key_file(index: usize) -> String {
    format!("pk_key{index}.pem")
}

/// Dataset of OAEP cases under keypair `index`.
pub fn dataset_name(index: usize) -> String {
    format!("rsa{index}")
}

/// Whether keypair `index` has a passphrase-protected private key.
pub fn is_protected(index: usize) -> bool {
    index == 1
}

/// A generated keypair with its rendered PEM files.
#[derive(Debug, Clone)]
pub struct ProvisionedKey {
    /// 1-based keypair number.
    pub index: usize,
    pub pair: RsaKeyPair,
    pub public_pem: String,
    pub private_pem: String,
}

impl ProvisionedKey {
    pub fn is_protected(&self) -> bool {
        is_protected(self.index)
    }
}

/// Generate and render both keypairs.
pub fn provision<R: RandomSource>(
    config: &RsaConfig,
    rng: &mut R,
) -> Result<Vec<ProvisionedKey>> {
    let mut keys = Vec::with_capacity(KEYPAIRS);
    for index in 1..=KEYPAIRS {
        info!(index, bits = config.bits, "generating RSA keypair");
        let pair = RsaKeyPair::generate(rng, config.bits)?;
        let public_pem = pair.public_key_pem()?;
        let private_pem = if is_protected(index) {
            pair.encrypted_private_key_pem(
                rng,
                config.passphrase.as_bytes(),
                config.key_iterations,
            )?
        } else {
            pair.private_key_pem()?
        };
        keys.push(ProvisionedKey {
            index,
            pair,
            public_pem,
            private_pem,
        });
    }
    Ok(keys)
}

/// Load keypair `index` back from its private key PEM.
pub fn load_private_key(index: usize, pem: &str, passphrase: &str) -> Result<RsaKeyPair> {
    let passphrase = is_protected(index).then_some(passphrase.as_bytes());
    Ok(RsaKeyPair::from_private_key_pem(pem, passphrase)?)
}
