use config::Config as _Config;
use cosmrs::{bip32, crypto::secp256k1, AccountId};
use std::fmt;

use super::error::{ConfigError, CredentialError};

// https://github.com/confio/cosmos-hd-key-derivation-spec#the-cosmos-hub-path
const DERIVATION_PATH: &str = "m/44'/118'/0'/0/0";

#[derive(Clone)]
pub struct SigningKey {
    /// human readable key name
    pub name: String,
    /// private key associated with `name`
    pub key: Key,
}

#[derive(Clone)]
pub enum Key {
    /// Mnemonic allows you to pass the private key mnemonic words
    /// for configuring a transaction signing key.
    /// DO NOT USE FOR MAINNET
    Mnemonic(String),
}

// key material must never end up in logs
impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("name", &self.name)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl SigningKey {
    pub fn from_mnemonic<S: Into<String>>(name: S, phrase: S) -> Self {
        Self {
            name: name.into(),
            key: Key::Mnemonic(phrase.into()),
        }
    }

    /// Reads the `MNEMONIC` environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = _Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let phrase = settings
            .get_string("mnemonic")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing {
                key: "MNEMONIC".to_string(),
            })?;

        Ok(Self::from_mnemonic("default".to_string(), phrase))
    }

    /// Derives the bech32 account address for `prefix`.
    pub fn to_account(&self, prefix: &str) -> Result<AccountId, CredentialError> {
        let key: secp256k1::SigningKey = self.try_into()?;
        key.public_key()
            .account_id(prefix)
            .map_err(|_| CredentialError::AccountId {
                prefix: prefix.to_string(),
            })
    }
}

impl TryFrom<&SigningKey> for secp256k1::SigningKey {
    type Error = CredentialError;

    fn try_from(signer: &SigningKey) -> Result<secp256k1::SigningKey, CredentialError> {
        match &signer.key {
            Key::Mnemonic(phrase) => {
                // any BIP-39 length (12 to 24 words)
                let seed = bip39::Mnemonic::parse_in(bip39::Language::English, phrase.trim())
                    .map_err(|_| CredentialError::Mnemonic)?
                    .to_seed("");
                let path = DERIVATION_PATH
                    .parse()
                    .map_err(|_| CredentialError::DerivationPath)?;

                Ok(bip32::XPrv::derive_from_path(seed, &path)
                    .map_err(|_| CredentialError::DerivationPath)?
                    .into())
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // 256 bits of zero entropy
    pub(crate) const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

    pub(crate) fn test_key() -> SigningKey {
        SigningKey::from_mnemonic("test", TEST_MNEMONIC)
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = test_key().to_account("neutron").unwrap();
        let b = test_key().to_account("neutron").unwrap();

        assert_eq!(a, b);
        assert!(a.to_string().starts_with("neutron1"));
    }

    #[test]
    fn prefix_changes_the_address_not_the_key() {
        let ntrn = test_key().to_account("neutron").unwrap();
        let osmo = test_key().to_account("osmo").unwrap();

        assert_ne!(ntrn.to_string(), osmo.to_string());
        assert_eq!(ntrn.to_bytes(), osmo.to_bytes());
    }

    #[test]
    fn twelve_word_mnemonic_derives_the_hub_address() {
        let key = SigningKey::from_mnemonic(
            "short",
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        );

        assert_eq!(
            key.to_account("cosmos").unwrap().to_string(),
            "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4"
        );
    }

    #[test]
    fn bad_checksum_is_a_credential_error() {
        // valid words, last word breaks the checksum
        let key = SigningKey::from_mnemonic(
            "bad",
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon",
        );
        assert_eq!(
            key.to_account("cosmos").unwrap_err(),
            CredentialError::Mnemonic
        );
    }

    #[test]
    fn malformed_mnemonic_is_a_credential_error() {
        let key = SigningKey::from_mnemonic("bad", "not a real mnemonic phrase");
        assert_eq!(
            key.to_account("neutron").unwrap_err(),
            CredentialError::Mnemonic
        );
    }

    #[test]
    fn debug_output_hides_the_mnemonic() {
        let out = format!("{:?}", test_key());
        assert!(!out.contains("abandon"));
        assert!(out.contains("test"));
    }
}
