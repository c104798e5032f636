use config::ConfigError as _ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required configuration value: {key}")]
    Missing { key: String },

    #[error("invalid gas price: {value:?}")]
    GasPrice { value: String },

    #[error("invalid coin: {value:?}")]
    Coin { value: String },

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },

    #[error("error parsing url")]
    UrlParse(#[from] tendermint_rpc::Error),

    #[error(transparent)]
    Config(#[from] _ConfigError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("invalid mnemonic")]
    Mnemonic,

    #[error("invalid derivation path")]
    DerivationPath,

    #[error("unable to derive account with prefix {prefix:?}")]
    AccountId { prefix: String },
}
