use config::Config as _Config;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tendermint_rpc::Url;

use super::error::ConfigError;
use crate::client::error::ClientError;

const DEFAULT_GAS_PRICE: f64 = 0.04;
const DEFAULT_GAS_ADJUSTMENT: f64 = 1.3;

/// Everything a process needs to talk to the chain, built once at startup
/// and handed to the connection factory by reference.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub chain_cfg: ChainCfg,
    // where the deployed contract addresses and code ids are cached
    #[serde(default)]
    pub book: BookCfg,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChainCfg {
    /// fee denomination, e.g. `untrn`
    pub denom: String,
    /// bech32 account prefix, e.g. `neutron`
    pub prefix: String,
    pub chain_id: String,
    pub rpc_endpoint: String,
    /// price of one unit of gas in `denom`
    pub gas_prices: f64,
    /// multiplier applied to the simulated gas usage
    pub gas_adjustment: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BookCfg {
    pub address_book: PathBuf,
    pub code_ids: PathBuf,
}

impl Default for BookCfg {
    fn default() -> Self {
        Self {
            address_book: PathBuf::from("scripts/contract_addresses.json"),
            code_ids: PathBuf::from("scripts/code_ids.json"),
        }
    }
}

impl Config {
    pub fn from_yaml(file: &str) -> Result<Config, ConfigError> {
        let settings = _Config::builder()
            .add_source(config::File::with_name(file))
            .build()?;

        let mut cfg = settings.try_deserialize::<Config>()?;
        cfg.chain_cfg.rpc_endpoint = parse_url(&cfg.chain_cfg.rpc_endpoint)?;
        check_gas_factor("GAS_PRICE", cfg.chain_cfg.gas_prices)?;
        check_gas_factor("GAS_ADJUSTMENT", cfg.chain_cfg.gas_adjustment)?;

        Ok(cfg)
    }

    /// Reads `RPC_ENDPOINT`, `CHAIN_ID`, `CHAIN_PREFIX` and `CHAIN_DENOM` from the
    /// process environment. `GAS_PRICE`, `GAS_ADJUSTMENT`, `ADDRESS_BOOK` and
    /// `CODE_IDS` are optional.
    pub fn from_env() -> Result<Config, ConfigError> {
        let settings = _Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Self::from_settings(&settings)
    }

    fn from_settings(settings: &_Config) -> Result<Config, ConfigError> {
        let required = |key: &str| {
            settings
                .get_string(key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::Missing {
                    key: key.to_uppercase(),
                })
        };
        let optional = |key: &str| settings.get_string(key).ok();

        let denom = required("chain_denom")?;

        // plain `0.04` or cosmjs style `0.04untrn`
        let gas_prices = match optional("gas_price") {
            Some(v) if v.trim().parse::<f64>().is_err() => {
                let price: GasPrice = v.parse()?;
                if price.denom != denom {
                    return Err(ConfigError::Invalid {
                        key: "GAS_PRICE".to_string(),
                        value: v,
                    });
                }
                price.amount
            }
            Some(v) => parse_f64("GAS_PRICE", &v)?,
            None => DEFAULT_GAS_PRICE,
        };
        let gas_adjustment = match optional("gas_adjustment") {
            Some(v) => parse_f64("GAS_ADJUSTMENT", &v)?,
            None => DEFAULT_GAS_ADJUSTMENT,
        };

        let mut book = BookCfg::default();
        if let Some(path) = optional("address_book") {
            book.address_book = path.into();
        }
        if let Some(path) = optional("code_ids") {
            book.code_ids = path.into();
        }

        Ok(Config {
            chain_cfg: ChainCfg {
                rpc_endpoint: parse_url(&required("rpc_endpoint")?)?,
                chain_id: required("chain_id")?,
                prefix: required("chain_prefix")?,
                denom,
                gas_prices,
                gas_adjustment,
            },
            book,
        })
    }
}

fn parse_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    let v = value.trim().parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    check_gas_factor(key, v)
}

// fees are computed as `ceil(gas * factor) as u64`, which saturates silently
fn check_gas_factor(key: &str, v: f64) -> Result<f64, ConfigError> {
    if !v.is_finite() || v < 0.0 {
        return Err(ConfigError::Invalid {
            key: key.to_string(),
            value: v.to_string(),
        });
    }
    Ok(v)
}

// Attempt to parse the configured url to ensure that it is valid.
// If url is missing the Scheme then default to https.
pub(crate) fn parse_url(url: &str) -> Result<String, ConfigError> {
    let url = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    };

    Ok(Url::from_str(&url)?.to_string())
}

/// Gas price in the cosmjs notation, e.g. `0.04untrn`.
#[derive(Debug, Clone, PartialEq)]
pub struct GasPrice {
    pub amount: f64,
    pub denom: String,
}

impl FromStr for GasPrice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ConfigError::GasPrice {
            value: s.to_string(),
        };

        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(err)?;
        let (amount, denom) = s.split_at(split);

        let amount: f64 = amount.parse().map_err(|_| err())?;
        if !amount.is_finite() || amount < 0.0 || !is_denom(denom) {
            return Err(err());
        }

        Ok(GasPrice {
            amount,
            denom: denom.to_string(),
        })
    }
}

impl fmt::Display for GasPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl ChainCfg {
    pub fn gas_price(&self) -> GasPrice {
        GasPrice {
            amount: self.gas_prices,
            denom: self.denom.clone(),
        }
    }
}

/// Tokens attached to a contract call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Coin {
    pub denom: String,
    pub amount: u64,
}

impl Coin {
    pub fn new<S: Into<String>>(amount: u64, denom: S) -> Self {
        Coin {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = ConfigError;

    /// Parses `1000untrn` or `5factory/neutron1.../ubad404`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ConfigError::Coin {
            value: s.to_string(),
        };

        let s = s.trim();
        let split = s.find(|c: char| !c.is_ascii_digit()).ok_or_else(err)?;
        let (amount, denom) = s.split_at(split);

        if !is_denom(denom) {
            return Err(err());
        }

        Ok(Coin {
            amount: amount.parse().map_err(|_| err())?,
            denom: denom.to_string(),
        })
    }
}

impl TryFrom<Coin> for cosmrs::Coin {
    type Error = ClientError;

    fn try_from(coin: Coin) -> Result<Self, Self::Error> {
        Ok(cosmrs::Coin {
            denom: coin
                .denom
                .parse()
                .map_err(|_| ClientError::Denom { name: coin.denom })?,
            amount: coin.amount.into(),
        })
    }
}

fn is_denom(denom: &str) -> bool {
    denom
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic())
}
