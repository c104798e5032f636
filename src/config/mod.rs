pub mod cfg;

pub mod key;

pub mod error;

pub use cfg::{BookCfg, ChainCfg, Coin, Config, GasPrice};
pub use key::{Key, SigningKey};
