//! Thin client for the launchpad, cw404 and astroport contracts on a
//! [Cosmos] chain running [CosmWasm].
//!
//! Open a handle against a configured RPC endpoint, then upload, instantiate,
//! execute and query contracts through it. Deployed addresses and code ids are
//! cached in small JSON address books so later runs can refer to contracts by
//! logical name.
//!
//! [CosmWasm]: https://github.com/CosmWasm/cosmwasm
//! [Cosmos]: https://github.com/cosmos/cosmos-sdk
//!
//! # Quick Start
//!
//! ```no_run
//! use launchpad_orc::config::{Config, SigningKey};
//! use launchpad_orc::msg::cw404::QueryMsg;
//! use launchpad_orc::orchestrator::{open_signing_handle, Session};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = Config::from_env()?;
//! let key = SigningKey::from_env()?;
//!
//! let (_address, handle) = open_signing_handle(&cfg.chain_cfg, &key).await?;
//! let session = Session::open(handle, cfg.book)?;
//!
//! let supply: serde_json::Value = session.query("cw404", &QueryMsg::Supply {}).await?.data()?;
//! println!("{}", supply);
//! # Ok(())
//! # }
//! ```

pub mod client;

pub mod config;

pub mod msg;

pub mod orchestrator;
