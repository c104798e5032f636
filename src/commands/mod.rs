pub mod astroport;
pub mod bank;
pub mod contract;
pub mod cw404;
pub mod deploy;
pub mod launchpad;

use anyhow::{Context, Result};
use launchpad_orc::client::{CosmWasmClient, ExecResponse, QueryResponse, SigningCosmWasmClient};
use launchpad_orc::config::{Coin, Config, SigningKey};
use launchpad_orc::orchestrator::{
    invoker, open_query_handle, open_signing_handle, AddressBook, Session,
};
use serde::Serialize;
use serde_json::Value;

use crate::cli::Cli;

/// Chain settings from `--config` if given, the environment otherwise.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let cfg = match &cli.config {
        Some(path) => {
            let path = path.to_string_lossy();
            Config::from_yaml(&path).with_context(|| format!("loading {}", path))?
        }
        None => Config::from_env().context("loading chain settings from the environment")?,
    };
    Ok(cfg)
}

pub async fn signing_session(cfg: &Config) -> Result<Session<SigningCosmWasmClient>> {
    let key = SigningKey::from_env()?;
    let (_, handle) = open_signing_handle(&cfg.chain_cfg, &key).await?;

    Ok(Session::open(handle, cfg.book.clone())?)
}

pub async fn query_handle(cfg: &Config) -> Result<(CosmWasmClient, AddressBook)> {
    let handle = open_query_handle(&cfg.chain_cfg).await?;
    let book = AddressBook::load_or_default(&cfg.book.address_book)?;

    Ok((handle, book))
}

/// Address of the `MNEMONIC` account, derived offline.
pub fn signer_address(cfg: &Config) -> Result<String> {
    let key = SigningKey::from_env()?;
    Ok(key.to_account(&cfg.chain_cfg.prefix)?.to_string())
}

/// Accepts either a bech32 address under `prefix` or a logical book name.
pub fn resolve(book: &AddressBook, prefix: &str, contract: &str) -> Result<String> {
    if contract.starts_with(&format!("{}1", prefix)) {
        return Ok(contract.to_string());
    }
    Ok(book.address(contract)?.to_string())
}

/// Resolves `contract`, runs a smart query and prints the answer.
pub async fn query<T: Serialize + ?Sized>(cfg: &Config, contract: &str, msg: &T) -> Result<()> {
    let (handle, book) = query_handle(cfg).await?;
    let contract = resolve(&book, &cfg.chain_cfg.prefix, contract)?;

    print_json(&invoker::query(&handle, &contract, msg).await?)
}

/// Resolves `contract`, executes `msg` as the session signer and prints the tx hash.
pub async fn execute<T: Serialize + ?Sized>(
    cli: &Cli,
    cfg: &Config,
    session: &Session<SigningCosmWasmClient>,
    contract: &str,
    msg: &T,
    funds: Vec<Coin>,
) -> Result<()> {
    let contract = resolve(&session.address_book, &cfg.chain_cfg.prefix, contract)?;

    let res = invoker::execute(
        session.handle(),
        session.sender(),
        &contract,
        msg,
        funds,
        &cli.memo,
    )
    .await?;

    print_tx(&res);
    Ok(())
}

pub fn parse_json(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("invalid JSON message: {}", raw))
}

pub fn parse_proof(proof: &[String]) -> Result<Option<Vec<Vec<u8>>>> {
    if proof.is_empty() {
        return Ok(None);
    }

    let proof = proof
        .iter()
        .map(|p| hex::decode(p.trim_start_matches("0x")).with_context(|| format!("bad proof {}", p)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(proof))
}

pub fn print_json(res: &QueryResponse) -> Result<()> {
    let value: Value = res.data()?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

pub fn print_tx(res: &ExecResponse) {
    println!("{}", res.tx_hash);
}
