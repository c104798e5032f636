use anyhow::Result;
use launchpad_orc::config::Coin;

use super::{load_config, parse_json, signing_session};
use crate::cli::Cli;

pub async fn query(cli: &Cli, contract: &str, msg: &str) -> Result<()> {
    let cfg = load_config(cli)?;
    let msg = parse_json(msg)?;

    super::query(&cfg, contract, &msg).await
}

pub async fn execute(cli: &Cli, contract: &str, msg: &str, funds: Vec<Coin>) -> Result<()> {
    let cfg = load_config(cli)?;
    let msg = parse_json(msg)?;

    let session = signing_session(&cfg).await?;
    super::execute(cli, &cfg, &session, contract, &msg, funds).await
}
