use anyhow::{Context, Result};
use cosmwasm_std::Decimal;
use launchpad_orc::client::CosmWasmClient;
use launchpad_orc::config::{Coin, Config};
use launchpad_orc::msg::astroport::{
    native_asset, Asset, ExecuteMsg, QueryMsg, SimulationResponse,
};
use launchpad_orc::msg::launchpad::{QueryMsg as LaunchpadQuery, TokenResponse};
use launchpad_orc::orchestrator::{invoker, AddressBook};
use log::info;
use std::str::FromStr;

use super::{execute, load_config, query_handle, resolve, signing_session};
use crate::cli::{AstroportCommand, Cli};

pub async fn run(cli: &Cli, launchpad: &str, cmd: &AstroportCommand) -> Result<()> {
    let cfg = load_config(cli)?;
    let (handle, book) = query_handle(&cfg).await?;

    match cmd {
        AstroportCommand::Simulate { subdenom, amount } => {
            let pair = pair_address(&cfg, &handle, &book, launchpad, subdenom).await?;
            let offer_asset = native_asset(&cfg.chain_cfg.denom, (*amount).into());
            let sim = simulate(&handle, &pair, offer_asset).await?;
            println!("{}", serde_json::to_string_pretty(&sim)?);
            Ok(())
        }
        AstroportCommand::Swap {
            subdenom,
            amount,
            max_spread,
        } => {
            let max_spread = Decimal::from_str(max_spread)
                .with_context(|| format!("invalid max spread {}", max_spread))?;

            let pair = pair_address(&cfg, &handle, &book, launchpad, subdenom).await?;
            let offer_asset = native_asset(&cfg.chain_cfg.denom, (*amount).into());

            let sim = simulate(&handle, &pair, offer_asset.clone()).await?;
            info!(
                "expecting {} back, spread {}",
                sim.return_amount, sim.spread_amount
            );

            let session = signing_session(&cfg).await?;
            let msg = ExecuteMsg::Swap {
                offer_asset,
                belief_price: None,
                max_spread: Some(max_spread),
                to: None,
            };
            // the offered native amount travels as funds
            let funds = vec![Coin::new(*amount, &cfg.chain_cfg.denom)];
            execute(cli, &cfg, &session, &pair, &msg, funds).await
        }
    }
}

/// Looks up the astroport pair the launchpad created for `subdenom`.
async fn pair_address(
    cfg: &Config,
    handle: &CosmWasmClient,
    book: &AddressBook,
    launchpad: &str,
    subdenom: &str,
) -> Result<String> {
    let launchpad = resolve(book, &cfg.chain_cfg.prefix, launchpad)?;
    let msg = LaunchpadQuery::Token {
        subdenom: subdenom.to_string(),
    };

    let token: TokenResponse = invoker::query(handle, &launchpad, &msg).await?.data()?;
    let pair = token.token_info.astroport_pair_info;
    info!("pool {} lp token {}", pair.contract_addr, pair.liquidity_token);

    Ok(pair.contract_addr)
}

async fn simulate(
    handle: &CosmWasmClient,
    pair: &str,
    offer_asset: Asset,
) -> Result<SimulationResponse> {
    let msg = QueryMsg::Simulation { offer_asset };
    Ok(invoker::query(handle, pair, &msg).await?.data()?)
}
