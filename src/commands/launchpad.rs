use anyhow::{Context, Result};
use cosmwasm_std::{Uint128, Uint64};
use launchpad_orc::config::Coin;
use launchpad_orc::msg::cw404::MintGroup;
use launchpad_orc::msg::launchpad::{ExecuteMsg, QueryMsg};

use super::{execute, load_config, parse_proof, query, resolve, signing_session};
use crate::cli::{Cli, LaunchpadCommand};

pub async fn run(cli: &Cli, contract: &str, cmd: &LaunchpadCommand) -> Result<()> {
    let cfg = load_config(cli)?;
    let denom = cfg.chain_cfg.denom.as_str();

    match cmd {
        LaunchpadCommand::Config => query(&cfg, contract, &QueryMsg::Config {}).await,
        LaunchpadCommand::Coins => query(&cfg, contract, &QueryMsg::Coins {}).await,
        LaunchpadCommand::CoinsByCreator { creator } => {
            let msg = QueryMsg::CoinsByCreator {
                creator_addr: creator.clone(),
            };
            query(&cfg, contract, &msg).await
        }
        LaunchpadCommand::Collection { contract_addr } => {
            let msg = QueryMsg::Cw404CollectionByContract {
                contract_addr: contract_addr.clone(),
            };
            query(&cfg, contract, &msg).await
        }
        LaunchpadCommand::Token { subdenom } => {
            let msg = QueryMsg::Token {
                subdenom: subdenom.clone(),
            };
            query(&cfg, contract, &msg).await
        }

        LaunchpadCommand::CreateCoin {
            denom: meta,
            supply,
            max_supply,
            mutable,
            liquidity,
        } => {
            let session = signing_session(&cfg).await?;
            let msg = ExecuteMsg::CreateCoin {
                immutable: !mutable,
                initial_supply_in_denom: Uint128::new(*supply),
                max_supply_in_denom: Uint128::new(max_supply.unwrap_or(*supply)),
                subdenom: meta.subdenom.clone(),
                denom_description: meta.description.clone(),
                denom_name: meta.name.clone(),
                denom_symbol: meta.symbol.clone(),
                denom_uri: meta.uri.clone(),
                denom_uri_hash: meta.uri_hash.clone(),
            };
            // the attached chain denom seeds the pool
            let funds = vec![Coin::new(*liquidity, denom)];
            execute(cli, &cfg, &session, contract, &msg, funds).await
        }
        LaunchpadCommand::CreateCollection {
            denom: meta,
            max_nft_supply,
            royalty_percentage,
            royalty_address,
            mint_groups,
            fee,
        } => {
            let mint_groups = parse_mint_groups(mint_groups)?;
            let session = signing_session(&cfg).await?;
            let msg = ExecuteMsg::CreateCw404Collection {
                royalty_payment_address: royalty_address
                    .clone()
                    .unwrap_or_else(|| session.sender().to_string()),
                royalty_percentage: Uint64::new(*royalty_percentage),
                max_nft_supply: Uint128::new(*max_nft_supply),
                subdenom: meta.subdenom.clone(),
                denom_description: meta.description.clone(),
                denom_name: meta.name.clone(),
                denom_symbol: meta.symbol.clone(),
                denom_uri: meta.uri.clone(),
                denom_uri_hash: meta.uri_hash.clone(),
                mint_groups,
            };
            execute(cli, &cfg, &session, contract, &msg, fee_funds(*fee, denom)).await
        }
        LaunchpadCommand::MintFt {
            collection,
            amount,
            mint_group,
            recipient,
            proof,
            fee,
        } => {
            let session = signing_session(&cfg).await?;
            let msg = ExecuteMsg::MintFt {
                collection_addr: resolve(&session.address_book, &cfg.chain_cfg.prefix, collection)?,
                amount: Uint128::new(*amount),
                recipient: recipient
                    .clone()
                    .unwrap_or_else(|| session.sender().to_string()),
                mint_group_name: mint_group.clone(),
                merkle_proof: parse_proof(proof)?,
            };
            execute(cli, &cfg, &session, contract, &msg, fee_funds(*fee, denom)).await
        }
    }
}

fn fee_funds(fee: u64, denom: &str) -> Vec<Coin> {
    if fee == 0 {
        vec![]
    } else {
        vec![Coin::new(fee, denom)]
    }
}

fn parse_mint_groups(raw: &str) -> Result<Vec<MintGroup>> {
    serde_json::from_str(raw).with_context(|| format!("invalid mint groups: {}", raw))
}
