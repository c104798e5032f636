use anyhow::Result;
use cosmwasm_std::{Binary, Uint128};
use launchpad_orc::msg::cw404::{ExecuteMsg, QueryMsg};

use super::{execute, load_config, parse_json, parse_proof, query, signer_address, signing_session};
use crate::cli::{Cli, Cw404Command};

pub async fn run(cli: &Cli, contract: &str, cmd: &Cw404Command) -> Result<()> {
    let cfg = load_config(cli)?;

    let msg = match cmd {
        Cw404Command::Config => return query(&cfg, contract, &QueryMsg::Config {}).await,
        Cw404Command::Supply => return query(&cfg, contract, &QueryMsg::Supply {}).await,
        Cw404Command::NumTokens => return query(&cfg, contract, &QueryMsg::NumTokens {}).await,
        Cw404Command::ContractInfo => {
            return query(&cfg, contract, &QueryMsg::ContractInfo {}).await
        }
        Cw404Command::Balance { owner } => {
            let owner = match owner {
                Some(owner) => owner.clone(),
                None => signer_address(&cfg)?,
            };
            return query(&cfg, contract, &QueryMsg::Balance { owner }).await;
        }
        Cw404Command::NftInfo { token_id } => {
            let msg = QueryMsg::NftInfo {
                token_id: token_id.clone(),
            };
            return query(&cfg, contract, &msg).await;
        }
        Cw404Command::OwnerOf { token_id } => {
            let msg = QueryMsg::OwnerOf {
                token_id: token_id.clone(),
                include_expired: Some(true),
            };
            return query(&cfg, contract, &msg).await;
        }
        Cw404Command::Tokens { owner } => {
            let msg = QueryMsg::Tokens {
                owner: match owner {
                    Some(owner) => owner.clone(),
                    None => signer_address(&cfg)?,
                },
                start_after: None,
                limit: None,
            };
            return query(&cfg, contract, &msg).await;
        }
        Cw404Command::AllTokens => {
            let msg = QueryMsg::AllTokens {
                start_after: None,
                limit: None,
            };
            return query(&cfg, contract, &msg).await;
        }

        Cw404Command::MintFt {
            amount,
            mint_group,
            recipient,
            proof,
        } => ExecuteMsg::MintFt {
            amount: Uint128::new(*amount),
            recipient: match recipient {
                Some(recipient) => recipient.clone(),
                None => signer_address(&cfg)?,
            },
            mint_group_name: mint_group.clone(),
            merkle_proof: parse_proof(proof)?,
        },
        Cw404Command::BurnFt { amount } => ExecuteMsg::BurnFt {
            amount: Uint128::new(*amount),
        },
        Cw404Command::SendFt { recipient, amount } => ExecuteMsg::SendFt {
            recipient_addr: recipient.clone(),
            amount: Uint128::new(*amount),
        },
        Cw404Command::Approve { spender, token_id } => ExecuteMsg::Approve {
            spender: spender.clone(),
            token_id: token_id.clone(),
            expires: None,
        },
        Cw404Command::ApproveAll { operator } => ExecuteMsg::ApproveAll {
            operator: operator.clone(),
            expires: None,
        },
        Cw404Command::Revoke { spender, token_id } => ExecuteMsg::Revoke {
            spender: spender.clone(),
            token_id: token_id.clone(),
        },
        Cw404Command::RevokeAll { operator } => ExecuteMsg::RevokeAll {
            operator: operator.clone(),
        },
        Cw404Command::TransferNft {
            recipient,
            token_id,
        } => ExecuteMsg::TransferNft {
            recipient: recipient.clone(),
            token_id: token_id.clone(),
        },
        Cw404Command::SendNft {
            receiver,
            token_id,
            msg,
        } => ExecuteMsg::SendNft {
            contract: receiver.clone(),
            token_id: token_id.clone(),
            msg: Binary::from(serde_json::to_vec(&parse_json(msg)?)?),
        },
        Cw404Command::Burn { token_id } => ExecuteMsg::Burn {
            token_id: token_id.clone(),
        },
    };

    let session = signing_session(&cfg).await?;
    execute(cli, &cfg, &session, contract, &msg, vec![]).await
}
