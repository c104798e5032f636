use super::error::ClientError;
use crate::config::cfg::ChainCfg;
use cosmos_sdk_proto::cosmos::auth::v1beta1::{
    BaseAccount, QueryAccountRequest, QueryAccountResponse,
};
use cosmos_sdk_proto::cosmos::tx::v1beta1::{SimulateRequest, SimulateResponse};
use cosmrs::crypto::secp256k1;
use cosmrs::rpc::endpoint::broadcast::tx_commit::Response;
use cosmrs::rpc::Client;
use cosmrs::tendermint::abci::Code;
use cosmrs::tendermint::chain;
use cosmrs::tx::{Fee, SignDoc, SignerInfo};
use cosmrs::{
    rpc::HttpClient,
    tx::{self},
};
use cosmrs::{AccountId, Any, Coin, Denom};
use log::debug;
use prost::Message;
use tendermint_rpc::endpoint::abci_query::AbciQuery;

/// Signs `msg` with `key`, estimates the fee through a simulation and waits
/// for the tx to be committed in a block.
pub async fn send_tx(
    client: &HttpClient,
    msg: Any,
    memo: &str,
    key: &secp256k1::SigningKey,
    account_id: AccountId,
    cfg: &ChainCfg,
) -> Result<Response, ClientError> {
    let timeout_height = 0u16;
    let account = account(client, account_id).await?;

    let tx_body = tx::Body::new(vec![msg], memo, timeout_height);

    let fee = simulate_gas_fee(client, &tx_body, &account, key, cfg).await?;

    // NOTE: if we are making requests in parallel with the same key, we need to serialize `account.sequence` to avoid errors
    let auth_info =
        SignerInfo::single_direct(Some(key.public_key()), account.sequence).auth_info(fee);

    let sign_doc = SignDoc::new(
        &tx_body,
        &auth_info,
        &chain_id(cfg)?,
        account.account_number,
    )
    .map_err(ClientError::proto_encoding)?;

    let tx_raw = sign_doc.sign(key).map_err(ClientError::crypto)?;

    let tx_commit_response = tx_raw
        .broadcast_commit(client)
        .await
        .map_err(ClientError::broadcast)?;

    let res = classify(tx_commit_response)?;
    debug!("tx {} committed at height {}", res.hash, res.height);

    Ok(res)
}

/// Splits a commit response into rejected (never entered a block),
/// reverted (included but failed) and committed.
pub(crate) fn classify(res: Response) -> Result<Response, ClientError> {
    if res.check_tx.code.is_err() {
        return Err(ClientError::TxRejected {
            res: res.check_tx.into(),
        });
    }
    if res.deliver_tx.code.is_err() {
        return Err(ClientError::TxReverted {
            tx_hash: res.hash.to_string(),
            res: res.deliver_tx.into(),
        });
    }

    Ok(res)
}

pub async fn abci_query<T: Message>(
    client: &HttpClient,
    req: T,
    path: &str,
) -> Result<AbciQuery, ClientError> {
    let mut buf = Vec::with_capacity(req.encoded_len());
    req.encode(&mut buf).map_err(ClientError::prost_proto_en)?;

    let abci_path = path.parse().map_err(|_| ClientError::AbciPath {
        path: path.to_string(),
    })?;

    let res = client.abci_query(Some(abci_path), buf, None, false).await?;

    if res.code != Code::Ok {
        return Err(ClientError::CosmosSdk { res: res.into() });
    }

    Ok(res)
}

async fn account(client: &HttpClient, account_id: AccountId) -> Result<BaseAccount, ClientError> {
    let res = abci_query(
        client,
        QueryAccountRequest {
            address: account_id.as_ref().into(),
        },
        "/cosmos.auth.v1beta1.Query/Account",
    )
    .await?;

    let res = QueryAccountResponse::decode(res.value.as_slice())
        .map_err(ClientError::prost_proto_de)?
        .account
        .ok_or(ClientError::AccountId {
            id: account_id.to_string(),
        })?;

    let base_account =
        BaseAccount::decode(res.value.as_slice()).map_err(ClientError::prost_proto_de)?;

    Ok(base_account)
}

#[allow(deprecated)]
async fn simulate_gas_fee(
    client: &HttpClient,
    tx: &tx::Body,
    account: &BaseAccount,
    key: &secp256k1::SigningKey,
    cfg: &ChainCfg,
) -> Result<Fee, ClientError> {
    let denom: Denom = cfg.denom.parse().map_err(|_| ClientError::Denom {
        name: cfg.denom.clone(),
    })?;

    let signer_info = SignerInfo::single_direct(Some(key.public_key()), account.sequence);
    let auth_info = signer_info.auth_info(Fee::from_amount_and_gas(
        Coin {
            denom: denom.clone(),
            amount: 0u64.into(),
        },
        0u64,
    ));

    let sign_doc = SignDoc::new(tx, &auth_info, &chain_id(cfg)?, account.account_number)
        .map_err(ClientError::proto_encoding)?;

    let tx_raw = sign_doc.sign(key).map_err(ClientError::crypto)?;

    let res = abci_query(
        client,
        SimulateRequest {
            tx: None,
            tx_bytes: tx_raw.to_bytes().map_err(ClientError::proto_encoding)?,
        },
        "/cosmos.tx.v1beta1.Service/Simulate",
    )
    .await?;

    let gas_info = SimulateResponse::decode(res.value.as_slice())
        .map_err(ClientError::prost_proto_de)?
        .gas_info
        .ok_or(ClientError::MissingGasInfo)?;

    let (gas_limit, fee_amount) = fee_for_gas(gas_info.gas_used, cfg);
    debug!(
        "simulated gas_used={} gas_limit={} fee={}{}",
        gas_info.gas_used, gas_limit, fee_amount, cfg.denom
    );

    let amount = Coin {
        denom,
        amount: fee_amount.into(),
    };

    Ok(Fee::from_amount_and_gas(amount, gas_limit))
}

/// Gas limit and fee amount for a simulated `gas_used` under the configured
/// gas price policy.
pub(crate) fn fee_for_gas(gas_used: u64, cfg: &ChainCfg) -> (u64, u64) {
    let gas_limit = (gas_used as f64 * cfg.gas_adjustment).ceil();
    let amount = (gas_limit * cfg.gas_prices).ceil();
    (gas_limit as u64, amount as u64)
}

fn chain_id(cfg: &ChainCfg) -> Result<chain::Id, ClientError> {
    cfg.chain_id.parse().map_err(|_| ClientError::ChainId {
        chain_id: cfg.chain_id.to_string(),
    })
}
