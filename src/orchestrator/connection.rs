use log::{debug, info};

use super::error::{ConnectionError, OpenError};
use crate::client::{CosmWasmClient, SigningCosmWasmClient};
use crate::config::cfg::ChainCfg;
use crate::config::key::SigningKey;

/// Opens a read only handle against `cfg.rpc_endpoint`.
///
/// The node is contacted once (`/status`) so an unreachable endpoint or a
/// node serving another chain fails here rather than on the first query.
pub async fn open_query_handle(cfg: &ChainCfg) -> Result<CosmWasmClient, ConnectionError> {
    let client = CosmWasmClient::new(cfg.clone())?;

    let actual = client
        .node_chain_id()
        .await
        .map_err(|e| ConnectionError::Unreachable {
            endpoint: cfg.rpc_endpoint.clone(),
            source: e,
        })?;

    if actual != cfg.chain_id {
        return Err(ConnectionError::ChainIdMismatch {
            endpoint: cfg.rpc_endpoint.clone(),
            expected: cfg.chain_id.clone(),
            actual,
        });
    }

    debug!("connected to {} ({})", cfg.rpc_endpoint, cfg.chain_id);
    Ok(client)
}

/// Derives the account for `key` under `cfg.prefix`, connects and binds the
/// configured gas price policy.
///
/// Returns the signer address together with the handle.
pub async fn open_signing_handle(
    cfg: &ChainCfg,
    key: &SigningKey,
) -> Result<(String, SigningCosmWasmClient), OpenError> {
    // fail on bad key material before touching the network
    let address = key.to_account(&cfg.prefix)?.to_string();

    let client = open_query_handle(cfg).await?;
    let signer = SigningCosmWasmClient::new(client, key.clone())
        .map_err(|e| OpenError::Connection(e.into()))?;

    info!(
        "signing as {} ({}), gas price {} x{}",
        address,
        key.name,
        cfg.gas_price(),
        cfg.gas_adjustment
    );

    Ok((address, signer))
}
