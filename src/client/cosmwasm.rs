use async_trait::async_trait;
use cosmos_sdk_proto::cosmwasm::wasm::v1::{
    QuerySmartContractStateRequest, QuerySmartContractStateResponse,
};
use cosmrs::bank::MsgSend;
use cosmrs::cosmwasm::{MsgExecuteContract, MsgInstantiateContract, MsgStoreCode};
use cosmrs::crypto::secp256k1;
use cosmrs::rpc::endpoint::broadcast::tx_commit::Response;
use cosmrs::rpc::{Client, HttpClient};
use cosmrs::tx::Msg;
use cosmrs::{AccountId, Any};
use prost::Message;
use std::fmt;
use std::time::Duration;
use tokio::time;

use super::chain_res::{
    ChainResponse, ExecResponse, InstantiateResponse, QueryResponse, StoreCodeResponse,
};
use super::cosmos::{abci_query, send_tx};
use super::error::ClientError;
use super::{WasmQuerier, WasmSigner};
use crate::config::cfg::{ChainCfg, Coin};
use crate::config::key::SigningKey;

/// Read only handle bound to a tendermint RPC endpoint.
#[derive(Clone, Debug)]
pub struct CosmWasmClient {
    // http tendermint RPC client
    rpc_client: HttpClient,
    cfg: ChainCfg,
}

impl CosmWasmClient {
    pub fn new(cfg: ChainCfg) -> Result<Self, ClientError> {
        Ok(Self {
            rpc_client: HttpClient::new(cfg.rpc_endpoint.as_str())
                .map_err(|e| ClientError::InvalidURL { source: e })?,
            cfg,
        })
    }

    /// Chain id reported by the connected node.
    pub async fn node_chain_id(&self) -> Result<String, ClientError> {
        let status = self.rpc_client.status().await?;
        Ok(status.node_info.network.to_string())
    }
}

#[async_trait(?Send)]
impl WasmQuerier for CosmWasmClient {
    async fn query_smart(
        &self,
        address: &str,
        payload: Vec<u8>,
    ) -> Result<QueryResponse, ClientError> {
        let res = abci_query(
            &self.rpc_client,
            QuerySmartContractStateRequest {
                address: address.to_string(),
                query_data: payload,
            },
            "/cosmwasm.wasm.v1.Query/SmartContractState",
        )
        .await?;

        let res = QuerySmartContractStateResponse::decode(res.value.as_slice())
            .map_err(ClientError::prost_proto_de)?;

        Ok(QueryResponse { res: res.into() })
    }

    async fn poll_for_n_blocks(&self, n: u64, is_first_block: bool) -> Result<(), ClientError> {
        if is_first_block {
            self.rpc_client
                .wait_until_healthy(Duration::from_secs(5))
                .await?;

            while let Err(e) = self.rpc_client.latest_block().await {
                if !matches!(e.detail(), cosmrs::rpc::error::ErrorDetail::Serde(_)) {
                    return Err(e.into());
                }
                time::sleep(Duration::from_millis(500)).await;
            }
        }

        let mut curr_height: u64 = self
            .rpc_client
            .latest_block()
            .await?
            .block
            .header
            .height
            .into();
        let target_height: u64 = curr_height + n;

        while curr_height < target_height {
            time::sleep(Duration::from_millis(500)).await;

            curr_height = self
                .rpc_client
                .latest_block()
                .await?
                .block
                .header
                .height
                .into();
        }

        Ok(())
    }
}

/// Signing handle: a [CosmWasmClient] bound to one derived account and the
/// configured gas price policy.
#[derive(Clone)]
pub struct SigningCosmWasmClient {
    client: CosmWasmClient,
    key: SigningKey,
    account_id: AccountId,
}

impl fmt::Debug for SigningCosmWasmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCosmWasmClient")
            .field("client", &self.client)
            .field("address", &self.account_id.to_string())
            .finish()
    }
}

impl SigningCosmWasmClient {
    /// Binds `key` to `client`, deriving the account under the configured prefix.
    pub fn new(client: CosmWasmClient, key: SigningKey) -> Result<Self, ClientError> {
        let account_id = key.to_account(&client.cfg.prefix)?;
        Ok(Self {
            client,
            key,
            account_id,
        })
    }

    async fn broadcast(&self, msg: Any, memo: &str) -> Result<Response, ClientError> {
        let signing_key: secp256k1::SigningKey = (&self.key).try_into()?;

        send_tx(
            &self.client.rpc_client,
            msg,
            memo,
            &signing_key,
            self.account_id.clone(),
            &self.client.cfg,
        )
        .await
    }
}

fn cosm_funds(funds: Vec<Coin>) -> Result<Vec<cosmrs::Coin>, ClientError> {
    funds.into_iter().map(TryInto::try_into).collect()
}

fn parse_account(address: &str) -> Result<AccountId, ClientError> {
    address.parse().map_err(|_| ClientError::AccountId {
        id: address.to_string(),
    })
}

fn event_attribute(res: &ChainResponse, kind: &str, key: &str) -> Result<String, ClientError> {
    res.find_event(kind)
        .and_then(|e| e.attribute(key))
        .map(str::to_string)
        .ok_or_else(|| ClientError::MissingEvent {
            kind: kind.to_string(),
            key: key.to_string(),
        })
}

#[async_trait(?Send)]
impl WasmQuerier for SigningCosmWasmClient {
    async fn query_smart(
        &self,
        address: &str,
        payload: Vec<u8>,
    ) -> Result<QueryResponse, ClientError> {
        self.client.query_smart(address, payload).await
    }

    async fn poll_for_n_blocks(&self, n: u64, is_first_block: bool) -> Result<(), ClientError> {
        self.client.poll_for_n_blocks(n, is_first_block).await
    }
}

#[async_trait(?Send)]
impl WasmSigner for SigningCosmWasmClient {
    fn address(&self) -> String {
        self.account_id.to_string()
    }

    async fn store(&self, payload: Vec<u8>, memo: &str) -> Result<StoreCodeResponse, ClientError> {
        let msg = MsgStoreCode {
            sender: self.account_id.clone(),
            wasm_byte_code: payload,
            instantiate_permission: None,
        }
        .to_any()
        .map_err(ClientError::proto_encoding)?;

        let tx_res = self.broadcast(msg, memo).await?;
        let res: ChainResponse = tx_res.deliver_tx.into();

        let code_id = event_attribute(&res, "store_code", "code_id")?;
        let code_id = code_id.parse::<u64>().map_err(|_| ClientError::MissingEvent {
            kind: "store_code".to_string(),
            key: "code_id".to_string(),
        })?;

        Ok(StoreCodeResponse {
            code_id,
            res,
            tx_hash: tx_res.hash.to_string(),
            height: tx_res.height.value(),
        })
    }

    async fn instantiate(
        &self,
        code_id: u64,
        payload: Vec<u8>,
        label: &str,
        admin: Option<String>,
        funds: Vec<Coin>,
        memo: &str,
    ) -> Result<InstantiateResponse, ClientError> {
        let msg = MsgInstantiateContract {
            sender: self.account_id.clone(),
            admin: admin.as_deref().map(parse_account).transpose()?,
            code_id,
            label: Some(label.to_string()),
            msg: payload,
            funds: cosm_funds(funds)?,
        }
        .to_any()
        .map_err(ClientError::proto_encoding)?;

        let tx_res = self.broadcast(msg, memo).await?;
        let res: ChainResponse = tx_res.deliver_tx.into();

        let address = event_attribute(&res, "instantiate", "_contract_address")?;

        Ok(InstantiateResponse {
            address,
            res,
            tx_hash: tx_res.hash.to_string(),
            height: tx_res.height.value(),
        })
    }

    async fn execute(
        &self,
        address: &str,
        payload: Vec<u8>,
        funds: Vec<Coin>,
        memo: &str,
    ) -> Result<ExecResponse, ClientError> {
        let msg = MsgExecuteContract {
            sender: self.account_id.clone(),
            contract: parse_account(address)?,
            msg: payload,
            funds: cosm_funds(funds)?,
        }
        .to_any()
        .map_err(ClientError::proto_encoding)?;

        let tx_res = self.broadcast(msg, memo).await?;

        Ok(ExecResponse {
            res: tx_res.deliver_tx.into(),
            tx_hash: tx_res.hash.to_string(),
            height: tx_res.height.value(),
        })
    }

    async fn send(
        &self,
        recipient: &str,
        amount: Vec<Coin>,
        memo: &str,
    ) -> Result<ExecResponse, ClientError> {
        let msg = MsgSend {
            from_address: self.account_id.clone(),
            to_address: parse_account(recipient)?,
            amount: cosm_funds(amount)?,
        }
        .to_any()
        .map_err(ClientError::proto_encoding)?;

        let tx_res = self.broadcast(msg, memo).await?;

        Ok(ExecResponse {
            res: tx_res.deliver_tx.into(),
            tx_hash: tx_res.hash.to_string(),
            height: tx_res.height.value(),
        })
    }
}
