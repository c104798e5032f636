use async_trait::async_trait;

pub mod error;

pub mod chain_res;

pub mod cosmos;

pub mod cosmwasm;

#[cfg(test)]
pub(crate) mod mock;

pub use self::chain_res::{
    ChainEvent, ChainResponse, ExecResponse, InstantiateResponse, QueryResponse,
    StoreCodeResponse,
};
pub use self::cosmwasm::{CosmWasmClient, SigningCosmWasmClient};
pub use cosmrs::tendermint::abci::Code;

use self::error::ClientError;
use crate::config::cfg::Coin;

/// Read side of a chain connection.
///
/// Each script is a single cooperative flow, so the futures are not required
/// to be `Send`.
#[async_trait(?Send)]
pub trait WasmQuerier {
    /// Smart query against `address`. Never changes chain state.
    async fn query_smart(&self, address: &str, payload: Vec<u8>)
        -> Result<QueryResponse, ClientError>;

    /// Waits until `n` new blocks have been produced.
    async fn poll_for_n_blocks(&self, n: u64, is_first_block: bool) -> Result<(), ClientError>;
}

/// Write side of a chain connection, bound to exactly one account.
#[async_trait(?Send)]
pub trait WasmSigner: WasmQuerier {
    /// bech32 address of the account signing every tx
    fn address(&self) -> String;

    async fn store(&self, payload: Vec<u8>, memo: &str) -> Result<StoreCodeResponse, ClientError>;

    async fn instantiate(
        &self,
        code_id: u64,
        payload: Vec<u8>,
        label: &str,
        admin: Option<String>,
        funds: Vec<Coin>,
        memo: &str,
    ) -> Result<InstantiateResponse, ClientError>;

    async fn execute(
        &self,
        address: &str,
        payload: Vec<u8>,
        funds: Vec<Coin>,
        memo: &str,
    ) -> Result<ExecResponse, ClientError>;

    /// Plain bank transfer from the signing account.
    async fn send(
        &self,
        recipient: &str,
        amount: Vec<Coin>,
        memo: &str,
    ) -> Result<ExecResponse, ClientError>;
}
