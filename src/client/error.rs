use cosmrs::ErrorReport;
use prost::{DecodeError, EncodeError};
use thiserror::Error;

use super::chain_res::ChainResponse;
use crate::config::error::CredentialError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("malformed rpc url")]
    InvalidURL { source: tendermint_rpc::Error },

    #[error("invalid account ID: {id:?}")]
    AccountId { id: String },

    #[error("cryptographic error")]
    Crypto { source: ErrorReport },

    #[error("invalid denomination: {name:?}")]
    Denom { name: String },

    #[error("invalid chainId: {chain_id:?}")]
    ChainId { chain_id: String },

    #[error("invalid abci query path: {path:?}")]
    AbciPath { path: String },

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("proto encoding error")]
    ProtoEncoding { source: ErrorReport },

    #[error("proto decoding error")]
    ProtoDecoding { source: ErrorReport },

    #[error("error broadcasting tx")]
    Broadcast { source: ErrorReport },

    #[error("node returned no gas estimate")]
    MissingGasInfo,

    #[error("tx response is missing the {kind:?} event attribute {key:?}")]
    MissingEvent { kind: String, key: String },

    #[error("CosmosSDK error: {}", res.log)]
    CosmosSdk { res: ChainResponse },

    #[error("tx rejected before inclusion: {}", res.log)]
    TxRejected { res: ChainResponse },

    #[error("tx {tx_hash} included but failed: {}", res.log)]
    TxReverted { tx_hash: String, res: ChainResponse },

    #[error(transparent)]
    RPC(#[from] tendermint_rpc::Error),
}

impl ClientError {
    pub fn crypto(e: ErrorReport) -> ClientError {
        ClientError::Crypto { source: e }
    }

    pub fn proto_encoding(e: ErrorReport) -> ClientError {
        ClientError::ProtoEncoding { source: e }
    }

    pub fn prost_proto_en(e: EncodeError) -> ClientError {
        ClientError::ProtoEncoding { source: e.into() }
    }

    pub fn prost_proto_de(e: DecodeError) -> ClientError {
        ClientError::ProtoDecoding { source: e.into() }
    }

    pub fn broadcast(e: ErrorReport) -> ClientError {
        ClientError::Broadcast { source: e }
    }
}

#[derive(Error, Debug)]
pub enum DeserializeError {
    #[error("raw chain response is empty")]
    EmptyResponse,

    #[error("error deserializing json response")]
    Json(#[from] serde_json::Error),
}
