use thiserror::Error;

use crate::client::error::{ClientError, DeserializeError};
use crate::client::ChainResponse;
use crate::config::error::CredentialError;

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("unable to reach rpc endpoint {endpoint}")]
    Unreachable {
        endpoint: String,
        source: ClientError,
    },

    #[error("node at {endpoint} serves chain {actual:?}, expected {expected:?}")]
    ChainIdMismatch {
        endpoint: String,
        expected: String,
        actual: String,
    },

    #[error(transparent)]
    ClientError(#[from] ClientError),
}

#[derive(Error, Debug)]
pub enum OpenError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("serde json serialization error")]
    JsonSerialize { source: serde_json::Error },

    #[error("error decoding query response")]
    Deserialize(#[from] DeserializeError),

    #[error("query against {contract} rejected")]
    Rejected {
        contract: String,
        source: ClientError,
    },

    #[error(transparent)]
    AddressBook(#[from] AddressBookError),
}

impl QueryError {
    pub fn json(e: serde_json::Error) -> QueryError {
        QueryError::JsonSerialize { source: e }
    }
}

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("serde json serialization error")]
    JsonSerialize { source: serde_json::Error },

    #[error("sender {actual} does not match the signing account {expected}")]
    SignerMismatch { expected: String, actual: String },

    /// The tx never made it into a block.
    #[error("tx rejected: {}", res.log)]
    Rejected { res: ChainResponse },

    /// The tx was included but the contract call aborted; no state changed.
    #[error("tx {tx_hash} failed: {}", res.log)]
    Reverted { tx_hash: String, res: ChainResponse },

    #[error("error decoding tx response")]
    Deserialize(#[from] DeserializeError),

    #[error(transparent)]
    AddressBook(#[from] AddressBookError),

    #[error(transparent)]
    ClientError(ClientError),
}

impl ExecutionError {
    pub fn json(e: serde_json::Error) -> ExecutionError {
        ExecutionError::JsonSerialize { source: e }
    }
}

impl From<ClientError> for ExecutionError {
    fn from(e: ClientError) -> ExecutionError {
        match e {
            ClientError::TxRejected { res } => ExecutionError::Rejected { res },
            ClientError::TxReverted { tx_hash, res } => ExecutionError::Reverted { tx_hash, res },
            e => ExecutionError::ClientError(e),
        }
    }
}

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("smart contract not stored on chain: {name:?}")]
    NotStored { name: String },

    #[error("smart contract with addr not initialized on chain: {name:?}")]
    NotDeployed { name: String },

    #[error("error reading {path}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("error writing {path}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed book file {path}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

// equality on the lookup variants only, io / json errors never compare equal
impl PartialEq for AddressBookError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotStored { name: a }, Self::NotStored { name: b }) => a == b,
            (Self::NotDeployed { name: a }, Self::NotDeployed { name: b }) => a == b,
            _ => false,
        }
    }
}

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("error reading wasm file {path}")]
    WasmFileRead {
        path: String,
        source: std::io::Error,
    },

    #[error("timed out waiting for the next block")]
    PollTimeout,

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    AddressBook(#[from] AddressBookError),
}
